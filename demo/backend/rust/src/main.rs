/* demo/backend/rust/src/main.rs */

mod fixtures;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use h5p_server_axum::IntoAxumRouter;
use h5p_server_axum::h5p_server::{H5pIntegration, IntegrationConfig, load_config};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "h5p-demo")]
#[command(version)]
#[command(about = "H5P integration demo server", long_about = None)]
struct Args {
  /// Address to bind to
  #[arg(long, default_value = "0.0.0.0:3000")]
  addr: String,

  /// Path to an h5p.toml configuration file
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// JSON file with libraries and contents to serve
  #[arg(short, long)]
  fixtures: Option<PathBuf>,

  /// Log level (trace, debug, info, warn, error)
  #[arg(long, default_value = "info")]
  log_level: String,
}

fn parse_level(level: &str) -> Level {
  match level.to_lowercase().as_str() {
    "trace" => Level::TRACE,
    "debug" => Level::DEBUG,
    "warn" => Level::WARN,
    "error" => Level::ERROR,
    _ => Level::INFO,
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let args = Args::parse();

  let subscriber =
    FmtSubscriber::builder().with_max_level(parse_level(&args.log_level)).with_target(true).finish();
  tracing::subscriber::set_global_default(subscriber)?;

  let config = match &args.config {
    Some(path) => load_config(path)?,
    None => IntegrationConfig::default(),
  };
  let mut integration = H5pIntegration::new(&config);

  if let Some(path) = &args.fixtures {
    let data = fixtures::load_fixtures(path)?;
    info!(libraries = data.libraries.len(), contents = data.contents.len(), "loaded fixtures");
    integration = integration.libraries(Arc::new(data.libraries)).contents(Arc::new(data.contents));
  }

  integration.serve(&args.addr).await
}
