/* demo/backend/rust/src/fixtures.rs */

use std::path::Path;

use anyhow::{Context, Result};
use h5p_server_axum::h5p_server::h5p_engine::{ContentRecord, LibraryIdentifier, LibraryRecord};
use h5p_server_axum::h5p_server::{InMemoryContents, InMemoryLibraries};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureFile {
  #[serde(default)]
  libraries: Vec<LibraryFixture>,
  #[serde(default)]
  contents: Vec<ContentFixture>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibraryFixture {
  library_id: u32,
  machine_name: String,
  major_version: u32,
  minor_version: u32,
  /// Comma-separated, as stored by library registries.
  #[serde(default)]
  embed_types: String,
  #[serde(default)]
  fullscreen: bool,
  #[serde(default)]
  scripts: Vec<String>,
  #[serde(default)]
  styles: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentFixture {
  id: u32,
  library_id: u32,
  #[serde(default)]
  title: String,
  parameters: serde_json::Value,
  #[serde(default)]
  disabled_features: u16,
}

pub struct Fixtures {
  pub libraries: InMemoryLibraries,
  pub contents: InMemoryContents,
}

pub fn parse_fixtures(content: &str) -> Result<Fixtures> {
  let file: FixtureFile = serde_json::from_str(content).context("failed to parse fixtures")?;

  let mut libraries = InMemoryLibraries::new();
  for lib in file.libraries {
    libraries.insert(LibraryRecord {
      library_id: lib.library_id,
      identifier: LibraryIdentifier::new(lib.machine_name, lib.major_version, lib.minor_version),
      embed_types: LibraryRecord::parse_embed_types(&lib.embed_types),
      supports_fullscreen: lib.fullscreen,
      scripts: lib.scripts,
      styles: lib.styles,
    });
  }

  let mut contents = InMemoryContents::new();
  for item in file.contents {
    contents.insert(ContentRecord {
      id: item.id,
      library_id: item.library_id,
      title: item.title,
      parameters: serde_json::to_string(&item.parameters)?,
      filtered_parameters: String::new(),
      disabled_features: item.disabled_features,
    });
  }

  Ok(Fixtures { libraries, contents })
}

pub fn load_fixtures(path: &Path) -> Result<Fixtures> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read {}", path.display()))?;
  parse_fixtures(&content)
}
