/* src/server/core/rust/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{load_config, parse_config};
pub use types::{
  ApiVersionSection, AssetsSection, EditorSection, ExportSection, FilesSection, IntegrationConfig,
  SecuritySection, SiteSection,
};
