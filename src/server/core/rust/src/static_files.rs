/* src/server/core/rust/src/static_files.rs */

use std::path::{Component, Path, PathBuf};

use h5p_engine::AssetStore;

/// Asset existence checks against the directory served at the site base path.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
  web_root: PathBuf,
  base_path: String,
}

impl FsAssetStore {
  pub fn new(web_root: impl Into<PathBuf>, base_path: impl Into<String>) -> Self {
    Self { web_root: web_root.into(), base_path: base_path.into() }
  }

  /// Map an asset URL path to a file under the web root.
  /// Returns `None` for paths outside the base path or escaping the root.
  fn resolve(&self, url_path: &str) -> Option<PathBuf> {
    let base = self.base_path.trim_end_matches('/');
    let rest = url_path.strip_prefix(base)?;
    if !base.is_empty() && !rest.starts_with('/') {
      return None;
    }
    let relative = rest.trim_start_matches('/');
    let relative = Path::new(relative);
    if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
      return None;
    }
    Some(self.web_root.join(relative))
  }
}

impl AssetStore for FsAssetStore {
  fn exists(&self, path: &str) -> bool {
    self.resolve(path).is_some_and(|p| p.is_file())
  }
}
