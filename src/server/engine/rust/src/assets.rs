/* src/server/engine/rust/src/assets.rs */

//! Asset manifest assembly for the content and editor runtimes.
//!
//! URLs are `<prefix><file><cache buster>` and keep the input order:
//! core bundle first, then the editor bundle, then the translation file.
//! Later scripts rely on globals defined by earlier ones.

use serde::{Deserialize, Serialize};

/// Opaque asset version token supplied by the environment.
/// An empty token adds no query suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheBuster(String);

impl CacheBuster {
  pub fn new(token: impl Into<String>) -> Self {
    Self(token.into())
  }

  pub fn none() -> Self {
    Self::default()
  }

  /// `?<token>`, or an empty string when no token is configured.
  pub fn suffix(&self) -> String {
    if self.0.is_empty() { String::new() } else { format!("?{}", self.0) }
  }

  pub fn apply(&self, url: &str) -> String {
    format!("{url}{}", self.suffix())
  }
}

/// Existence check against the store that serves static assets.
pub trait AssetStore: Send + Sync {
  /// `path` is the asset URL path without cache buster.
  fn exists(&self, path: &str) -> bool;
}

/// One bundle of assets sharing a URL prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssetBundle {
  pub prefix: String,
  #[serde(default)]
  pub scripts: Vec<String>,
  #[serde(default)]
  pub styles: Vec<String>,
  /// Script filenames skipped when emitting this bundle.
  #[serde(default)]
  pub excluded_scripts: Vec<String>,
}

impl AssetBundle {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self { prefix: prefix.into(), ..Self::default() }
  }

  pub fn scripts<I, S>(mut self, scripts: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.scripts = scripts.into_iter().map(Into::into).collect();
    self
  }

  pub fn styles<I, S>(mut self, styles: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.styles = styles.into_iter().map(Into::into).collect();
    self
  }

  pub fn exclude<I, S>(mut self, scripts: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.excluded_scripts = scripts.into_iter().map(Into::into).collect();
    self
  }

  pub fn script_urls(&self, cache_buster: &CacheBuster) -> Vec<String> {
    asset_urls(&self.scripts, &self.prefix, &self.excluded_scripts, cache_buster)
  }

  pub fn style_urls(&self, cache_buster: &CacheBuster) -> Vec<String> {
    asset_urls(&self.styles, &self.prefix, &[], cache_buster)
  }
}

/// Ordered script and style URLs for one runtime bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
  pub scripts: Vec<String>,
  pub styles: Vec<String>,
}

/// Prefix and cache-bust every item, skipping names listed in `exclude`.
pub fn asset_urls(
  collection: &[String],
  prefix: &str,
  exclude: &[String],
  cache_buster: &CacheBuster,
) -> Vec<String> {
  let suffix = cache_buster.suffix();
  collection
    .iter()
    .filter(|item| !exclude.contains(item))
    .map(|item| format!("{prefix}{item}{suffix}"))
    .collect()
}

/// Core assets followed by editor assets, each in input order.
pub fn build_manifest(
  core: &AssetBundle,
  editor: &AssetBundle,
  cache_buster: &CacheBuster,
) -> AssetManifest {
  let mut scripts = core.script_urls(cache_buster);
  scripts.extend(editor.script_urls(cache_buster));
  let mut styles = core.style_urls(cache_buster);
  styles.extend(editor.style_urls(cache_buster));
  AssetManifest { scripts, styles }
}

pub const FALLBACK_LANGUAGE: &str = "en";

/// URL of the editor translation for `language`, falling back to English
/// when the store has no file for it.
pub fn resolve_translation(
  language: &str,
  translation_dir: &str,
  cache_buster: &CacheBuster,
  store: &dyn AssetStore,
) -> String {
  let dir = translation_dir.trim_end_matches('/');
  let chosen = format!("{dir}/{language}.js");
  if !language.is_empty() && store.exists(&chosen) {
    return cache_buster.apply(&chosen);
  }
  tracing::debug!(language, "no editor translation, falling back to {FALLBACK_LANGUAGE}");
  cache_buster.apply(&format!("{dir}/{FALLBACK_LANGUAGE}.js"))
}

/// Full editor manifest: core, editor, then the translation script last.
pub fn build_editor_manifest(
  core: &AssetBundle,
  editor: &AssetBundle,
  language: &str,
  translation_dir: &str,
  cache_buster: &CacheBuster,
  store: &dyn AssetStore,
) -> AssetManifest {
  let mut manifest = build_manifest(core, editor, cache_buster);
  manifest.scripts.push(resolve_translation(language, translation_dir, cache_buster, store));
  manifest
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  struct Files(HashSet<&'static str>);

  impl AssetStore for Files {
    fn exists(&self, path: &str) -> bool {
      self.0.contains(path)
    }
  }

  fn core() -> AssetBundle {
    AssetBundle::new("/core/").scripts(["a.js", "b.js"]).styles(["h5p.css"])
  }

  fn editor() -> AssetBundle {
    AssetBundle::new("/editor/").scripts(["c.js"]).styles(["editor.css"])
  }

  #[test]
  fn cache_buster_suffix() {
    assert_eq!(CacheBuster::none().suffix(), "");
    assert_eq!(CacheBuster::new("t1x2").suffix(), "?t1x2");
    assert_eq!(CacheBuster::new("v3").apply("/x.js"), "/x.js?v3");
  }

  #[test]
  fn manifest_order_core_then_editor() {
    let manifest = build_manifest(&core(), &editor(), &CacheBuster::new("v1"));
    assert_eq!(manifest.scripts, vec!["/core/a.js?v1", "/core/b.js?v1", "/editor/c.js?v1"]);
    assert_eq!(manifest.styles, vec!["/core/h5p.css?v1", "/editor/editor.css?v1"]);
  }

  #[test]
  fn manifest_without_token_has_no_query() {
    let manifest = build_manifest(&core(), &editor(), &CacheBuster::none());
    assert_eq!(manifest.scripts, vec!["/core/a.js", "/core/b.js", "/editor/c.js"]);
  }

  #[test]
  fn excluding_absent_file_is_noop() {
    let cb = CacheBuster::new("v1");
    let plain = build_manifest(&core(), &editor(), &cb);
    let excluded = build_manifest(&core(), &editor().exclude(["missing.js"]), &cb);
    assert_eq!(plain, excluded);
  }

  #[test]
  fn excluding_present_file_removes_only_it() {
    let editor = AssetBundle::new("/e/").scripts(["x.js", "skip.js", "y.js"]).exclude(["skip.js"]);
    let manifest = build_manifest(&AssetBundle::default(), &editor, &CacheBuster::none());
    assert_eq!(manifest.scripts, vec!["/e/x.js", "/e/y.js"]);
  }

  #[test]
  fn exclusion_does_not_touch_styles() {
    let editor = AssetBundle::new("/e/").scripts(["s.css"]).styles(["s.css"]).exclude(["s.css"]);
    let manifest = build_manifest(&AssetBundle::default(), &editor, &CacheBuster::none());
    assert!(manifest.scripts.is_empty());
    assert_eq!(manifest.styles, vec!["/e/s.css"]);
  }

  #[test]
  fn translation_uses_existing_language() {
    let store = Files(HashSet::from(["/lang/nb.js"]));
    let url = resolve_translation("nb", "/lang", &CacheBuster::new("v2"), &store);
    assert_eq!(url, "/lang/nb.js?v2");
  }

  #[test]
  fn translation_falls_back_to_english() {
    let store = Files(HashSet::new());
    let url = resolve_translation("es", "/lang/", &CacheBuster::new("v2"), &store);
    assert_eq!(url, "/lang/en.js?v2");
  }

  #[test]
  fn translation_empty_language_falls_back() {
    let store = Files(HashSet::from(["/lang/.js"]));
    assert_eq!(resolve_translation("", "/lang", &CacheBuster::none(), &store), "/lang/en.js");
  }

  #[test]
  fn editor_manifest_appends_translation_last() {
    let store = Files(HashSet::from(["/lang/de.js"]));
    let manifest =
      build_editor_manifest(&core(), &editor(), "de", "/lang", &CacheBuster::none(), &store);
    assert_eq!(manifest.scripts.last().map(String::as_str), Some("/lang/de.js"));
    assert_eq!(manifest.scripts.len(), 4);
    assert_eq!(manifest.styles.len(), 2);
  }
}
