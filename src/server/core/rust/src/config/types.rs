/* src/server/core/rust/src/config/types.rs */

use std::path::PathBuf;

use anyhow::{Result, bail};
use h5p_engine::{ApiVersion, AssetBundle, CacheBuster, EditorPaths, ExportOptions, RESIZER_SCRIPT};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegrationConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub files: FilesSection,
  #[serde(default)]
  pub export: ExportSection,
  #[serde(default)]
  pub assets: AssetsSection,
  #[serde(default)]
  pub editor: EditorSection,
  #[serde(default)]
  pub security: SecuritySection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_base_path")]
  pub base_path: String,
  #[serde(default = "default_site_url")]
  pub url: String,
  #[serde(default = "default_language")]
  pub default_language: String,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { base_path: default_base_path(), url: default_site_url(), default_language: default_language() }
  }
}

fn default_base_path() -> String {
  "/".to_string()
}

fn default_site_url() -> String {
  "http://localhost:3000".to_string()
}

fn default_language() -> String {
  "en".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilesSection {
  /// Public files directory, relative to the base path.
  #[serde(default = "default_public_path")]
  pub public_path: String,
  /// H5P directory inside the public files directory.
  #[serde(default = "default_h5p_path")]
  pub h5p_path: String,
  /// Filesystem directory served at the base path; used for existence checks.
  #[serde(default = "default_web_root")]
  pub web_root: PathBuf,
}

impl Default for FilesSection {
  fn default() -> Self {
    Self { public_path: default_public_path(), h5p_path: default_h5p_path(), web_root: default_web_root() }
  }
}

fn default_public_path() -> String {
  "sites/default/files".to_string()
}

fn default_h5p_path() -> String {
  "h5p".to_string()
}

fn default_web_root() -> PathBuf {
  PathBuf::from("public")
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportSection {
  #[serde(default)]
  pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsSection {
  /// Asset version token; empty means no query suffix.
  #[serde(default)]
  pub cache_buster: String,
  #[serde(default = "default_core_prefix")]
  pub core_prefix: String,
  #[serde(default = "default_editor_prefix")]
  pub editor_prefix: String,
  #[serde(default = "default_core_scripts")]
  pub core_scripts: Vec<String>,
  #[serde(default = "default_core_styles")]
  pub core_styles: Vec<String>,
  #[serde(default = "default_editor_scripts")]
  pub editor_scripts: Vec<String>,
  #[serde(default = "default_editor_styles")]
  pub editor_styles: Vec<String>,
  /// Editor scripts loaded elsewhere and left out of the editor manifest.
  #[serde(default = "default_excluded_editor_scripts")]
  pub excluded_editor_scripts: Vec<String>,
  #[serde(default = "default_translation_dir")]
  pub translation_dir: String,
}

impl Default for AssetsSection {
  fn default() -> Self {
    Self {
      cache_buster: String::new(),
      core_prefix: default_core_prefix(),
      editor_prefix: default_editor_prefix(),
      core_scripts: default_core_scripts(),
      core_styles: default_core_styles(),
      editor_scripts: default_editor_scripts(),
      editor_styles: default_editor_styles(),
      excluded_editor_scripts: default_excluded_editor_scripts(),
      translation_dir: default_translation_dir(),
    }
  }
}

fn default_core_prefix() -> String {
  "vendor/h5p/h5p-core/".to_string()
}

fn default_editor_prefix() -> String {
  "vendor/h5p/h5p-editor/".to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| (*s).to_string()).collect()
}

fn default_core_scripts() -> Vec<String> {
  strings(&[
    "js/jquery.js",
    "js/h5p.js",
    "js/h5p-event-dispatcher.js",
    "js/h5p-x-api-event.js",
    "js/h5p-x-api.js",
    "js/h5p-content-type.js",
    "js/h5p-confirmation-dialog.js",
    "js/h5p-action-bar.js",
  ])
}

fn default_core_styles() -> Vec<String> {
  strings(&["styles/h5p.css", "styles/h5p-confirmation-dialog.css", "styles/h5p-core-button.css"])
}

fn default_editor_scripts() -> Vec<String> {
  strings(&[
    "scripts/h5peditor-editor.js",
    "scripts/h5peditor.js",
    "scripts/h5peditor-semantic-structure.js",
    "scripts/h5peditor-library-selector.js",
    "scripts/h5peditor-form.js",
    "scripts/h5peditor-text.js",
    "scripts/h5peditor-html.js",
    "scripts/h5peditor-number.js",
    "scripts/h5peditor-textarea.js",
    "scripts/h5peditor-file-uploader.js",
    "scripts/h5peditor-file.js",
    "scripts/h5peditor-av.js",
    "scripts/h5peditor-group.js",
    "scripts/h5peditor-boolean.js",
    "scripts/h5peditor-list.js",
    "scripts/h5peditor-list-editor.js",
    "scripts/h5peditor-library.js",
    "scripts/h5peditor-select.js",
    "scripts/h5peditor-none.js",
    "ckeditor/ckeditor.js",
  ])
}

fn default_editor_styles() -> Vec<String> {
  strings(&["libs/darkroom.css", "styles/css/application.css"])
}

fn default_excluded_editor_scripts() -> Vec<String> {
  strings(&["scripts/h5peditor-editor.js"])
}

fn default_translation_dir() -> String {
  "vendor/h5p/h5p-editor/language".to_string()
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ApiVersionSection {
  pub major: u32,
  pub minor: u32,
}

impl Default for ApiVersionSection {
  fn default() -> Self {
    Self { major: 1, minor: 24 }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorSection {
  #[serde(default = "default_module_path")]
  pub module_path: String,
  #[serde(default = "default_library_path")]
  pub library_path: String,
  #[serde(default = "default_content_rel_url")]
  pub content_rel_url: String,
  #[serde(default = "default_editor_rel_url")]
  pub editor_rel_url: String,
  #[serde(default = "default_file_icon")]
  pub file_icon: String,
  #[serde(default)]
  pub api_version: ApiVersionSection,
}

impl Default for EditorSection {
  fn default() -> Self {
    Self {
      module_path: default_module_path(),
      library_path: default_library_path(),
      content_rel_url: default_content_rel_url(),
      editor_rel_url: default_editor_rel_url(),
      file_icon: default_file_icon(),
      api_version: ApiVersionSection::default(),
    }
  }
}

fn default_module_path() -> String {
  "vendor/h5p".to_string()
}

fn default_library_path() -> String {
  "modules/h5p/libraries/".to_string()
}

fn default_content_rel_url() -> String {
  "../h5p/content/".to_string()
}

fn default_editor_rel_url() -> String {
  "../../../vendor/h5p/h5p-editor".to_string()
}

fn default_file_icon() -> String {
  "vendor/h5p/h5p-editor/images/binary-file.png".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecuritySection {
  #[serde(default)]
  pub token_secret: String,
}

impl IntegrationConfig {
  pub fn validate(&self) -> Result<()> {
    if self.site.url.trim().is_empty() {
      bail!("site.url must not be empty");
    }
    if !self.site.base_path.starts_with('/') {
      bail!("site.base_path \"{}\" must start with '/'", self.site.base_path);
    }
    if self.files.h5p_path.trim().is_empty() {
      bail!("files.h5p_path must not be empty");
    }
    Ok(())
  }

  /// Base path with exactly one trailing slash.
  pub fn base_path(&self) -> String {
    format!("{}/", self.site.base_path.trim_end_matches('/'))
  }

  /// Public URL path of the H5P files directory, without trailing slash.
  pub fn files_base_path(&self) -> String {
    let public = self.files.public_path.trim_matches('/');
    let h5p = self.files.h5p_path.trim_matches('/');
    if public.is_empty() {
      format!("{}{h5p}", self.base_path())
    } else {
      format!("{}{public}/{h5p}", self.base_path())
    }
  }

  pub fn cache_buster(&self) -> CacheBuster {
    CacheBuster::new(self.assets.cache_buster.trim())
  }

  pub fn core_bundle(&self) -> AssetBundle {
    AssetBundle::new(format!("{}{}", self.base_path(), self.assets.core_prefix))
      .scripts(self.assets.core_scripts.iter().cloned())
      .styles(self.assets.core_styles.iter().cloned())
  }

  pub fn editor_bundle(&self) -> AssetBundle {
    AssetBundle::new(format!("{}{}", self.base_path(), self.assets.editor_prefix))
      .scripts(self.assets.editor_scripts.iter().cloned())
      .styles(self.assets.editor_styles.iter().cloned())
      .exclude(self.assets.excluded_editor_scripts.iter().cloned())
  }

  /// Absolute resizer script URL, served from the core asset prefix.
  pub fn resizer_url(&self) -> String {
    format!(
      "{}{}{}{RESIZER_SCRIPT}",
      self.site.url.trim_end_matches('/'),
      self.base_path(),
      self.assets.core_prefix
    )
  }

  /// Content files directory; the runtime appends `<id>/`.
  pub fn json_content_path(&self) -> String {
    format!("{}/content/", self.files_base_path())
  }

  pub fn translation_dir(&self) -> String {
    format!("{}{}", self.base_path(), self.assets.translation_dir.trim_start_matches('/'))
  }

  /// URL prefix under which library folders are served.
  pub fn library_url_base(&self) -> String {
    format!("{}{}", self.base_path(), self.editor.library_path.trim_start_matches('/'))
  }

  pub fn export_options(&self) -> ExportOptions {
    ExportOptions { enabled: self.export.enabled, base_path: self.files_base_path() }
  }

  pub fn editor_paths(&self) -> EditorPaths {
    let editor = &self.editor;
    EditorPaths {
      base_path: self.base_path(),
      files_base_path: self.files_base_path(),
      module_path: editor.module_path.clone(),
      library_path: editor.library_path.clone(),
      content_rel_url: editor.content_rel_url.clone(),
      editor_rel_url: editor.editor_rel_url.clone(),
      file_icon: editor.file_icon.clone(),
      api_version: ApiVersion {
        major_version: editor.api_version.major,
        minor_version: editor.api_version.minor,
      },
    }
  }
}
