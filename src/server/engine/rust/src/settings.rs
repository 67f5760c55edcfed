/* src/server/engine/rust/src/settings.rs */

//! Runtime settings synthesis.
//!
//! Two typed records replace the loosely-shaped settings bag: `ContentSettings`
//! for rendering a content record, `EditorSettings` for editing one. Callers pick
//! the shape through `ViewKind`.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::assets::AssetManifest;
use crate::error::Result;
use crate::library::LibraryRecord;

pub const DEFAULT_TITLE: &str = "Not Available";
pub const CONTENT_SLUG: &str = "interactive-content";
pub const EDITOR_AJAX_ACTION: &str = "editorajax";
/// Resizer script, relative to the core asset prefix.
pub const RESIZER_SCRIPT: &str = "js/h5p-resizer.js";

/// A persisted content record, read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRecord {
  pub id: u32,
  pub library_id: u32,
  pub title: String,
  /// Raw, unsafe parameters as authored.
  pub parameters: String,
  /// Cached filtered parameters; empty means not yet filtered.
  pub filtered_parameters: String,
  /// Disabled feature bitmask.
  pub disabled_features: u16,
}

/// Sanitizes content parameters. Invoked on every render; the cached
/// `filtered_parameters` is only a hint for the validator.
pub trait ContentValidator: Send + Sync {
  fn filter_parameters(&self, content: &ContentRecord, library: &LibraryRecord) -> Result<String>;

  /// Copyright field semantics handed to the editor.
  fn copyright_semantics(&self) -> serde_json::Value;
}

/// Which parts of the content frame are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayOptions {
  pub frame: bool,
  pub export: bool,
  pub embed: bool,
  pub copyright: bool,
  pub icon: bool,
}

/// Decodes the disabled-feature bitmask of a content record.
pub trait DisplayOptionsProvider: Send + Sync {
  fn display_options_for_edit(&self, disabled_features: u16) -> DisplayOptions;
}

/// Issues single-use anti-CSRF tokens.
pub trait TokenGenerator: Send + Sync {
  fn generate(&self, action: &str, content_id: u32) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
  Content,
  Editor,
}

/// Exactly one settings shape per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IntegrationSettings {
  Content(Box<ContentPage>),
  Editor(Box<EditorSettings>),
}

impl IntegrationSettings {
  pub fn kind(&self) -> ViewKind {
    match self {
      Self::Content(_) => ViewKind::Content,
      Self::Editor(_) => ViewKind::Editor,
    }
  }
}

// --- Content view ---

/// Export configuration; disabled or unusable config yields an empty URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
  pub enabled: bool,
  /// Public URL of the H5P files directory, e.g. `/files/h5p`.
  pub base_path: String,
}

impl ExportOptions {
  pub fn export_url(&self, content_id: u32) -> String {
    let base = self.base_path.trim().trim_end_matches('/');
    if !self.enabled || base.is_empty() {
      return String::new();
    }
    format!("{base}/exports/{CONTENT_SLUG}-{content_id}.h5p")
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedUrls {
  pub embed_url: String,
  pub resizer_url: String,
}

impl EmbedUrls {
  /// `resizer_url` is used as given; the embed URL hangs off the site origin.
  pub fn for_content(site_url: &str, resizer_url: &str, content_id: u32) -> Self {
    let site = site_url.trim_end_matches('/');
    Self {
      embed_url: format!("{site}/h5p/embed/{content_id}"),
      resizer_url: resizer_url.to_string(),
    }
  }

  /// Iframe snippet; `:w` and `:h` are substituted by the consumer.
  pub fn embed_code(&self) -> String {
    format!(
      r#"<iframe src="{}" width=":w" height=":h" frameborder="0" allowfullscreen="allowfullscreen"></iframe>"#,
      self.embed_url
    )
  }

  pub fn resize_code(&self) -> String {
    format!(r#"<script src="{}" charset="UTF-8"></script>"#, self.resizer_url)
  }
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error> {
  // The client runtime compares against the string "1"
  serializer.serialize_str(if *flag { "1" } else { "0" })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSettings {
  pub library_name: String,
  pub json_content: String,
  #[serde(serialize_with = "serialize_flag")]
  pub full_screen: bool,
  pub export_url: String,
  pub embed_code: String,
  pub resize_code: String,
  pub url: String,
  pub title: String,
  pub display_options: DisplayOptions,
}

/// Everything the content view is assembled from.
pub struct ContentInputs<'a> {
  pub content: &'a ContentRecord,
  pub library: &'a LibraryRecord,
  pub export: &'a ExportOptions,
  pub site_url: &'a str,
  pub resizer_url: &'a str,
}

pub fn build_content_settings(
  inputs: &ContentInputs<'_>,
  validator: &dyn ContentValidator,
  display: &dyn DisplayOptionsProvider,
) -> Result<ContentSettings> {
  let ContentInputs { content, library, export, site_url, resizer_url } = *inputs;

  let json_content = validator.filter_parameters(content, library)?;
  let display_options = display.display_options_for_edit(content.disabled_features);
  let urls = EmbedUrls::for_content(site_url, resizer_url, content.id);
  let title = if content.title.trim().is_empty() {
    DEFAULT_TITLE.to_string()
  } else {
    content.title.clone()
  };

  Ok(ContentSettings {
    library_name: library.identifier.to_string(),
    json_content,
    full_screen: library.supports_fullscreen,
    export_url: export.export_url(content.id),
    embed_code: urls.embed_code(),
    resize_code: urls.resize_code(),
    url: urls.embed_url,
    title,
    display_options,
  })
}

/// Key the runtime uses to find a content's settings, e.g. `cid-42`.
pub fn content_key(content_id: u32) -> String {
  format!("cid-{content_id}")
}

/// Page-level content payload: settings keyed per content id plus the paths
/// the runtime resolves library and content files against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
  pub content: BTreeMap<String, ContentSettings>,
  /// Library folder path relative to the site base path.
  pub library_path: String,
  /// URL of the content files directory; the runtime appends `<id>/`.
  pub json_content_path: String,
}

impl ContentPage {
  pub fn new(library_path: impl Into<String>, json_content_path: impl Into<String>) -> Self {
    Self {
      content: BTreeMap::new(),
      library_path: library_path.into(),
      json_content_path: json_content_path.into(),
    }
  }

  pub fn with_content(mut self, content_id: u32, settings: ContentSettings) -> Self {
    self.content.insert(content_key(content_id), settings);
    self
  }
}

// --- Editor view ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVersion {
  pub major_version: u32,
  pub minor_version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileIcon {
  pub path: String,
  pub width: u32,
  pub height: u32,
}

impl FileIcon {
  pub fn new(path: impl Into<String>) -> Self {
    Self { path: path.into(), width: 50, height: 50 }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
  pub files_path: String,
  pub file_icon: FileIcon,
  pub ajax_path: String,
  pub module_path: String,
  pub library_path: String,
  pub copyright_semantics: serde_json::Value,
  pub assets: AssetManifest,
  pub content_rel_url: String,
  pub editor_rel_url: String,
  pub api_version: ApiVersion,
}

impl EditorSettings {
  /// Page-level wrapper consumed by the editor runtime.
  pub fn wrapped(&self) -> serde_json::Value {
    serde_json::json!({ "h5peditor": self })
  }
}

/// Static editor paths, resolved once from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPaths {
  /// Host base path, always ending in `/`.
  pub base_path: String,
  /// Public URL of the H5P files directory without trailing slash.
  pub files_base_path: String,
  pub module_path: String,
  pub library_path: String,
  pub content_rel_url: String,
  pub editor_rel_url: String,
  pub file_icon: String,
  pub api_version: ApiVersion,
}

impl EditorPaths {
  /// New content (id 0) stores uploads in the editor scratch directory.
  pub fn files_path(&self, content_id: u32) -> String {
    if content_id == 0 {
      format!("{}/editor", self.files_base_path)
    } else {
      format!("{}/content/{content_id}", self.files_base_path)
    }
  }

  pub fn ajax_path(&self, token: &str, content_id: u32) -> String {
    format!("{}h5peditor/{token}/{content_id}/", self.base_path)
  }
}

pub fn build_editor_settings(
  content_id: u32,
  paths: &EditorPaths,
  tokens: &dyn TokenGenerator,
  assets: AssetManifest,
  copyright_semantics: serde_json::Value,
) -> EditorSettings {
  let token = tokens.generate(EDITOR_AJAX_ACTION, content_id);
  EditorSettings {
    files_path: paths.files_path(content_id),
    file_icon: FileIcon::new(format!("{}{}", paths.base_path, paths.file_icon)),
    ajax_path: paths.ajax_path(&token, content_id),
    module_path: paths.module_path.clone(),
    library_path: paths.library_path.clone(),
    copyright_semantics,
    assets,
    content_rel_url: paths.content_rel_url.clone(),
    editor_rel_url: paths.editor_rel_url.clone(),
    api_version: paths.api_version,
  }
}
