/* src/server/core/rust/src/integration.rs */

use std::sync::Arc;

use h5p_engine::{
  AssetBundle, AssetManifest, AssetStore, CacheBuster, ContentInputs, ContentPage, ContentRecord,
  ContentSettings, ContentValidator, DisplayOptionsProvider, EditorPaths, EditorSettings,
  EmbedDocument, ExportOptions, IntegrationSettings, LibraryRecord, ResolvedLibrary,
  TokenGenerator, ViewKind, build_content_settings, build_editor_manifest, build_editor_settings,
  render_embed_page,
};

use crate::config::IntegrationConfig;
use crate::errors::H5pError;
use crate::registry::{ContentStore, InMemoryContents, InMemoryLibraries, LibraryRegistry};
use crate::static_files::FsAssetStore;
use crate::token::HashedTokenGenerator;
use crate::validator::{BitmaskDisplayOptions, JsonContentValidator};

/// The integration service. Built once at start-up with all collaborators,
/// then shared across requests; every operation is read-only.
pub struct H5pIntegration {
  libraries: Arc<dyn LibraryRegistry>,
  contents: Arc<dyn ContentStore>,
  validator: Arc<dyn ContentValidator>,
  display: Arc<dyn DisplayOptionsProvider>,
  tokens: Arc<dyn TokenGenerator>,
  asset_store: Arc<dyn AssetStore>,
  core: AssetBundle,
  editor: AssetBundle,
  cache_buster: CacheBuster,
  translation_dir: String,
  library_url_base: String,
  library_path: String,
  json_content_path: String,
  resizer_url: String,
  editor_paths: EditorPaths,
  export: ExportOptions,
  site_url: String,
  default_language: String,
}

impl H5pIntegration {
  /// Defaults: empty in-memory stores, JSON validator, bitmask display options,
  /// hashed tokens keyed by `security.token_secret`, assets under `files.web_root`.
  pub fn new(config: &IntegrationConfig) -> Self {
    Self {
      libraries: Arc::new(InMemoryLibraries::new()),
      contents: Arc::new(InMemoryContents::new()),
      validator: Arc::new(JsonContentValidator),
      display: Arc::new(BitmaskDisplayOptions),
      tokens: Arc::new(HashedTokenGenerator::new(config.security.token_secret.clone())),
      asset_store: Arc::new(FsAssetStore::new(config.files.web_root.clone(), config.base_path())),
      core: config.core_bundle(),
      editor: config.editor_bundle(),
      cache_buster: config.cache_buster(),
      translation_dir: config.translation_dir(),
      library_url_base: config.library_url_base(),
      library_path: config.editor.library_path.clone(),
      json_content_path: config.json_content_path(),
      resizer_url: config.resizer_url(),
      editor_paths: config.editor_paths(),
      export: config.export_options(),
      site_url: config.site.url.clone(),
      default_language: config.site.default_language.clone(),
    }
  }

  pub fn libraries(mut self, libraries: Arc<dyn LibraryRegistry>) -> Self {
    self.libraries = libraries;
    self
  }

  pub fn contents(mut self, contents: Arc<dyn ContentStore>) -> Self {
    self.contents = contents;
    self
  }

  pub fn validator(mut self, validator: Arc<dyn ContentValidator>) -> Self {
    self.validator = validator;
    self
  }

  pub fn display_options(mut self, display: Arc<dyn DisplayOptionsProvider>) -> Self {
    self.display = display;
    self
  }

  pub fn tokens(mut self, tokens: Arc<dyn TokenGenerator>) -> Self {
    self.tokens = tokens;
    self
  }

  pub fn asset_store(mut self, store: Arc<dyn AssetStore>) -> Self {
    self.asset_store = store;
    self
  }

  pub fn default_language(&self) -> &str {
    &self.default_language
  }

  /// Parse a `"<name> <major>.<minor>"` string and look it up in the registry.
  pub fn resolve_library(&self, identifier: &str) -> Result<ResolvedLibrary, H5pError> {
    let resolved = h5p_engine::resolve(identifier, &*self.libraries)?;
    tracing::debug!(library = %resolved.identifier, id = ?resolved.library_id, "resolved library");
    Ok(resolved)
  }

  fn load_content(&self, content_id: u32) -> Result<(ContentRecord, LibraryRecord), H5pError> {
    let Some(content) = self.contents.load(content_id) else {
      tracing::warn!(content_id, "unknown content");
      return Err(H5pError::not_found(format!("Content {content_id} not found")));
    };
    let library = self.libraries.load(content.library_id).ok_or_else(|| {
      H5pError::not_found(format!(
        "Library {} for content {content_id} not found",
        content.library_id
      ))
    })?;
    Ok((content, library))
  }

  pub fn content_settings(&self, content_id: u32) -> Result<ContentSettings, H5pError> {
    let (content, library) = self.load_content(content_id)?;
    self.content_settings_for(&content, &library)
  }

  /// Page payload carrying one content's settings under `cid-<id>`.
  pub fn content_page(&self, content_id: u32) -> Result<ContentPage, H5pError> {
    let settings = self.content_settings(content_id)?;
    Ok(self.page_for(content_id, settings))
  }

  fn page_for(&self, content_id: u32, settings: ContentSettings) -> ContentPage {
    ContentPage::new(self.library_path.clone(), self.json_content_path.clone())
      .with_content(content_id, settings)
  }

  fn content_settings_for(
    &self,
    content: &ContentRecord,
    library: &LibraryRecord,
  ) -> Result<ContentSettings, H5pError> {
    let inputs = ContentInputs {
      content,
      library,
      export: &self.export,
      site_url: &self.site_url,
      resizer_url: &self.resizer_url,
    };
    Ok(build_content_settings(&inputs, &*self.validator, &*self.display)?)
  }

  /// Editor runtime assets: core, editor (minus exclusions), then the translation.
  pub fn editor_assets(&self, language: &str) -> AssetManifest {
    let manifest = build_editor_manifest(
      &self.core,
      &self.editor,
      language,
      &self.translation_dir,
      &self.cache_buster,
      &*self.asset_store,
    );
    tracing::debug!(
      language,
      scripts = manifest.scripts.len(),
      styles = manifest.styles.len(),
      "assembled editor assets"
    );
    manifest
  }

  /// Content id 0 means new content.
  pub fn editor_settings(&self, content_id: u32, language: &str) -> EditorSettings {
    build_editor_settings(
      content_id,
      &self.editor_paths,
      &*self.tokens,
      self.editor_assets(language),
      self.validator.copyright_semantics(),
    )
  }

  pub fn settings(
    &self,
    kind: ViewKind,
    content_id: u32,
    language: &str,
  ) -> Result<IntegrationSettings, H5pError> {
    match kind {
      ViewKind::Content => {
        Ok(IntegrationSettings::Content(Box::new(self.content_page(content_id)?)))
      }
      ViewKind::Editor => {
        Ok(IntegrationSettings::Editor(Box::new(self.editor_settings(content_id, language))))
      }
    }
  }

  /// Core assets followed by the library's own preloaded assets.
  pub fn embed_assets(&self, library: &LibraryRecord) -> AssetManifest {
    let library_bundle = AssetBundle::new(format!(
      "{}{}/",
      self.library_url_base,
      library.identifier.folder_name()
    ))
    .scripts(library.scripts.iter().cloned())
    .styles(library.styles.iter().cloned());
    h5p_engine::build_manifest(&self.core, &library_bundle, &self.cache_buster)
  }

  /// Standalone document for iframe embedding.
  pub fn embed_page(&self, content_id: u32, language: &str) -> Result<String, H5pError> {
    let (content, library) = self.load_content(content_id)?;
    let settings = self.content_settings_for(&content, &library)?;
    let assets = self.embed_assets(&library);
    let doc = EmbedDocument {
      language: language.to_string(),
      title: settings.title.clone(),
      content_id,
      scripts: assets.scripts,
      styles: assets.styles,
    };
    let payload = IntegrationSettings::Content(Box::new(self.page_for(content_id, settings)));
    Ok(render_embed_page(&doc, &payload)?)
  }
}
