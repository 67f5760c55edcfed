/* src/server/engine/rust/src/lib.rs */

pub mod assets;
pub mod error;
pub mod escape;
pub mod library;
pub mod render;
pub mod settings;

// Public API re-exports
pub use assets::{
  AssetBundle, AssetManifest, AssetStore, CacheBuster, asset_urls, build_editor_manifest,
  build_manifest, resolve_translation,
};
pub use error::{EngineError, Result};
pub use escape::{escape_html, script_safe_json};
pub use library::{
  LibraryIdentifier, LibraryLookup, LibraryRecord, ResolvedLibrary, resolve, resolve_id,
};
pub use render::{EmbedDocument, INTEGRATION_GLOBAL, render_embed_page};
pub use settings::{
  ApiVersion, ContentInputs, ContentPage, ContentRecord, ContentSettings, ContentValidator,
  DisplayOptions, DisplayOptionsProvider, EditorPaths, EditorSettings, EmbedUrls, ExportOptions,
  FileIcon, IntegrationSettings, RESIZER_SCRIPT, TokenGenerator, ViewKind, build_content_settings,
  build_editor_settings, content_key,
};
