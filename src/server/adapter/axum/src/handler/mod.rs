/* src/server/adapter/axum/src/handler/mod.rs */

mod embed;
mod library;
mod settings;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderMap;
use axum::routing::get;
use h5p_server::H5pIntegration;
use serde::Deserialize;

pub(crate) type AppState = Arc<H5pIntegration>;

pub(crate) fn build_router(integration: H5pIntegration) -> Router {
  let state: AppState = Arc::new(integration);
  Router::new()
    .route("/h5p/embed/{content_id}", get(embed::handle_embed))
    .route("/h5p/settings/{content_id}", get(settings::handle_content_settings))
    .route("/h5peditor/settings/{content_id}", get(settings::handle_editor_settings))
    .route("/h5p/libraries/resolve", get(library::handle_resolve))
    .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct LanguageQuery {
  lang: Option<String>,
}

/// Editor translations are keyed by primary subtag: nb-NO -> nb
fn primary_subtag(tag: &str) -> String {
  tag.split('-').next().unwrap_or(tag).to_ascii_lowercase()
}

/// `?lang=` wins, then the first Accept-Language tag, then the site default.
pub(super) fn pick_language(query: &LanguageQuery, headers: &HeaderMap, default: &str) -> String {
  if let Some(lang) = query.lang.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
    return primary_subtag(lang);
  }
  let from_header = headers
    .get(axum::http::header::ACCEPT_LANGUAGE)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.split(',').next())
    .map(|tag| tag.split(';').next().unwrap_or("").trim())
    .filter(|tag| !tag.is_empty() && *tag != "*")
    .map(primary_subtag);
  from_header.unwrap_or_else(|| default.to_string())
}
