/* src/server/adapter/axum/src/handler/embed.rs */

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Html;

use super::{AppState, LanguageQuery, pick_language};
use crate::error::AxumError;

pub(super) async fn handle_embed(
  State(state): State<AppState>,
  Path(content_id): Path<u32>,
  Query(query): Query<LanguageQuery>,
  headers: HeaderMap,
) -> Result<Html<String>, AxumError> {
  let language = pick_language(&query, &headers, state.default_language());
  let html = state.embed_page(content_id, &language)?;
  Ok(Html(html))
}
