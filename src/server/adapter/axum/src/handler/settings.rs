/* src/server/adapter/axum/src/handler/settings.rs */

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;

use super::{AppState, LanguageQuery, pick_language};
use crate::error::AxumError;

pub(super) async fn handle_content_settings(
  State(state): State<AppState>,
  Path(content_id): Path<u32>,
) -> Result<impl IntoResponse, AxumError> {
  let page = state.content_page(content_id)?;
  Ok(Json(page))
}

/// Content id 0 opens the editor for new content.
pub(super) async fn handle_editor_settings(
  State(state): State<AppState>,
  Path(content_id): Path<u32>,
  Query(query): Query<LanguageQuery>,
  headers: HeaderMap,
) -> impl IntoResponse {
  let language = pick_language(&query, &headers, state.default_language());
  Json(state.editor_settings(content_id, &language).wrapped())
}
