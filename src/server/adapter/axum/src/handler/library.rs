/* src/server/adapter/axum/src/handler/library.rs */

use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use h5p_server::H5pError;
use serde::Deserialize;

use super::AppState;
use crate::error::AxumError;

#[derive(Deserialize)]
pub(super) struct ResolveQuery {
  name: Option<String>,
}

/// Not-installed libraries answer 200 with `libraryId: null`.
pub(super) async fn handle_resolve(
  State(state): State<AppState>,
  Query(query): Query<ResolveQuery>,
) -> Result<impl IntoResponse, AxumError> {
  let name = query.name.ok_or_else(|| H5pError::validation("Missing 'name' query parameter"))?;
  let resolved = state.resolve_library(&name)?;
  Ok(Json(resolved))
}
