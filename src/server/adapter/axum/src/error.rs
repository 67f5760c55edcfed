/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use h5p_server::H5pError;

/// HTTP rendering of `H5pError`: its status plus a JSON error envelope.
/// Server-side failures are logged before they leave the process.
pub(crate) struct AxumError(pub H5pError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
      tracing::error!(code = err.code(), "{}", err.message());
    }
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.message(),
        "transient": false,
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<H5pError> for AxumError {
  fn from(err: H5pError) -> Self {
    Self(err)
  }
}
