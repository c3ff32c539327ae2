/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ridepage_core::{PortalError, RideError};

/// Newtype so `RideError` can be returned straight from axum handlers.
#[derive(Debug)]
pub struct AxumError(pub RideError);

impl From<RideError> for AxumError {
  fn from(err: RideError) -> Self {
    Self(err)
  }
}

impl From<PortalError> for AxumError {
  fn from(err: PortalError) -> Self {
    // backend 4xx answers (bad login, validation) pass through; the rest is a gateway failure
    let status = match &err {
      PortalError::Api { status, .. } if (400..500).contains(status) => *status,
      _ => 502,
    };
    Self(RideError::new("PORTAL_ERROR", err.user_message(), status))
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": { "code": self.0.code(), "message": self.0.message() },
    });
    (status, axum::Json(body)).into_response()
  }
}
