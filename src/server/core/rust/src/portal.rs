/* src/server/core/rust/src/portal.rs */

//! Client for the booking backend's portal endpoints. Bodies are opaque JSON;
//! only the error shape (`detail`) is interpreted.

use std::fmt;

use serde_json::Value;

use crate::errors::RideError;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug)]
pub enum PortalError {
  /// The backend answered with a non-success status or `success: false`.
  Api { status: u16, detail: Option<String> },
  /// The request never got a usable answer.
  Transport(String),
}

impl PortalError {
  /// Text suitable for a toast: the backend's `detail`, else a generic line.
  pub fn user_message(&self) -> &str {
    match self {
      Self::Api { detail: Some(detail), .. } if !detail.trim().is_empty() => detail,
      _ => GENERIC_FAILURE,
    }
  }
}

impl fmt::Display for PortalError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Api { status, detail } => {
        write!(f, "backend returned {status}: {}", detail.as_deref().unwrap_or("no detail"))
      }
      Self::Transport(msg) => write!(f, "backend unreachable: {msg}"),
    }
  }
}

impl std::error::Error for PortalError {}

impl From<PortalError> for RideError {
  fn from(err: PortalError) -> Self {
    RideError::with_code("BAD_GATEWAY", err.user_message())
  }
}

/// Pull a human-readable `detail` out of an error body. FastAPI-style
/// validation errors carry a list; the first `msg` is used.
fn extract_detail(body: &Value) -> Option<String> {
  match body.get("detail")? {
    Value::String(s) => Some(s.clone()),
    Value::Array(items) => items.iter().find_map(|i| i.get("msg")?.as_str().map(str::to_string)),
    Value::Null => None,
    other => Some(other.to_string()),
  }
}

/// Map a response status and body to success or a [`PortalError`].
pub fn interpret_response(status: u16, body: Value) -> Result<Value, PortalError> {
  let ok_status = (200..300).contains(&status);
  let flagged_failure = body.get("success").and_then(Value::as_bool) == Some(false);
  if ok_status && !flagged_failure {
    return Ok(body);
  }
  Err(PortalError::Api { status, detail: extract_detail(&body) })
}

#[derive(Debug, Clone)]
pub struct PortalClient {
  http: reqwest::Client,
  base_url: String,
}

impl PortalClient {
  pub fn new(base_url: &str) -> Self {
    Self { http: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_string() }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.base_url)
  }

  /// `POST {api}/hotel/login`.
  pub async fn hotel_login(&self, credentials: &Value) -> Result<Value, PortalError> {
    self.send(self.http.post(self.url("/hotel/login")).json(credentials)).await
  }

  /// `GET {api}/hotel/bookings`.
  pub async fn hotel_bookings(&self, token: &str) -> Result<Value, PortalError> {
    self.send(self.http.get(self.url("/hotel/bookings")).bearer_auth(token)).await
  }

  /// `POST {api}/hotel/bookings`.
  pub async fn create_hotel_booking(&self, token: &str, booking: &Value) -> Result<Value, PortalError> {
    self.send(self.http.post(self.url("/hotel/bookings")).bearer_auth(token).json(booking)).await
  }

  /// `POST {api}/contact`.
  pub async fn contact(&self, message: &Value) -> Result<Value, PortalError> {
    self.send(self.http.post(self.url("/contact")).json(message)).await
  }

  async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, PortalError> {
    let resp = request.send().await.map_err(|e| {
      tracing::warn!(error = %e, "portal request failed");
      PortalError::Transport(e.to_string())
    })?;
    let status = resp.status().as_u16();
    let text = resp.text().await.map_err(|e| PortalError::Transport(e.to_string()))?;
    let body = if text.trim().is_empty() {
      Value::Null
    } else {
      serde_json::from_str(&text).unwrap_or(Value::String(text))
    };
    let result = interpret_response(status, body);
    if let Err(err) = &result {
      tracing::warn!(status, error = %err, "portal call rejected");
    }
    result
  }
}
