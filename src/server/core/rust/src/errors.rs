/* src/server/core/rust/src/errors.rs */

use std::fmt;

/// Error raised while loading site data or talking to the booking backend.
/// Rendering itself never fails.
#[derive(Debug)]
pub struct RideError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "INVALID_DATA" => 422,
    "NOT_FOUND" => 404,
    "BAD_GATEWAY" => 502,
    _ => 500,
  }
}

impl RideError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  /// Malformed record data, duplicate slugs, bad config values.
  pub fn invalid_data(msg: impl Into<String>) -> Self {
    Self::with_code("INVALID_DATA", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for RideError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for RideError {}

impl From<std::io::Error> for RideError {
  fn from(err: std::io::Error) -> Self {
    Self::internal(err.to_string())
  }
}
