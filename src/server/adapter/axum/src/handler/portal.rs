/* src/server/adapter/axum/src/handler/portal.rs */

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::routing::{get, post};
use ridepage_core::{PortalClient, RideError};
use serde_json::Value;

use crate::error::AxumError;

pub(super) fn router<S>(client: PortalClient) -> Router<S>
where
  S: Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/contact", post(handle_contact))
    .route("/hotel/login", post(handle_login))
    .route("/hotel/bookings", get(handle_bookings).post(handle_create_booking))
    .with_state(client)
}

fn bearer(headers: &HeaderMap) -> Result<&str, AxumError> {
  headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
    .filter(|token| !token.is_empty())
    .ok_or_else(|| RideError::new("UNAUTHORIZED", "Please sign in to the hotel portal.", 401).into())
}

async fn handle_contact(
  State(client): State<PortalClient>,
  axum::Json(body): axum::Json<Value>,
) -> Result<axum::Json<Value>, AxumError> {
  Ok(axum::Json(client.contact(&body).await?))
}

async fn handle_login(
  State(client): State<PortalClient>,
  axum::Json(body): axum::Json<Value>,
) -> Result<axum::Json<Value>, AxumError> {
  Ok(axum::Json(client.hotel_login(&body).await?))
}

async fn handle_bookings(
  State(client): State<PortalClient>,
  headers: HeaderMap,
) -> Result<axum::Json<Value>, AxumError> {
  let token = bearer(&headers)?;
  Ok(axum::Json(client.hotel_bookings(token).await?))
}

async fn handle_create_booking(
  State(client): State<PortalClient>,
  headers: HeaderMap,
  axum::Json(body): axum::Json<Value>,
) -> Result<axum::Json<Value>, AxumError> {
  let token = bearer(&headers)?;
  Ok(axum::Json(client.create_hotel_booking(token, &body).await?))
}
