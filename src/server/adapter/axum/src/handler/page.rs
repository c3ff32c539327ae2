/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use ridepage_core::normalize_path;

use super::AppState;

/// Serve any landing page. Non-canonical spellings of a path (case, repeated or
/// trailing slashes) are redirected permanently so each page has exactly one URL.
pub(super) async fn handle_page(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
  let raw = uri.path();
  let normalized = normalize_path(raw);
  if raw != normalized {
    let location = match uri.query() {
      Some(q) => format!("{normalized}?{q}"),
      None => normalized,
    };
    tracing::debug!(from = raw, to = %location, "redirecting to canonical path");
    return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response();
  }

  match state.site.render_path(raw) {
    Some(rendered) => {
      tracing::debug!(
        path = %rendered.path,
        page_type = rendered.page.page_type.label(),
        fallback = rendered.is_fallback,
        "serving page"
      );
      Html(rendered.html).into_response()
    }
    None => {
      tracing::debug!(path = raw, "no route matched");
      (StatusCode::NOT_FOUND, Html(state.site.render_not_found(raw))).into_response()
    }
  }
}
