/* src/server/adapter/axum/src/handler/mod.rs */

mod page;
mod portal;

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use ridepage_core::{PortalClient, RideSite};

pub(crate) struct AppState {
  pub site: Arc<RideSite>,
}

pub(crate) fn build_router(site: Arc<RideSite>, portal: Option<PortalClient>) -> Router {
  let state = Arc::new(AppState { site });
  let mut router = Router::new()
    .route("/healthz", get(handle_healthz))
    .route("/sitemap.xml", get(handle_sitemap))
    .route("/robots.txt", get(handle_robots));

  // Portal endpoints proxy to the booking backend only when one is configured.
  if let Some(client) = portal {
    router = router.nest("/api", portal::router(client));
  }
  router.fallback(get(page::handle_page)).with_state(state)
}

async fn handle_healthz() -> &'static str {
  "ok"
}

async fn handle_sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], state.site.sitemap_xml())
}

async fn handle_robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], state.site.robots_txt())
}
