/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::sync::Arc;

use ridepage_core::{PortalClient, RideSite};

pub use error::AxumError;
/// Re-export ridepage-core for convenience
pub use ridepage_core;

/// A site plus the optional booking backend its portal endpoints proxy to.
pub struct RideApp {
  site: Arc<RideSite>,
  portal: Option<PortalClient>,
}

impl RideApp {
  pub fn new(site: RideSite) -> Self {
    Self { site: Arc::new(site), portal: None }
  }

  /// Mount `/api/contact` and `/api/hotel/*` against `client`.
  pub fn portal(mut self, client: PortalClient) -> Self {
    self.portal = Some(client);
    self
  }
}

/// Extension trait that converts a site into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for RideApp {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self.site, self.portal)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("ridepage running on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}

impl IntoAxumRouter for RideSite {
  fn into_axum_router(self) -> axum::Router {
    RideApp::new(self).into_axum_router()
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    RideApp::new(self).serve(addr).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::body::{Body, to_bytes};
  use axum::http::{Request, StatusCode, header};
  use ridepage_core::{Registry, RideServer};
  use tower::ServiceExt;

  fn site() -> RideSite {
    RideServer::new(Arc::new(Registry::embedded().unwrap())).into_site()
  }

  async fn get(router: axum::Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
  }

  #[tokio::test]
  async fn serves_registered_page() {
    let (status, _, body) = get(site().into_axum_router(), "/albany-to-auckland-airport").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Albany to Auckland Airport Transfer | BookaRide</title>"));
    assert!(body.contains(r#"<script type="application/ld+json">"#));
  }

  #[tokio::test]
  async fn unregistered_slug_still_renders() {
    let (status, _, body) = get(site().into_axum_router(), "/devonport-to-auckland-airport").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Devonport"));
  }

  #[tokio::test]
  async fn non_canonical_path_redirects_permanently() {
    let (status, headers, _) =
      get(site().into_axum_router(), "/Albany-To-Auckland-Airport/?utm_source=ads").await;
    assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(headers[header::LOCATION], "/albany-to-auckland-airport?utm_source=ads");
  }

  #[tokio::test]
  async fn redirect_never_leaves_the_origin() {
    for uri in ["//evil.example/", "//evil.example//path/", "/%5Cevil.example/"] {
      let (status, headers, _) = get(site().into_axum_router(), uri).await;
      if status == StatusCode::MOVED_PERMANENTLY {
        let location = headers[header::LOCATION].to_str().unwrap();
        assert!(location.starts_with('/') && !location.starts_with("//"), "{uri} -> {location}");
      }
    }
    let (status, headers, _) = get(site().into_axum_router(), "//evil.example/").await;
    assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(headers[header::LOCATION], "/evil.example");
  }

  #[tokio::test]
  async fn unknown_shape_is_html_404() {
    let (status, headers, body) = get(site().into_axum_router(), "/pricing-calculator").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(body.contains("noindex"));
  }

  #[tokio::test]
  async fn sitemap_robots_and_health() {
    let router = site().into_axum_router();
    let (status, headers, body) = get(router.clone(), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("application/xml"));
    assert!(body.contains("<urlset"));

    let (_, _, body) = get(router.clone(), "/robots.txt").await;
    assert!(body.contains("Disallow: /hotel-portal"));

    let (status, _, body) = get(router, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
  }

  #[tokio::test]
  async fn pages_reject_non_get_methods() {
    let req = Request::builder()
      .method("POST")
      .uri("/albany-to-auckland-airport")
      .body(Body::empty())
      .unwrap();
    let resp = site().into_axum_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
  }

  #[tokio::test]
  async fn portal_requires_bearer_token() {
    let app = RideApp::new(site()).portal(PortalClient::new("http://127.0.0.1:9/api"));
    let (status, _, body) = get(app.into_axum_router(), "/api/hotel/bookings").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
  }

  #[tokio::test]
  async fn unreachable_backend_is_bad_gateway() {
    let app = RideApp::new(site()).portal(PortalClient::new("http://127.0.0.1:9/api"));
    let req = Request::builder()
      .method("POST")
      .uri("/api/contact")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(r#"{"name":"Ana","message":"hi"}"#))
      .unwrap();
    let resp = app.into_axum_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["message"], ridepage_core::portal::GENERIC_FAILURE);
  }
}
