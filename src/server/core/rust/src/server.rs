/* src/server/core/rust/src/server.rs */

use std::sync::Arc;

use ridepage_engine::{DEFAULT_SHELL, HeadTags, render_document};

use crate::metadata::{PageTemplate, compose, compose_static};
use crate::page::documents::{entity_documents, listing_documents};
use crate::page::{Page, RenderEnv, render, render_home, render_hub};
use crate::registry::Registry;
use crate::resolve::{Resolution, Resolver};
use crate::route::{PageType, RouteTable, normalize_path};
use crate::schema::{Clock, SystemClock};
use crate::site::{FallbackDefaults, SiteDefaults};
use crate::sitemap::{
  ENTITY_PRIORITY, HOME_PRIORITY, HUB_PRIORITY, SitemapEntry, build_robots, build_sitemap,
};

/// Builder for a [`RideSite`].
pub struct RideServer {
  registry: Arc<Registry>,
  site: SiteDefaults,
  fallback: FallbackDefaults,
  routes: RouteTable,
  clock: Arc<dyn Clock>,
  shell: String,
}

impl RideServer {
  pub fn new(registry: Arc<Registry>) -> Self {
    Self {
      registry,
      site: SiteDefaults::default(),
      fallback: FallbackDefaults::default(),
      routes: RouteTable::default_routes(),
      clock: Arc::new(SystemClock),
      shell: DEFAULT_SHELL.to_string(),
    }
  }

  pub fn site(mut self, site: SiteDefaults) -> Self {
    self.site = site;
    self
  }

  pub fn fallback(mut self, fallback: FallbackDefaults) -> Self {
    self.fallback = fallback;
    self
  }

  pub fn routes(mut self, routes: RouteTable) -> Self {
    self.routes = routes;
    self
  }

  pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  /// HTML shell with a `<!--ride:body:html-->` slot.
  pub fn shell(mut self, shell: impl Into<String>) -> Self {
    self.shell = shell.into();
    self
  }

  pub fn into_site(self) -> RideSite {
    RideSite {
      resolver: Resolver::new(self.registry, self.routes, self.fallback),
      site: self.site,
      clock: self.clock,
      shell: self.shell,
    }
  }
}

/// A page rendered for one request path.
#[derive(Debug, Clone)]
pub struct RenderedPage {
  /// Normalized path the route matched.
  pub path: String,
  pub is_fallback: bool,
  pub page: Page,
  pub html: String,
}

/// Immutable, shareable site: every render reads it, none writes it.
#[derive(Debug)]
pub struct RideSite {
  resolver: Resolver,
  site: SiteDefaults,
  clock: Arc<dyn Clock>,
  shell: String,
}

impl RideSite {
  pub fn site(&self) -> &SiteDefaults {
    &self.site
  }

  pub fn registry(&self) -> &Registry {
    self.resolver.registry()
  }

  pub fn routes(&self) -> &RouteTable {
    self.resolver.routes()
  }

  pub fn resolver(&self) -> &Resolver {
    &self.resolver
  }

  /// Resolve and render `raw`. `None` when no route shape matches; unknown
  /// slugs under a known shape still render from a fallback record.
  pub fn render_path(&self, raw: &str) -> Option<RenderedPage> {
    let resolution = self.resolver.resolve_path(raw)?;
    let env = RenderEnv::new(&self.site, self.routes(), self.registry());
    let is_fallback = resolution.is_fallback();
    let path = resolution.path().to_string();

    let page = match resolution {
      Resolution::Home { path } => {
        let meta = compose_static(&PageTemplate::default(), &self.site, &path);
        let docs = listing_documents(None, &meta, &env);
        render_home(meta, docs, &env)
      }
      Resolution::Hub { path, hub, records } => {
        let template = PageTemplate::for_page(&PageType::Hub(hub.clone()));
        let meta = compose_static(&template, &self.site, &path);
        let docs = listing_documents(Some(hub), &meta, &env);
        render_hub(hub, &records, meta, docs, &env)
      }
      Resolution::Entity(entity) => {
        let template = PageTemplate::for_variant(entity.variant);
        let meta = compose(&entity.record, &template, &self.site, &entity.path);
        let docs = entity_documents(&entity.record, &meta, &env, self.clock.now());
        render(PageType::Entity(entity.variant), &entity.record, meta, docs, &env)
      }
    };
    tracing::debug!(path = %path, page_type = page.page_type.label(), is_fallback, "rendered page");

    let html = page.to_html(&self.shell);
    Some(RenderedPage { path, is_fallback, page, html })
  }

  /// 404 document for paths outside every route shape.
  pub fn render_not_found(&self, raw: &str) -> String {
    let head = HeadTags {
      title: format!("Page not found | {}", self.site.name),
      description: self.site.description.clone(),
      robots: "noindex, follow".to_string(),
      ..HeadTags::default()
    };
    let body = format!(
      r#"<main class="page page-not-found"><h1>Page not found</h1><p>Nothing lives at {}.</p><a href="/">Back to {}</a></main>"#,
      ridepage_injector::escape_html(&normalize_path(raw)),
      ridepage_injector::escape_html(&self.site.name)
    );
    render_document(&self.shell, &body, &head, &[], "en")
  }

  /// Home, every hub and every registered record's page, in route order.
  /// Fallback pages are never listed.
  pub fn generated_paths(&self) -> Vec<(String, f32)> {
    let mut out = Vec::new();
    for route in self.routes().routes() {
      match &route.page_type {
        PageType::Home => out.push((route.pattern.clone(), HOME_PRIORITY)),
        PageType::Hub(_) => out.push((route.pattern.clone(), HUB_PRIORITY)),
        PageType::Entity(variant) => {
          for record in self.registry().collection(*variant).all() {
            out.push((route.path(&record.slug), ENTITY_PRIORITY));
          }
        }
      }
    }
    out
  }

  pub fn sitemap_xml(&self) -> String {
    let entries: Vec<SitemapEntry> = self
      .generated_paths()
      .into_iter()
      .map(|(path, priority)| SitemapEntry { loc: self.site.absolute_url(&path), priority })
      .collect();
    build_sitemap(&entries)
  }

  pub fn robots_txt(&self) -> String {
    build_robots(&self.site.origin)
  }
}
