/* src/server/core/rust/src/page/tests.rs */

use chrono::{TimeZone, Utc};

use super::documents::{entity_breadcrumbs, entity_documents, listing_documents};
use super::*;
use crate::metadata::{PageTemplate, compose, compose_static};
use crate::resolve::fallback_record;
use crate::schema::SchemaKind;
use crate::site::FallbackDefaults;

struct Fixture {
  site: SiteDefaults,
  routes: RouteTable,
  registry: Registry,
}

impl Fixture {
  fn new() -> Self {
    Self {
      site: SiteDefaults::default(),
      routes: RouteTable::default_routes(),
      registry: Registry::embedded().unwrap(),
    }
  }

  fn env(&self) -> RenderEnv<'_> {
    RenderEnv::new(&self.site, &self.routes, &self.registry)
  }

  fn render_record(&self, record: &EntityRecord) -> Page {
    let env = self.env();
    let variant = record.variant();
    let path = self.routes.path_for(variant, &record.slug).unwrap();
    let meta = compose(record, &PageTemplate::for_variant(variant), &self.site, &path);
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let docs = entity_documents(record, &meta, &env, now);
    render(PageType::Entity(variant), record, meta, docs, &env)
  }
}

fn kinds(page: &Page) -> Vec<SchemaKind> {
  page.schemas.iter().map(|d| d.kind).collect()
}

#[test]
fn section_order_is_fixed() {
  let fx = Fixture::new();
  let albany = fx.registry.lookup(Variant::Suburb, "albany").unwrap();
  let page = fx.render_record(albany);
  assert_eq!(
    page.section_kinds(),
    vec![
      SectionKind::Hero,
      SectionKind::FeatureGrid,
      SectionKind::ContentBody,
      SectionKind::Faq,
      SectionKind::Cta
    ]
  );
  assert_eq!(page.lang, "en");
  assert!(page.body_html().starts_with(r#"<main class="page page-suburb">"#));
}

#[test]
fn suburb_schema_set() {
  let fx = Fixture::new();
  let page = fx.render_record(fx.registry.lookup(Variant::Suburb, "albany").unwrap());
  assert_eq!(
    kinds(&page),
    vec![
      SchemaKind::LocalBusiness,
      SchemaKind::Service,
      SchemaKind::TaxiService,
      SchemaKind::FaqPage,
      SchemaKind::BreadcrumbList
    ]
  );
  let taxi = &page.schemas[2].body;
  assert_eq!(taxi["offers"]["validFrom"], "2026-01-01T00:00:00Z");
}

#[test]
fn competitor_page_renders_comparison_and_reviews() {
  let fx = Fixture::new();
  let page = fx.render_record(fx.registry.lookup(Variant::Competitor, "skybus").unwrap());
  assert_eq!(page.sections[1].kind, SectionKind::ComparisonTable);
  let table = &page.sections[1].html;
  assert!(table.contains("<th>BookaRide</th><th>SkyBus</th>"));
  assert!(table.contains("<tr><td>Flight tracking</td><td>&#10003;</td><td>&#8212;</td></tr>"));
  assert!(table.contains("<tr><td>Timetabled departures</td><td>&#8212;</td><td>&#10003;</td></tr>"));

  let review = page.schemas.iter().find(|d| d.kind == SchemaKind::Review).unwrap();
  assert_eq!(review.body["review"].as_array().unwrap().len(), 5);
  assert!(page.sections[2].html.contains(r#"<a href="https://www.skybus.co.nz" rel="nofollow">Visit SkyBus</a>"#));
}

#[test]
fn market_page_uses_localized_copy() {
  let fx = Fixture::new();
  let page = fx.render_record(fx.registry.lookup(Variant::Market, "japan").unwrap());
  assert_eq!(page.lang, "ja");
  assert!(page.sections[0].html.contains("<h1>オークランド空港送迎</h1>"));
  assert!(page.sections[4].html.contains("今すぐ予約"));

  // korean copy has no cta_heading: English fills in
  let page = fx.render_record(fx.registry.lookup(Variant::Market, "south-korea").unwrap());
  assert!(page.sections[4].html.contains("Ready to book your transfer?"));
  assert!(page.sections[4].html.contains("지금 예약"));

  let html = page.to_html(ridepage_engine::DEFAULT_SHELL);
  assert!(html.contains(r#"<html lang="ko">"#));
}

#[test]
fn sections_degrade_without_record_fields() {
  let fx = Fixture::new();
  let env = fx.env();
  let bare = EntityRecord {
    slug: "somewhere".into(),
    display_name: "Somewhere".into(),
    keywords: vec![],
    features: vec![],
    price_hint: None,
    kind: crate::record::RecordKind::Hotel { suburb: None, distance_km: None, travel_time: None },
  };
  let meta = compose(&bare, &PageTemplate::for_variant(Variant::Hotel), &fx.site, "/hotel-transfers/somewhere");
  let page = render(PageType::Entity(Variant::Hotel), &bare, meta, vec![], &env);

  assert_eq!(page.sections.len(), 5);
  assert!(page.sections[0].html.contains("Door-to-door transfers across Auckland"));
  for feature in &fx.site.features {
    assert!(page.sections[1].html.contains(feature.as_str()));
  }
}

#[test]
fn every_section_links_booking_with_slug() {
  let fx = Fixture::new();
  let page = fx.render_record(fx.registry.lookup(Variant::Venue, "eden-park").unwrap());
  assert!(page.sections[0].html.contains(r#"href="/book-now?from=eden-park""#));
  assert!(page.sections[4].html.contains(r#"href="/book-now?from=eden-park""#));
}

#[test]
fn breadcrumbs_go_through_region_hub() {
  let fx = Fixture::new();
  let env = fx.env();
  let takapuna = fx.registry.lookup(Variant::Suburb, "takapuna").unwrap();
  let crumbs = entity_breadcrumbs(takapuna, "https://www.bookaride.co.nz/takapuna-to-auckland-airport", &env);
  let names: Vec<&str> = crumbs.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, vec!["Home", "North Shore airport shuttles", "Takapuna"]);
  assert_eq!(crumbs[1].url.as_deref(), Some("https://www.bookaride.co.nz/north-shore-airport-shuttle"));

  let devonport = fallback_record(Variant::Suburb, "devonport", &FallbackDefaults::default());
  let crumbs = entity_breadcrumbs(&devonport, "x", &env);
  assert_eq!(crumbs.len(), 3);
  assert_eq!(crumbs[1].name, "Airport shuttles by suburb");
}

#[test]
fn hub_lists_collection_with_links() {
  let fx = Fixture::new();
  let env = fx.env();
  let (route, hub) = fx.routes.hubs().find(|(_, h)| h.region.as_deref() == Some("Auckland CBD")).unwrap();
  let records = hub_records(&fx.registry, hub);
  let meta = compose_static(&PageTemplate::for_page(&route.page_type), &fx.site, &route.pattern);
  let docs = listing_documents(Some(hub), &meta, &env);
  let page = render_hub(hub, &records, meta, docs, &env);

  let html = &page.sections[0].html;
  assert!(html.contains(r#"<a href="/ponsonby-to-auckland-airport">Ponsonby</a>"#));
  assert!(!html.contains("Takapuna"));
  assert_eq!(page.sections[1].kind, SectionKind::Cta);
  assert!(page.sections[1].html.contains(r#"href="/book-now""#));
  assert_eq!(page.schemas.last().unwrap().body["itemListElement"].as_array().unwrap().len(), 2);
}

#[test]
fn home_lists_every_hub() {
  let fx = Fixture::new();
  let env = fx.env();
  let meta = compose_static(&PageTemplate::default(), &fx.site, "/");
  let page = render_home(meta, listing_documents(None, &compose_static(&PageTemplate::default(), &fx.site, "/"), &env), &env);
  let html = &page.sections[0].html;
  for (route, _) in fx.routes.hubs() {
    assert!(html.contains(&format!(r#"href="{}""#, route.pattern)));
  }
  assert_eq!(page.metadata.title, "BookaRide");
}
