/* src/server/core/rust/src/page/documents.rs */

use chrono::{DateTime, Utc};

use super::RenderEnv;
use super::faq::faqs_for;
use crate::metadata::ComposedMetadata;
use crate::record::{EntityRecord, Variant};
use crate::route::HubDef;
use crate::schema::{
  Crumb, LocalBusinessOverrides, SchemaDocument, ServiceContext, TaxiRoute, build_breadcrumb_list,
  build_faq_page, build_local_business, build_review, build_service, build_taxi_service,
};

/// Home, then the record's hub (regional for suburbs), then the page itself.
pub fn entity_breadcrumbs(record: &EntityRecord, canonical_url: &str, env: &RenderEnv<'_>) -> Vec<Crumb> {
  let mut crumbs = vec![Crumb::new("Home", Some(env.site.absolute_url("/")))];
  if let Some(route) = env.routes.hub_for(record.variant(), record.region())
    && let crate::route::PageType::Hub(hub) = &route.page_type
  {
    crumbs.push(Crumb::new(hub.heading.clone(), Some(env.site.absolute_url(&route.pattern))));
  }
  crumbs.push(Crumb::new(record.display_name.clone(), Some(canonical_url.to_string())));
  crumbs
}

/// JSON-LD set for a record page.
pub fn entity_documents(
  record: &EntityRecord,
  meta: &ComposedMetadata,
  env: &RenderEnv<'_>,
  now: DateTime<Utc>,
) -> Vec<SchemaDocument> {
  let site = env.site;
  let variant = record.variant();
  let page_title = meta.title.strip_suffix(&format!(" | {}", site.name)).unwrap_or(&meta.title);
  let area = record
    .located_in()
    .and_then(|slug| env.registry_name(Variant::Suburb, slug))
    .or(record.region())
    .unwrap_or(&record.display_name);

  let business = || {
    build_local_business(
      site,
      &LocalBusinessOverrides {
        url: Some(meta.canonical_url.clone()),
        area_served: Some(record.display_name.clone()),
        ..Default::default()
      },
    )
  };
  let service = || {
    build_service(
      record,
      &ServiceContext {
        service_name: page_title,
        description: &meta.description,
        area_served: area,
        provider_name: &site.name,
        provider_url: &site.origin,
        currency: &site.currency,
      },
    )
  };
  let taxi = || {
    build_taxi_service(
      &TaxiRoute {
        from: &record.display_name,
        to: &site.airport,
        provider: &site.name,
        currency: &site.currency,
      },
      record.price_hint.as_deref(),
      record.travel_time(),
      now,
    )
  };

  let mut docs = match variant {
    Variant::Suburb => vec![business(), service(), taxi()],
    Variant::Competitor => {
      vec![business(), build_review(&site.name, env.reviews, env.rating)]
    }
    Variant::Market => vec![service()],
    Variant::Hotel | Variant::Venue => vec![service(), taxi()],
  };
  docs.push(build_faq_page(&faqs_for(record, site)));
  docs.push(build_breadcrumb_list(&entity_breadcrumbs(record, &meta.canonical_url, env)));
  docs
}

/// JSON-LD set for a hub page, or the home page when `hub` is `None`.
pub fn listing_documents(hub: Option<&HubDef>, meta: &ComposedMetadata, env: &RenderEnv<'_>) -> Vec<SchemaDocument> {
  let mut crumbs = vec![Crumb::new("Home", Some(env.site.absolute_url("/")))];
  if let Some(hub) = hub {
    crumbs.push(Crumb::new(hub.heading.clone(), Some(meta.canonical_url.clone())));
  }
  vec![
    build_local_business(env.site, &LocalBusinessOverrides::default()),
    build_review(&env.site.name, env.reviews, env.rating),
    build_breadcrumb_list(&crumbs),
  ]
}
