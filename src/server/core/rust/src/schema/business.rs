/* src/server/core/rust/src/schema/business.rs */

use serde_json::{Value, json};

use super::{SchemaDocument, SchemaKind};
use crate::site::SiteDefaults;

/// Per-page tweaks to the otherwise fixed organization document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalBusinessOverrides {
  pub name: Option<String>,
  pub description: Option<String>,
  pub url: Option<String>,
  pub area_served: Option<String>,
}

pub fn build_local_business(site: &SiteDefaults, overrides: &LocalBusinessOverrides) -> SchemaDocument {
  let biz = &site.business;
  let offers: Vec<Value> = biz
    .services
    .iter()
    .map(|name| json!({ "@type": "Offer", "itemOffered": { "@type": "Service", "name": name } }))
    .collect();

  let mut body = json!({
    "@type": "LocalBusiness",
    "@id": format!("{}/#business", site.origin),
    "name": overrides.name.as_deref().unwrap_or(&site.name),
    "description": overrides.description.as_deref().unwrap_or(&site.description),
    "url": overrides.url.as_deref().unwrap_or(&site.origin),
    "image": site.absolute_url(&site.image_url),
    "telephone": biz.phone,
    "email": biz.email,
    "priceRange": biz.price_range,
    "address": {
      "@type": "PostalAddress",
      "streetAddress": biz.street_address,
      "addressLocality": biz.locality,
      "addressRegion": biz.region,
      "postalCode": biz.postal_code,
      "addressCountry": biz.country,
    },
    "geo": {
      "@type": "GeoCoordinates",
      "latitude": biz.latitude,
      "longitude": biz.longitude,
    },
    "openingHours": biz.opening_hours,
    "hasOfferCatalog": {
      "@type": "OfferCatalog",
      "name": "Airport transfer services",
      "itemListElement": offers,
    },
  });
  if let Some(area) = &overrides.area_served {
    body["areaServed"] = json!({ "@type": "Place", "name": area });
  }
  if !biz.same_as.is_empty() {
    body["sameAs"] = json!(biz.same_as);
  }
  SchemaDocument::new(SchemaKind::LocalBusiness, body)
}
