/* src/server/core/rust/src/schema/service.rs */

use serde_json::json;

use super::{SchemaDocument, SchemaKind};
use crate::record::EntityRecord;

pub struct ServiceContext<'a> {
  pub service_name: &'a str,
  pub description: &'a str,
  pub area_served: &'a str,
  pub provider_name: &'a str,
  pub provider_url: &'a str,
  pub currency: &'a str,
}

pub fn build_service(record: &EntityRecord, ctx: &ServiceContext<'_>) -> SchemaDocument {
  let mut body = json!({
    "@type": "Service",
    "serviceType": "Airport shuttle",
    "name": ctx.service_name,
    "description": ctx.description,
    "areaServed": { "@type": "Place", "name": ctx.area_served },
    "provider": {
      "@type": "LocalBusiness",
      "name": ctx.provider_name,
      "url": ctx.provider_url,
    },
  });
  if let Some(price) = &record.price_hint {
    body["offers"] = json!({
      "@type": "Offer",
      "priceCurrency": ctx.currency,
      "description": price,
    });
  }
  if !record.features.is_empty() {
    body["additionalProperty"] = record
      .features
      .iter()
      .map(|f| json!({ "@type": "PropertyValue", "name": "feature", "value": f }))
      .collect();
  }
  SchemaDocument::new(SchemaKind::Service, body)
}
