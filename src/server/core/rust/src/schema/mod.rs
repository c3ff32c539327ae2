/* src/server/core/rust/src/schema/mod.rs */

//! Schema.org JSON-LD builders. Every builder is a pure function of its
//! inputs; the only clock read is the `now` handed to [`build_taxi_service`].

mod breadcrumb;
mod business;
mod clock;
mod faq;
mod review;
mod service;
mod taxi;

use serde::Serialize;
use serde_json::Value;

pub use breadcrumb::{Crumb, build_breadcrumb_list};
pub use business::{LocalBusinessOverrides, build_local_business};
pub use clock::{Clock, FixedClock, SystemClock};
pub use faq::{Faq, build_faq_page};
pub use review::{AggregateRating, MAX_REVIEWS, build_review};
pub use service::{ServiceContext, build_service};
pub use taxi::{TaxiRoute, build_taxi_service, parse_price_range};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchemaKind {
  LocalBusiness,
  Service,
  FaqPage,
  Review,
  BreadcrumbList,
  TaxiService,
}

impl SchemaKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::LocalBusiness => "LocalBusiness",
      Self::Service => "Service",
      Self::FaqPage => "FAQPage",
      Self::Review => "Review",
      Self::BreadcrumbList => "BreadcrumbList",
      Self::TaxiService => "TaxiService",
    }
  }
}

/// One JSON-LD document bound for the page head.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDocument {
  pub kind: SchemaKind,
  pub body: Value,
}

impl SchemaDocument {
  /// Wrap `body`, adding the `@context` key when the builder left it out.
  pub(crate) fn new(kind: SchemaKind, mut body: Value) -> Self {
    if let Some(obj) = body.as_object_mut() {
      obj.entry("@context").or_insert_with(|| Value::String(SCHEMA_CONTEXT.to_string()));
    }
    Self { kind, body }
  }

  /// `@type` of the emitted document. Review documents are typed as the
  /// business they rate.
  pub fn schema_type(&self) -> &str {
    self.body.get("@type").and_then(Value::as_str).unwrap_or(self.kind.as_str())
  }

  pub fn to_script_tag(&self) -> String {
    ridepage_engine::ld_json_script(&self.body)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn context_added_once() {
    let doc = SchemaDocument::new(SchemaKind::Service, json!({"@type": "Service"}));
    assert_eq!(doc.body["@context"], SCHEMA_CONTEXT);
    let doc = SchemaDocument::new(SchemaKind::Service, json!({"@context": "x", "@type": "Service"}));
    assert_eq!(doc.body["@context"], "x");
  }

  #[test]
  fn script_tag_escapes_closing_tags() {
    let doc = SchemaDocument::new(SchemaKind::FaqPage, json!({"@type": "FAQPage", "name": "</script>"}));
    let tag = doc.to_script_tag();
    assert!(tag.starts_with(r#"<script type="application/ld+json">"#));
    assert_eq!(tag.matches("</script>").count(), 1);
    assert_eq!(doc.schema_type(), "FAQPage");
  }
}
