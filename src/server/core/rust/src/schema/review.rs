/* src/server/core/rust/src/schema/review.rs */

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{SchemaDocument, SchemaKind};
use crate::registry::Testimonial;

/// At most this many reviews are embedded in one document.
pub const MAX_REVIEWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRating {
  pub value: String,
  pub count: String,
}

impl Default for AggregateRating {
  fn default() -> Self {
    Self { value: "4.9".to_string(), count: "500".to_string() }
  }
}

/// Review snippet for `business_name`: its aggregate rating plus the first
/// [`MAX_REVIEWS`] testimonials.
pub fn build_review(
  business_name: &str,
  reviews: &[Testimonial],
  rating: Option<&AggregateRating>,
) -> SchemaDocument {
  let fallback = AggregateRating::default();
  let rating = rating.unwrap_or(&fallback);
  let items: Vec<Value> = reviews
    .iter()
    .take(MAX_REVIEWS)
    .map(|r| {
      let mut item = json!({
        "@type": "Review",
        "author": { "@type": "Person", "name": r.author },
        "reviewRating": {
          "@type": "Rating",
          "ratingValue": r.rating.to_string(),
          "bestRating": "5",
        },
        "reviewBody": r.body,
      });
      if let Some(date) = &r.date {
        item["datePublished"] = Value::String(date.clone());
      }
      item
    })
    .collect();

  SchemaDocument::new(
    SchemaKind::Review,
    json!({
      "@type": "LocalBusiness",
      "name": business_name,
      "aggregateRating": {
        "@type": "AggregateRating",
        "ratingValue": rating.value,
        "reviewCount": rating.count,
        "bestRating": "5",
      },
      "review": items,
    }),
  )
}
