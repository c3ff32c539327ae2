/* src/server/core/rust/src/schema/taxi.rs */

use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde_json::json;

use super::{SchemaDocument, SchemaKind};

pub struct TaxiRoute<'a> {
  pub from: &'a str,
  pub to: &'a str,
  pub provider: &'a str,
  pub currency: &'a str,
}

fn price_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    let currency = r"(?:[a-z]{0,3}\$|[a-z]{3}\s*)?";
    let number = r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)";
    Regex::new(&format!(
      r"(?i)^\s*(?:from\s+)?{currency}{number}(?:\s*(?:-|–|to)\s*{currency}{number})?\s*$"
    ))
    .unwrap()
  })
}

/// Pull `(min, max)` out of a display price such as `"$80-95"`, `"NZ$65"` or
/// `"$1,200"`. Anything beyond a bare amount or range yields `None`.
pub fn parse_price_range(hint: &str) -> Option<(f64, f64)> {
  let caps = price_re().captures(hint)?;
  let amount = |i: usize| caps.get(i).and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok());
  let min = amount(1)?;
  let max = match caps.get(2) {
    Some(_) => amount(2)?,
    None => min,
  };
  Some(if max < min { (max, min) } else { (min, max) })
}

/// A point-to-point transfer offer. `validFrom` is stamped with `now`, so
/// the document is only meaningful freshly generated.
pub fn build_taxi_service(
  route: &TaxiRoute<'_>,
  price: Option<&str>,
  duration: Option<&str>,
  now: DateTime<Utc>,
) -> SchemaDocument {
  let mut offer = json!({
    "@type": "Offer",
    "priceCurrency": route.currency,
    "validFrom": now.to_rfc3339_opts(SecondsFormat::Secs, true),
    "availability": "https://schema.org/InStock",
  });
  if let Some(hint) = price {
    offer["description"] = json!(hint);
    if let Some((min, max)) = parse_price_range(hint) {
      offer["priceSpecification"] = json!({
        "@type": "PriceSpecification",
        "minPrice": min,
        "maxPrice": max,
        "priceCurrency": route.currency,
      });
    }
  }

  let mut body = json!({
    "@type": "TaxiService",
    "name": format!("{} to {} transfer", route.from, route.to),
    "provider": { "@type": "LocalBusiness", "name": route.provider },
    "areaServed": [
      { "@type": "Place", "name": route.from },
      { "@type": "Place", "name": route.to },
    ],
    "offers": offer,
  });
  if let Some(duration) = duration {
    body["description"] = json!(format!(
      "Private transfer from {} to {}, approximately {duration}.",
      route.from, route.to
    ));
  }
  SchemaDocument::new(SchemaKind::TaxiService, body)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::{Clock, FixedClock};
  use chrono::TimeZone;

  fn route() -> TaxiRoute<'static> {
    TaxiRoute { from: "Albany", to: "Auckland Airport", provider: "BookaRide", currency: "NZD" }
  }

  #[test]
  fn valid_from_uses_injected_clock() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
    let doc = build_taxi_service(&route(), Some("$95-110"), Some("40-50 minutes"), clock.now());
    assert_eq!(doc.body["offers"]["validFrom"], "2026-01-02T03:04:05Z");
    assert_eq!(doc.body["@type"], "TaxiService");
    assert_eq!(doc.body["offers"]["priceSpecification"]["minPrice"], 95.0);
    assert_eq!(doc.body["offers"]["priceSpecification"]["maxPrice"], 110.0);
    assert!(doc.body["description"].as_str().unwrap().contains("40-50 minutes"));
  }

  #[test]
  fn deterministic_for_same_instant() {
    let now = Utc.with_ymd_and_hms(2026, 5, 5, 0, 0, 0).unwrap();
    let a = build_taxi_service(&route(), None, None, now);
    let b = build_taxi_service(&route(), None, None, now);
    assert_eq!(a, b);
    assert!(a.body["offers"].get("priceSpecification").is_none());
    assert!(a.body.get("description").is_none());
  }

  #[test]
  fn price_range_parsing() {
    assert_eq!(parse_price_range("$80-95"), Some((80.0, 95.0)));
    assert_eq!(parse_price_range("NZ$65"), Some((65.0, 65.0)));
    assert_eq!(parse_price_range("from $49.50"), Some((49.5, 49.5)));
    assert_eq!(parse_price_range("$95 - $80"), Some((80.0, 95.0)));
    assert_eq!(parse_price_range("call us"), None);
    assert_eq!(parse_price_range("$1,200"), Some((1200.0, 1200.0)));
    assert_eq!(parse_price_range("NZD 1,050-1,200"), Some((1050.0, 1200.0)));
    assert_eq!(parse_price_range("$80 to $95"), Some((80.0, 95.0)));
    assert_eq!(parse_price_range("$80 for 1-3 passengers"), None);
    assert_eq!(parse_price_range("$1,20"), None);
  }

  #[test]
  fn unparseable_hint_keeps_description_only() {
    let now = Utc.with_ymd_and_hms(2026, 5, 5, 0, 0, 0).unwrap();
    let doc = build_taxi_service(&route(), Some("$80 for 1-3 passengers"), None, now);
    assert_eq!(doc.body["offers"]["description"], "$80 for 1-3 passengers");
    assert!(doc.body["offers"].get("priceSpecification").is_none());
  }
}
