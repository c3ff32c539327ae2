/* src/server/core/rust/src/record.rs */

use serde::{Deserialize, Serialize};

/// The record collections a generated page can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
  Suburb,
  Competitor,
  Market,
  Hotel,
  Venue,
}

impl Variant {
  pub const ALL: [Variant; 5] =
    [Variant::Suburb, Variant::Competitor, Variant::Market, Variant::Hotel, Variant::Venue];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Suburb => "suburb",
      Self::Competitor => "competitor",
      Self::Market => "market",
      Self::Hotel => "hotel",
      Self::Venue => "venue",
    }
  }

  /// Data file holding this variant's records.
  pub fn file_name(self) -> &'static str {
    match self {
      Self::Suburb => "suburbs.toml",
      Self::Competitor => "competitors.toml",
      Self::Market => "markets.toml",
      Self::Hotel => "hotels.toml",
      Self::Venue => "venues.toml",
    }
  }

  /// Location-like variants carry distance / travel time to the airport.
  pub fn is_location(self) -> bool {
    matches!(self, Self::Suburb | Self::Hotel | Self::Venue)
  }
}

/// Variant-specific payload. Fields that make no sense for a variant simply
/// do not exist on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum RecordKind {
  Suburb {
    region: Option<String>,
    distance_km: Option<f64>,
    travel_time: Option<String>,
  },
  Competitor {
    website: Option<String>,
  },
  Market {
    language: Option<String>,
    country_code: Option<String>,
    currency: Option<String>,
  },
  Hotel {
    suburb: Option<String>,
    distance_km: Option<f64>,
    travel_time: Option<String>,
  },
  Venue {
    suburb: Option<String>,
    venue_type: Option<String>,
    distance_km: Option<f64>,
    travel_time: Option<String>,
  },
}

/// One entity eligible for a generated page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRecord {
  pub slug: String,
  pub display_name: String,
  /// Extra metadata keywords, order irrelevant.
  pub keywords: Vec<String>,
  /// Selling-point tags; deduplicated at load, authoring order kept.
  pub features: Vec<String>,
  /// Display-only price or range, e.g. "$80-95". Never used for billing.
  pub price_hint: Option<String>,
  #[serde(flatten)]
  pub kind: RecordKind,
}

impl EntityRecord {
  pub fn variant(&self) -> Variant {
    match self.kind {
      RecordKind::Suburb { .. } => Variant::Suburb,
      RecordKind::Competitor { .. } => Variant::Competitor,
      RecordKind::Market { .. } => Variant::Market,
      RecordKind::Hotel { .. } => Variant::Hotel,
      RecordKind::Venue { .. } => Variant::Venue,
    }
  }

  pub fn region(&self) -> Option<&str> {
    match &self.kind {
      RecordKind::Suburb { region, .. } => region.as_deref(),
      _ => None,
    }
  }

  pub fn distance_km(&self) -> Option<f64> {
    match &self.kind {
      RecordKind::Suburb { distance_km, .. }
      | RecordKind::Hotel { distance_km, .. }
      | RecordKind::Venue { distance_km, .. } => *distance_km,
      _ => None,
    }
  }

  pub fn travel_time(&self) -> Option<&str> {
    match &self.kind {
      RecordKind::Suburb { travel_time, .. }
      | RecordKind::Hotel { travel_time, .. }
      | RecordKind::Venue { travel_time, .. } => travel_time.as_deref(),
      _ => None,
    }
  }

  /// Suburb a hotel or venue sits in.
  pub fn located_in(&self) -> Option<&str> {
    match &self.kind {
      RecordKind::Hotel { suburb, .. } | RecordKind::Venue { suburb, .. } => suburb.as_deref(),
      _ => None,
    }
  }

  /// ISO-639-1 code selecting localized copy; markets only.
  pub fn language(&self) -> Option<&str> {
    match &self.kind {
      RecordKind::Market { language, .. } => language.as_deref(),
      _ => None,
    }
  }
}

/// Format a distance for copy: whole kilometres without a trailing ".0".
pub fn format_km(km: f64) -> String {
  if km.fract() == 0.0 { format!("{km:.0}") } else { format!("{km:.1}") }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn suburb() -> EntityRecord {
    EntityRecord {
      slug: "albany".into(),
      display_name: "Albany".into(),
      keywords: vec![],
      features: vec![],
      price_hint: Some("$95-110".into()),
      kind: RecordKind::Suburb {
        region: Some("North Shore".into()),
        distance_km: Some(38.0),
        travel_time: Some("35-45 minutes".into()),
      },
    }
  }

  #[test]
  fn accessors_follow_variant() {
    let rec = suburb();
    assert_eq!(rec.variant(), Variant::Suburb);
    assert_eq!(rec.region(), Some("North Shore"));
    assert_eq!(rec.distance_km(), Some(38.0));
    assert_eq!(rec.language(), None);

    let market = EntityRecord {
      kind: RecordKind::Market {
        language: Some("zh".into()),
        country_code: Some("CN".into()),
        currency: Some("CNY".into()),
      },
      ..rec
    };
    assert_eq!(market.variant(), Variant::Market);
    assert_eq!(market.language(), Some("zh"));
    assert_eq!(market.region(), None);
    assert_eq!(market.distance_km(), None);
  }

  #[test]
  fn serializes_with_variant_tag() {
    let value = serde_json::to_value(suburb()).unwrap();
    assert_eq!(value["variant"], "suburb");
    assert_eq!(value["region"], "North Shore");
    assert_eq!(value["slug"], "albany");
  }

  #[test]
  fn km_formatting() {
    assert_eq!(format_km(25.0), "25");
    assert_eq!(format_km(21.5), "21.5");
  }

  #[test]
  fn location_variants() {
    assert!(Variant::Hotel.is_location());
    assert!(!Variant::Competitor.is_location());
    assert_eq!(Variant::ALL.len(), 5);
  }
}
