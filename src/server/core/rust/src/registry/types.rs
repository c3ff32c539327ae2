/* src/server/core/rust/src/registry/types.rs */

use serde::Deserialize;

use crate::errors::RideError;
use crate::record::{EntityRecord, RecordKind, Variant};

#[derive(Deserialize)]
pub(super) struct RecordFile {
  #[serde(default)]
  pub(super) record: Vec<RawRecord>,
}

/// On-disk record shape. Every variant shares one flat table; `into_record`
/// rejects fields that do not belong to the file's variant.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawRecord {
  pub(super) slug: String,
  pub(super) name: String,
  #[serde(default)]
  pub(super) keywords: Vec<String>,
  #[serde(default)]
  pub(super) features: Vec<String>,
  #[serde(default)]
  pub(super) price: Option<String>,
  #[serde(default)]
  pub(super) region: Option<String>,
  #[serde(default)]
  pub(super) distance_km: Option<f64>,
  #[serde(default)]
  pub(super) travel_time: Option<String>,
  #[serde(default)]
  pub(super) website: Option<String>,
  #[serde(default)]
  pub(super) language: Option<String>,
  #[serde(default)]
  pub(super) country_code: Option<String>,
  #[serde(default)]
  pub(super) currency: Option<String>,
  #[serde(default)]
  pub(super) suburb: Option<String>,
  #[serde(default)]
  pub(super) venue_type: Option<String>,
}

impl RawRecord {
  fn foreign_fields(&self, variant: Variant) -> Vec<&'static str> {
    let set = [
      ("region", self.region.is_some(), variant == Variant::Suburb),
      ("distance_km", self.distance_km.is_some(), variant.is_location()),
      ("travel_time", self.travel_time.is_some(), variant.is_location()),
      ("website", self.website.is_some(), variant == Variant::Competitor),
      ("language", self.language.is_some(), variant == Variant::Market),
      ("country_code", self.country_code.is_some(), variant == Variant::Market),
      ("currency", self.currency.is_some(), variant == Variant::Market),
      ("suburb", self.suburb.is_some(), matches!(variant, Variant::Hotel | Variant::Venue)),
      ("venue_type", self.venue_type.is_some(), variant == Variant::Venue),
    ];
    set.iter().filter(|(_, present, allowed)| *present && !allowed).map(|(name, ..)| *name).collect()
  }

  pub(super) fn into_record(self, variant: Variant) -> Result<EntityRecord, RideError> {
    let foreign = self.foreign_fields(variant);
    if !foreign.is_empty() {
      return Err(RideError::invalid_data(format!(
        "{} `{}` sets fields not valid for this variant: {}",
        variant.as_str(),
        self.slug,
        foreign.join(", ")
      )));
    }
    if self.name.trim().is_empty() {
      return Err(RideError::invalid_data(format!(
        "{} `{}` has an empty name",
        variant.as_str(),
        self.slug
      )));
    }

    let kind = match variant {
      Variant::Suburb => RecordKind::Suburb {
        region: self.region,
        distance_km: self.distance_km,
        travel_time: self.travel_time,
      },
      Variant::Competitor => RecordKind::Competitor { website: self.website },
      Variant::Market => RecordKind::Market {
        language: self.language,
        country_code: self.country_code,
        currency: self.currency,
      },
      Variant::Hotel => RecordKind::Hotel {
        suburb: self.suburb,
        distance_km: self.distance_km,
        travel_time: self.travel_time,
      },
      Variant::Venue => RecordKind::Venue {
        suburb: self.suburb,
        venue_type: self.venue_type,
        distance_km: self.distance_km,
        travel_time: self.travel_time,
      },
    };

    Ok(EntityRecord {
      slug: self.slug,
      display_name: self.name,
      keywords: self.keywords,
      features: dedup_in_order(self.features),
      price_hint: self.price,
      kind,
    })
  }
}

pub(super) fn dedup_in_order(items: Vec<String>) -> Vec<String> {
  let mut out: Vec<String> = Vec::with_capacity(items.len());
  for item in items {
    if !out.contains(&item) {
      out.push(item);
    }
  }
  out
}

/// A customer testimonial shown on review-bearing pages.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct Testimonial {
  pub author: String,
  #[serde(default = "default_stars")]
  pub rating: u8,
  pub body: String,
  #[serde(default)]
  pub date: Option<String>,
}

fn default_stars() -> u8 {
  5
}

#[derive(Deserialize, Default)]
pub(super) struct ReviewFile {
  #[serde(default)]
  pub(super) rating: Option<RatingEntry>,
  #[serde(default)]
  pub(super) review: Vec<Testimonial>,
}

#[derive(Deserialize)]
pub(super) struct RatingEntry {
  pub(super) value: String,
  pub(super) count: String,
}
