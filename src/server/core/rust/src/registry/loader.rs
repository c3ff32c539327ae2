/* src/server/core/rust/src/registry/loader.rs */

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::copy::CopyTable;
use crate::errors::RideError;
use crate::record::{EntityRecord, Variant};
use crate::schema::AggregateRating;

use super::types::{RecordFile, ReviewFile, Testimonial};

pub(super) const REVIEWS_FILE: &str = "reviews.toml";
pub(super) const COPY_FILE: &str = "copy.toml";

fn slug_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap())
}

pub fn is_valid_slug(slug: &str) -> bool {
  slug_re().is_match(slug)
}

/// Data files compiled into the crate.
pub(super) fn embedded_source(file: &str) -> Option<&'static str> {
  match file {
    "suburbs.toml" => Some(include_str!("../../data/suburbs.toml")),
    "competitors.toml" => Some(include_str!("../../data/competitors.toml")),
    "markets.toml" => Some(include_str!("../../data/markets.toml")),
    "hotels.toml" => Some(include_str!("../../data/hotels.toml")),
    "venues.toml" => Some(include_str!("../../data/venues.toml")),
    REVIEWS_FILE => Some(include_str!("../../data/reviews.toml")),
    COPY_FILE => Some(include_str!("../../data/copy.toml")),
    _ => None,
  }
}

/// Read `file` from `dir`, or the embedded copy when the file is absent.
pub(super) fn read_source(dir: Option<&Path>, file: &str) -> Result<String, RideError> {
  if let Some(dir) = dir {
    let path = dir.join(file);
    if path.is_file() {
      return std::fs::read_to_string(&path).map_err(|e| {
        RideError::internal(format!("failed to read {}: {e}", path.display()))
      });
    }
    tracing::debug!(file, dir = %dir.display(), "data file not found, using embedded copy");
  }
  embedded_source(file)
    .map(str::to_string)
    .ok_or_else(|| RideError::not_found(format!("no data source for {file}")))
}

/// Parse one variant's records, rejecting malformed and duplicate slugs.
pub(super) fn parse_records(variant: Variant, src: &str) -> Result<Vec<EntityRecord>, RideError> {
  let file: RecordFile = toml::from_str(src).map_err(|e| {
    RideError::invalid_data(format!("failed to parse {}: {e}", variant.file_name()))
  })?;

  let mut seen: HashMap<String, usize> = HashMap::new();
  let mut records = Vec::with_capacity(file.record.len());
  for (idx, raw) in file.record.into_iter().enumerate() {
    if !is_valid_slug(&raw.slug) {
      return Err(RideError::invalid_data(format!(
        "{}: slug `{}` must be lowercase words joined by hyphens",
        variant.file_name(),
        raw.slug
      )));
    }
    if let Some(first) = seen.insert(raw.slug.clone(), idx) {
      return Err(RideError::invalid_data(format!(
        "{}: duplicate slug `{}` (records #{} and #{})",
        variant.file_name(),
        raw.slug,
        first + 1,
        idx + 1
      )));
    }
    records.push(raw.into_record(variant)?);
  }
  Ok(records)
}

pub(super) fn parse_reviews(
  src: &str,
) -> Result<(Vec<Testimonial>, Option<AggregateRating>), RideError> {
  let file: ReviewFile = toml::from_str(src)
    .map_err(|e| RideError::invalid_data(format!("failed to parse {REVIEWS_FILE}: {e}")))?;
  let rating = file.rating.map(|r| AggregateRating { value: r.value, count: r.count });
  Ok((file.review, rating))
}

pub(super) fn parse_copy(src: &str) -> Result<CopyTable, RideError> {
  toml::from_str(src)
    .map_err(|e| RideError::invalid_data(format!("failed to parse {COPY_FILE}: {e}")))
}
