/* src/server/core/rust/src/registry/mod.rs */

//! Load-once, read-only record collections.
//!
//! A [`Registry`] is built at process or build start and shared behind an
//! `Arc`; nothing mutates it afterwards.

mod loader;
mod types;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::copy::CopyTable;
use crate::errors::RideError;
use crate::record::{EntityRecord, Variant};
use crate::schema::AggregateRating;

pub use loader::is_valid_slug;
pub use types::Testimonial;

/// All records of one variant, in authoring order.
#[derive(Debug, Clone)]
pub struct Collection {
  variant: Variant,
  records: Vec<EntityRecord>,
  index: HashMap<String, usize>,
}

impl Collection {
  fn new(variant: Variant, records: Vec<EntityRecord>) -> Self {
    let index = records.iter().enumerate().map(|(i, r)| (r.slug.clone(), i)).collect();
    Self { variant, records, index }
  }

  /// Exact-match lookup. The slug is not normalized here.
  pub fn lookup(&self, slug: &str) -> Option<&EntityRecord> {
    self.index.get(slug).map(|&i| &self.records[i])
  }

  pub fn all(&self) -> &[EntityRecord] {
    &self.records
  }

  pub fn variant(&self) -> Variant {
    self.variant
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }
}

#[derive(Debug, Clone)]
pub struct Registry {
  collections: BTreeMap<Variant, Collection>,
  reviews: Vec<Testimonial>,
  rating: Option<AggregateRating>,
  copy: CopyTable,
}

impl Registry {
  /// The data set compiled into the crate.
  pub fn embedded() -> Result<Self, RideError> {
    Self::load(None)
  }

  /// Load data files from `dir`; any file missing there comes from the
  /// embedded data set.
  pub fn load_dir(dir: &Path) -> Result<Self, RideError> {
    Self::load(Some(dir))
  }

  fn load(dir: Option<&Path>) -> Result<Self, RideError> {
    let mut collections = BTreeMap::new();
    for variant in Variant::ALL {
      let src = loader::read_source(dir, variant.file_name())?;
      let records = loader::parse_records(variant, &src)?;
      collections.insert(variant, Collection::new(variant, records));
    }
    let (reviews, rating) =
      loader::parse_reviews(&loader::read_source(dir, loader::REVIEWS_FILE)?)?;
    let copy = loader::parse_copy(&loader::read_source(dir, loader::COPY_FILE)?)?;

    let registry = Self { collections, reviews, rating, copy };
    tracing::info!(
      suburbs = registry.collection(Variant::Suburb).len(),
      competitors = registry.collection(Variant::Competitor).len(),
      markets = registry.collection(Variant::Market).len(),
      hotels = registry.collection(Variant::Hotel).len(),
      venues = registry.collection(Variant::Venue).len(),
      reviews = registry.reviews.len(),
      "record registry loaded"
    );
    Ok(registry)
  }

  /// Build a registry from in-memory records. Slug rules and feature dedup
  /// are applied the same way as for data files.
  pub fn from_records(records: Vec<EntityRecord>) -> Result<Self, RideError> {
    let mut grouped: BTreeMap<Variant, Vec<EntityRecord>> =
      Variant::ALL.iter().map(|v| (*v, Vec::new())).collect();
    for mut record in records {
      if !is_valid_slug(&record.slug) {
        return Err(RideError::invalid_data(format!("invalid slug `{}`", record.slug)));
      }
      let bucket = grouped.entry(record.variant()).or_default();
      if bucket.iter().any(|r| r.slug == record.slug) {
        return Err(RideError::invalid_data(format!(
          "duplicate {} slug `{}`",
          record.variant().as_str(),
          record.slug
        )));
      }
      record.features = types::dedup_in_order(record.features);
      bucket.push(record);
    }
    let collections = grouped.into_iter().map(|(v, recs)| (v, Collection::new(v, recs))).collect();
    Ok(Self { collections, reviews: Vec::new(), rating: None, copy: CopyTable::default() })
  }

  pub fn collection(&self, variant: Variant) -> &Collection {
    // every variant is inserted by both constructors
    &self.collections[&variant]
  }

  pub fn lookup(&self, variant: Variant, slug: &str) -> Option<&EntityRecord> {
    self.collection(variant).lookup(slug)
  }

  pub fn reviews(&self) -> &[Testimonial] {
    &self.reviews
  }

  pub fn rating(&self) -> Option<&AggregateRating> {
    self.rating.as_ref()
  }

  pub fn copy(&self) -> &CopyTable {
    &self.copy
  }

  /// Total number of registered records across all variants.
  pub fn len(&self) -> usize {
    self.collections.values().map(Collection::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
