/* src/server/core/rust/src/registry/tests.rs */

use super::*;
use crate::record::RecordKind;

fn suburb(slug: &str, name: &str) -> EntityRecord {
  EntityRecord {
    slug: slug.into(),
    display_name: name.into(),
    keywords: vec![],
    features: vec![],
    price_hint: None,
    kind: RecordKind::Suburb { region: None, distance_km: None, travel_time: None },
  }
}

#[test]
fn embedded_data_loads() {
  let registry = Registry::embedded().unwrap();
  for variant in Variant::ALL {
    assert!(!registry.collection(variant).is_empty(), "{} collection empty", variant.as_str());
  }
  assert_eq!(registry.reviews().len(), 8);
  assert_eq!(registry.rating().map(|r| r.value.as_str()), Some("4.9"));
  assert!(registry.copy().has_language("ja"));
}

#[test]
fn embedded_suburbs_exclude_devonport() {
  let registry = Registry::embedded().unwrap();
  assert!(registry.lookup(Variant::Suburb, "devonport").is_none());
  assert!(registry.lookup(Variant::Suburb, "takapuna").is_some());
}

#[test]
fn all_preserves_authoring_order() {
  let src = r#"
[[record]]
slug = "zeta"
name = "Zeta"

[[record]]
slug = "alpha"
name = "Alpha"
"#;
  let records = loader::parse_records(Variant::Competitor, src).unwrap();
  let registry = Registry::from_records(records).unwrap();
  let slugs: Vec<&str> =
    registry.collection(Variant::Competitor).all().iter().map(|r| r.slug.as_str()).collect();
  assert_eq!(slugs, vec!["zeta", "alpha"]);
}

#[test]
fn lookup_does_not_normalize() {
  let registry = Registry::from_records(vec![suburb("albany", "Albany")]).unwrap();
  assert!(registry.lookup(Variant::Suburb, "albany").is_some());
  assert!(registry.lookup(Variant::Suburb, "Albany").is_none());
  assert!(registry.lookup(Variant::Hotel, "albany").is_none());
}

#[test]
fn in_memory_records_dedup_features() {
  let mut record = suburb("albany", "Albany");
  record.features = ["Flight tracking", "Child seats", "Flight tracking", "Child seats"]
    .map(String::from)
    .to_vec();
  let registry = Registry::from_records(vec![record]).unwrap();
  let features = &registry.lookup(Variant::Suburb, "albany").unwrap().features;
  assert_eq!(features, &["Flight tracking", "Child seats"]);
}

#[test]
fn duplicate_slug_rejected() {
  let src = r#"
[[record]]
slug = "albany"
name = "Albany"

[[record]]
slug = "albany"
name = "Albany again"
"#;
  let err = loader::parse_records(Variant::Suburb, src).unwrap_err();
  assert_eq!(err.code(), "INVALID_DATA");
  assert!(err.message().contains("duplicate slug `albany`"));

  let err =
    Registry::from_records(vec![suburb("albany", "A"), suburb("albany", "B")]).unwrap_err();
  assert!(err.message().contains("duplicate"));
}

#[test]
fn malformed_slug_rejected() {
  for bad in ["Albany", "browns_bay", "-albany", "albany-", "browns--bay", ""] {
    assert!(!is_valid_slug(bad), "{bad:?} accepted");
  }
  assert!(is_valid_slug("browns-bay"));
  assert!(is_valid_slug("a1"));

  let err = loader::parse_records(Variant::Suburb, "[[record]]\nslug = \"Bad Slug\"\nname = \"x\"\n")
    .unwrap_err();
  assert!(err.message().contains("Bad Slug"));
}

#[test]
fn foreign_fields_rejected() {
  let src = "[[record]]\nslug = \"uber\"\nname = \"Uber\"\nregion = \"North Shore\"\n";
  let err = loader::parse_records(Variant::Competitor, src).unwrap_err();
  assert!(err.message().contains("region"));
}

#[test]
fn unknown_fields_rejected() {
  let src = "[[record]]\nslug = \"uber\"\nname = \"Uber\"\ncolour = \"black\"\n";
  assert!(loader::parse_records(Variant::Competitor, src).is_err());
}

#[test]
fn features_deduplicated_at_load() {
  let registry = Registry::embedded().unwrap();
  let venue = registry.lookup(Variant::Venue, "mount-smart-stadium").unwrap();
  assert_eq!(venue.features, vec!["Event-day drop-off", "Group vans"]);
}

#[test]
fn load_dir_overrides_and_falls_back() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(
    dir.path().join("suburbs.toml"),
    "[[record]]\nslug = \"devonport\"\nname = \"Devonport\"\nregion = \"North Shore\"\n",
  )
  .unwrap();

  let registry = Registry::load_dir(dir.path()).unwrap();
  let suburbs = registry.collection(Variant::Suburb);
  assert_eq!(suburbs.len(), 1);
  assert_eq!(suburbs.lookup("devonport").unwrap().region(), Some("North Shore"));
  // competitors come from the embedded set
  assert!(registry.lookup(Variant::Competitor, "skybus").is_some());
}

#[test]
fn load_dir_reports_parse_errors() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("markets.toml"), "[[record]\n").unwrap();
  let err = Registry::load_dir(dir.path()).unwrap_err();
  assert_eq!(err.status(), 422);
  assert!(err.message().contains("markets.toml"));
}

#[test]
fn registry_len_counts_every_variant() {
  let registry = Registry::from_records(vec![suburb("a", "A"), suburb("b", "B")]).unwrap();
  assert_eq!(registry.len(), 2);
  assert!(!registry.is_empty());
  assert!(Registry::from_records(vec![]).unwrap().is_empty());
}
