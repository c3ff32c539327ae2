/* src/server/core/rust/src/resolve.rs */

use std::borrow::Cow;
use std::sync::Arc;

use crate::page::hub_records;
use crate::record::{EntityRecord, RecordKind, Variant};
use crate::registry::Registry;
use crate::route::{HubDef, PageType, RouteDef, RouteMatch, RouteTable};
use crate::site::FallbackDefaults;

/// A detail page's record, borrowed from the registry or synthesized.
#[derive(Debug, Clone)]
pub struct EntityPage<'a> {
  pub variant: Variant,
  pub path: String,
  pub record: Cow<'a, EntityRecord>,
  pub is_fallback: bool,
}

#[derive(Debug, Clone)]
pub enum Resolution<'a> {
  Home { path: String },
  Entity(EntityPage<'a>),
  Hub { path: String, hub: &'a HubDef, records: Vec<&'a EntityRecord> },
}

impl Resolution<'_> {
  /// The normalized path the route matched.
  pub fn path(&self) -> &str {
    match self {
      Self::Home { path } | Self::Hub { path, .. } => path,
      Self::Entity(page) => &page.path,
    }
  }

  pub fn is_fallback(&self) -> bool {
    matches!(self, Self::Entity(page) if page.is_fallback)
  }
}

/// Maps request paths onto registry records. Never touches disk or network.
#[derive(Debug, Clone)]
pub struct Resolver {
  registry: Arc<Registry>,
  routes: RouteTable,
  fallback: FallbackDefaults,
}

impl Resolver {
  pub fn new(registry: Arc<Registry>, routes: RouteTable, fallback: FallbackDefaults) -> Self {
    Self { registry, routes, fallback }
  }

  pub fn registry(&self) -> &Registry {
    &self.registry
  }

  pub fn routes(&self) -> &RouteTable {
    &self.routes
  }

  pub fn fallback(&self) -> &FallbackDefaults {
    &self.fallback
  }

  /// Resolve `raw` against the whole route table. `None` only when no route
  /// shape matches at all.
  pub fn resolve_path(&self, raw: &str) -> Option<Resolution<'_>> {
    let matched = self.routes.matches(raw)?;
    Some(self.resolve_match(matched))
  }

  /// Resolve `raw` against the route whose pattern is `pattern`. Returns the
  /// registered record, or a synthesized one for an unknown slug.
  pub fn resolve(&self, pattern: &str, raw: &str) -> Option<Cow<'_, EntityRecord>> {
    let route = self.routes.routes().iter().find(|r| r.pattern == pattern)?;
    let PageType::Entity(variant) = route.page_type else {
      return None;
    };
    let matched = single_route_match(route, raw)?;
    let slug = matched.slug?;
    Some(self.lookup_or_fallback(variant, &slug).0)
  }

  fn resolve_match<'a>(&'a self, matched: RouteMatch<'a>) -> Resolution<'a> {
    match &matched.route.page_type {
      PageType::Home => Resolution::Home { path: matched.path },
      PageType::Hub(hub) => {
        let records = hub_records(&self.registry, hub);
        Resolution::Hub { path: matched.path, hub, records }
      }
      PageType::Entity(variant) => {
        // entity patterns always carry a slug capture
        let slug = matched.slug.unwrap_or_default();
        let (record, is_fallback) = self.lookup_or_fallback(*variant, &slug);
        Resolution::Entity(EntityPage { variant: *variant, path: matched.path, record, is_fallback })
      }
    }
  }

  fn lookup_or_fallback(&self, variant: Variant, slug: &str) -> (Cow<'_, EntityRecord>, bool) {
    match self.registry.lookup(variant, slug) {
      Some(record) => (Cow::Borrowed(record), false),
      None => {
        tracing::debug!(variant = variant.as_str(), slug, "unregistered slug, using fallback record");
        (Cow::Owned(fallback_record(variant, slug, &self.fallback)), true)
      }
    }
  }
}

fn single_route_match<'a>(route: &'a RouteDef, raw: &str) -> Option<RouteMatch<'a>> {
  let table = RouteTable::new(vec![route.clone()]);
  let m = table.matches(raw)?;
  Some(RouteMatch { route, path: m.path, slug: m.slug })
}

/// Synthesize a plausible record for an unregistered slug.
pub fn fallback_record(variant: Variant, slug: &str, defaults: &FallbackDefaults) -> EntityRecord {
  let kind = match variant {
    Variant::Suburb => RecordKind::Suburb {
      region: Some(defaults.region.clone()),
      distance_km: Some(defaults.distance_km),
      travel_time: Some(defaults.travel_time.clone()),
    },
    Variant::Competitor => RecordKind::Competitor { website: None },
    Variant::Market => RecordKind::Market {
      language: Some(defaults.language.clone()),
      country_code: None,
      currency: None,
    },
    Variant::Hotel => RecordKind::Hotel {
      suburb: None,
      distance_km: Some(defaults.distance_km),
      travel_time: Some(defaults.travel_time.clone()),
    },
    Variant::Venue => RecordKind::Venue {
      suburb: None,
      venue_type: None,
      distance_km: Some(defaults.distance_km),
      travel_time: Some(defaults.travel_time.clone()),
    },
  };
  EntityRecord {
    slug: slug.to_string(),
    display_name: title_case_slug(slug),
    keywords: Vec::new(),
    features: Vec::new(),
    price_hint: None,
    kind,
  }
}

/// `"browns-bay"` -> `"Browns Bay"`.
pub fn title_case_slug(slug: &str) -> String {
  slug
    .split('-')
    .filter(|w| !w.is_empty())
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}
