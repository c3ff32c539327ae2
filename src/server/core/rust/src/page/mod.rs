/* src/server/core/rust/src/page/mod.rs */

//! Page Template Renderer: a page is a fixed sequence of sections, each a
//! pure function of the resolved record and static site configuration.

pub mod documents;
pub mod faq;
mod sections;

use serde::Serialize;

use crate::copy::{CopyTable, DEFAULT_LANGUAGE};
use crate::metadata::ComposedMetadata;
use crate::record::{EntityRecord, Variant};
use crate::registry::{Registry, Testimonial};
use crate::route::{HubDef, PageType, RouteTable};
use crate::schema::{AggregateRating, SchemaDocument};
use crate::site::SiteDefaults;

pub use faq::faqs_for;

/// Read-only inputs shared by every section of every page.
#[derive(Debug, Clone, Copy)]
pub struct RenderEnv<'a> {
  pub site: &'a SiteDefaults,
  pub routes: &'a RouteTable,
  pub registry: &'a Registry,
  pub copy: &'a CopyTable,
  pub reviews: &'a [Testimonial],
  pub rating: Option<&'a AggregateRating>,
}

impl<'a> RenderEnv<'a> {
  pub fn new(site: &'a SiteDefaults, routes: &'a RouteTable, registry: &'a Registry) -> Self {
    Self {
      site,
      routes,
      registry,
      copy: registry.copy(),
      reviews: registry.reviews(),
      rating: registry.rating(),
    }
  }

  fn registry_name(&self, variant: Variant, slug: &str) -> Option<&'a str> {
    self.registry.lookup(variant, slug).map(|r| r.display_name.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
  Hero,
  FeatureGrid,
  ComparisonTable,
  ContentBody,
  Faq,
  Cta,
  Listing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
  pub kind: SectionKind,
  pub html: String,
}

/// A rendered page: body sections plus everything its head needs.
#[derive(Debug, Clone)]
pub struct Page {
  pub page_type: PageType,
  pub lang: String,
  pub metadata: ComposedMetadata,
  pub schemas: Vec<SchemaDocument>,
  pub sections: Vec<Section>,
}

impl Page {
  pub fn section_kinds(&self) -> Vec<SectionKind> {
    self.sections.iter().map(|s| s.kind).collect()
  }

  pub fn body_html(&self) -> String {
    let mut out = format!(r#"<main class="page page-{}">"#, self.page_type.label());
    for section in &self.sections {
      out.push_str(&section.html);
    }
    out.push_str("</main>");
    out
  }

  /// Full HTML document: `shell` with body, head tags, JSON-LD and `lang` filled in.
  pub fn to_html(&self, shell: &str) -> String {
    let ld: Vec<serde_json::Value> = self.schemas.iter().map(|d| d.body.clone()).collect();
    ridepage_engine::render_document(shell, &self.body_html(), &self.metadata.head_tags(), &ld, &self.lang)
  }
}

/// Page language: a market's language, English for everything else.
pub fn page_lang(record: &EntityRecord) -> String {
  record.language().unwrap_or(DEFAULT_LANGUAGE).to_string()
}

/// Render a record page. The section order is fixed; competitor pages swap
/// the feature grid for a comparison table.
pub fn render(
  page_type: PageType,
  record: &EntityRecord,
  metadata: ComposedMetadata,
  schemas: Vec<SchemaDocument>,
  env: &RenderEnv<'_>,
) -> Page {
  let lang = page_lang(record);
  let copy = sections::page_copy(record, env, &lang);
  let grid = match record.variant() {
    Variant::Competitor => sections::comparison_table(record, &copy, env),
    _ => sections::feature_grid(record, &copy, env),
  };
  let faqs = faqs_for(record, env.site);

  let sections = vec![
    sections::hero(record, &copy, env),
    grid,
    sections::content_body(record, &copy),
    sections::faq(&faqs, copy.faq_heading.as_deref()),
    sections::cta(Some(record.slug.as_str()), copy.cta_heading.as_deref(), copy.cta_label.as_deref()),
  ];
  Page { page_type, lang, metadata, schemas, sections }
}

/// Records a hub lists, in authoring order.
pub fn hub_records<'a>(registry: &'a Registry, hub: &HubDef) -> Vec<&'a EntityRecord> {
  registry
    .collection(hub.variant)
    .all()
    .iter()
    .filter(|r| hub.region.as_deref().is_none_or(|region| r.region() == Some(region)))
    .collect()
}

fn listing_detail(record: &EntityRecord) -> Option<String> {
  match (record.travel_time(), record.price_hint.as_deref()) {
    (Some(t), Some(p)) => Some(format!("{t} \u{00b7} {p}")),
    (Some(t), None) => Some(t.to_string()),
    (None, Some(p)) => Some(p.to_string()),
    (None, None) => None,
  }
}

/// Render a hub: one listing entry per record, each linking to its page.
pub fn render_hub(
  hub: &HubDef,
  records: &[&EntityRecord],
  metadata: ComposedMetadata,
  schemas: Vec<SchemaDocument>,
  env: &RenderEnv<'_>,
) -> Page {
  let entries: Vec<sections::ListingEntry> = records
    .iter()
    .filter_map(|record| {
      Some(sections::ListingEntry {
        name: record.display_name.clone(),
        href: env.routes.path_for(hub.variant, &record.slug)?,
        detail: listing_detail(record),
      })
    })
    .collect();
  let intro = match &hub.region {
    Some(region) => format!("Choose your {region} pickup for a fixed-price transfer to {}.", env.site.airport),
    None => format!("Fixed-price private transfers to and from {}.", env.site.airport),
  };
  let sections = vec![
    sections::listing(&hub.heading, &intro, &entries),
    sections::cta(None, None, None),
  ];
  Page {
    page_type: PageType::Hub(hub.clone()),
    lang: DEFAULT_LANGUAGE.to_string(),
    metadata,
    schemas,
    sections,
  }
}

/// Render the home page: a listing of every hub.
pub fn render_home(metadata: ComposedMetadata, schemas: Vec<SchemaDocument>, env: &RenderEnv<'_>) -> Page {
  let entries: Vec<sections::ListingEntry> = env
    .routes
    .hubs()
    .map(|(route, hub)| sections::ListingEntry {
      name: hub.heading.clone(),
      href: route.pattern.clone(),
      detail: Some(format!("{} pages", hub_records(env.registry, hub).len())),
    })
    .collect();
  let sections = vec![
    sections::listing(&format!("{} Airport Transfers", env.site.name), &env.site.description, &entries),
    sections::cta(None, None, None),
  ];
  Page { page_type: PageType::Home, lang: DEFAULT_LANGUAGE.to_string(), metadata, schemas, sections }
}

#[cfg(test)]
mod tests;
