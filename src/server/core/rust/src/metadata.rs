/* src/server/core/rust/src/metadata.rs */

//! Per-page SEO metadata: site defaults, then the page template, then record
//! fields substituted into the template's `{placeholders}`.

use ridepage_engine::{HeadTags, SocialTags};
use serde::Serialize;

use crate::record::{EntityRecord, RecordKind, Variant, format_km};
use crate::route::{HubDef, PageType};
use crate::site::SiteDefaults;

pub const DEFAULT_ROBOTS: &str = "index, follow";
const OG_TYPE: &str = "website";
const TWITTER_CARD: &str = "summary_large_image";
/// ISO 3166-2 code for the Auckland region.
const GEO_REGION: &str = "NZ-AUK";

/// Static strings for one page type. `title`, `description`, `keywords` and
/// `image` may contain `{name}`, `{slug}`, `{region}`, `{distance}`,
/// `{duration}`, `{price}`, `{site}` and `{language}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageTemplate {
  pub title: Option<String>,
  pub description: Option<String>,
  pub keywords: Vec<String>,
  pub image: Option<String>,
  pub robots: Option<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

impl PageTemplate {
  pub fn for_page(page_type: &PageType) -> Self {
    match page_type {
      PageType::Home => Self::default(),
      PageType::Hub(hub) => Self::for_hub(hub),
      PageType::Entity(variant) => Self::for_variant(*variant),
    }
  }

  pub fn for_variant(variant: Variant) -> Self {
    match variant {
      Variant::Suburb => Self {
        title: Some("{name} to Auckland Airport Transfer".into()),
        description: Some(
          "Private door-to-door shuttle from {name} to Auckland Airport. {distance} km, around {duration}. Fixed prices, flight tracking, 24/7."
            .into(),
        ),
        keywords: owned(&["{slug} airport shuttle", "{name} to auckland airport", "{region} airport transfer"]),
        ..Self::default()
      },
      Variant::Competitor => Self {
        title: Some("{site} vs {name}: Auckland Airport Transfer Comparison".into()),
        description: Some(
          "Compare {site} with {name} for Auckland Airport transfers: pricing, pickup, flight tracking and luggage."
            .into(),
        ),
        keywords: owned(&["{name} alternative", "{site} vs {name}", "auckland airport transport comparison"]),
        ..Self::default()
      },
      Variant::Market => Self {
        title: Some("Auckland Airport Transfers for Visitors from {name}".into()),
        description: Some(
          "Travelling from {name} to New Zealand? Pre-book a private Auckland Airport shuttle with fixed pricing and meet-and-greet."
            .into(),
        ),
        keywords: owned(&["auckland airport transfer {name}", "new zealand airport shuttle {language}"]),
        ..Self::default()
      },
      Variant::Hotel => Self {
        title: Some("{name} Airport Transfer".into()),
        description: Some(
          "Shuttle between {name} and Auckland Airport. {distance} km, around {duration}. Lobby pickup at a fixed price."
            .into(),
        ),
        keywords: owned(&["{name} airport transfer", "{name} airport shuttle"]),
        ..Self::default()
      },
      Variant::Venue => Self {
        title: Some("{name} Shuttle to Auckland Airport".into()),
        description: Some(
          "Event and airport shuttles for {name}. {distance} km from Auckland Airport, around {duration}."
            .into(),
        ),
        keywords: owned(&["{name} shuttle", "{name} airport transfer"]),
        ..Self::default()
      },
    }
  }

  fn for_hub(hub: &HubDef) -> Self {
    Self {
      title: Some(hub.heading.clone()),
      description: Some(match &hub.region {
        Some(region) => format!(
          "Fixed-price airport shuttles from every {region} suburb to Auckland Airport. Choose your pickup and book online."
        ),
        None => format!(
          "{}. Fixed-price private transfers to and from Auckland Airport with {{site}}.",
          hub.heading
        ),
      }),
      keywords: hub.region.iter().map(|r| format!("{} airport shuttle", r.to_lowercase())).collect(),
      ..Self::default()
    }
  }
}

/// The metadata contract for one rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedMetadata {
  pub title: String,
  pub description: String,
  pub canonical_url: String,
  pub image_url: String,
  pub keywords: Vec<String>,
  pub robots: String,
  pub locale: String,
  pub og_type: String,
  pub twitter_card: String,
  pub twitter_site: Option<String>,
  pub site_name: String,
  pub geo: Option<(String, String)>,
}

impl ComposedMetadata {
  pub fn keyword_string(&self) -> String {
    self.keywords.join(", ")
  }

  pub fn head_tags(&self) -> HeadTags {
    HeadTags {
      title: self.title.clone(),
      description: self.description.clone(),
      keywords: self.keywords.clone(),
      canonical_url: self.canonical_url.clone(),
      image_url: self.image_url.clone(),
      robots: self.robots.clone(),
      social: SocialTags {
        og_type: self.og_type.clone(),
        site_name: self.site_name.clone(),
        locale: self.locale.clone(),
        twitter_card: self.twitter_card.clone(),
        twitter_site: self.twitter_site.clone(),
      },
      geo: self.geo.clone(),
    }
  }

  pub fn to_head_html(&self) -> String {
    self.head_tags().to_html()
  }
}

struct Placeholders(Vec<(&'static str, String)>);

impl Placeholders {
  fn for_site(site: &SiteDefaults) -> Self {
    Self(vec![("site", site.name.clone())])
  }

  fn for_record(record: &EntityRecord, site: &SiteDefaults) -> Self {
    let mut vars = Self::for_site(site).0;
    vars.push(("name", record.display_name.clone()));
    vars.push(("slug", record.slug.clone()));
    vars.push(("region", record.region().unwrap_or(&site.business.region).to_string()));
    vars.push(("distance", record.distance_km().map(format_km).unwrap_or_default()));
    vars.push(("duration", record.travel_time().unwrap_or_default().to_string()));
    vars.push(("price", record.price_hint.clone().unwrap_or_default()));
    vars.push(("language", record.language().unwrap_or_default().to_string()));
    Self(vars)
  }

  /// Replace known `{key}`s; anything else in braces stays verbatim.
  fn fill(&self, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
      out.push_str(&rest[..open]);
      let after = &rest[open + 1..];
      let Some(close) = after.find('}') else {
        out.push_str(&rest[open..]);
        return out;
      };
      let key = &after[..close];
      match self.0.iter().find(|(k, _)| *k == key) {
        Some((_, value)) => out.push_str(value),
        None => {
          out.push('{');
          out.push_str(key);
          out.push('}');
        }
      }
      rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
  }
}

fn dedup_keywords(lists: [&[String]; 2]) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();
  for kw in lists.into_iter().flatten() {
    let kw = kw.trim();
    if !kw.is_empty() && !out.iter().any(|k| k == kw) {
      out.push(kw.to_string());
    }
  }
  out
}

fn full_title(page_title: Option<String>, site: &SiteDefaults) -> String {
  match page_title {
    Some(title) if !title.trim().is_empty() => format!("{title} | {}", site.name),
    _ => site.name.clone(),
  }
}

fn market_locale(record: &EntityRecord) -> Option<String> {
  let RecordKind::Market { language: Some(lang), country_code, .. } = &record.kind else {
    return None;
  };
  Some(match country_code {
    Some(cc) => format!("{lang}_{}", cc.to_uppercase()),
    None => lang.clone(),
  })
}

fn assemble(
  vars: &Placeholders,
  template: &PageTemplate,
  site: &SiteDefaults,
  path: &str,
  record_keywords: &[String],
) -> ComposedMetadata {
  let template_keywords: Vec<String> = template.keywords.iter().map(|k| vars.fill(k)).collect();
  let record_keywords = if record_keywords.is_empty() { &site.keywords[..] } else { record_keywords };
  let image = template.image.as_deref().map(|i| vars.fill(i)).unwrap_or_else(|| site.image_url.clone());

  ComposedMetadata {
    title: full_title(template.title.as_deref().map(|t| vars.fill(t)), site),
    description: template
      .description
      .as_deref()
      .map(|d| vars.fill(d))
      .unwrap_or_else(|| site.description.clone()),
    canonical_url: format!("{}{path}", site.origin),
    image_url: site.absolute_url(&image),
    keywords: dedup_keywords([&template_keywords, record_keywords]),
    robots: template.robots.clone().unwrap_or_else(|| DEFAULT_ROBOTS.to_string()),
    locale: site.locale.clone(),
    og_type: OG_TYPE.to_string(),
    twitter_card: TWITTER_CARD.to_string(),
    twitter_site: site.twitter_handle.clone(),
    site_name: site.name.clone(),
    geo: None,
  }
}

/// Compose metadata for a record page. `path` must be the normalized path the
/// route matched; the canonical URL is `{origin}{path}` verbatim.
pub fn compose(
  record: &EntityRecord,
  template: &PageTemplate,
  site: &SiteDefaults,
  path: &str,
) -> ComposedMetadata {
  let vars = Placeholders::for_record(record, site);
  let mut meta = assemble(&vars, template, site, path, &record.keywords);
  if let Some(locale) = market_locale(record) {
    meta.locale = locale;
  }
  if record.variant().is_location() {
    meta.geo = Some((GEO_REGION.to_string(), record.display_name.clone()));
  }
  meta
}

/// Compose metadata for a page with no record (home, hubs).
pub fn compose_static(template: &PageTemplate, site: &SiteDefaults, path: &str) -> ComposedMetadata {
  assemble(&Placeholders::for_site(site), template, site, path, &[])
}
