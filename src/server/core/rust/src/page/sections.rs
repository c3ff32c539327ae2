/* src/server/core/rust/src/page/sections.rs */

//! Section templates. Each one is rendered through the slot injector from a
//! JSON view of the record; static copy after `|` is what a section shows
//! when the record lacks the field.

use serde_json::{Value, json};

use super::{RenderEnv, Section, SectionKind};
use crate::record::{EntityRecord, Variant, format_km};
use crate::schema::Faq;

const HERO: &str = concat!(
  r#"<section class="hero"><h1><!--ride:heading--></h1>"#,
  r#"<p class="lead"><!--ride:subheading|Private door-to-door airport transfers at fixed prices.--></p>"#,
  r#"<!--ride:if:distance--><ul class="hero-facts"><li><!--ride:distance--> km to <!--ride:airport--></li>"#,
  r#"<li><!--ride:duration|30-40 minutes--></li>"#,
  r#"<!--ride:if:price--><li>From <!--ride:price--></li><!--ride:endif:price--></ul>"#,
  r#"<!--ride:else--><p class="hero-facts">Door-to-door transfers across Auckland, day and night.</p>"#,
  r#"<!--ride:endif:distance-->"#,
  r#"<!--ride:cta_href:attr:href--><a class="button"><!--ride:cta_label|Book now--></a></section>"#,
);

const FEATURE_GRID: &str = concat!(
  r#"<section class="features"><h2><!--ride:heading|Why ride with us--></h2>"#,
  r#"<ul class="feature-grid"><!--ride:each:features--><li class="feature"><!--ride:item--></li><!--ride:endeach--></ul>"#,
  r#"</section>"#,
);

const COMPARISON: &str = concat!(
  r#"<section class="features comparison"><h2><!--ride:heading--></h2><table>"#,
  r#"<thead><tr><th>Feature</th><th><!--ride:ours--></th><th><!--ride:theirs--></th></tr></thead><tbody>"#,
  r#"<!--ride:each:rows--><tr><td><!--ride:item.feature--></td>"#,
  r#"<td><!--ride:if:item.ours-->&#10003;<!--ride:else-->&#8212;<!--ride:endif:item.ours--></td>"#,
  r#"<td><!--ride:if:item.theirs-->&#10003;<!--ride:else-->&#8212;<!--ride:endif:item.theirs--></td></tr>"#,
  r#"<!--ride:endeach--></tbody></table></section>"#,
);

const CONTENT: &str = concat!(
  r#"<section class="content"><h2><!--ride:heading|About the transfer--></h2>"#,
  r#"<!--ride:each:paragraphs--><p><!--ride:item--></p><!--ride:endeach-->"#,
  r#"<!--ride:if:website--><p class="source"><!--ride:website:attr:href--><a rel="nofollow">Visit <!--ride:name--></a></p><!--ride:endif:website-->"#,
  r#"</section>"#,
);

const FAQ: &str = concat!(
  r#"<section class="faq"><h2><!--ride:heading|Frequently asked questions--></h2>"#,
  r#"<!--ride:each:faqs--><!--ride:first:attr:open--><details><summary><!--ride:item.question--></summary><p><!--ride:item.answer--></p></details><!--ride:endeach-->"#,
  r#"</section>"#,
);

const CTA: &str = concat!(
  r#"<section class="cta"><h2><!--ride:heading|Ready to book your transfer?--></h2>"#,
  r#"<!--ride:href:attr:href--><a class="button"><!--ride:label|Book now--></a></section>"#,
);

const LISTING: &str = concat!(
  r#"<section class="listing"><h1><!--ride:heading--></h1><p class="lead"><!--ride:intro--></p>"#,
  r#"<!--ride:if:entries--><ul class="hub-list"><!--ride:each:entries-->"#,
  r#"<li><!--ride:item.href:attr:href--><a><!--ride:item.name--></a>"#,
  r#"<!--ride:if:item.detail--> <span class="detail"><!--ride:item.detail--></span><!--ride:endif:item.detail--></li>"#,
  r#"<!--ride:endeach--></ul><!--ride:else--><p>New pickup areas are added regularly. Get a quote for any Auckland address.</p>"#,
  r#"<!--ride:endif:entries--></section>"#,
);

fn section(kind: SectionKind, template: &str, view: &Value) -> Section {
  Section { kind, html: ridepage_injector::inject(template, view) }
}

/// Strings that differ per variant and, for markets, per language.
pub(super) struct PageCopy {
  pub heading: String,
  pub subheading: Option<String>,
  pub features_heading: String,
  pub body_heading: String,
  pub paragraphs: Vec<String>,
  pub faq_heading: Option<String>,
  pub cta_heading: Option<String>,
  pub cta_label: Option<String>,
}

pub(super) fn page_copy(record: &EntityRecord, env: &RenderEnv<'_>, lang: &str) -> PageCopy {
  let name = &record.display_name;
  let site = &env.site.name;
  let airport = &env.site.airport;
  let distance = record.distance_km().map(format_km);
  let duration = record.travel_time();

  let trip = match (&distance, duration) {
    (Some(km), Some(d)) => format!("The {km} km trip to {airport} usually takes {d}."),
    (Some(km), None) => format!("It is a {km} km trip to {airport}."),
    (None, Some(d)) => format!("The trip to {airport} usually takes {d}."),
    (None, None) => format!("We run transfers to {airport} around the clock."),
  };

  match record.variant() {
    Variant::Suburb => PageCopy {
      heading: format!("{name} to {airport} Transfer"),
      subheading: Some(format!(
        "Private shuttles from {name}{} straight to the terminal.",
        record.region().map(|r| format!(" in {r}")).unwrap_or_default()
      )),
      features_heading: format!("Why {name} travellers book {site}"),
      body_heading: format!("Getting from {name} to the airport"),
      paragraphs: vec![
        trip,
        format!("Your driver collects you from your door in {name}, loads your luggage and tracks your flight so pickups adjust to delays."),
      ],
      faq_heading: None,
      cta_heading: Some(format!("Book your {name} airport shuttle")),
      cta_label: None,
    },
    Variant::Competitor => PageCopy {
      heading: format!("{site} vs {name}"),
      subheading: Some(format!("How {site} compares with {name} for Auckland Airport transfers.")),
      features_heading: format!("{site} vs {name}: feature comparison"),
      body_heading: format!("Choosing between {site} and {name}"),
      paragraphs: vec![
        format!("{name} is a popular way to reach {airport}. {site} offers private, door-to-door transfers with a fixed price agreed before you travel."),
        "No shared stops, no meters, and your driver tracks your flight.".to_string(),
      ],
      faq_heading: None,
      cta_heading: Some(format!("Try {site} on your next trip")),
      cta_label: None,
    },
    Variant::Market => {
      let localized = |key: &str, default: String| {
        env.copy.lookup(lang, key).map(str::to_string).unwrap_or(default)
      };
      PageCopy {
        heading: localized("hero_title", format!("{airport} Transfers for Visitors from {name}")),
        subheading: env.copy.lookup(lang, "hero_subtitle").map(str::to_string),
        features_heading: localized("features_heading", "Why travellers choose us".to_string()),
        body_heading: format!("{name} \u{2192} {airport}"),
        paragraphs: vec![localized(
          "intro",
          "Book a fixed-price shuttle before you fly and your driver will be waiting in the arrivals hall.".to_string(),
        )],
        faq_heading: env.copy.lookup(lang, "faq_heading").map(str::to_string),
        cta_heading: env.copy.lookup(lang, "cta_heading").map(str::to_string),
        cta_label: env.copy.lookup(lang, "cta_button").map(str::to_string),
      }
    }
    Variant::Hotel => PageCopy {
      heading: format!("{name} Airport Transfer"),
      subheading: Some(format!("Lobby pickup at {name} with a fixed price to {airport}.")),
      features_heading: format!("Staying at {name}?"),
      body_heading: format!("{name} to {airport}"),
      paragraphs: vec![
        trip,
        "Concierge staff can book on your behalf through our hotel portal.".to_string(),
      ],
      faq_heading: None,
      cta_heading: Some(format!("Book your transfer from {name}")),
      cta_label: None,
    },
    Variant::Venue => PageCopy {
      heading: format!("{name} Shuttle"),
      subheading: Some(format!("Event-day drop-offs and airport transfers for {name}.")),
      features_heading: format!("Getting to {name}"),
      body_heading: format!("{name} and {airport}"),
      paragraphs: vec![
        trip,
        "Group vans are available for teams, wedding parties and conference delegates.".to_string(),
      ],
      faq_heading: None,
      cta_heading: Some(format!("Book a shuttle to {name}")),
      cta_label: None,
    },
  }
}

/// `/book-now?from={slug}`.
pub(super) fn booking_href(slug: &str) -> String {
  format!("/book-now?from={slug}")
}

pub(super) fn hero(record: &EntityRecord, copy: &PageCopy, env: &RenderEnv<'_>) -> Section {
  let view = json!({
    "heading": copy.heading,
    "subheading": copy.subheading,
    "distance": record.distance_km().map(format_km),
    "duration": record.travel_time(),
    "price": record.price_hint,
    "airport": env.site.airport,
    "cta_href": booking_href(&record.slug),
    "cta_label": copy.cta_label,
  });
  section(SectionKind::Hero, HERO, &view)
}

/// Record features, or the site's when the record has none.
pub(super) fn features<'a>(record: &'a EntityRecord, env: &'a RenderEnv<'_>) -> &'a [String] {
  if record.features.is_empty() { &env.site.features } else { &record.features }
}

pub(super) fn feature_grid(record: &EntityRecord, copy: &PageCopy, env: &RenderEnv<'_>) -> Section {
  let view = json!({ "heading": copy.features_heading, "features": features(record, env) });
  section(SectionKind::FeatureGrid, FEATURE_GRID, &view)
}

/// Brand features vs competitor features, brand rows first.
pub(super) fn comparison_table(record: &EntityRecord, copy: &PageCopy, env: &RenderEnv<'_>) -> Section {
  let ours = &env.site.features;
  let theirs = &record.features;
  let mut rows: Vec<Value> = Vec::new();
  let mut seen: Vec<&String> = Vec::new();
  for feature in ours.iter().chain(theirs.iter()) {
    if seen.contains(&feature) {
      continue;
    }
    seen.push(feature);
    rows.push(json!({
      "feature": feature,
      "ours": ours.contains(feature),
      "theirs": theirs.contains(feature),
    }));
  }
  let view = json!({
    "heading": copy.features_heading,
    "ours": env.site.name,
    "theirs": record.display_name,
    "rows": rows,
  });
  section(SectionKind::ComparisonTable, COMPARISON, &view)
}

pub(super) fn content_body(record: &EntityRecord, copy: &PageCopy) -> Section {
  let website = match &record.kind {
    crate::record::RecordKind::Competitor { website } => website.clone(),
    _ => None,
  };
  let view = json!({
    "heading": copy.body_heading,
    "paragraphs": copy.paragraphs,
    "website": website,
    "name": record.display_name,
  });
  section(SectionKind::ContentBody, CONTENT, &view)
}

pub(super) fn faq(faqs: &[Faq], heading: Option<&str>) -> Section {
  let view = json!({ "heading": heading, "faqs": faqs });
  section(SectionKind::Faq, FAQ, &view)
}

pub(super) fn cta(slug: Option<&str>, heading: Option<&str>, label: Option<&str>) -> Section {
  let href = slug.map(booking_href).unwrap_or_else(|| "/book-now".to_string());
  let view = json!({ "heading": heading, "href": href, "label": label });
  section(SectionKind::Cta, CTA, &view)
}

pub(super) struct ListingEntry {
  pub name: String,
  pub href: String,
  pub detail: Option<String>,
}

pub(super) fn listing(heading: &str, intro: &str, entries: &[ListingEntry]) -> Section {
  let entries: Vec<Value> = entries
    .iter()
    .map(|e| json!({ "name": e.name, "href": e.href, "detail": e.detail }))
    .collect();
  let view = json!({ "heading": heading, "intro": intro, "entries": entries });
  section(SectionKind::Listing, LISTING, &view)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn section_templates_are_well_formed() {
    for tmpl in [HERO, FEATURE_GRID, COMPARISON, CONTENT, FAQ, CTA, LISTING] {
      assert!(ridepage_injector::check_template(tmpl).is_empty(), "{tmpl}");
    }
  }

  #[test]
  fn cta_links_booking_with_slug() {
    let html = cta(Some("albany"), None, None).html;
    assert!(html.contains(r#"<a href="/book-now?from=albany" class="button">Book now</a>"#));
    assert!(html.contains("Ready to book your transfer?"));
  }

  #[test]
  fn empty_listing_shows_static_copy() {
    let html = listing("North Shore", "Pick a suburb", &[]).html;
    assert!(html.contains("New pickup areas are added regularly"));
    assert!(!html.contains("<ul"));
  }

  #[test]
  fn faq_section_escapes_copy() {
    let html = faq(&[Faq::new("Kids <5?", "Yes & free")], None).html;
    assert!(html.contains("<summary>Kids &lt;5?</summary><p>Yes &amp; free</p>"));
  }

  #[test]
  fn only_first_faq_starts_open() {
    let faqs = [Faq::new("How long?", "About 40 minutes."), Faq::new("Child seats?", "Yes, free.")];
    let html = faq(&faqs, None).html;
    assert_eq!(html.matches(r#"<details open="">"#).count(), 1);
    assert!(html.contains(r#"<details open=""><summary>How long?</summary>"#));
    assert!(html.contains("<details><summary>Child seats?</summary>"));
  }
}
