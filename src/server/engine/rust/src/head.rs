/* src/server/engine/rust/src/head.rs */

use std::fmt::Write;

use ridepage_injector::escape_html;
use serde::{Deserialize, Serialize};

/// Open Graph / Twitter card fields shared by both tag families.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialTags {
  pub og_type: String,
  pub site_name: String,
  pub locale: String,
  pub twitter_card: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub twitter_site: Option<String>,
}

/// Everything that goes into `<head>` besides charset, viewport and JSON-LD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadTags {
  pub title: String,
  pub description: String,
  pub keywords: Vec<String>,
  pub canonical_url: String,
  pub image_url: String,
  pub robots: String,
  pub social: SocialTags,
  /// `geo.region` / `geo.placename` pair for location pages.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub geo: Option<(String, String)>,
}

fn meta_name(out: &mut String, name: &str, content: &str) {
  if content.is_empty() {
    return;
  }
  let _ = write!(out, r#"<meta name="{name}" content="{}">"#, escape_html(content));
}

fn meta_property(out: &mut String, property: &str, content: &str) {
  if content.is_empty() {
    return;
  }
  let _ = write!(out, r#"<meta property="{property}" content="{}">"#, escape_html(content));
}

impl HeadTags {
  /// Render the tags as a single HTML fragment, in a fixed order.
  pub fn to_html(&self) -> String {
    let mut out = String::new();
    let _ = write!(out, "<title>{}</title>", escape_html(&self.title));
    meta_name(&mut out, "description", &self.description);
    meta_name(&mut out, "keywords", &self.keywords.join(", "));
    meta_name(&mut out, "robots", &self.robots);
    if !self.canonical_url.is_empty() {
      let _ = write!(out, r#"<link rel="canonical" href="{}">"#, escape_html(&self.canonical_url));
    }
    if let Some((region, placename)) = &self.geo {
      meta_name(&mut out, "geo.region", region);
      meta_name(&mut out, "geo.placename", placename);
    }

    let social = &self.social;
    meta_property(&mut out, "og:type", &social.og_type);
    meta_property(&mut out, "og:site_name", &social.site_name);
    meta_property(&mut out, "og:locale", &social.locale);
    meta_property(&mut out, "og:title", &self.title);
    meta_property(&mut out, "og:description", &self.description);
    meta_property(&mut out, "og:url", &self.canonical_url);
    meta_property(&mut out, "og:image", &self.image_url);

    meta_name(&mut out, "twitter:card", &social.twitter_card);
    if let Some(site) = &social.twitter_site {
      meta_name(&mut out, "twitter:site", site);
    }
    meta_name(&mut out, "twitter:title", &self.title);
    meta_name(&mut out, "twitter:description", &self.description);
    meta_name(&mut out, "twitter:image", &self.image_url);
    out
  }
}
