/* src/server/core/rust/src/route.rs */

//! Declarative route table. Each pattern is a literal path with at most one
//! `{slug}` capture; patterns compile to anchored regexes.

use regex::Regex;

use crate::errors::RideError;
use crate::record::Variant;

const SLUG_PARAM: &str = "{slug}";
const SLUG_CAPTURE: &str = "(?P<slug>[a-z0-9]+(?:-[a-z0-9]+)*)";

/// A listing page over one collection, optionally narrowed to a region.
#[derive(Debug, Clone, PartialEq)]
pub struct HubDef {
  pub variant: Variant,
  pub region: Option<String>,
  pub heading: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageType {
  Home,
  Entity(Variant),
  Hub(HubDef),
}

impl PageType {
  pub fn label(&self) -> &'static str {
    match self {
      Self::Home => "home",
      Self::Entity(v) => v.as_str(),
      Self::Hub(_) => "hub",
    }
  }
}

#[derive(Debug, Clone)]
pub struct RouteDef {
  pub pattern: String,
  pub page_type: PageType,
  regex: Regex,
}

impl RouteDef {
  pub fn new(pattern: &str, page_type: PageType) -> Result<Self, RideError> {
    if !pattern.starts_with('/') {
      return Err(RideError::invalid_data(format!("route pattern `{pattern}` must start with /")));
    }
    let captures = pattern.matches(SLUG_PARAM).count();
    let wants_slug = matches!(page_type, PageType::Entity(_));
    if captures > 1 || (captures == 1) != wants_slug {
      return Err(RideError::invalid_data(format!(
        "route pattern `{pattern}` must contain {} `{{slug}}` capture",
        if wants_slug { "exactly one" } else { "no" }
      )));
    }

    let source = match pattern.split_once(SLUG_PARAM) {
      Some((before, after)) => {
        format!("^{}{SLUG_CAPTURE}{}$", regex::escape(before), regex::escape(after))
      }
      None => format!("^{}$", regex::escape(pattern)),
    };
    let regex = Regex::new(&source)
      .map_err(|e| RideError::invalid_data(format!("route pattern `{pattern}`: {e}")))?;
    Ok(Self { pattern: pattern.to_string(), page_type, regex })
  }

  /// Concrete path for this route. Static routes ignore `slug`.
  pub fn path(&self, slug: &str) -> String {
    self.pattern.replace(SLUG_PARAM, slug)
  }

  pub fn is_static(&self) -> bool {
    !self.pattern.contains(SLUG_PARAM)
  }
}

/// A route that matched a normalized request path.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
  pub route: &'a RouteDef,
  /// The normalized path; canonical URLs are built from this.
  pub path: String,
  pub slug: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
  routes: Vec<RouteDef>,
}

impl Default for RouteTable {
  fn default() -> Self {
    Self::default_routes()
  }
}

fn hub(variant: Variant, region: Option<&str>, heading: &str) -> PageType {
  PageType::Hub(HubDef {
    variant,
    region: region.map(str::to_string),
    heading: heading.to_string(),
  })
}

impl RouteTable {
  pub fn new(routes: Vec<RouteDef>) -> Self {
    Self { routes }
  }

  pub fn default_routes() -> Self {
    let table: [(&str, PageType); 13] = [
      ("/", PageType::Home),
      ("/airport-shuttle-suburbs", hub(Variant::Suburb, None, "Airport shuttles by suburb")),
      (
        "/auckland-cbd-airport-shuttle",
        hub(Variant::Suburb, Some("Auckland CBD"), "Auckland CBD airport shuttles"),
      ),
      (
        "/north-shore-airport-shuttle",
        hub(Variant::Suburb, Some("North Shore"), "North Shore airport shuttles"),
      ),
      ("/compare", hub(Variant::Competitor, None, "Compare airport transport options")),
      ("/visitors", hub(Variant::Market, None, "Airport transfers for international visitors")),
      ("/hotel-transfers", hub(Variant::Hotel, None, "Hotel airport transfers")),
      ("/venue-shuttles", hub(Variant::Venue, None, "Venue and event shuttles")),
      ("/bookaride-vs-{slug}", PageType::Entity(Variant::Competitor)),
      ("/visitors/{slug}", PageType::Entity(Variant::Market)),
      ("/hotel-transfers/{slug}", PageType::Entity(Variant::Hotel)),
      ("/venue-shuttles/{slug}", PageType::Entity(Variant::Venue)),
      ("/{slug}-to-auckland-airport", PageType::Entity(Variant::Suburb)),
    ];
    let routes = table
      .into_iter()
      .map(|(pattern, page_type)| {
        // literal patterns above always compile
        RouteDef::new(pattern, page_type).unwrap_or_else(|e| panic!("built-in route: {e}"))
      })
      .collect();
    Self { routes }
  }

  pub fn routes(&self) -> &[RouteDef] {
    &self.routes
  }

  /// First route matching the normalized form of `raw`.
  pub fn matches(&self, raw: &str) -> Option<RouteMatch<'_>> {
    let path = normalize_path(raw);
    self.routes.iter().find_map(|route| {
      let caps = route.regex.captures(&path)?;
      let slug = caps.name("slug").map(|m| m.as_str().to_string());
      Some(RouteMatch { route, path: path.clone(), slug })
    })
  }

  /// Path of the detail page for `slug` in `variant`.
  pub fn path_for(&self, variant: Variant, slug: &str) -> Option<String> {
    self
      .routes
      .iter()
      .find(|r| r.page_type == PageType::Entity(variant))
      .map(|r| r.path(slug))
  }

  /// The hub listing `variant`, preferring one scoped to `region`.
  pub fn hub_for(&self, variant: Variant, region: Option<&str>) -> Option<&RouteDef> {
    let scoped = region.and_then(|region| {
      self.hubs().find(|(_, h)| h.variant == variant && h.region.as_deref() == Some(region))
    });
    scoped
      .or_else(|| self.hubs().find(|(_, h)| h.variant == variant && h.region.is_none()))
      .map(|(r, _)| r)
  }

  pub fn hubs(&self) -> impl Iterator<Item = (&RouteDef, &HubDef)> {
    self.routes.iter().filter_map(|r| match &r.page_type {
      PageType::Hub(h) => Some((r, h)),
      _ => None,
    })
  }
}

/// Lowercase, drop query and fragment, collapse repeated slashes and drop
/// trailing ones (root stays `/`). Backslashes count as slashes.
pub fn normalize_path(raw: &str) -> String {
  let end = raw.find(['?', '#']).unwrap_or(raw.len());
  let mut path = String::with_capacity(end + 1);
  for segment in raw[..end].split(['/', '\\']).filter(|s| !s.is_empty()) {
    path.push('/');
    path.push_str(&segment.to_lowercase());
  }
  if path.is_empty() {
    path.push('/');
  }
  path
}
