/* src/server/core/rust/src/site.rs */

use serde::{Deserialize, Serialize};

use crate::errors::RideError;

/// Site-wide defaults every page falls back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDefaults {
  #[serde(default = "default_site_name")]
  pub name: String,
  /// Scheme + host, no trailing slash.
  #[serde(default = "default_origin")]
  pub origin: String,
  #[serde(default = "default_description")]
  pub description: String,
  #[serde(default = "default_keywords")]
  pub keywords: Vec<String>,
  #[serde(default = "default_features")]
  pub features: Vec<String>,
  #[serde(default = "default_image")]
  pub image_url: String,
  #[serde(default = "default_locale")]
  pub locale: String,
  #[serde(default = "default_twitter")]
  pub twitter_handle: Option<String>,
  #[serde(default = "default_airport")]
  pub airport: String,
  #[serde(default = "default_currency")]
  pub currency: String,
  #[serde(default)]
  pub business: BusinessProfile,
}

fn default_site_name() -> String {
  "BookaRide".to_string()
}

fn default_origin() -> String {
  "https://www.bookaride.co.nz".to_string()
}

fn default_description() -> String {
  "Private door-to-door Auckland Airport shuttles at fixed prices. Book online in minutes."
    .to_string()
}

fn default_keywords() -> Vec<String> {
  ["auckland airport shuttle", "airport transfer auckland", "auckland airport transport"]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_features() -> Vec<String> {
  ["Door-to-door pickup", "Flight tracking", "Fixed pricing", "24/7 service"]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_image() -> String {
  "/assets/og-default.jpg".to_string()
}

fn default_locale() -> String {
  "en_NZ".to_string()
}

fn default_twitter() -> Option<String> {
  Some("@bookaride".to_string())
}

fn default_airport() -> String {
  "Auckland Airport".to_string()
}

fn default_currency() -> String {
  "NZD".to_string()
}

impl Default for SiteDefaults {
  fn default() -> Self {
    Self {
      name: default_site_name(),
      origin: default_origin(),
      description: default_description(),
      keywords: default_keywords(),
      features: default_features(),
      image_url: default_image(),
      locale: default_locale(),
      twitter_handle: default_twitter(),
      airport: default_airport(),
      currency: default_currency(),
      business: BusinessProfile::default(),
    }
  }
}

impl SiteDefaults {
  /// Trim a trailing slash from `origin` and reject anything that is not
  /// an absolute http(s) origin.
  pub fn normalized(mut self) -> Result<Self, RideError> {
    while self.origin.ends_with('/') {
      self.origin.pop();
    }
    if !(self.origin.starts_with("http://") || self.origin.starts_with("https://")) {
      return Err(RideError::invalid_data(format!(
        "site origin `{}` must start with http:// or https://",
        self.origin
      )));
    }
    Ok(self)
  }

  /// `{origin}{path}`.
  pub fn absolute_url(&self, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
      return path.to_string();
    }
    format!("{}{path}", self.origin)
  }
}

/// Organization-level facts for the LocalBusiness document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
  pub phone: String,
  pub email: String,
  pub street_address: String,
  pub locality: String,
  pub region: String,
  pub postal_code: String,
  pub country: String,
  pub latitude: f64,
  pub longitude: f64,
  pub opening_hours: String,
  pub price_range: String,
  pub services: Vec<String>,
  pub same_as: Vec<String>,
}

impl Default for BusinessProfile {
  fn default() -> Self {
    Self {
      phone: "+64 9 555 0142".to_string(),
      email: "bookings@bookaride.co.nz".to_string(),
      street_address: "Ray Emery Drive".to_string(),
      locality: "Auckland".to_string(),
      region: "Auckland".to_string(),
      postal_code: "2022".to_string(),
      country: "NZ".to_string(),
      latitude: -37.0082,
      longitude: 174.785,
      opening_hours: "Mo-Su 00:00-23:59".to_string(),
      price_range: "$$".to_string(),
      services: vec![
        "Airport shuttle".to_string(),
        "Private airport transfer".to_string(),
        "Hotel transfer".to_string(),
        "Event shuttle".to_string(),
      ],
      same_as: vec![],
    }
  }
}

/// Values a synthesized fallback record is filled with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackDefaults {
  pub region: String,
  pub distance_km: f64,
  pub travel_time: String,
  pub language: String,
}

impl Default for FallbackDefaults {
  fn default() -> Self {
    Self {
      region: "Auckland".to_string(),
      distance_km: 25.0,
      travel_time: "30-40 minutes".to_string(),
      language: "en".to_string(),
    }
  }
}
