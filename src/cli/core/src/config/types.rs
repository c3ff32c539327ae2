/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use ridepage_core::{FallbackDefaults, SiteDefaults};
use serde::Deserialize;

/// `ridepage.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RideConfig {
  #[serde(default)]
  pub site: SiteDefaults,
  #[serde(default)]
  pub fallback: FallbackDefaults,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub build: BuildSection,
  #[serde(default)]
  pub data: DataSection,
  #[serde(default)]
  pub api: ApiSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  3000
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self { out_dir: default_out_dir() }
  }
}

fn default_out_dir() -> String {
  "dist".to_string()
}

/// Record data directory. Files it lacks fall back to the embedded set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSection {
  pub dir: Option<String>,
}

/// Booking backend the portal endpoints proxy to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSection {
  pub base_url: Option<String>,
}

impl RideConfig {
  /// Normalize the site origin and reject values no page could be built with.
  pub fn validated(mut self) -> Result<Self> {
    self.site = self.site.normalized()?;
    if self.server.port == 0 {
      bail!("server.port must be non-zero");
    }
    if let Some(url) = &self.api.base_url
      && !(url.starts_with("http://") || url.starts_with("https://"))
    {
      bail!("api.base_url `{url}` must start with http:// or https://");
    }
    Ok(self)
  }

  /// Apply `--host`/`--port` and validate the result again.
  pub fn with_server_overrides(mut self, host: Option<String>, port: Option<u16>) -> Result<Self> {
    if let Some(host) = host {
      self.server.host = host;
    }
    if let Some(port) = port {
      self.server.port = port;
    }
    self.validated()
  }

  pub fn addr(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }

  /// Data directory resolved against the config file's directory.
  pub fn data_dir(&self, base_dir: &Path) -> Option<PathBuf> {
    self.data.dir.as_ref().map(|d| base_dir.join(d))
  }

  pub fn out_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.build.out_dir)
  }
}
