/* src/cli/core/src/site.rs */

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use ridepage_core::{Registry, RideServer, RideSite};

use crate::config::RideConfig;

pub fn load_registry(config: &RideConfig, base_dir: &Path) -> Result<Registry> {
  match config.data_dir(base_dir) {
    Some(dir) => {
      Registry::load_dir(&dir).with_context(|| format!("failed to load records from {}", dir.display()))
    }
    None => Registry::embedded().context("failed to load embedded records"),
  }
}

/// Build the shared site every command renders from.
pub fn build_site(config: &RideConfig, base_dir: &Path) -> Result<RideSite> {
  let registry = load_registry(config, base_dir)?;
  Ok(
    RideServer::new(Arc::new(registry))
      .site(config.site.clone())
      .fallback(config.fallback.clone())
      .into_site(),
  )
}
