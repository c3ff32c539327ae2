/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::RideConfig;

pub const CONFIG_FILE: &str = "ridepage.toml";

/// Walk upward from `start` to find `ridepage.toml`, like Cargo.toml discovery
pub fn find_ride_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_ride_config(path: &Path) -> Result<RideConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: RideConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validated().with_context(|| format!("invalid {}", path.display()))
}

/// Resolve the config (explicit path, else discovered from `cwd`) and the
/// directory relative paths in it are resolved against. No file found means
/// all defaults, rooted at `cwd`.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<(PathBuf, RideConfig)> {
  let path = match explicit {
    Some(p) => p.to_path_buf(),
    None => match find_ride_config(cwd) {
      Ok(p) => p,
      Err(_) => {
        tracing::debug!("no {CONFIG_FILE} found, using defaults");
        return Ok((cwd.to_path_buf(), RideConfig::default()));
      }
    },
  };
  let config = load_ride_config(&path)?;
  let base_dir = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
  tracing::debug!(path = %path.display(), "loaded config");
  Ok((base_dir, config))
}
