/* src/cli/core/src/config/tests/discovery.rs */

use crate::config::{CONFIG_FILE, find_ride_config, resolve_config};

#[test]
fn finds_config_in_parent_directory() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join(CONFIG_FILE), "[server]\nport = 4000\n").unwrap();
  let nested = tmp.path().join("a/b");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_ride_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join(CONFIG_FILE));

  let (base_dir, config) = resolve_config(None, &nested).unwrap();
  assert_eq!(base_dir, tmp.path().canonicalize().unwrap());
  assert_eq!(config.server.port, 4000);
}

#[test]
fn missing_config_means_defaults() {
  let tmp = tempfile::tempdir().unwrap();
  let (base_dir, config) = resolve_config(None, tmp.path()).unwrap();
  assert_eq!(base_dir, tmp.path());
  assert_eq!(config.server.port, 3000);
}

#[test]
fn explicit_path_must_exist_and_parse() {
  let tmp = tempfile::tempdir().unwrap();
  let missing = tmp.path().join("nope.toml");
  assert!(resolve_config(Some(missing.as_path()), tmp.path()).is_err());

  let bad = tmp.path().join("bad.toml");
  std::fs::write(&bad, "[server\n").unwrap();
  let err = resolve_config(Some(bad.as_path()), tmp.path()).unwrap_err();
  assert!(format!("{err:#}").contains("failed to parse"));
}
