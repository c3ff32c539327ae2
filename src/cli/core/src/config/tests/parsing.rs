/* src/cli/core/src/config/tests/parsing.rs */

use crate::config::RideConfig;

fn parse(toml_str: &str) -> RideConfig {
  toml::from_str(toml_str).unwrap()
}

#[test]
fn empty_config_is_all_defaults() {
  let config = parse("").validated().unwrap();
  assert_eq!(config.site.name, "BookaRide");
  assert_eq!(config.site.origin, "https://www.bookaride.co.nz");
  assert_eq!(config.fallback.distance_km, 25.0);
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.addr(), "127.0.0.1:3000");
  assert_eq!(config.build.out_dir, "dist");
  assert!(config.data.dir.is_none());
  assert!(config.api.base_url.is_none());
}

#[test]
fn parse_full_config() {
  let config = parse(
    r#"
[site]
name = "Shuttle Co"
origin = "https://shuttle.example/"
locale = "en_AU"
twitter_handle = "@shuttleco"

[site.business]
phone = "+61 2 0000 0000"
locality = "Sydney"

[fallback]
region = "Sydney"
distance_km = 18.5
travel_time = "25-35 minutes"

[server]
host = "0.0.0.0"
port = 8080

[build]
out_dir = "public"

[data]
dir = "content"

[api]
base_url = "https://api.shuttle.example"
"#,
  )
  .validated()
  .unwrap();

  assert_eq!(config.site.name, "Shuttle Co");
  assert_eq!(config.site.origin, "https://shuttle.example");
  assert_eq!(config.site.twitter_handle.as_deref(), Some("@shuttleco"));
  assert_eq!(config.site.business.locality, "Sydney");
  assert_eq!(config.site.business.country, "NZ");
  assert_eq!(config.fallback.region, "Sydney");
  assert_eq!(config.fallback.travel_time, "25-35 minutes");
  assert_eq!(config.addr(), "0.0.0.0:8080");
  assert_eq!(config.out_dir(std::path::Path::new("/srv")), std::path::PathBuf::from("/srv/public"));
  assert_eq!(config.data_dir(std::path::Path::new("/srv")), Some(std::path::PathBuf::from("/srv/content")));
  assert_eq!(config.api.base_url.as_deref(), Some("https://api.shuttle.example"));
}

#[test]
fn rejects_relative_origin() {
  let err = parse("[site]\norigin = \"bookaride.co.nz\"\n").validated().unwrap_err();
  assert!(err.to_string().contains("must start with http"));
}

#[test]
fn rejects_zero_port() {
  let err = parse("[server]\nport = 0\n").validated().unwrap_err();
  assert!(err.to_string().contains("server.port"));
}

#[test]
fn server_overrides_are_validated() {
  let config = parse("").validated().unwrap();
  let overridden = config.clone().with_server_overrides(Some("0.0.0.0".into()), Some(8080)).unwrap();
  assert_eq!(overridden.addr(), "0.0.0.0:8080");

  let err = config.with_server_overrides(None, Some(0)).unwrap_err();
  assert!(err.to_string().contains("server.port"));
}

#[test]
fn rejects_non_http_api() {
  assert!(parse("[api]\nbase_url = \"ftp://x\"\n").validated().is_err());
}

#[test]
fn unknown_sections_are_ignored() {
  let config = parse("[analytics]\nid = \"G-1\"\n");
  assert_eq!(config.server.port, 3000);
}
