/* src/cli/core/src/main.rs */

mod check;
mod config;
mod export;
mod site;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ridepage_axum::{IntoAxumRouter, RideApp};
use ridepage_core::{PageType, PortalClient, RideSite};

use config::{RideConfig, resolve_config};
use ui::{DIM, RESET};

#[derive(Parser)]
#[command(name = "ridepage", about = "Programmatic airport-transfer landing pages")]
struct Cli {
  /// Log filter used when RUST_LOG is unset
  #[arg(long, global = true, default_value = "info")]
  log_level: String,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve every landing page, the sitemap and robots.txt over HTTP
  Serve {
    /// Path to ridepage.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override server.host
    #[arg(long)]
    host: Option<String>,
    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Render every generated page to static files
  Build {
    /// Path to ridepage.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory (defaults to build.out_dir)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Validate record data, routes and localized copy
  Check {
    /// Path to ridepage.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Print the route table, or every generated path with --all
  Routes {
    /// Path to ridepage.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    all: bool,
  },
}

fn init_tracing(log_level: &str) {
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load(explicit: Option<&Path>) -> Result<(PathBuf, RideConfig, RideSite)> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let (base_dir, config) = resolve_config(explicit, &cwd)?;
  let site = site::build_site(&config, &base_dir)?;
  Ok((base_dir, config, site))
}

fn print_routes(site: &RideSite, all: bool) {
  if all {
    for (path, priority) in site.generated_paths() {
      println!("{priority:.1}  {path}");
    }
    return;
  }
  for route in site.routes().routes() {
    let count = match &route.page_type {
      PageType::Entity(variant) => format!("{} records", site.registry().collection(*variant).len()),
      PageType::Hub(hub) => format!("hub: {}", hub.heading),
      PageType::Home => String::new(),
    };
    println!("  {:<32} {:<11} {DIM}{count}{RESET}", route.pattern, route.page_type.label());
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(&cli.log_level);

  match cli.command {
    Command::Serve { config, host, port } => {
      ui::banner("serve");
      let (_, cfg, site) = load(config.as_deref())?;
      let cfg = cfg.with_server_overrides(host, port)?;
      ui::arrow(&format!("{} pages from {}", site.generated_paths().len(), cfg.site.origin));

      let mut app = RideApp::new(site);
      if let Some(base_url) = &cfg.api.base_url {
        ui::detail(&format!("portal api {base_url}"));
        app = app.portal(PortalClient::new(base_url));
      }
      app.serve(&cfg.addr()).await.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
    }
    Command::Build { config, out } => {
      ui::banner("build");
      let (base_dir, cfg, site) = load(config.as_deref())?;
      let out_dir = out.unwrap_or_else(|| cfg.out_dir(&base_dir));
      export::run_build(&site, &out_dir)?;
    }
    Command::Check { config } => {
      ui::banner("check");
      let (_, _, site) = load(config.as_deref())?;
      check::run_check(&site)?;
    }
    Command::Routes { config, all } => {
      let (_, _, site) = load(config.as_deref())?;
      print_routes(&site, all);
    }
  }

  Ok(())
}
