/* src/cli/core/src/check.rs */

// `ridepage check`: validate loaded records against routes and copy.

use anyhow::{Result, bail};
use ridepage_core::page::hub_records;
use ridepage_core::{RideSite, Variant};

use crate::ui;

#[derive(Debug, Default)]
pub struct CheckReport {
  pub counts: Vec<(Variant, usize)>,
  pub reviews: usize,
  pub warnings: Vec<String>,
  pub errors: Vec<String>,
}

pub fn check_site(site: &RideSite) -> CheckReport {
  let registry = site.registry();
  let routes = site.routes();
  let mut report = CheckReport { reviews: registry.reviews().len(), ..CheckReport::default() };

  for variant in Variant::ALL {
    let collection = registry.collection(variant);
    report.counts.push((variant, collection.len()));
    if !collection.is_empty() && routes.path_for(variant, "x").is_none() {
      report.errors.push(format!("no route serves {} records", variant.as_str()));
    }
    for record in collection.all() {
      if record.keywords.is_empty() {
        report.warnings.push(format!(
          "{} `{}` has no keywords, site keywords are used",
          variant.as_str(),
          record.slug
        ));
      }
    }
  }

  for (route, hub) in routes.hubs() {
    if hub_records(registry, hub).is_empty() {
      report.warnings.push(format!("hub {} lists no records", route.pattern));
    }
  }

  let copy = registry.copy();
  for market in registry.collection(Variant::Market).all() {
    if let Some(lang) = market.language()
      && !copy.has_language(lang)
    {
      report.warnings.push(format!("market `{}` language `{lang}` has no copy", market.slug));
    }
  }
  for lang in copy.languages() {
    let missing = copy.missing_keys(lang);
    if !missing.is_empty() {
      report.warnings.push(format!("copy `{lang}` lacks {} (English shown)", missing.join(", ")));
    }
  }

  let origin = &site.site().origin;
  for (path, _) in site.generated_paths() {
    match site.render_path(&path) {
      Some(rendered) if rendered.is_fallback => {
        report.errors.push(format!("{path} resolved to a fallback record"));
      }
      Some(rendered) if rendered.page.metadata.canonical_url != format!("{origin}{path}") => {
        report.errors.push(format!(
          "{path} canonical is {}",
          rendered.page.metadata.canonical_url
        ));
      }
      Some(_) => {}
      None => report.errors.push(format!("{path} matched no route")),
    }
  }
  report
}

pub fn run_check(site: &RideSite) -> Result<()> {
  ui::arrow("checking records");
  let report = check_site(site);
  for (variant, count) in &report.counts {
    ui::detail(&format!("{:<12} {count}", variant.as_str()));
  }
  ui::detail(&format!("{:<12} {}", "reviews", report.reviews));

  for warning in &report.warnings {
    ui::warn(warning);
  }
  for error in &report.errors {
    ui::fail(error);
  }
  if !report.errors.is_empty() {
    bail!("{} problem(s) found", report.errors.len());
  }
  ui::ok(&format!("{} pages render", site.generated_paths().len()));
  Ok(())
}
