/* src/cli/core/src/export.rs */

// `ridepage build`: render every generated page to static files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ridepage_core::RideSite;

use crate::ui;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
  pub pages: usize,
  pub bytes: u64,
}

/// `/` -> `index.html`, `/visitors/china` -> `visitors/china/index.html`, so a
/// static host serves each page at its canonical path.
fn path_to_file(path: &str) -> PathBuf {
  let trimmed = path.trim_matches('/');
  if trimmed.is_empty() {
    return PathBuf::from("index.html");
  }
  PathBuf::from(trimmed).join("index.html")
}

fn write_file(out_dir: &Path, rel: &Path, content: &str) -> Result<u64> {
  let file = out_dir.join(rel);
  if let Some(parent) = file.parent() {
    std::fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(&file, content).with_context(|| format!("failed to write {}", file.display()))?;
  Ok(content.len() as u64)
}

pub fn export_site(site: &RideSite, out_dir: &Path) -> Result<ExportSummary> {
  let mut summary = ExportSummary::default();
  for (path, _) in site.generated_paths() {
    let rendered = site
      .render_path(&path)
      .with_context(|| format!("generated path {path} matched no route"))?;
    summary.bytes += write_file(out_dir, &path_to_file(&path), &rendered.html)?;
    summary.pages += 1;
  }
  summary.bytes += write_file(out_dir, Path::new("sitemap.xml"), &site.sitemap_xml())?;
  summary.bytes += write_file(out_dir, Path::new("robots.txt"), &site.robots_txt())?;
  summary.bytes += write_file(out_dir, Path::new("404.html"), &site.render_not_found("/404"))?;
  Ok(summary)
}

pub fn run_build(site: &RideSite, out_dir: &Path) -> Result<()> {
  ui::arrow(&format!("exporting to {}", out_dir.display()));
  let summary = export_site(site, out_dir)?;
  ui::ok(&format!("{} pages  {}", summary.pages, ui::format_size(summary.bytes)));
  ui::detail("sitemap.xml, robots.txt, 404.html");
  Ok(())
}
