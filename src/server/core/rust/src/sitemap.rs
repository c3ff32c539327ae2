/* src/server/core/rust/src/sitemap.rs */

use std::fmt::Write;

use ridepage_injector::escape_html;

pub const CHANGEFREQ: &str = "weekly";
pub const HUB_PRIORITY: f32 = 0.9;
pub const ENTITY_PRIORITY: f32 = 0.8;
pub const HOME_PRIORITY: f32 = 1.0;

/// Paths never meant for crawlers.
pub const DISALLOWED_PATHS: [&str; 2] = ["/hotel-portal", "/agent-portal"];

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
  pub loc: String,
  pub priority: f32,
}

pub fn build_sitemap(entries: &[SitemapEntry]) -> String {
  let mut out = String::from(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
  );
  for entry in entries {
    let _ = writeln!(
      out,
      "  <url><loc>{}</loc><changefreq>{CHANGEFREQ}</changefreq><priority>{:.1}</priority></url>",
      escape_html(&entry.loc),
      entry.priority
    );
  }
  out.push_str("</urlset>\n");
  out
}

pub fn build_robots(origin: &str) -> String {
  let mut out = String::from("User-agent: *\nAllow: /\n");
  for path in DISALLOWED_PATHS {
    let _ = writeln!(out, "Disallow: {path}");
  }
  let _ = writeln!(out, "\nSitemap: {origin}/sitemap.xml");
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sitemap_lists_entries() {
    let xml = build_sitemap(&[
      SitemapEntry { loc: "https://x.test/".into(), priority: HOME_PRIORITY },
      SitemapEntry { loc: "https://x.test/compare?a=1&b=2".into(), priority: HUB_PRIORITY },
    ]);
    assert!(xml.starts_with("<?xml version=\"1.0\""));
    assert!(xml.contains("<url><loc>https://x.test/</loc><changefreq>weekly</changefreq><priority>1.0</priority></url>"));
    assert!(xml.contains("<loc>https://x.test/compare?a=1&amp;b=2</loc>"));
    assert!(xml.contains("<priority>0.9</priority>"));
    assert!(xml.trim_end().ends_with("</urlset>"));
  }

  #[test]
  fn robots_disallows_portals() {
    let robots = build_robots("https://x.test");
    assert!(robots.contains("Disallow: /hotel-portal\n"));
    assert!(robots.contains("Disallow: /agent-portal\n"));
    assert!(robots.ends_with("Sitemap: https://x.test/sitemap.xml\n"));
  }
}
