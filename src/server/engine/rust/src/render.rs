/* src/server/engine/rust/src/render.rs */

use crate::document::{inject_head_meta, inject_html_lang, inject_ld_json};
use crate::escape::{ascii_escape_json, escape_script_json};
use crate::head::HeadTags;

/// Serialize a JSON-LD value into a script element safe for inline embedding.
pub fn ld_json_script(value: &serde_json::Value) -> String {
  let json = serde_json::to_string(value).unwrap_or_default();
  let safe = escape_script_json(&ascii_escape_json(&json));
  format!(r#"<script type="application/ld+json">{safe}</script>"#)
}

/// Assemble a full HTML document.
///
/// 1. fill the shell's body slot with `body_html`
/// 2. insert head tags after the charset meta
/// 3. insert JSON-LD scripts before `</head>`
/// 4. set `<html lang>`
pub fn render_document(
  shell: &str,
  body_html: &str,
  head: &HeadTags,
  ld_json: &[serde_json::Value],
  lang: &str,
) -> String {
  let data = serde_json::json!({ "body": body_html });
  let mut html = ridepage_injector::inject(shell, &data);
  html = inject_head_meta(&html, &head.to_html());
  let scripts: Vec<String> = ld_json.iter().map(ld_json_script).collect();
  html = inject_ld_json(&html, &scripts);
  inject_html_lang(&html, lang)
}
