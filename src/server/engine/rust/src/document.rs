/* src/server/engine/rust/src/document.rs */

/// Default document shell. The body slot is filled by the page renderer.
pub const DEFAULT_SHELL: &str = concat!(
  "<!DOCTYPE html><html><head><meta charset=\"utf-8\">",
  "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
  "<link rel=\"stylesheet\" href=\"/assets/site.css\">",
  "</head><body><!--ride:body:html--></body></html>"
);

const CHARSET: &str = r#"<meta charset="utf-8">"#;

/// Inject page-level head tags right after `<meta charset="utf-8">`, or
/// after `<head>` when the shell has no charset tag.
pub fn inject_head_meta(html: &str, meta_html: &str) -> String {
  let insert_at = html
    .find(CHARSET)
    .map(|pos| pos + CHARSET.len())
    .or_else(|| html.find("<head>").map(|pos| pos + "<head>".len()));
  match insert_at {
    Some(at) => {
      let mut result = String::with_capacity(html.len() + meta_html.len());
      result.push_str(&html[..at]);
      result.push_str(meta_html);
      result.push_str(&html[at..]);
      result
    }
    None => html.to_string(),
  }
}

/// Inject pre-rendered `<script type="application/ld+json">` blocks before `</head>`.
pub fn inject_ld_json(html: &str, scripts: &[String]) -> String {
  if scripts.is_empty() {
    return html.to_string();
  }
  let joined = scripts.concat();
  match html.find("</head>") {
    Some(pos) => {
      let mut result = String::with_capacity(html.len() + joined.len());
      result.push_str(&html[..pos]);
      result.push_str(&joined);
      result.push_str(&html[pos..]);
      result
    }
    None => format!("{joined}{html}"),
  }
}

/// Set `<html lang="...">`, replacing an existing lang attribute.
pub fn inject_html_lang(html: &str, lang: &str) -> String {
  let Some(start) = html.find("<html") else {
    return html.to_string();
  };
  let tag_end = html[start..].find('>').map_or(html.len(), |p| start + p);
  let tag = &html[start..tag_end];
  if let Some(attr) = tag.find(" lang=\"") {
    let value_start = start + attr + " lang=\"".len();
    if let Some(value_len) = html[value_start..].find('"') {
      return format!("{}{lang}{}", &html[..value_start], &html[value_start + value_len..]);
    }
  }
  html.replacen("<html", &format!("<html lang=\"{lang}\""), 1)
}
