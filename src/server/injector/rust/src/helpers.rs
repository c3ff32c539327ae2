/* src/server/injector/rust/src/helpers.rs */

use serde_json::Value;

pub(crate) fn resolve<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
  let mut current = data;
  for key in path.split('.') {
    current = match current {
      Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
      other => other.get(key)?,
    };
  }
  Some(current)
}

pub(crate) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
    Value::String(s) => !s.trim().is_empty(),
    Value::Array(arr) => !arr.is_empty(),
    Value::Object(map) => !map.is_empty(),
  }
}

pub(crate) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(", "),
    other => other.to_string(),
  }
}

// Present means true, absent means false.
const HTML_BOOLEAN_ATTRS: &[&str] =
  &["async", "checked", "defer", "disabled", "hidden", "open", "required", "selected"];

pub(crate) fn is_html_boolean_attr(name: &str) -> bool {
  HTML_BOOLEAN_ATTRS.contains(&name)
}

/// Escape text for HTML element content and double-quoted attribute values.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}
