/* src/server/injector/rust/src/render.rs */

use serde_json::Value;

use crate::ast::{AstNode, SlotMode};
use crate::helpers::{escape_html, is_html_boolean_attr, is_truthy, resolve, stringify};

pub(crate) struct AttrEntry {
  pub(crate) marker: String,
  pub(crate) attr_name: String,
  pub(crate) value: String,
}

#[derive(Default)]
pub(crate) struct RenderContext {
  pub(crate) attrs: Vec<AttrEntry>,
}

impl RenderContext {
  /// Emit a deferred attribute marker. Null bytes never occur in valid HTML,
  /// and the entry point strips any from the template.
  fn defer_attr(&mut self, out: &mut String, attr_name: &str, value: String) {
    let marker = format!("\x00RIDE_ATTR_{}\x00", self.attrs.len());
    out.push_str(&marker);
    self.attrs.push(AttrEntry { marker, attr_name: attr_name.to_string(), value });
  }
}

pub(crate) fn render(nodes: &[AstNode], data: &Value, ctx: &mut RenderContext) -> String {
  let mut out = String::new();

  for node in nodes {
    match node {
      AstNode::Text(value) => out.push_str(value),

      AstNode::Slot { path, fallback, mode } => {
        let text = match resolve(path, data) {
          Some(v) if is_truthy(v) => stringify(v),
          _ => fallback.clone().unwrap_or_default(),
        };
        match mode {
          SlotMode::Html => out.push_str(&text),
          SlotMode::Text => out.push_str(&escape_html(&text)),
        }
      }

      AstNode::Attr { path, attr_name } => {
        let Some(value) = resolve(path, data) else { continue };
        if is_html_boolean_attr(attr_name) {
          if is_truthy(value) {
            ctx.defer_attr(&mut out, attr_name, String::new());
          }
        } else if !value.is_null() {
          ctx.defer_attr(&mut out, attr_name, escape_html(&stringify(value)));
        }
      }

      AstNode::If { path, then_nodes, else_nodes } => {
        let branch = if resolve(path, data).is_some_and(is_truthy) { then_nodes } else { else_nodes };
        out.push_str(&render(branch, data, ctx));
      }

      AstNode::Each { path, body_nodes } => {
        let Some(Value::Array(items)) = resolve(path, data) else { continue };
        let Value::Object(map) = data else { continue };
        for (i, item) in items.iter().enumerate() {
          let mut scoped = map.clone();
          scoped.insert("item".to_string(), item.clone());
          scoped.insert("first".to_string(), Value::Bool(i == 0));
          out.push_str(&render(body_nodes, &Value::Object(scoped), ctx));
        }
      }
    }
  }

  out
}

/// Phase B: move each deferred attribute onto the next opening tag after its marker.
pub(crate) fn inject_attributes(mut html: String, attrs: &[AttrEntry]) -> String {
  for entry in attrs {
    let Some(pos) = html.find(&entry.marker) else { continue };
    html.replace_range(pos..pos + entry.marker.len(), "");
    let Some(tag_rel) = html[pos..].find('<') else { continue };
    let tag_start = pos + tag_rel + 1;
    let name_len = html[tag_start..]
      .find(|c: char| c == ' ' || c == '>' || c == '/' || c.is_ascii_whitespace())
      .unwrap_or(html.len() - tag_start);
    let injection = format!(r#" {}="{}""#, entry.attr_name, entry.value);
    html.insert_str(tag_start + name_len, &injection);
  }
  html
}
