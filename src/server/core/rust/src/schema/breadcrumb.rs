/* src/server/core/rust/src/schema/breadcrumb.rs */

use serde_json::{Value, json};

use super::{SchemaDocument, SchemaKind};

/// One breadcrumb step. A crumb without `url` is rendered without an `item`.
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
  pub name: String,
  pub url: Option<String>,
}

impl Crumb {
  pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
    Self { name: name.into(), url }
  }
}

pub fn build_breadcrumb_list(items: &[Crumb]) -> SchemaDocument {
  let elements: Vec<Value> = items
    .iter()
    .enumerate()
    .map(|(i, crumb)| {
      let mut item = json!({
        "@type": "ListItem",
        "position": i + 1,
        "name": crumb.name,
      });
      if let Some(url) = &crumb.url {
        item["item"] = Value::String(url.clone());
      }
      item
    })
    .collect();

  SchemaDocument::new(
    SchemaKind::BreadcrumbList,
    json!({ "@type": "BreadcrumbList", "itemListElement": elements }),
  )
}
