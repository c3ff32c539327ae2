/* src/server/core/rust/src/schema/faq.rs */

use serde::Serialize;
use serde_json::{Value, json};

use super::{SchemaDocument, SchemaKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Faq {
  pub question: String,
  pub answer: String,
}

impl Faq {
  pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
    Self { question: question.into(), answer: answer.into() }
  }
}

/// FAQ entries in input order; an empty list yields `mainEntity: []`.
pub fn build_faq_page(faqs: &[Faq]) -> SchemaDocument {
  let main_entity: Vec<Value> = faqs
    .iter()
    .map(|faq| {
      json!({
        "@type": "Question",
        "name": faq.question,
        "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
      })
    })
    .collect();
  SchemaDocument::new(SchemaKind::FaqPage, json!({ "@type": "FAQPage", "mainEntity": main_entity }))
}
