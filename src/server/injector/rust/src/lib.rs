/* src/server/injector/rust/src/lib.rs */

//! Slot injector for landing-page section templates.
//!
//! Templates are plain HTML with comment directives:
//!
//! - `<!--ride:record.name-->` text slot (escaped), `<!--ride:body:html-->` raw slot
//! - `<!--ride:record.region|Auckland-->` slot with static fallback copy
//! - `<!--ride:link:attr:href--><a>` attribute applied to the next tag
//! - `<!--ride:first:attr:open--><details>` boolean attribute, present only when truthy
//! - `if:path` ... `else` ... `endif:path`
//! - `each:path` ... `endeach` (binds `item`, and `first` on the first pass)

mod ast;
mod helpers;
mod parser;
mod render;
mod token;

pub use helpers::escape_html;
pub use parser::{DiagnosticKind, ParseDiagnostic};

use parser::parse_with_diagnostics;
use render::{RenderContext, inject_attributes, render};
use token::tokenize;

use serde_json::Value;
use std::borrow::Cow;

/// Render a template against `data`.
pub fn inject(template: &str, data: &Value) -> String {
  inject_with_diagnostics(template, data).0
}

/// Like `inject` but also returns parse diagnostics for malformed templates
/// (unmatched block-close, unclosed block-open).
pub fn inject_with_diagnostics(template: &str, data: &Value) -> (String, Vec<ParseDiagnostic>) {
  let clean: Cow<'_, str> = if template.contains('\0') {
    Cow::Owned(template.replace('\0', ""))
  } else {
    Cow::Borrowed(template)
  };
  let tokens = tokenize(&clean);
  let mut diagnostics = Vec::new();
  let ast = parse_with_diagnostics(&tokens, &mut diagnostics);
  let mut ctx = RenderContext::default();
  let mut result = render(&ast, data, &mut ctx);

  if !ctx.attrs.is_empty() {
    result = inject_attributes(result, &ctx.attrs);
  }

  (result, diagnostics)
}

/// Parse a template without rendering and report its diagnostics.
pub fn check_template(template: &str) -> Vec<ParseDiagnostic> {
  let tokens = tokenize(template);
  let mut diagnostics = Vec::new();
  parse_with_diagnostics(&tokens, &mut diagnostics);
  diagnostics
}

#[cfg(test)]
mod tests;
