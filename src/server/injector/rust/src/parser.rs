/* src/server/injector/rust/src/parser.rs */

use crate::ast::{AstNode, SlotMode};
use crate::token::Token;

/// Diagnostic emitted when block directives are mismatched or unclosed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
  pub kind: DiagnosticKind,
  pub directive: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
  /// Block-close directive without a matching open (e.g. orphan `endif:x`)
  UnmatchedBlockClose,
  /// Block-open directive that reached EOF without matching close
  UnclosedBlock,
}

#[cfg(test)]
fn parse(tokens: &[Token]) -> Vec<AstNode> {
  let mut diagnostics = Vec::new();
  parse_with_diagnostics(tokens, &mut diagnostics)
}

pub(crate) fn parse_with_diagnostics(
  tokens: &[Token],
  diagnostics: &mut Vec<ParseDiagnostic>,
) -> Vec<AstNode> {
  let mut pos = 0;
  parse_until(tokens, &mut pos, &|_| false, diagnostics)
}

fn is_orphan_block_close(directive: &str) -> bool {
  directive.starts_with("endif:") || directive == "endeach" || directive == "else"
}

/// Split `path|fallback` into its parts. The fallback may itself contain `|`.
fn split_fallback(directive: &str) -> (String, Option<String>) {
  match directive.split_once('|') {
    Some((path, fallback)) => (path.trim().to_string(), Some(fallback.to_string())),
    None => (directive.to_string(), None),
  }
}

fn unclosed(diagnostics: &mut Vec<ParseDiagnostic>, directive: String) {
  diagnostics.push(ParseDiagnostic { kind: DiagnosticKind::UnclosedBlock, directive });
}

fn parse_until(
  tokens: &[Token],
  pos: &mut usize,
  stop: &dyn Fn(&str) -> bool,
  diagnostics: &mut Vec<ParseDiagnostic>,
) -> Vec<AstNode> {
  let mut nodes = Vec::new();

  while *pos < tokens.len() {
    let directive = match &tokens[*pos] {
      Token::Text(value) => {
        nodes.push(AstNode::Text(value.clone()));
        *pos += 1;
        continue;
      }
      Token::Marker(directive) => directive,
    };
    if stop(directive) {
      return nodes;
    }
    *pos += 1;

    if let Some(path) = directive.strip_prefix("if:") {
      let endif_tag = format!("endif:{path}");
      let then_nodes = parse_until(tokens, pos, &|d| d == "else" || d == endif_tag, diagnostics);
      let else_nodes = match tokens.get(*pos) {
        Some(Token::Marker(d)) if d == "else" => {
          *pos += 1;
          parse_until(tokens, pos, &|d| d == endif_tag, diagnostics)
        }
        _ => Vec::new(),
      };
      // Skip endif token; if absent we hit EOF
      let closed = *pos < tokens.len();
      if closed {
        *pos += 1;
      }
      nodes.push(AstNode::If { path: path.to_string(), then_nodes, else_nodes });
      if !closed {
        unclosed(diagnostics, format!("if:{path}"));
      }
    } else if let Some(path) = directive.strip_prefix("each:") {
      let body_nodes = parse_until(tokens, pos, &|d| d == "endeach", diagnostics);
      let closed = *pos < tokens.len();
      if closed {
        *pos += 1;
      }
      nodes.push(AstNode::Each { path: path.to_string(), body_nodes });
      if !closed {
        unclosed(diagnostics, format!("each:{path}"));
      }
    } else if let Some((path, attr_name)) = directive.split_once(":attr:") {
      nodes.push(AstNode::Attr { path: path.to_string(), attr_name: attr_name.to_string() });
    } else if is_orphan_block_close(directive) {
      diagnostics.push(ParseDiagnostic {
        kind: DiagnosticKind::UnmatchedBlockClose,
        directive: directive.clone(),
      });
    } else if let Some(path) = directive.strip_suffix(":html") {
      let (path, fallback) = split_fallback(path);
      nodes.push(AstNode::Slot { path, fallback, mode: SlotMode::Html });
    } else {
      let (path, fallback) = split_fallback(directive);
      nodes.push(AstNode::Slot { path, fallback, mode: SlotMode::Text });
    }
  }

  nodes
}
