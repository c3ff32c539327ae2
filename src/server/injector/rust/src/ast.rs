/* src/server/injector/rust/src/ast.rs */

#[derive(Debug)]
pub(crate) enum AstNode {
  Text(String),
  /// `path` or `path|fallback`; the fallback renders when the value is missing or empty.
  Slot { path: String, fallback: Option<String>, mode: SlotMode },
  Attr { path: String, attr_name: String },
  If { path: String, then_nodes: Vec<AstNode>, else_nodes: Vec<AstNode> },
  Each { path: String, body_nodes: Vec<AstNode> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotMode {
  Text,
  Html,
}
