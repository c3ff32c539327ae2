/* src/server/injector/rust/src/token.rs */

#[derive(Debug)]
pub(crate) enum Token {
  Text(String),
  Marker(String), // directive body (between <!--ride: and -->)
}

pub(crate) const MARKER_OPEN: &str = "<!--ride:";
pub(crate) const MARKER_CLOSE: &str = "-->";

pub(crate) fn tokenize(template: &str) -> Vec<Token> {
  let mut tokens = Vec::new();
  let mut rest = template;

  while !rest.is_empty() {
    let Some(start) = rest.find(MARKER_OPEN) else {
      tokens.push(Token::Text(rest.to_string()));
      break;
    };
    if start > 0 {
      tokens.push(Token::Text(rest[..start].to_string()));
    }
    let body = &rest[start + MARKER_OPEN.len()..];
    if let Some(end) = body.find(MARKER_CLOSE) {
      tokens.push(Token::Marker(body[..end].trim().to_string()));
      rest = &body[end + MARKER_CLOSE.len()..];
    } else {
      // Unclosed marker: keep the remainder verbatim
      tokens.push(Token::Text(rest[start..].to_string()));
      break;
    }
  }

  tokens
}
