/* src/server/engine/rust/src/escape.rs */

/// Escape non-ASCII characters in JSON string values to `\uXXXX` sequences.
///
/// Walks the JSON text tracking whether the current position is inside a
/// JSON string (handling `\"` and `\\` correctly). Characters outside the BMP
/// are encoded as surrogate pairs.
pub fn ascii_escape_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if !in_string {
      in_string = ch == '"';
      out.push(ch);
      continue;
    }
    match ch {
      '\\' => {
        out.push(ch);
        if let Some(next) = chars.next() {
          out.push(next);
        }
      }
      '"' => {
        in_string = false;
        out.push(ch);
      }
      c if c.is_ascii() => out.push(c),
      c => {
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
          out.push_str(&format!("\\u{unit:04x}"));
        }
      }
    }
  }
  out
}

/// Make serialized JSON safe to embed inside a `<script>` element.
///
/// `</script>` and `<!--` inside string values would otherwise terminate or
/// corrupt the element; `\/` and `<` are equivalent JSON escapes.
pub fn escape_script_json(json: &str) -> String {
  json.replace("</", "<\\/").replace("<!--", "\\u003c!--")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ascii_passthrough() {
    let input = r#"{"name":"Takapuna"}"#;
    assert_eq!(ascii_escape_json(input), input);
  }

  #[test]
  fn macrons_are_escaped() {
    let input = "{\"name\":\"M\u{101}ngere\"}";
    assert_eq!(ascii_escape_json(input), r#"{"name":"M\u0101ngere"}"#);
  }

  #[test]
  fn surrogate_pair_for_emoji() {
    let input = "{\"e\":\"\u{1F695}\"}";
    assert_eq!(ascii_escape_json(input), r#"{"e":"\ud83d\ude95"}"#);
  }

  #[test]
  fn preserves_existing_escapes() {
    let input = r#"{"a":"say \"hi\"\n"}"#;
    assert_eq!(ascii_escape_json(input), input);
  }

  #[test]
  fn script_close_is_neutralised() {
    let json = r#"{"text":"</script><script>alert(1)</script>"}"#;
    let out = escape_script_json(json);
    assert!(!out.contains("</script>"));
    assert!(out.contains(r"<\/script>"));
    let back: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(back["text"], "</script><script>alert(1)</script>");
  }

  #[test]
  fn html_comment_open_is_neutralised() {
    let out = escape_script_json(r#"{"a":"<!-- x"}"#);
    assert!(!out.contains("<!--"));
    let back: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(back["a"], "<!-- x");
  }
}
