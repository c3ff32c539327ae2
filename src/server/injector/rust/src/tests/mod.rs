/* src/server/injector/rust/src/tests/mod.rs */

use super::*;
use serde_json::json;


#[test]
fn text_slot_basic() {
  let html = inject("<h1><!--ride:name--></h1>", &json!({"name": "Takapuna"}));
  assert_eq!(html, "<h1>Takapuna</h1>");
}

#[test]
fn text_slot_escapes_html() {
  let html = inject("<p><!--ride:msg--></p>", &json!({"msg": "<script>x</script>"}));
  assert_eq!(html, "<p>&lt;script&gt;x&lt;/script&gt;</p>");
}

#[test]
fn html_slot_is_raw() {
  let html = inject("<div><!--ride:body:html--></div>", &json!({"body": "<b>bold</b>"}));
  assert_eq!(html, "<div><b>bold</b></div>");
}

#[test]
fn missing_slot_renders_empty() {
  assert_eq!(inject("<p><!--ride:nope--></p>", &json!({})), "<p></p>");
}

#[test]
fn fallback_used_for_missing_and_empty() {
  let tmpl = "<p><!--ride:region|Auckland--></p>";
  assert_eq!(inject(tmpl, &json!({})), "<p>Auckland</p>");
  assert_eq!(inject(tmpl, &json!({"region": ""})), "<p>Auckland</p>");
  assert_eq!(inject(tmpl, &json!({"region": "North Shore"})), "<p>North Shore</p>");
}

#[test]
fn fallback_is_escaped_in_text_mode() {
  assert_eq!(inject("<!--ride:x|Fish & Chips-->", &json!({})), "Fish &amp; Chips");
}

#[test]
fn if_else() {
  let tmpl = "<!--ride:if:price-->From <!--ride:price--><!--ride:else-->Get a quote<!--ride:endif:price-->";
  assert_eq!(inject(tmpl, &json!({"price": "$80"})), "From $80");
  assert_eq!(inject(tmpl, &json!({})), "Get a quote");
}

#[test]
fn each_binds_item() {
  let tmpl = "<ol><!--ride:each:faqs--><li><!--ride:item.q--></li><!--ride:endeach--></ol>";
  let html = inject(tmpl, &json!({"faqs": [{"q": "How long?"}, {"q": "How much?"}]}));
  assert_eq!(html, "<ol><li>How long?</li><li>How much?</li></ol>");
}

#[test]
fn each_flags_first_pass_only() {
  let tmpl = "<!--ride:each:xs--><!--ride:if:first-->[<!--ride:endif:first--><!--ride:item--><!--ride:endeach-->";
  assert_eq!(inject(tmpl, &json!({"xs": ["a", "b", "c"]})), "[abc");
}

#[test]
fn nested_each_rebinds_item() {
  let tmpl = "<!--ride:each:rows--><!--ride:each:item.cells--><!--ride:item-->;<!--ride:endeach--><!--ride:endeach-->";
  let html = inject(tmpl, &json!({"rows": [{"cells": [1, 2]}, {"cells": [3]}]}));
  assert_eq!(html, "1;2;3;");
}

#[test]
fn attr_injected_on_next_tag() {
  let html = inject("<!--ride:href:attr:href--><a class=\"cta\">Book</a>", &json!({"href": "/book-now?from=takapuna"}));
  assert_eq!(html, r#"<a href="/book-now?from=takapuna" class="cta">Book</a>"#);
}

#[test]
fn attr_value_escaped() {
  let html = inject("<!--ride:t:attr:title--><span>x</span>", &json!({"t": "\"q\""}));
  assert_eq!(html, r#"<span title="&quot;q&quot;">x</span>"#);
}

#[test]
fn boolean_attr_truthy_and_falsy() {
  let tmpl = "<!--ride:open:attr:open--><details></details>";
  assert_eq!(inject(tmpl, &json!({"open": true})), r#"<details open="">"#.to_string() + "</details>");
  assert_eq!(inject(tmpl, &json!({"open": false})), "<details></details>");
}

#[test]
fn null_bytes_are_stripped() {
  assert_eq!(inject("a\0b<!--ride:x-->", &json!({"x": 1})), "ab1");
}

#[test]
fn diagnostics_reported_for_bad_template() {
  let (_, diags) = inject_with_diagnostics("<!--ride:if:x-->body", &json!({}));
  assert_eq!(diags.len(), 1);
  assert_eq!(diags[0].kind, DiagnosticKind::UnclosedBlock);
  assert!(check_template("<!--ride:each:a--><!--ride:endeach-->").is_empty());
}
