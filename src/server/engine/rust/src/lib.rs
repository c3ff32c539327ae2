/* src/server/engine/rust/src/lib.rs */

pub mod document;
pub mod escape;
pub mod head;
pub mod render;

pub use document::{DEFAULT_SHELL, inject_head_meta, inject_html_lang, inject_ld_json};
pub use escape::{ascii_escape_json, escape_script_json};
pub use head::{HeadTags, SocialTags};
pub use render::{ld_json_script, render_document};
