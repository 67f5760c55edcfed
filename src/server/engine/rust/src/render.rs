/* src/server/engine/rust/src/render.rs */

use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::escape::{escape_html, script_safe_json};

/// Global the runtime reads its configuration from.
pub const INTEGRATION_GLOBAL: &str = "H5PIntegration";

/// Document-level inputs for a standalone embed page.
#[derive(Debug, Clone, Default)]
pub struct EmbedDocument {
  pub language: String,
  pub title: String,
  pub content_id: u32,
  pub scripts: Vec<String>,
  pub styles: Vec<String>,
}

/// Render the isolated embed document.
///
/// The payload is frozen into `H5PIntegration` and then handed to `H5P.init`
/// as an argument once the document is ready, so the runtime never has to
/// read mutable global state. Fails only when the payload cannot be serialized.
pub fn render_embed_page<P: Serialize + ?Sized>(doc: &EmbedDocument, payload: &P) -> Result<String> {
  let json = serde_json::to_string(payload)?;
  let payload_js = script_safe_json(&json);

  let mut html = String::with_capacity(512 + payload_js.len());
  html.push_str("<!doctype html>\n");
  let _ = writeln!(html, r#"<html lang="{}" class="h5p-iframe">"#, escape_html(&doc.language));
  html.push_str("<head>\n");
  html.push_str("  <meta charset=\"utf-8\">\n");
  let _ = writeln!(html, "  <title>{}</title>", escape_html(&doc.title));
  for src in &doc.scripts {
    let _ = writeln!(html, r#"  <script src="{}"></script>"#, escape_html(src));
  }
  for href in &doc.styles {
    let _ = writeln!(html, r#"  <link rel="stylesheet" href="{}">"#, escape_html(href));
  }
  html.push_str("</head>\n<body>\n");
  let _ = writeln!(html, r#"  <div class="h5p-content" data-content-id="{}"></div>"#, doc.content_id);
  html.push_str("  <script>\n");
  let _ = writeln!(html, "    var {INTEGRATION_GLOBAL} = Object.freeze({payload_js});");
  html.push_str("    H5P.jQuery(document).ready(function () {\n");
  let _ = writeln!(html, "      H5P.init({INTEGRATION_GLOBAL});");
  html.push_str("    });\n  </script>\n</body>\n</html>\n");
  Ok(html)
}
