/* src/server/engine/rust/src/escape.rs */

/// Make serialized JSON safe to place inside an inline `<script>` block.
///
/// Walks the JSON text tracking whether the current position is inside a
/// JSON string (handling `\"` and `\\` correctly). Inside strings, `<`, `>`
/// and `&` become `\u003c`, `\u003e`, `\u0026` so markup such as
/// `</script>` cannot terminate the block. Non-ASCII codepoints are written
/// as `\uXXXX`, outside the BMP as surrogate pairs.
pub fn script_safe_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if !in_string {
      if ch == '"' {
        in_string = true;
      }
      out.push(ch);
      continue;
    }
    match ch {
      '\\' => {
        // Escape sequence: copy both characters verbatim
        out.push(ch);
        if let Some(next) = chars.next() {
          out.push(next);
        }
      }
      '"' => {
        in_string = false;
        out.push(ch);
      }
      '<' | '>' | '&' => push_unicode_escape(&mut out, ch as u32),
      c if c.is_ascii() => out.push(c),
      c => {
        let code = c as u32;
        if code > 0xFFFF {
          let adjusted = code - 0x1_0000;
          push_unicode_escape(&mut out, (adjusted >> 10) + 0xD800);
          push_unicode_escape(&mut out, (adjusted & 0x3FF) + 0xDC00);
        } else {
          push_unicode_escape(&mut out, code);
        }
      }
    }
  }
  out
}

fn push_unicode_escape(out: &mut String, code: u32) {
  out.push_str(&format!("\\u{code:04x}"));
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}
