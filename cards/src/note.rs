//! Plain text to message HTML, shared by the browser composer and the CLI.

#[cfg(test)]
#[path = "note_test.rs"]
mod note_test;

/// Escape `text` for use as message HTML, keeping line breaks.
#[must_use]
pub fn note_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("<br>"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}
