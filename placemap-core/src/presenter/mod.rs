//! Projections of places into list items, map markers and details.

pub mod detail;
pub mod list;
pub mod map;

use maud::Render;

/// Text that is escaped for HTML element content and quoted attributes.
///
/// In contrast to the default escaping of maud single quotes
/// are escaped, too.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl Render for Escaped<'_> {
    fn render_to(&self, buffer: &mut String) {
        escape_to_string(self.0, buffer);
    }
}

pub fn escape_to_string(text: &str, buffer: &mut String) {
    buffer.reserve(text.len());
    for c in text.chars() {
        match c {
            '&' => buffer.push_str("&amp;"),
            '<' => buffer.push_str("&lt;"),
            '>' => buffer.push_str("&gt;"),
            '"' => buffer.push_str("&quot;"),
            '\'' => buffer.push_str("&#039;"),
            c => buffer.push(c),
        }
    }
}
