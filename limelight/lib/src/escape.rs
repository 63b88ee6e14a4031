//! Minimal HTML escaping for source views.
//!
//! Escapes exactly the three characters that change how markup parses
//! (`&`, `<`, `>`) and nothing else, so escaped source stays readable
//! next to the original. Quotes are left alone; the output lands in a
//! text context, never inside an attribute.
//!
//! ## Examples
//!
//! ```
//! use limelight_lib::escape::escape_markup;
//!
//! assert_eq!(escape_markup("<p>a & b</p>"), "&lt;p&gt;a &amp; b&lt;/p&gt;");
//! ```

use std::borrow::Cow;

/// Escapes `&`, `<`, and `>` for embedding in an HTML text context.
///
/// Returns the input borrowed when nothing needs escaping.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Decodes HTML entities back into plain text.
///
/// Inverse of [`escape_markup`] for the entities it writes, and also
/// handles any other standard entities present.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}
