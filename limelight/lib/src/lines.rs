//! Line containers for rendered source views.
//!
//! Rendered output is displayed as a column of line containers rather
//! than newline-separated text: every line of input, including empty
//! ones, becomes one `<span class="line">…</span>`, so a stylesheet can
//! give lines uniform height and a gutter can number them.
//!
//! ## Examples
//!
//! ```
//! use limelight_lib::lines::annotate_lines;
//!
//! assert_eq!(
//!     annotate_lines("a\nb"),
//!     r#"<span class="line">a</span><span class="line">b</span>"#
//! );
//! ```

use crate::escape::decode_entities;
use crate::matcher::{MARK_CLOSE, MARK_OPEN};

/// Opening tag of the per-line container.
pub const LINE_OPEN: &str = r#"<span class="line">"#;

/// Closing tag of the per-line container.
pub const LINE_CLOSE: &str = "</span>";

/// Wraps every line of `text` in a line container.
///
/// An empty line is rendered as a single space so its container keeps
/// height. Containers are concatenated without separators; `n` line
/// feeds always produce `n + 1` containers, in input order.
pub fn annotate_lines(text: &str) -> String {
    let mut annotated = String::with_capacity(text.len() + LINE_OPEN.len() + LINE_CLOSE.len());
    for line in text.split('\n') {
        annotated.push_str(LINE_OPEN);
        if line.is_empty() {
            annotated.push(' ');
        } else {
            annotated.push_str(line);
        }
        annotated.push_str(LINE_CLOSE);
    }
    annotated
}

/// Counts the line containers in rendered output.
pub fn line_container_count(rendered: &str) -> usize {
    rendered.matches(LINE_OPEN).count()
}

/// Recovers editable source text from rendered output.
///
/// Unwraps the line containers back into newline-joined text, strips
/// highlight markers, and decodes the entities escaping wrote. The
/// single-space stand-in for an empty line is restored to an empty
/// line; a source line that really was one space is indistinguishable
/// from that and comes back empty as well. Input without line
/// containers is treated as a single line.
pub fn recover_source_text(rendered: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut rest = rendered;
    while let Some(start) = rest.find(LINE_OPEN) {
        let after_open = &rest[start + LINE_OPEN.len()..];
        let Some(end) = after_open.find(LINE_CLOSE) else {
            break;
        };
        lines.push(&after_open[..end]);
        rest = &after_open[end + LINE_CLOSE.len()..];
    }
    if lines.is_empty() {
        return strip_markers_and_decode(rendered);
    }
    let mut source = String::with_capacity(rendered.len());
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            source.push('\n');
        }
        if *line == " " {
            continue;
        }
        source.push_str(&strip_markers_and_decode(line));
    }
    source
}

fn strip_markers_and_decode(fragment: &str) -> String {
    let without_markers = fragment.replace(MARK_OPEN, "").replace(MARK_CLOSE, "");
    decode_entities(&without_markers).into_owned()
}
