//! Rendering strategies and the ladder that picks one.
//!
//! Every rendering runs exactly one of three strategies:
//!
//! - **escape-only** when there is no query to highlight,
//! - **plain** when there is a query but no usable scope (a blank
//!   expression, or one the caller's validation flagged invalid),
//! - **scoped** when both a query and a validated scope are present.
//!
//! A scoped attempt that fails degrades to plain rather than erroring,
//! so the view always renders: a stale validity flag costs only the
//! fallback.

use std::fmt;

use serde::Serialize;

use crate::escape::escape_markup;
use crate::lines::annotate_lines;
use crate::matcher::{count_markers, highlight_plain};
use crate::scoped::highlight_scoped;

/// Strategy a rendering was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStrategy {
    /// No query: escape and annotate only.
    EscapeOnly,
    /// Query without usable scope: highlight across the whole text.
    Plain,
    /// Query plus validated scope: highlight inside selected elements.
    Scoped,
}

impl fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderStrategy::EscapeOnly => "escape-only",
            RenderStrategy::Plain => "plain",
            RenderStrategy::Scoped => "scoped",
        };
        f.write_str(name)
    }
}

/// A finished rendering plus how it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    /// Line-annotated, display-ready markup.
    pub html: String,
    /// Strategy that produced [`html`](Self::html).
    pub strategy: RenderStrategy,
    /// Highlight markers present in the output.
    pub marker_count: usize,
}

/// Renders `raw_markup` for display, highlighting `query` matches.
///
/// Shorthand for [`render_report`] when the metadata is not needed.
///
/// ## Examples
///
/// ```
/// use limelight_lib::engine::render;
///
/// let rendered = render("<p>alpha</p>", "alpha", "", false);
/// assert!(rendered.starts_with(r#"<span class="line">"#));
/// assert!(rendered.contains("<mark"));
/// ```
pub fn render(raw_markup: &str, query: &str, scope_expression: &str, scope_is_valid: bool) -> String {
    render_report(raw_markup, query, scope_expression, scope_is_valid).html
}

/// Renders `raw_markup` and reports which strategy produced the output.
///
/// `query` and `scope_expression` are trimmed before use.
/// `scope_is_valid` is the caller's standing verdict on
/// `scope_expression` (see
/// [`validate_scope_selector`](crate::selector::validate_scope_selector));
/// passing `false` forces the plain strategy.
pub fn render_report(
    raw_markup: &str,
    query: &str,
    scope_expression: &str,
    scope_is_valid: bool,
) -> RenderReport {
    let query = query.trim();
    let scope = scope_expression.trim();

    if query.is_empty() {
        return RenderReport {
            html: annotate_lines(&escape_markup(raw_markup)),
            strategy: RenderStrategy::EscapeOnly,
            marker_count: 0,
        };
    }

    if scope.is_empty() || !scope_is_valid {
        return plain_render(raw_markup, query);
    }

    match highlight_scoped(raw_markup, query, scope) {
        Ok(highlighted) => {
            let marker_count = count_markers(&highlighted);
            tracing::debug!(marker_count, "Rendered with the scoped strategy");
            RenderReport {
                html: annotate_lines(&highlighted),
                strategy: RenderStrategy::Scoped,
                marker_count,
            }
        }
        Err(error) => {
            tracing::warn!(error = %error, "Scoped highlighting failed, falling back to plain");
            plain_render(raw_markup, query)
        }
    }
}

fn plain_render(raw_markup: &str, query: &str) -> RenderReport {
    let escaped = escape_markup(raw_markup);
    let (highlighted, marker_count) = highlight_plain(&escaped, query);
    RenderReport {
        html: annotate_lines(&highlighted),
        strategy: RenderStrategy::Plain,
        marker_count,
    }
}
