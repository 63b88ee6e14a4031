//! Search highlighting for HTML source views.
//!
//! Renders raw markup into an escaped, line-annotated fragment with
//! query matches wrapped in highlight markers, optionally scoped to the
//! elements a CSS selector picks out. The output is inert: everything
//! is escaped for display except the markers and line containers the
//! renderer itself writes.
//!
//! One entry point and the pieces it composes:
//!
//! - [`engine`] picks a strategy and renders ([`render`], [`render_report`])
//! - [`escape`] does minimal HTML escaping for display
//! - [`lines`] wraps output lines in containers and recovers source text
//! - [`matcher`] compiles case-insensitive literal queries and owns the
//!   highlight marker markup
//! - [`scoped`] parses the document and highlights inside selected elements
//! - [`selector`] validates scope expressions
//! - [`autosave`] tracks debounced persistence for an editing session
//!
//! ## Examples
//!
//! ```
//! use limelight_lib::{render_report, RenderStrategy};
//!
//! let report = render_report(
//!     r#"<div class="hit">alpha</div><p>alpha</p>"#,
//!     "alpha",
//!     "div.hit",
//!     true,
//! );
//! assert_eq!(report.strategy, RenderStrategy::Scoped);
//! assert_eq!(report.marker_count, 1);
//! ```

pub mod autosave;
pub mod engine;
pub mod error;
pub mod escape;
pub mod lines;
pub mod matcher;
pub mod scoped;
pub mod selector;

pub use autosave::{AutosaveBuffer, SaveStatus};
pub use engine::{render, render_report, RenderReport, RenderStrategy};
pub use error::{HighlightError, Result};
pub use escape::escape_markup;
pub use lines::{annotate_lines, line_container_count, recover_source_text};
pub use matcher::{count_markers, highlight_plain, QueryMatcher};
pub use scoped::highlight_scoped;
pub use selector::{validate_scope_selector, SelectorValidity, INVALID_SELECTOR_MESSAGE};
