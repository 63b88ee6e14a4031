//! Case-insensitive literal query matching and highlight markers.
//!
//! A query is always literal text, never a pattern: it is escaped into
//! a regex so matching gets case-insensitive scanning for free, and
//! every occurrence is wrapped in the `<mark>` element the display
//! layer styles. The marker markup is owned here so every strategy
//! emits byte-identical tags.
//!
//! ## Examples
//!
//! ```
//! use limelight_lib::matcher::QueryMatcher;
//!
//! let matcher = QueryMatcher::new("rust").expect("non-empty query");
//! let (wrapped, count) = matcher.wrap_matches("Rust is rust.");
//! assert_eq!(count, 2);
//! assert!(wrapped.starts_with("<mark"));
//! ```

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex, RegexBuilder};

use crate::escape::escape_markup;

/// Class list carried by every highlight marker.
pub const MARK_CLASS: &str = "bg-cyan-500/30 text-cyan-300 px-0.5 rounded-sm";

/// Opening tag of a highlight marker.
pub const MARK_OPEN: &str = r#"<mark class="bg-cyan-500/30 text-cyan-300 px-0.5 rounded-sm">"#;

/// Closing tag of a highlight marker.
pub const MARK_CLOSE: &str = "</mark>";

/// One run of text, classified by whether it matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPiece {
    /// Text reproduced as-is.
    Literal(String),
    /// Text that matched the query and gets wrapped in a marker.
    Match(String),
}

/// Compiled case-insensitive matcher for a literal query.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    pattern: Regex,
}

impl QueryMatcher {
    /// Compiles a matcher for `query`, treated as literal text.
    ///
    /// Returns `None` for an empty query, which means highlighting is
    /// skipped entirely, or in the pathological case where the escaped
    /// literal fails to compile.
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        let literal = regex::escape(query);
        match RegexBuilder::new(&literal).case_insensitive(true).build() {
            Ok(pattern) => Some(Self { pattern }),
            Err(error) => {
                tracing::debug!(error = %error, "Query could not be compiled for matching");
                None
            }
        }
    }

    /// Whether `text` contains the query.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Splits `text` into literal and matched runs.
    ///
    /// Returns `None` when the query does not occur. Matched runs keep
    /// the casing found in `text`, not the query's.
    pub fn split_matches(&self, text: &str) -> Option<Vec<TextPiece>> {
        let mut pieces = Vec::new();
        let mut cursor = 0;
        for found in self.pattern.find_iter(text) {
            if found.start() > cursor {
                pieces.push(TextPiece::Literal(text[cursor..found.start()].to_string()));
            }
            pieces.push(TextPiece::Match(found.as_str().to_string()));
            cursor = found.end();
        }
        if pieces.is_empty() {
            return None;
        }
        if cursor < text.len() {
            pieces.push(TextPiece::Literal(text[cursor..].to_string()));
        }
        Some(pieces)
    }

    /// Wraps every occurrence of the query in a highlight marker.
    ///
    /// Returns the wrapped text and the number of markers written; the
    /// text comes back borrowed when nothing matched.
    pub fn wrap_matches<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut count = 0;
        let wrapped = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            count += 1;
            format!("{MARK_OPEN}{}{MARK_CLOSE}", &caps[0])
        });
        (wrapped, count)
    }
}

/// Wraps query occurrences in already-escaped text.
///
/// This is the unscoped strategy: matching runs over the escaped text,
/// so a query containing `<` or `>` finds nothing (those characters
/// were escaped away) while a query like `amp` can land inside an
/// `&amp;` entity. Scoped highlighting matches raw text instead.
pub fn highlight_plain<'t>(escaped: &'t str, query: &str) -> (Cow<'t, str>, usize) {
    match QueryMatcher::new(query) {
        Some(matcher) => matcher.wrap_matches(escaped),
        None => (Cow::Borrowed(escaped), 0),
    }
}

/// Counts the highlight markers present in rendered markup.
pub fn count_markers(markup: &str) -> usize {
    markup.matches(MARK_OPEN).count()
}

static MARK_FRAGMENT: OnceLock<Regex> = OnceLock::new();
static MARK_PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

/// Matches one marker fragment: opening tag through the nearest closing
/// tag, across newlines.
fn mark_fragment_pattern() -> &'static Regex {
    MARK_FRAGMENT.get_or_init(|| {
        let pattern = format!("(?s){}.*?{}", regex::escape(MARK_OPEN), regex::escape(MARK_CLOSE));
        Regex::new(&pattern).expect("marker fragment pattern is valid")
    })
}

fn placeholder_pattern() -> &'static Regex {
    MARK_PLACEHOLDER
        .get_or_init(|| Regex::new(r"__MARK_PLACEHOLDER_(\d+)__").expect("placeholder pattern is valid"))
}

/// Escapes markup while keeping existing highlight markers live.
///
/// Marker fragments are lifted out and replaced with indexed
/// placeholder tokens, the remainder is escaped once, and the fragments
/// are restored. A placeholder-shaped token already present in the
/// input whose index names no lifted fragment is restored to itself.
pub fn escape_outside_markers(markup: &str) -> String {
    let mut fragments: Vec<String> = Vec::new();
    let stripped = mark_fragment_pattern().replace_all(markup, |caps: &Captures<'_>| {
        let token = format!("__MARK_PLACEHOLDER_{}__", fragments.len());
        fragments.push(caps[0].to_string());
        token
    });
    let escaped = escape_markup(&stripped);
    if fragments.is_empty() {
        return escaped.into_owned();
    }
    placeholder_pattern()
        .replace_all(&escaped, |caps: &Captures<'_>| match caps[1].parse::<usize>() {
            Ok(index) if index < fragments.len() => fragments[index].clone(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}
