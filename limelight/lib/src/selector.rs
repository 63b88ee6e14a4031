//! Scope expression validation.
//!
//! A scope expression is a CSS selector restricting where highlighting
//! may apply. Validation runs on every keystroke in an editing session,
//! so the verdict carries one short, stable message instead of the
//! selector parser's own diagnostics.

use scraper::Selector;
use serde::Serialize;

/// Message reported for every unparseable scope expression.
pub const INVALID_SELECTOR_MESSAGE: &str = "Invalid CSS selector.";

/// Verdict on a scope expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorValidity {
    /// The expression parses, or is blank (no scope requested).
    Valid,
    /// The expression was rejected; `message` is display-ready.
    Invalid { message: String },
}

impl SelectorValidity {
    pub fn is_valid(&self) -> bool {
        matches!(self, SelectorValidity::Valid)
    }

    /// The display message, present only for invalid expressions.
    pub fn message(&self) -> Option<&str> {
        match self {
            SelectorValidity::Valid => None,
            SelectorValidity::Invalid { message } => Some(message),
        }
    }
}

/// Validates a scope expression.
///
/// A blank expression is valid: an empty scope means highlighting is
/// unscoped, not misconfigured. Anything else must parse as a CSS
/// selector.
///
/// ## Examples
///
/// ```
/// use limelight_lib::selector::validate_scope_selector;
///
/// assert!(validate_scope_selector("div.container > p").is_valid());
/// assert!(validate_scope_selector("  ").is_valid());
/// assert!(!validate_scope_selector("p >").is_valid());
/// ```
pub fn validate_scope_selector(expression: &str) -> SelectorValidity {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return SelectorValidity::Valid;
    }
    match Selector::parse(trimmed) {
        Ok(_) => SelectorValidity::Valid,
        Err(error) => {
            tracing::debug!(expression = %trimmed, error = %error, "Rejected scope expression");
            SelectorValidity::Invalid {
                message: INVALID_SELECTOR_MESSAGE.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_selectors_are_valid() {
        for expression in ["p", ".container", "#main-content", "div.a", "[data-x]"] {
            assert!(validate_scope_selector(expression).is_valid(), "{expression}");
        }
    }

    #[test]
    fn test_combinators_and_pseudo_classes_are_valid() {
        assert!(validate_scope_selector("div.container > p:nth-child(2)").is_valid());
    }

    #[test]
    fn test_blank_expressions_are_valid() {
        assert!(validate_scope_selector("").is_valid());
        assert!(validate_scope_selector("   \t").is_valid());
    }

    #[test]
    fn test_broken_expressions_are_invalid() {
        for expression in ["p >", "div[", "..x", ":::"] {
            let verdict = validate_scope_selector(expression);
            assert!(!verdict.is_valid(), "{expression}");
        }
    }

    #[test]
    fn test_invalid_message_is_fixed() {
        let verdict = validate_scope_selector("div >");
        assert_eq!(verdict.message(), Some("Invalid CSS selector."));
    }

    #[test]
    fn test_expression_is_trimmed_before_parsing() {
        assert!(validate_scope_selector("  p  ").is_valid());
    }
}
