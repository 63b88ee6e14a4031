//! Output shaping for the `lime` binary.

use color_eyre::eyre::Result;
use limelight_lib::{line_container_count, RenderReport, RenderStrategy, SelectorValidity};
use serde::Serialize;

/// JSON payload for `--json`.
#[derive(Serialize)]
struct RenderOutcome<'a> {
    strategy: RenderStrategy,
    marker_count: usize,
    line_count: usize,
    selector: SelectorOutcome<'a>,
    html: &'a str,
}

#[derive(Serialize)]
struct SelectorOutcome<'a> {
    expression: &'a str,
    valid: bool,
    message: Option<&'a str>,
}

/// Serializes a rendering report, plus the selector verdict it ran
/// under, as pretty-printed JSON.
pub fn render_outcome_json(
    report: &RenderReport,
    selector_expression: &str,
    validity: &SelectorValidity,
) -> Result<String> {
    let outcome = RenderOutcome {
        strategy: report.strategy,
        marker_count: report.marker_count,
        line_count: line_container_count(&report.html),
        selector: SelectorOutcome {
            expression: selector_expression,
            valid: validity.is_valid(),
            message: validity.message(),
        },
        html: &report.html,
    };
    Ok(serde_json::to_string_pretty(&outcome)?)
}

/// Wraps a rendered fragment in a standalone dark page.
///
/// The fragment carries its marker and line-container class names; this
/// stylesheet renders them without any CSS framework present.
pub fn standalone_page(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>limelight preview</title>
<style>
  body {{ margin: 0; background: #0f172a; color: #cbd5e1; }}
  pre {{ margin: 0; padding: 1rem; font: 0.875rem/1.45 ui-monospace, monospace; white-space: pre-wrap; }}
  .line {{ display: block; min-height: 1.25em; }}
  mark {{ background: rgba(6, 182, 212, 0.3); color: #67e8f9; padding: 0 0.125em; border-radius: 0.125em; }}
</style>
</head>
<body>
<pre><code>{fragment}</code></pre>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use limelight_lib::{render_report, validate_scope_selector};

    #[test]
    fn test_json_outcome_reports_the_selector_verdict() {
        let validity = validate_scope_selector("p >");
        let report = render_report("<p>alpha</p>", "alpha", "p >", validity.is_valid());
        let json = render_outcome_json(&report, "p >", &validity).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["strategy"], "plain");
        assert_eq!(value["selector"]["valid"], false);
        assert_eq!(value["selector"]["message"], "Invalid CSS selector.");
        assert_eq!(value["line_count"], 1);
    }

    #[test]
    fn test_page_embeds_the_fragment_once() {
        let page = standalone_page("<span class=\"line\">x</span>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert_eq!(page.matches("<span class=\"line\">x</span>").count(), 1);
        assert!(page.contains(".line { display: block;"));
    }
}
