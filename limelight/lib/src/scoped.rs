//! Scope-restricted highlighting over parsed markup.
//!
//! The plain strategy works on flat text; this is the structural one.
//! The input is parsed into a DOM, the scope selector picks an element
//! set, and query matches inside those elements' text nodes are wrapped
//! in highlight markers. Text outside the selected elements is never
//! marked.
//!
//! ## Trade-offs
//!
//! Parsing with a browser-grade HTML parser means byte offsets into
//! the original input are not available, and the output is a
//! re-serialization of the repaired tree: implied `<html>`/`<head>`/
//! `<body>` wrappers, decoded entities, and normalized attributes land
//! in it. Matched text is spliced at serialization time instead of by
//! mutating the tree: a replacement map keyed by text-node id carries
//! the literal and matched runs, and a node already recorded by an
//! enclosing selected element is not recorded again, so overlapping
//! selections cannot nest markers.

use std::collections::HashMap;

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{HighlightError, Result};
use crate::escape::escape_markup;
use crate::matcher::{escape_outside_markers, QueryMatcher, TextPiece, MARK_CLOSE, MARK_OPEN};

/// Elements whose text content is never marked.
const SKIPPED_PARENTS: [&str; 2] = ["script", "style"];

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Highlights query matches inside the elements `scope_expression` selects.
///
/// The result is escaped exactly once, with the highlight markers as the
/// only live markup in it. When the selector matches no element, or the
/// selected elements contain no occurrence of the query, the input comes
/// back plainly escaped instead of re-serialized.
///
/// # Errors
///
/// Returns [`HighlightError::InvalidSelector`] when `scope_expression`
/// does not parse as a CSS selector.
pub fn highlight_scoped(markup: &str, query: &str, scope_expression: &str) -> Result<String> {
    let selector = Selector::parse(scope_expression)
        .map_err(|_| HighlightError::InvalidSelector(scope_expression.to_string()))?;
    let Some(matcher) = QueryMatcher::new(query) else {
        return Ok(escape_markup(markup).into_owned());
    };

    let document = Html::parse_document(markup);
    if !document.errors.is_empty() {
        tracing::trace!(repairs = document.errors.len(), "Markup was repaired during parsing");
    }

    let mut replacements: HashMap<NodeId, Vec<TextPiece>> = HashMap::new();
    for element in document.select(&selector) {
        collect_replacements(element, &matcher, &mut replacements);
    }
    tracing::debug!(
        scope = %scope_expression,
        text_nodes = replacements.len(),
        "Collected scoped matches"
    );
    if replacements.is_empty() {
        return Ok(escape_markup(markup).into_owned());
    }

    let mut serialized = String::with_capacity(markup.len() + MARK_OPEN.len() * replacements.len());
    serialize_node(document.tree.root(), &replacements, &mut serialized);
    Ok(escape_outside_markers(&serialized))
}

/// Records literal/matched runs for every markable text node under `element`.
fn collect_replacements(
    element: ElementRef<'_>,
    matcher: &QueryMatcher,
    replacements: &mut HashMap<NodeId, Vec<TextPiece>>,
) {
    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        if replacements.contains_key(&node.id()) || has_skipped_parent(&node) {
            continue;
        }
        if let Some(pieces) = matcher.split_matches(text) {
            replacements.insert(node.id(), pieces);
        }
    }
}

/// Text directly inside `<script>` or `<style>` keeps its raw meaning.
fn has_skipped_parent(node: &NodeRef<'_, Node>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    match parent.value().as_element() {
        Some(element) => SKIPPED_PARENTS
            .iter()
            .any(|name| element.name().eq_ignore_ascii_case(name)),
        None => false,
    }
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| name.eq_ignore_ascii_case(void))
}

/// Writes `node` and its subtree as markup, splicing the recorded runs
/// into their text nodes.
fn serialize_node(
    node: NodeRef<'_, Node>,
    replacements: &HashMap<NodeId, Vec<TextPiece>>,
    out: &mut String,
) {
    match node.value() {
        Node::Document | Node::Fragment => {
            for child in node.children() {
                serialize_node(child, replacements, out);
            }
        }
        Node::Doctype(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype.name());
            out.push('>');
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Text(text) => match replacements.get(&node.id()) {
            Some(pieces) => {
                for piece in pieces {
                    match piece {
                        TextPiece::Literal(run) => out.push_str(run),
                        TextPiece::Match(run) => {
                            // The escape pass skips marker interiors, so
                            // matched runs are escaped here.
                            out.push_str(MARK_OPEN);
                            out.push_str(&escape_markup(run));
                            out.push_str(MARK_CLOSE);
                        }
                    }
                }
            }
            None => out.push_str(text),
        },
        Node::Element(element) => {
            out.push('<');
            out.push_str(element.name());
            for (name, value) in element.attrs() {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(value);
                out.push('"');
            }
            out.push('>');
            if is_void(element.name()) {
                return;
            }
            for child in node.children() {
                serialize_node(child, replacements, out);
            }
            out.push_str("</");
            out.push_str(element.name());
            out.push('>');
        }
        Node::ProcessingInstruction(instruction) => {
            out.push_str("<?");
            out.push_str(&instruction.target);
            out.push(' ');
            out.push_str(&instruction.data);
            out.push_str("?>");
        }
    }
}
