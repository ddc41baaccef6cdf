//! Main-content selection.
//!
//! Candidates are tried in priority order and the first hit wins. The
//! largest-container rule is a best-effort guess: it picks the biggest block
//! by serialized size, which is usually, not always, the article.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::options::ContentSelector;

/// Which rule produced the chosen node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selected {
    /// Matched the selector at this index of the priority list.
    Rule(usize),

    /// Nothing matched; the whole pruned tree is used.
    WholeTree,
}

/// Resolve one selector against the document.
#[must_use]
pub fn query<'a>(doc: &'a Document, selector: &ContentSelector) -> Option<Selection<'a>> {
    match selector {
        ContentSelector::Css(css) => doc
            .try_select(css)
            .and_then(|matched| dom::each(&matched).into_iter().next()),
        ContentSelector::LargestContainer { tag, min_count } => {
            let candidates = dom::each(&doc.try_select(tag)?);
            if candidates.len() < *min_count {
                return None;
            }
            largest(candidates)
        }
    }
}

/// Node with the longest serialized markup; the earliest wins a tie.
fn largest(candidates: Vec<Selection<'_>>) -> Option<Selection<'_>> {
    let mut best: Option<(Selection<'_>, usize)> = None;
    for candidate in candidates {
        let len = dom::outer_html(&candidate).chars().count();
        if best.as_ref().is_none_or(|(_, best_len)| len > *best_len) {
            best = Some((candidate, len));
        }
    }
    best.map(|(sel, _)| sel)
}

/// Find the main content of a pruned document.
///
/// Returns the chosen node, or the `<body>` when no selector matches,
/// together with the rule that decided.
#[must_use]
pub fn find_main_content<'a>(
    doc: &'a Document,
    priority: &[ContentSelector],
) -> (Selection<'a>, Selected) {
    for (index, selector) in priority.iter().enumerate() {
        if let Some(sel) = query(doc, selector) {
            debug!(?selector, "main content selected");
            return (sel, Selected::Rule(index));
        }
    }

    debug!("no main-content selector matched, using whole tree");
    (dom::body(doc), Selected::WholeTree)
}

/// Markup of a found main-content node: the node itself for a rule match,
/// only its children for the whole-tree fallback.
#[must_use]
pub fn serialize(sel: &Selection, selected: &Selected) -> String {
    match selected {
        Selected::Rule(_) => dom::outer_html(sel).to_string(),
        Selected::WholeTree => dom::inner_html(sel).to_string(),
    }
}

/// [`find_main_content`] followed by [`serialize`].
#[must_use]
pub fn select_main_content(doc: &Document, priority: &[ContentSelector]) -> (String, Selected) {
    let (sel, selected) = find_main_content(doc, priority);
    (serialize(&sel, &selected), selected)
}
