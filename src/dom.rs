//! Tree adapter.
//!
//! Thin named wrappers over the `dom_query` crate, so the reducer reads as a
//! sequence of tree edits rather than raw selection plumbing.

pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Parse markup into a document.
///
/// Fragments are wrapped in `<html><body>` by the parser, so the original
/// content is always reachable through [`body`].
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The `<body>` element of a parsed document.
#[inline]
#[must_use]
pub fn body(doc: &Document) -> Selection<'_> {
    doc.select("body")
}

/// Value of an attribute on the first node, if present.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Names of all attributes on the first node of a selection.
#[must_use]
pub fn attribute_names(sel: &Selection) -> Vec<String> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| attr.name.local.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Drop one attribute from every node of the selection.
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Detach the selected nodes, subtrees included.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Swap the selected nodes for parsed markup.
#[inline]
pub fn replace_with_html(sel: &Selection, html: &str) {
    sel.replace_with_html(html);
}

/// Serialized children of the first node.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Serialized first node, its own tag included.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Each node of a selection as its own single-node selection, in document
/// order.
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().cloned().map(Selection::from).collect()
}
