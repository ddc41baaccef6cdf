//! HTML Processing and Pruning
//!
//! The markup reducer: parses the body region of the chosen section, deletes
//! non-content subtrees and presentation attributes, picks the main-content
//! node and serializes it for the Markdown renderer.

use tracing::debug;

use crate::dom::{self, Document};
use crate::options::{ImageMode, Options};
use crate::patterns::MARKUP_COMMENT;
use crate::selector;

// === Document Cleaning Functions ===

/// Remove every element named in `tags`, subtree included.
pub fn remove_non_content(doc: &Document, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    let combined = tags.join(", ");
    let Some(matched) = doc.try_select(&combined) else {
        debug!(selector = %combined, "no non-content elements matched");
        return;
    };
    debug!(count = matched.length(), "removing non-content elements");
    dom::remove(&matched);
}

/// True when `name` is covered by one of the `patterns`.
///
/// A pattern ending in `*` matches by prefix, anything else matches exactly
/// (ASCII case-insensitive).
#[must_use]
pub fn attribute_matches(name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| match pattern.strip_suffix('*') {
        Some(prefix) => name
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
        None => name.eq_ignore_ascii_case(pattern),
    })
}

/// Strip presentation attributes from every element in the tree.
pub fn strip_presentation_attributes(doc: &Document, patterns: &[String]) {
    if patterns.is_empty() {
        return;
    }
    for element in dom::each(&doc.select("*")) {
        for name in dom::attribute_names(&element) {
            if attribute_matches(&name, patterns) {
                dom::remove_attribute(&element, &name);
            }
        }
    }
}

/// Replace in-page anchors (`href="#..."`) with their content.
pub fn unwrap_internal_links(doc: &Document) {
    for anchor in dom::each(&doc.select(r##"a[href^="#"]"##)) {
        let inner = dom::inner_html(&anchor).to_string();
        dom::replace_with_html(&anchor, &inner);
    }
}

/// Replace each `<img>` with its alt text; images without one are dropped.
pub fn images_to_alt_text(doc: &Document) {
    for image in dom::each(&doc.select("img")) {
        let alt = dom::get_attribute(&image, "alt").unwrap_or_default();
        let alt = alt.trim();
        if alt.is_empty() {
            dom::remove(&image);
        } else {
            dom::replace_with_html(&image, &escape_text(alt));
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Delete markup comments, matched non-greedily.
#[must_use]
pub fn strip_comments(html: &str) -> String {
    MARKUP_COMMENT.replace_all(html, "").into_owned()
}

/// Reduce a body region to the serialized main-content markup.
///
/// Pruning happens first, so the main-content rules only ever see the
/// pruned tree.
#[must_use]
pub fn reduce(body: &str, options: &Options) -> String {
    let doc = dom::parse(body);

    remove_non_content(&doc, &options.removed_tags);
    strip_presentation_attributes(&doc, &options.stripped_attributes);

    let (main, selected) = selector::find_main_content(&doc, &options.selector_priority);

    if options.skip_internal_links {
        unwrap_internal_links(&doc);
    }
    if options.image_mode == ImageMode::AltText {
        images_to_alt_text(&doc);
    }

    let html = selector::serialize(&main, &selected);
    debug!(?selected, len = html.len(), "reduced markup");
    strip_comments(&html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Preset;

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn removes_default_non_content_tags() {
        let html = r#"<header>Site</header><nav>Menu</nav><script>var x;</script>
            <style>p{}</style><noscript>Enable JS</noscript><svg><path/></svg>
            <p>Body text</p><footer>Copyright</footer>"#;
        let out = reduce(html, &Options::default());
        assert!(out.contains("Body text"));
        for gone in ["Site", "Menu", "var x", "p{}", "Enable JS", "<svg", "Copyright"] {
            assert!(!out.contains(gone), "{gone} should be removed: {out}");
        }
    }

    #[test]
    fn strips_presentation_attributes_everywhere() {
        let html = r#"<main class="wrap" id="m"><p style="color:red" aria-label="x" data-grz-qa="y" title="keep">Text</p></main>"#;
        let out = reduce(html, &Options::default());
        assert_eq!(out, r#"<main><p title="keep">Text</p></main>"#);
    }

    #[test]
    fn pruned_tree_keeps_no_aria_attributes_or_head_nodes() {
        let html = r#"<main><meta name="viewport" content="x"><link rel="stylesheet" href="s.css"><p aria-hidden="true" aria-describedby="x" data-track="1">Text</p></main>"#;
        let out = reduce(html, &Options::default());
        assert_eq!(out, r#"<main><p data-track="1">Text</p></main>"#);
        for gone in ["aria-", "<meta", "<link"] {
            assert!(!out.contains(gone), "{gone} should be gone: {out}");
        }
    }

    #[test]
    fn prefix_patterns_match_attribute_families() {
        let list = patterns(&["aria-*", "id"]);
        assert!(attribute_matches("aria-hidden", &list));
        assert!(attribute_matches("ID", &list));
        assert!(!attribute_matches("identity", &list));
        assert!(!attribute_matches("ari", &list));
    }

    #[test]
    fn selector_list_preset_keeps_ids_for_lookup() {
        let html = r#"<div>nav-ish</div><div id="content"><p>Real text</p></div>"#;
        let out = reduce(html, &Options::preset(Preset::SelectorList));
        assert!(out.starts_with(r#"<div id="content">"#));
        assert!(!out.contains("nav-ish"));
    }

    #[test]
    fn images_become_alt_text_when_requested() {
        let html = r#"<main><img src="a.png" alt="A chart"><img src="b.png"><p>After</p></main>"#;
        let out = reduce(html, &Options::preset(Preset::SelectorList));
        assert!(out.contains("A chart"));
        assert!(!out.contains("<img"));

        let kept = reduce(html, &Options::default());
        assert!(kept.contains(r#"src="a.png""#));
    }

    #[test]
    fn internal_anchors_are_unwrapped() {
        let html = r##"<main><a href="#sec-2">Jump</a> <a href="https://example.com">Out</a></main>"##;
        let out = reduce(html, &Options::default());
        assert!(out.contains("Jump"));
        assert!(!out.contains("#sec-2"));
        assert!(out.contains(r#"href="https://example.com""#));
    }

    #[test]
    fn comments_are_stripped_non_greedily() {
        assert_eq!(strip_comments("a<!-- one -->b<!--\ntwo\n-->c"), "abc");
    }

    #[test]
    fn empty_tag_list_is_a_no_op() {
        let doc = dom::parse("<nav>stay</nav>");
        remove_non_content(&doc, &[]);
        assert!(dom::inner_html(&dom::body(&doc)).contains("stay"));
    }
}
