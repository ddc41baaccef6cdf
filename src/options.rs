//! Configuration options for conversion.
//!
//! The `Options` struct controls every tunable heuristic of the pipeline:
//! which nodes are pruned, how the main content is chosen, and which cleanup
//! passes run in which order. Three presets reproduce the known pipeline
//! variants; `Options::default()` is [`Preset::Standard`].

use serde::{Deserialize, Serialize};

use crate::normalize::CleanupPass;

/// Named pipeline variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Canonical pass ordering with word tokens kept apart.
    #[default]
    Standard,

    /// Canonical ordering with short-token merging and the final word rejoin.
    Classic,

    /// Extended selector list, alt-text images and line-oriented cleanup.
    SelectorList,
}

/// One entry of the main-content priority list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSelector {
    /// First node in document order matching a CSS selector.
    Css(String),

    /// The node with the longest serialized markup among all `tag` nodes,
    /// provided at least `min_count` of them exist.
    LargestContainer { tag: String, min_count: usize },
}

impl ContentSelector {
    /// Shorthand for [`ContentSelector::Css`].
    #[must_use]
    pub fn css(selector: &str) -> Self {
        Self::Css(selector.to_string())
    }
}

/// How `<img>` elements reach the Markdown renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageMode {
    /// Rendered as Markdown image links.
    #[default]
    Preserve,

    /// Replaced by their alt text; images without alt text vanish.
    AltText,
}

/// Decides whether adjacent word tokens separated by spaces belong together.
///
/// Saved pages collapse block layout into lines, which sometimes leaves a
/// space in the middle of a word. Whether short fragments should be glued to
/// their neighbour is ambiguous, so the choice is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordJoinPolicy {
    /// Tokens stay separated by exactly one space; the final rejoin is skipped.
    #[default]
    KeepSeparated,

    /// A token of at most `max_len` characters is glued to its neighbour, and
    /// the final rejoin merges lowercase continuations that are not stopwords.
    MergeShortTokens { max_len: usize },
}

/// Which heading line qualifies as the document title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRule {
    /// Deepest heading level (count of `#`) accepted.
    pub max_level: usize,

    /// Minimum title length in characters, markers trimmed.
    pub min_chars: usize,

    /// Maximum title length in characters, markers trimmed.
    pub max_chars: usize,
}

impl Default for TitleRule {
    fn default() -> Self {
        Self {
            max_level: 6,
            min_chars: 4,
            max_chars: 99,
        }
    }
}

/// Configuration options for conversion.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// or [`Options::preset`] for standard settings.
///
/// # Example
///
/// ```rust
/// use mhtml2md::{Options, Preset, WordJoinPolicy};
///
/// let options = Options {
///     word_join: WordJoinPolicy::MergeShortTokens { max_len: 2 },
///     ..Options::preset(Preset::SelectorList)
/// };
/// assert!(options.stripped_attributes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Main-content candidates, tried in order. The whole pruned tree is
    /// used when none matches.
    pub selector_priority: Vec<ContentSelector>,

    /// Tag names removed together with their subtrees.
    ///
    /// Default: script, style, meta, link, noscript, header, footer, nav, svg
    pub removed_tags: Vec<String>,

    /// Attributes removed from every remaining node. A trailing `*` makes the
    /// entry a prefix (`aria-*`).
    pub stripped_attributes: Vec<String>,

    /// Image rendering.
    ///
    /// Default: `ImageMode::Preserve`
    pub image_mode: ImageMode,

    /// Unwrap in-page anchors (`href="#..."`) so they render as plain text.
    ///
    /// Default: `true`
    pub skip_internal_links: bool,

    /// Ordered text cleanup chain applied to the rendered Markdown.
    pub cleanup_passes: Vec<CleanupPass>,

    /// Word-spacing policy shared by every word heuristic.
    pub word_join: WordJoinPolicy,

    /// Title heading qualification.
    pub title_rule: TitleRule,

    /// Part delimiter used when the container header declares no boundary.
    ///
    /// Default: `------MultipartBoundary`
    pub boundary_marker: String,

    /// Extension of the container files picked up by a batch run.
    ///
    /// Default: `mhtml`
    pub input_extension: String,

    /// Extension of the Markdown files written by a batch run.
    ///
    /// Default: `md`
    pub output_extension: String,
}

const DEFAULT_REMOVED_TAGS: &[&str] = &[
    "script", "style", "meta", "link", "noscript", "header", "footer", "nav", "svg",
];

const DEFAULT_STRIPPED_ATTRIBUTES: &[&str] = &["class", "style", "id", "aria-*", "data-grz-qa"];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Options {
    /// Builds the options for a named preset.
    #[must_use]
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Standard => Self::standard(),
            Preset::Classic => {
                let mut cleanup_passes = CleanupPass::canonical();
                let title_at = cleanup_passes
                    .iter()
                    .position(|p| *p == CleanupPass::ExtractTitle)
                    .map_or(cleanup_passes.len(), |i| i + 1);
                cleanup_passes.insert(title_at, CleanupPass::QuotedUrlRefs);
                Self {
                    cleanup_passes,
                    word_join: WordJoinPolicy::MergeShortTokens { max_len: 2 },
                    ..Self::standard()
                }
            }
            Preset::SelectorList => Self {
                selector_priority: ["main", "article", ".main-content", "#content", ".article", "#main"]
                    .into_iter()
                    .map(ContentSelector::css)
                    .collect(),
                stripped_attributes: Vec::new(),
                image_mode: ImageMode::AltText,
                skip_internal_links: false,
                cleanup_passes: CleanupPass::selector_list(),
                title_rule: TitleRule {
                    max_level: 2,
                    ..TitleRule::default()
                },
                ..Self::standard()
            },
        }
    }

    fn standard() -> Self {
        Self {
            selector_priority: vec![
                ContentSelector::css("main"),
                ContentSelector::css("article"),
                ContentSelector::LargestContainer {
                    tag: "div".to_string(),
                    min_count: 4,
                },
            ],
            removed_tags: owned(DEFAULT_REMOVED_TAGS),
            stripped_attributes: owned(DEFAULT_STRIPPED_ATTRIBUTES),
            image_mode: ImageMode::Preserve,
            skip_internal_links: true,
            cleanup_passes: CleanupPass::canonical(),
            word_join: WordJoinPolicy::KeepSeparated,
            title_rule: TitleRule::default(),
            boundary_marker: "------MultipartBoundary".to_string(),
            input_extension: "mhtml".to_string(),
            output_extension: "md".to_string(),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::preset(Preset::Standard)
    }
}
