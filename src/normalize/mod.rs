//! Text normalization.
//!
//! The rendered Markdown still carries artifacts of the container format:
//! quoted-printable leftovers, stray `=` signs, CSS fragments and words split
//! by line wrapping. Normalization is an ordered list of [`CleanupPass`]es;
//! each pass is a pure text function in [`passes`], [`words`] or [`title`],
//! and later passes assume the artifacts handled by earlier ones are gone.

pub mod passes;
pub mod title;
pub mod words;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::options::Options;

/// Title used when neither a heading nor a file name is available.
pub const UNTITLED: &str = "Untitled";

/// One named rewrite of the cleanup chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupPass {
    /// `3D"value"` becomes `"value"`.
    MimeQuotedAttributes,
    /// Character references become a single space.
    HtmlEntities,
    /// Tag-shaped text is deleted.
    MarkupTags,
    /// Only well-formed tag shapes (`<a ...>`, `</p>`) are deleted.
    StrictMarkupTags,
    /// `class=` / `style=` through end of line are deleted.
    AttributeFragments,
    /// Quoted `id="..."`, `class="..."`, `style="..."` are deleted.
    QuotedAttributeFragments,
    /// Three or more newlines become two.
    CollapseBlankLines,
    /// Soft-wrap `=` markers at line ends and starts are deleted.
    SoftWraps,
    /// `=` with no word character on either side is deleted.
    StandaloneEquals,
    /// Spaces between word tokens follow the word-join policy.
    WordSpacing,
    /// Line trimming, dropping and in-line `=` repair.
    LineFilter,
    /// Whitespace inside http(s) URLs and around domain dots is closed up.
    UrlRepair,
    /// Spaces inside parenthesized link targets are deleted.
    LinkTargetSpaces,
    /// `(3D"http...")` / `("http...")` leftovers are deleted.
    QuotedUrlRefs,
    /// Lines of 1-6 hex digits are dropped.
    HexFragments,
    /// Whitespace-only lines are dropped.
    BlankLines,
    /// Heading lines with fewer than 4 characters of text are dropped.
    ShortHeadings,
    /// Lines carrying CSS leftovers are dropped.
    CssArtifactLines,
    /// Lines without any word character are dropped.
    SymbolLines,
    /// `=` touching whitespace becomes one space.
    EqualsSpacing,
    /// `[text](target)` becomes `text`.
    FlattenLinks,
    /// Runs of spaces become one space.
    CollapseSpaces,
    /// The first qualifying heading becomes the title.
    ExtractTitle,
    /// Words split by line wrapping are glued back, per the word-join policy.
    RejoinSplitWords,
}

impl CleanupPass {
    /// The canonical chain.
    #[must_use]
    pub fn canonical() -> Vec<Self> {
        vec![
            Self::MimeQuotedAttributes,
            Self::HtmlEntities,
            Self::MarkupTags,
            Self::AttributeFragments,
            Self::CollapseBlankLines,
            Self::SoftWraps,
            Self::StandaloneEquals,
            Self::WordSpacing,
            Self::LineFilter,
            Self::UrlRepair,
            Self::HexFragments,
            Self::ExtractTitle,
            Self::RejoinSplitWords,
        ]
    }

    /// The line-oriented chain used with the extended selector list.
    #[must_use]
    pub fn selector_list() -> Vec<Self> {
        vec![
            Self::MimeQuotedAttributes,
            Self::HtmlEntities,
            Self::LinkTargetSpaces,
            Self::CollapseBlankLines,
            Self::BlankLines,
            Self::ExtractTitle,
            Self::ShortHeadings,
            Self::CssArtifactLines,
            Self::SymbolLines,
            Self::EqualsSpacing,
            Self::QuotedAttributeFragments,
            Self::FlattenLinks,
            Self::StrictMarkupTags,
            Self::WordSpacing,
            Self::CollapseSpaces,
        ]
    }
}

/// Text being normalized, plus the title once a pass has found one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    pub title: Option<String>,
}

impl Draft {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
        }
    }
}

/// Apply one pass to a draft.
pub fn apply(pass: CleanupPass, draft: &mut Draft, options: &Options) {
    let policy = options.word_join;
    let text = draft.text.as_str();

    let rewritten = match pass {
        CleanupPass::MimeQuotedAttributes => passes::mime_quoted_attributes(text),
        CleanupPass::HtmlEntities => passes::html_entities(text),
        CleanupPass::MarkupTags => passes::markup_tags(text),
        CleanupPass::StrictMarkupTags => passes::strict_markup_tags(text),
        CleanupPass::AttributeFragments => passes::attribute_fragments(text),
        CleanupPass::QuotedAttributeFragments => passes::quoted_attribute_fragments(text),
        CleanupPass::CollapseBlankLines => passes::collapse_blank_lines(text),
        CleanupPass::SoftWraps => passes::soft_wraps(text),
        CleanupPass::StandaloneEquals => passes::standalone_equals(text),
        CleanupPass::WordSpacing => words::space_words(text, policy),
        CleanupPass::LineFilter => passes::line_filter(text, policy),
        CleanupPass::UrlRepair => passes::url_repair(text),
        CleanupPass::LinkTargetSpaces => passes::link_target_spaces(text),
        CleanupPass::QuotedUrlRefs => passes::quoted_url_refs(text),
        CleanupPass::HexFragments => passes::hex_fragments(text),
        CleanupPass::BlankLines => passes::blank_lines(text),
        CleanupPass::ShortHeadings => passes::short_headings(text),
        CleanupPass::CssArtifactLines => passes::css_artifact_lines(text),
        CleanupPass::SymbolLines => passes::symbol_lines(text),
        CleanupPass::EqualsSpacing => passes::equals_spacing(text),
        CleanupPass::FlattenLinks => passes::flatten_links(text),
        CleanupPass::CollapseSpaces => passes::collapse_spaces(text),
        CleanupPass::ExtractTitle => {
            if draft.title.is_some() {
                return;
            }
            let (title, rest) = title::extract_title(text, &options.title_rule);
            draft.title = title;
            rest
        }
        CleanupPass::RejoinSplitWords => {
            draft.title = draft
                .title
                .as_deref()
                .map(|t| words::rejoin_split_words(t, policy));
            words::rejoin_split_words(text, policy)
        }
    };

    trace!(?pass, before = draft.text.len(), after = rewritten.len(), "cleanup pass");
    draft.text = rewritten;
}

/// Run a whole chain over rendered Markdown.
///
/// Returns the resolved title and the body lines. The title falls back to
/// `fallback_title`, then to [`UNTITLED`], so it is never empty.
#[must_use]
pub fn normalize(markdown: &str, fallback_title: &str, options: &Options) -> (String, Vec<String>) {
    let mut draft = Draft::new(markdown);
    for pass in &options.cleanup_passes {
        apply(*pass, &mut draft, options);
    }

    let title = draft
        .title
        .filter(|t| !t.trim().is_empty())
        .or_else(|| Some(fallback_title.trim().to_string()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| UNTITLED.to_string());

    let body = draft.text.trim().lines().map(str::to_string).collect();
    (title, body)
}
