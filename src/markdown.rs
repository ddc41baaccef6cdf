//! Markdown rendering.
//!
//! Conversion of the reduced markup is delegated to `quick_html2md`. Links are
//! kept, each block becomes one unwrapped line, and characters are passed
//! through as Unicode rather than approximated.

use quick_html2md::{html_to_markdown_with_options, MarkdownOptions};

use crate::options::{ImageMode, Options};

/// Map conversion options onto renderer options.
#[must_use]
pub fn markdown_options(options: &Options) -> MarkdownOptions {
    MarkdownOptions::new()
        .include_links(true)
        .include_images(options.image_mode == ImageMode::Preserve)
        .preserve_tables(true)
}

/// Render reduced markup as raw Markdown text.
///
/// Empty or whitespace-only input renders as an empty string.
#[must_use]
pub fn render(html: &str, options: &Options) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    html_to_markdown_with_options(html, &markdown_options(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_render_as_atx() {
        let md = render("<h1>Title</h1><p>Hello world.</p>", &Options::default());
        assert!(md.contains("# Title"), "{md}");
        assert!(md.contains("Hello world."), "{md}");
    }

    #[test]
    fn links_are_preserved() {
        let md = render(
            r#"<p>See <a href="https://example.com/a">the docs</a>.</p>"#,
            &Options::default(),
        );
        assert!(md.contains("https://example.com/a"), "{md}");
        assert!(md.contains("the docs"), "{md}");
    }

    #[test]
    fn unicode_passes_through() {
        let md = render("<p>Café naïve 中文</p>", &Options::default());
        assert!(md.contains("Café naïve 中文"), "{md}");
    }

    #[test]
    fn long_paragraph_stays_on_one_line() {
        let words = vec!["word"; 60].join(" ");
        let md = render(&format!("<p>{words}</p>"), &Options::default());
        assert!(md.lines().any(|line| line.trim() == words), "{md}");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render("  \n ", &Options::default()), "");
    }
}
