//! Markdown to HTML rendering for mirrored issue pages.
//!
//! Issue bodies arrive as GitHub-flavored Markdown. This crate converts
//! them to plain HTML suitable for the BookStack page editor, with GFM
//! extensions (tables, strikethrough, task lists) enabled.
//!
//! The conversion is intentionally unmodified pass-through: no
//! sanitization, no truncation. An empty body renders to an empty
//! string.

use pulldown_cmark::{Options, Parser, html};

/// Convert Markdown text to HTML.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(markdown, options);

    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, parser);
    output
}
