//! Page HTML composition.

use kcs_renderer::render_markdown;

use crate::event::IssueState;

/// Banner appended to pages mirroring open issues.
const ACTIVE_BANNER: &str = "<hr><h2>Status: active</h2>";

/// Banner appended to pages mirroring closed issues.
const CLOSED_BANNER: &str = "<hr><h2>Status: closed / resolved</h2>\
    <p>The mirrored issue has been closed. This page is kept for \
    reference and no longer tracks an open issue.</p>";

/// Compose the full page HTML for a mirrored issue.
///
/// The page always consists of an `<h1>` with the literal issue title,
/// the rendered Markdown body unmodified, and exactly one status banner
/// selected by `state`. The title is interpolated as-is, markup
/// included, so a title containing HTML ends up as HTML in the page.
#[must_use]
pub fn render_page_html(title: &str, body_md: &str, state: IssueState) -> String {
    let mut html = format!("<h1>{title}</h1>");
    html.push_str(&render_markdown(body_md));
    html.push_str(match state {
        IssueState::Closed => CLOSED_BANNER,
        IssueState::Open => ACTIVE_BANNER,
    });
    html
}
