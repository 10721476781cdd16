//! Page reconciliation implementation.

use tracing::{info, warn};

use crate::client::BookStackClient;
use crate::error::BookStackError;
use crate::event::{IssueAction, IssueEvent};
use crate::types::PagePayload;

use super::compose::render_page_html;
use super::result::Outcome;

/// Slug prefix for mirrored issue pages.
const SLUG_PREFIX: &str = "kcs-issue-";

/// Deterministic slug for the page mirroring an issue.
#[must_use]
pub fn issue_slug(number: u64) -> String {
    format!("{SLUG_PREFIX}{number}")
}

/// Page ID assumed for an issue.
///
/// This is a convention, not a guarantee: BookStack assigns page IDs
/// itself, and they line up with issue numbers only while pages in the
/// target book are created through this tool. A page created by hand
/// can break the mapping; the 404 fallback in
/// [`PageReconciler::reconcile`] is what keeps the mirror converging
/// when the assumed ID does not exist.
#[must_use]
pub fn page_id_for_issue(number: u64) -> u64 {
    number
}

/// Intended remote operation for one event, before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// POST to the page collection, with a deterministic slug.
    Create {
        /// Slug for the new page.
        slug: String,
    },
    /// PUT to the page addressed by the issue-number convention.
    Update {
        /// Assumed page ID.
        page_id: u64,
    },
}

/// Mirrors one issue event onto its BookStack page.
///
/// Performs at most two remote calls per run: the planned create or
/// update, plus a single fallback create when an update hits a missing
/// page. Nothing is retried beyond that.
pub struct PageReconciler<'a> {
    client: &'a BookStackClient,
    book_id: u64,
    chapter_id: u64,
}

impl<'a> PageReconciler<'a> {
    /// Create a reconciler targeting one book and chapter.
    #[must_use]
    pub fn new(client: &'a BookStackClient, book_id: u64, chapter_id: u64) -> Self {
        Self {
            client,
            book_id,
            chapter_id,
        }
    }

    /// Decide the remote operation for an event, without performing it.
    ///
    /// Returns `None` for actions this tool does not mirror; such a run
    /// is a successful no-op, not an error.
    #[must_use]
    pub fn plan(action: &IssueAction, number: u64) -> Option<Intent> {
        match action {
            IssueAction::Opened => Some(Intent::Create {
                slug: issue_slug(number),
            }),
            IssueAction::Edited | IssueAction::Closed => Some(Intent::Update {
                page_id: page_id_for_issue(number),
            }),
            IssueAction::Other(_) => None,
        }
    }

    /// Ensure the wiki page for `event` exists and mirrors its content.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`BookStackError`] when the planned call
    /// fails for any reason other than a missing update target, or when
    /// the fallback create fails too.
    pub fn reconcile(&self, event: &IssueEvent) -> Result<Outcome, BookStackError> {
        let Some(intent) = Self::plan(&event.action, event.number) else {
            info!(
                "No page operation for action '{}' on issue #{}, skipping",
                event.action, event.number
            );
            return Ok(Outcome::Skipped);
        };

        let mut payload = PagePayload {
            name: event.title.clone(),
            html: render_page_html(&event.title, &event.body, event.state),
            book_id: self.book_id,
            chapter_id: self.chapter_id,
            slug: None,
        };

        match intent {
            Intent::Create { slug } => {
                payload.slug = Some(slug);
                let page = self.client.create_page(&payload)?;
                Ok(Outcome::Created(page))
            }
            Intent::Update { page_id } => match self.client.update_page(page_id, &payload) {
                Ok(page) => Ok(Outcome::Updated(page)),
                Err(err) if is_missing_page(&err) => {
                    warn!("Page {page_id} not found, falling back to create");
                    payload.slug = Some(issue_slug(event.number));
                    let page = self.client.create_page(&payload)?;
                    Ok(Outcome::Recovered(page))
                }
                Err(err) => Err(err),
            },
        }
    }
}

/// Whether an update failure means the target page does not exist.
///
/// Only a 404 triggers the fallback create; any other failure,
/// transport errors included, is terminal.
fn is_missing_page(err: &BookStackError) -> bool {
    matches!(err, BookStackError::Api { status: 404, .. })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_issue_slug_derivation() {
        assert_eq!(issue_slug(42), "kcs-issue-42");
        assert_eq!(issue_slug(0), "kcs-issue-0");
    }

    #[test]
    fn test_page_id_convention_is_identity() {
        assert_eq!(page_id_for_issue(99), 99);
    }

    #[test]
    fn test_plan_opened_creates_with_slug() {
        let intent = PageReconciler::plan(&IssueAction::Opened, 42);
        assert_eq!(
            intent,
            Some(Intent::Create {
                slug: "kcs-issue-42".to_owned()
            })
        );
    }

    #[test]
    fn test_plan_edited_updates_by_issue_number() {
        let intent = PageReconciler::plan(&IssueAction::Edited, 42);
        assert_eq!(intent, Some(Intent::Update { page_id: 42 }));
    }

    #[test]
    fn test_plan_closed_updates_by_issue_number() {
        let intent = PageReconciler::plan(&IssueAction::Closed, 99);
        assert_eq!(intent, Some(Intent::Update { page_id: 99 }));
    }

    #[test]
    fn test_plan_other_action_is_noop() {
        let action = IssueAction::Other("labeled".to_owned());
        assert_eq!(PageReconciler::plan(&action, 42), None);
    }

    #[test]
    fn test_missing_page_is_404_only() {
        let not_found = BookStackError::Api {
            status: 404,
            body: "{\"error\":\"Page not found\"}".to_owned(),
        };
        assert!(is_missing_page(&not_found));

        let server_error = BookStackError::Api {
            status: 500,
            body: "boom".to_owned(),
        };
        assert!(!is_missing_page(&server_error));

        let forbidden = BookStackError::Api {
            status: 403,
            body: "no".to_owned(),
        };
        assert!(!is_missing_page(&forbidden));
    }
}
