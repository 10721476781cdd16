//! BookStack integration: REST client and issue-page reconciliation.
//!
//! This crate mirrors tracker issues into BookStack pages. Each issue
//! maps to one page: the page name is the issue title, the page HTML is
//! the rendered issue body followed by a status banner, and the page is
//! addressed by the issue-number convention (see [`page_id_for_issue`]).
//!
//! The [`PageReconciler`] decides between create and update from the
//! event action and recovers from a missing update target with a single
//! fallback create, giving upsert semantics over the two non-idempotent
//! API primitives.

mod client;
mod error;
mod event;
mod reconciler;
mod types;

pub use client::BookStackClient;
pub use error::BookStackError;
pub use event::{IssueAction, IssueEvent, IssueState};
pub use reconciler::{
    Intent, Outcome, PageReconciler, issue_slug, page_id_for_issue, render_page_html,
};
pub use types::{Page, PagePayload};
