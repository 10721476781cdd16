//! Issue-page reconciliation.
//!
//! The [`PageReconciler`] ensures exactly one BookStack page mirrors a
//! given issue:
//!
//! 1. Compose the page HTML (title heading, rendered body, status banner)
//! 2. Plan the remote operation from the event action
//! 3. Perform the call; on a 404 during an update, fall back to a single
//!    create with the deterministic slug
//!
//! At most two remote calls happen per run, and an unrecognized action
//! is a successful no-op.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use kcs_bookstack::{BookStackClient, IssueAction, IssueEvent, IssueState, PageReconciler};
//! use kcs_config::BookStackConfig;
//!
//! let config = BookStackConfig {
//!     base_url: "https://wiki.example.com".into(),
//!     token_id: "id".into(),
//!     token_secret: "secret".into(),
//!     book_id: 7,
//!     chapter_id: 12,
//! };
//! let client = BookStackClient::from_config(&config);
//! let reconciler = PageReconciler::new(&client, config.book_id, config.chapter_id);
//!
//! let event = IssueEvent {
//!     title: "Printer jam".into(),
//!     body: "Paper stuck".into(),
//!     number: 42,
//!     state: IssueState::Open,
//!     action: IssueAction::Opened,
//! };
//! let outcome = reconciler.reconcile(&event)?;
//! # Ok(())
//! # }
//! ```

mod compose;
mod executor;
mod result;

pub use compose::render_page_html;
pub use executor::{Intent, PageReconciler, issue_slug, page_id_for_issue};
pub use result::Outcome;
