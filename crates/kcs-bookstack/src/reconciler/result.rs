//! Reconciliation results.

use crate::types::Page;

/// Terminal outcome of one reconciliation run.
///
/// Failures travel on the `Result` error channel; every variant here is
/// a successful run and maps to process exit code 0.
#[derive(Debug)]
pub enum Outcome {
    /// The action is not mirrored; no remote call was made.
    Skipped,
    /// A page was created for a newly opened issue.
    Created(Page),
    /// The existing page was updated in place.
    Updated(Page),
    /// The update target was missing; recovered by creating the page.
    Recovered(Page),
}

impl Outcome {
    /// The remote page touched by this run, if any.
    #[must_use]
    pub fn page(&self) -> Option<&Page> {
        match self {
            Self::Skipped => None,
            Self::Created(page) | Self::Updated(page) | Self::Recovered(page) => Some(page),
        }
    }
}
