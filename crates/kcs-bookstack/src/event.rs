//! Issue event model.
//!
//! The CI trigger delivers action and state as raw strings; they are
//! parsed into closed variants once, at the process boundary, so the
//! reconciler's dispatch is exhaustive by construction.

use std::fmt;

/// Action that triggered the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueAction {
    /// Issue was opened.
    Opened,
    /// Issue title or body was edited.
    Edited,
    /// Issue was closed.
    Closed,
    /// Any action this tool does not mirror (labeled, assigned, ...).
    Other(String),
}

impl IssueAction {
    /// Parse the raw action string supplied by the trigger.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "opened" => Self::Opened,
            "edited" => Self::Edited,
            "closed" => Self::Closed,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for IssueAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened => f.write_str("opened"),
            Self::Edited => f.write_str("edited"),
            Self::Closed => f.write_str("closed"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Issue state at the time of the event.
///
/// Anything the tracker does not report as closed counts as open. The
/// status banner is a two-way branch on this, so a future tracker state
/// lands in the open arm rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    /// Issue is open.
    Open,
    /// Issue is closed.
    Closed,
}

impl IssueState {
    /// Parse the raw state string supplied by the trigger.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "closed" {
            Self::Closed
        } else {
            Self::Open
        }
    }
}

/// One issue event, as delivered by the CI trigger.
///
/// Immutable input to a single reconciliation run; nothing here is
/// persisted between runs.
#[derive(Debug, Clone)]
pub struct IssueEvent {
    /// Issue title.
    pub title: String,
    /// Issue body (Markdown).
    pub body: String,
    /// Issue number, unique within the repository.
    pub number: u64,
    /// Issue state at event time.
    pub state: IssueState,
    /// Action that triggered the event.
    pub action: IssueAction,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_known_actions() {
        assert_eq!(IssueAction::parse("opened"), IssueAction::Opened);
        assert_eq!(IssueAction::parse("edited"), IssueAction::Edited);
        assert_eq!(IssueAction::parse("closed"), IssueAction::Closed);
    }

    #[test]
    fn test_parse_unknown_action_keeps_raw() {
        assert_eq!(
            IssueAction::parse("labeled"),
            IssueAction::Other("labeled".to_owned())
        );
    }

    #[test]
    fn test_action_display_round_trips() {
        assert_eq!(IssueAction::parse("edited").to_string(), "edited");
        assert_eq!(IssueAction::parse("milestoned").to_string(), "milestoned");
    }

    #[test]
    fn test_parse_state() {
        assert_eq!(IssueState::parse("closed"), IssueState::Closed);
        assert_eq!(IssueState::parse("open"), IssueState::Open);
        // Unknown states fall into the open arm
        assert_eq!(IssueState::parse("locked"), IssueState::Open);
    }
}
