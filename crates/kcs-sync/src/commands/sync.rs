//! `kcs-sync sync` command implementation.

use std::path::PathBuf;

use clap::Args;
use kcs_bookstack::{
    BookStackClient, Intent, IssueAction, IssueEvent, IssueState, Outcome, Page, PageReconciler,
    issue_slug,
};
use kcs_config::{BookStackConfig, CliSettings, Config};
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sync command.
///
/// Event fields default to the `ISSUE_*` environment variables so the
/// command can run straight from a CI trigger without flag plumbing.
#[derive(Args)]
pub(crate) struct SyncArgs {
    /// Event action (opened, edited, closed, ...).
    #[arg(long, env = "ISSUE_ACTION")]
    action: String,

    /// Issue number.
    #[arg(long, env = "ISSUE_NUMBER")]
    number: u64,

    /// Issue title.
    #[arg(long, env = "ISSUE_TITLE")]
    title: String,

    /// Issue body as Markdown.
    #[arg(long, env = "ISSUE_BODY", default_value = "")]
    body: String,

    /// Read the issue body from a file instead of --body.
    #[arg(long, conflicts_with = "body")]
    body_file: Option<PathBuf>,

    /// Issue state (open or closed).
    #[arg(long, env = "ISSUE_STATE", default_value = "open")]
    state: String,

    /// BookStack base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Target book ID (overrides config).
    #[arg(long)]
    book_id: Option<u64>,

    /// Target chapter ID (overrides config).
    #[arg(long)]
    chapter_id: Option<u64>,

    /// Preview the planned request without calling BookStack.
    #[arg(long)]
    dry_run: bool,

    /// Path to configuration file (default: auto-discover kcs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl SyncArgs {
    /// Execute the sync command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is missing or invalid, or if
    /// the reconciliation fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base_url: self.base_url.clone(),
            book_id: self.book_id,
            chapter_id: self.chapter_id,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let bookstack = require_bookstack_config(&config, &output)?;

        let event = self.build_event()?;
        info!(
            "Syncing issue #{} ('{}', action {}) to {}",
            event.number, event.title, event.action, bookstack.base_url
        );

        if self.dry_run {
            print_dry_run(&output, &event);
            return Ok(());
        }

        let client = BookStackClient::from_config(bookstack);
        let reconciler = PageReconciler::new(&client, bookstack.book_id, bookstack.chapter_id);
        let outcome = reconciler.reconcile(&event)?;
        print_outcome(&output, &outcome);

        Ok(())
    }

    /// Assemble the issue event from flags/environment.
    fn build_event(&self) -> Result<IssueEvent, CliError> {
        let body = match &self.body_file {
            Some(path) => std::fs::read_to_string(path)?,
            None => self.body.clone(),
        };

        Ok(IssueEvent {
            title: self.title.clone(),
            body,
            number: self.number,
            state: IssueState::parse(&self.state),
            action: IssueAction::parse(&self.action),
        })
    }
}

fn require_bookstack_config<'a>(
    config: &'a Config,
    output: &Output,
) -> Result<&'a BookStackConfig, CliError> {
    config.require_bookstack().map_err(|err| {
        output.error("Error: bookstack configuration required in kcs.toml");
        output.info("\nAdd the following to your kcs.toml:");
        output.info("\n[bookstack]");
        output.info(r#"base_url = "https://wiki.example.com""#);
        output.info(r#"token_id = "${BOOKSTACK_TOKEN_ID}""#);
        output.info(r#"token_secret = "${BOOKSTACK_TOKEN_SECRET}""#);
        output.info("book_id = 1");
        CliError::from(err)
    })
}

fn print_dry_run(output: &Output, event: &IssueEvent) {
    output.highlight("\n[DRY RUN] No changes made.");

    match PageReconciler::plan(&event.action, event.number) {
        Some(Intent::Create { slug }) => {
            output.info(&format!("Would POST /api/pages (slug: {slug})"));
        }
        Some(Intent::Update { page_id }) => {
            output.info(&format!("Would PUT /api/pages/{page_id}"));
            output.info(&format!(
                "On 404, would POST /api/pages (slug: {})",
                issue_slug(event.number)
            ));
        }
        None => {
            output.info(&format!(
                "Action '{}' is not mirrored; nothing to do.",
                event.action
            ));
        }
    }
}

fn print_outcome(output: &Output, outcome: &Outcome) {
    match outcome {
        Outcome::Skipped => {
            output.success("\nNothing to do for this action.");
        }
        Outcome::Created(page) => {
            output.success("\nPage created successfully!");
            print_page(output, page);
        }
        Outcome::Updated(page) => {
            output.success("\nPage updated successfully!");
            print_page(output, page);
        }
        Outcome::Recovered(page) => {
            output.warning("\nUpdate target was missing; page created instead.");
            print_page(output, page);
        }
    }
}

fn print_page(output: &Output, page: &Page) {
    output.info(&format!("ID: {}", page.id));
    output.info(&format!("Name: {}", page.name));
    if let Some(slug) = &page.slug {
        output.info(&format!("Slug: {slug}"));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> SyncArgs {
        SyncArgs {
            action: "closed".to_owned(),
            number: 99,
            title: "Printer jam".to_owned(),
            body: "Paper stuck".to_owned(),
            body_file: None,
            state: "closed".to_owned(),
            base_url: None,
            book_id: None,
            chapter_id: None,
            dry_run: false,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_build_event_from_flags() {
        let event = args().build_event().unwrap();
        assert_eq!(event.number, 99);
        assert_eq!(event.title, "Printer jam");
        assert_eq!(event.body, "Paper stuck");
        assert_eq!(event.state, IssueState::Closed);
        assert_eq!(event.action, IssueAction::Closed);
    }

    #[test]
    fn test_build_event_unknown_action() {
        let event = SyncArgs {
            action: "labeled".to_owned(),
            ..args()
        }
        .build_event()
        .unwrap();
        assert_eq!(event.action, IssueAction::Other("labeled".to_owned()));
    }

    #[test]
    fn test_build_event_missing_body_file_errors() {
        let result = SyncArgs {
            body_file: Some(PathBuf::from("/nonexistent/body.md")),
            ..args()
        }
        .build_event();
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
