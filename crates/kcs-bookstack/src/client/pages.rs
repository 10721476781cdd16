//! Page operations for the BookStack API.

use tracing::info;

use super::BookStackClient;
use crate::error::BookStackError;
use crate::types::{Page, PagePayload};

impl BookStackClient {
    /// Create a page in the configured book.
    pub fn create_page(&self, payload: &PagePayload) -> Result<Page, BookStackError> {
        let url = format!("{}/pages", self.api_url());

        info!(
            "Creating page '{}' in book {} (slug {:?})",
            payload.name, payload.book_id, payload.slug
        );

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .send_json(payload)?;

        Self::read_page(response)
    }

    /// Update the page with the given ID.
    pub fn update_page(&self, page_id: u64, payload: &PagePayload) -> Result<Page, BookStackError> {
        let url = format!("{}/pages/{page_id}", self.api_url());

        info!("Updating page {} ('{}')", page_id, payload.name);

        let response = self
            .agent
            .put(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .send_json(payload)?;

        Self::read_page(response)
    }

    /// Parse a page response, capturing the body of error statuses.
    fn read_page(response: ureq::http::Response<ureq::Body>) -> Result<Page, BookStackError> {
        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(BookStackError::Api {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_json()?)
    }
}
