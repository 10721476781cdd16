//! BookStack REST API client.
//!
//! Sync HTTP client for the BookStack REST API using API token
//! authentication (`Authorization: Token {id}:{secret}`).

mod pages;

use std::time::Duration;

use kcs_config::BookStackConfig;
use ureq::Agent;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// BookStack REST API client.
pub struct BookStackClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl BookStackClient {
    /// Create client from config values.
    #[must_use]
    pub fn from_config(config: &BookStackConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            auth_header: format!("Token {}:{}", config.token_id, config.token_secret),
        }
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/api", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client(base_url: &str) -> BookStackClient {
        BookStackClient::from_config(&BookStackConfig {
            base_url: base_url.to_owned(),
            token_id: "id".to_owned(),
            token_secret: "secret".to_owned(),
            book_id: 1,
            chapter_id: 0,
        })
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let client = client("https://wiki.example.com/");
        assert_eq!(client.api_url(), "https://wiki.example.com/api");
    }

    #[test]
    fn test_auth_header_format() {
        let client = client("https://wiki.example.com");
        assert_eq!(client.auth_header, "Token id:secret");
    }
}
