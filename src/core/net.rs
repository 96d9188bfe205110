// src/core/net.rs
// One blocking GET per search. No retries, no cookies.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::{SEARCH_PATH, USER_AGENT};
use crate::error::FetchError;

/// Anything that can turn a URL into a document body.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "GET");
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = resp.text()?;
        debug!(bytes = body.len(), "body read");
        Ok(body)
    }
}

/// `{base}/search/0/0/000/2/{query}`, query percent-encoded (space -> `%20`).
pub fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}{}{}",
        base_url.trim_end_matches('/'),
        SEARCH_PATH,
        urlencoding::encode(query)
    )
}
