//! HTTP suggestion source

use std::time::Duration;

use reqwest::Url;

use super::endpoint::suggest_url;
use super::{FetchError, SuggestionSource};
use crate::autocomplete::{Suggestion, parse_suggestions};
use crate::error::FinderError;

/// Fetches suggestions with `GET <base><endpoint>?q=<query>`
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Url,
    endpoint: String,
}

impl HttpSource {
    pub fn new(base_url: Url, endpoint: &str, timeout: Duration) -> Result<Self, FinderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FinderError::Worker(e.to_string()))?;

        Ok(Self::with_client(client, base_url, endpoint))
    }

    pub fn with_client(client: reqwest::Client, base_url: Url, endpoint: &str) -> Self {
        Self {
            client,
            base_url,
            endpoint: endpoint.to_string(),
        }
    }

    pub fn url_for(&self, query: &str) -> Url {
        suggest_url(&self.base_url, &self.endpoint, query)
    }
}

impl SuggestionSource for HttpSource {
    async fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, FetchError> {
        let response = self
            .client
            .get(self.url_for(query))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_suggestions(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
