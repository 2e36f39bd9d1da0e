//! Suggestion client
//!
//! Suggestion fetches run on a background worker thread so the UI never
//! blocks on the network. The UI talks to the worker through a
//! [`SuggestClient`] handle: requests go out tagged with a request id and a
//! cancellation token, responses come back tagged with the same id.

mod endpoint;
mod handle;
mod http;
mod worker;

use std::future::Future;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::autocomplete::Suggestion;

pub use endpoint::{parse_base_url, search_url, suggest_url};
pub use handle::SuggestClient;
pub use http::HttpSource;
pub use worker::spawn_worker;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned HTTP {0}")]
    Status(u16),

    #[error("Malformed suggestion payload: {0}")]
    Parse(String),

    #[error("Request cancelled")]
    Cancelled,
}

/// Request sent to the worker thread
#[derive(Debug)]
pub struct FetchRequest {
    pub query: String,
    /// Unique ID for this request, used to filter stale responses
    pub request_id: u64,
    pub cancel: CancellationToken,
}

/// Response received from the worker thread
#[derive(Debug)]
pub struct FetchResponse {
    pub request_id: u64,
    pub result: Result<Vec<Suggestion>, FetchError>,
}

/// Anything that can answer a suggestion query
pub trait SuggestionSource: Send + 'static {
    fn fetch(&self, query: &str) -> impl Future<Output = Result<Vec<Suggestion>, FetchError>>;
}
