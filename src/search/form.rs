use std::time::{Duration, Instant};

use reqwest::Url;

use crate::autocomplete::Debouncer;
use crate::client::search_url;
use crate::codes::{SearchInputError, SearchType, detect_search_type};

/// Codes offered as one-key examples
pub const EXAMPLE_CODES: [&str; 3] = ["SBIN0001414", "HDFC0000001", "400002002"];

/// Delay between filling an example code and submitting it
pub const EXAMPLE_SUBMIT_DELAY: Duration = Duration::from_millis(500);

/// A submitted search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: String,
    pub search_type: SearchType,
    pub url: Url,
}

#[derive(Debug)]
pub struct SearchForm {
    base_url: Url,
    outcome: Option<SearchOutcome>,
    pending_example: Debouncer<String>,
}

impl SearchForm {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            outcome: None,
            pending_example: Debouncer::new(EXAMPLE_SUBMIT_DELAY),
        }
    }

    /// Submit `query`. Only an empty term is rejected.
    pub fn submit(&mut self, query: &str) -> Result<&SearchOutcome, SearchInputError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchInputError::Empty);
        }

        self.pending_example.cancel();
        let search_type = detect_search_type(query);
        let url = search_url(&self.base_url, query, search_type);
        log::info!("Submitting search {:?} as {}", query, search_type.as_param());

        Ok(self.outcome.insert(SearchOutcome {
            query: query.to_string(),
            search_type,
            url,
        }))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_submitted(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    pub fn into_outcome(self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// Look up example `index` and schedule its submission
    pub fn choose_example(&mut self, index: usize, now: Instant) -> Option<&'static str> {
        let code = EXAMPLE_CODES.get(index).copied()?;
        self.pending_example.schedule(code.to_string(), now);
        Some(code)
    }

    pub fn has_pending_example(&self) -> bool {
        self.pending_example.is_pending()
    }

    /// Example code whose submit delay has elapsed
    pub fn poll_example(&mut self, now: Instant) -> Option<String> {
        self.pending_example.poll(now)
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod form_tests;
