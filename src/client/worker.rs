//! Suggestion worker thread
//!
//! Runs fetches on a current-thread tokio runtime so the UI thread never
//! waits on the network. Each request carries a cancellation token; a
//! cancelled request is abandoned mid-flight and answered with
//! `FetchError::Cancelled`.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use tokio::runtime::Runtime;

use super::{FetchError, FetchRequest, FetchResponse, SuggestionSource};
use crate::autocomplete::Suggestion;
use crate::error::FinderError;

/// Spawn the worker thread
///
/// The thread exits when the request channel closes or the response
/// channel's receiver is dropped.
pub fn spawn_worker<S: SuggestionSource>(
    source: S,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) -> Result<JoinHandle<()>, FinderError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| FinderError::Worker(e.to_string()))?;

    std::thread::Builder::new()
        .name("suggest-worker".to_string())
        .spawn(move || worker_loop(runtime, source, request_rx, response_tx))
        .map_err(|e| FinderError::Worker(e.to_string()))
}

fn worker_loop<S: SuggestionSource>(
    runtime: Runtime,
    source: S,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let request_id = request.request_id;
        let result = runtime.block_on(handle_request(&source, request));

        match &result {
            Ok(suggestions) => {
                log::debug!("Request {} returned {} suggestions", request_id, suggestions.len())
            }
            Err(FetchError::Cancelled) => log::debug!("Request {} cancelled", request_id),
            Err(e) => log::debug!("Request {} failed: {}", request_id, e),
        }

        if response_tx.send(FetchResponse { request_id, result }).is_err() {
            // UI side is gone
            break;
        }
    }

    log::debug!("Suggestion worker shutting down");
}

async fn handle_request<S: SuggestionSource>(
    source: &S,
    request: FetchRequest,
) -> Result<Vec<Suggestion>, FetchError> {
    if request.cancel.is_cancelled() {
        return Err(FetchError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = request.cancel.cancelled() => Err(FetchError::Cancelled),
        result = source.fetch(&request.query) => result,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
