//! UI-side handle to the suggestion worker

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::worker::spawn_worker;
use super::{FetchError, FetchRequest, FetchResponse, SuggestionSource};
use crate::error::FinderError;

pub struct SuggestClient {
    request_tx: Sender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
    /// Token of the request the UI is still waiting on
    in_flight: Option<(u64, CancellationToken)>,
}

impl SuggestClient {
    /// Start a worker for `source` and connect to it
    pub fn spawn<S: SuggestionSource>(source: S) -> Result<Self, FinderError> {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(source, request_rx, response_tx)?;
        Ok(Self::from_channels(request_tx, response_rx))
    }

    /// Connect to an already running worker (or a test harness)
    pub fn from_channels(
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
            in_flight: None,
        }
    }

    /// Send a fetch, cancelling whatever was still in flight
    ///
    /// Returns false if the worker is gone.
    pub fn request(&mut self, query: String, request_id: u64) -> bool {
        if let Some(previous) = self.in_flight() {
            self.cancel(previous);
        }

        let cancel = CancellationToken::new();
        let sent = self
            .request_tx
            .send(FetchRequest {
                query,
                request_id,
                cancel: cancel.clone(),
            })
            .is_ok();

        if sent {
            self.in_flight = Some((request_id, cancel));
        } else {
            log::warn!("Suggestion worker disconnected; dropping request {}", request_id);
        }
        sent
    }

    /// Abort the request with `request_id` if it is the one in flight
    pub fn cancel(&mut self, request_id: u64) -> bool {
        match &self.in_flight {
            Some((id, token)) if *id == request_id => {
                token.cancel();
                self.in_flight = None;
                log::debug!("Cancelled request {}", request_id);
                true
            }
            _ => false,
        }
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|(id, _)| *id)
    }

    /// Next response from the worker, if one is waiting
    ///
    /// If the worker died with a request in flight, that request is answered
    /// with a network error so the caller stops waiting on it.
    pub fn try_recv(&mut self) -> Option<FetchResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => {
                if self.in_flight() == Some(response.request_id) {
                    self.in_flight = None;
                }
                Some(response)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                let (request_id, _) = self.in_flight.take()?;
                log::warn!("Suggestion worker stopped during request {}", request_id);
                Some(FetchResponse {
                    request_id,
                    result: Err(FetchError::Network("suggestion worker stopped".to_string())),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod handle_tests;
