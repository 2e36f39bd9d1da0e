//! Tests for SuggestClient

use std::sync::mpsc;
use std::time::{Duration, Instant};

use super::*;
use crate::autocomplete::Suggestion;
use crate::client::FetchError;

struct EchoSource;

impl SuggestionSource for EchoSource {
    async fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, FetchError> {
        Ok(vec![Suggestion::from_text(query.to_uppercase())])
    }
}

fn wait_for_response(client: &mut SuggestClient) -> FetchResponse {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(response) = client.try_recv() {
            return response;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("no response from worker");
}

#[test]
fn test_request_tracks_in_flight_id() {
    let (request_tx, request_rx) = mpsc::channel();
    let (_response_tx, response_rx) = mpsc::channel();
    let mut client = SuggestClient::from_channels(request_tx, response_rx);

    assert!(client.request("SBIN".to_string(), 1));

    assert_eq!(client.in_flight(), Some(1));
    let sent = request_rx.try_recv().unwrap();
    assert_eq!(sent.query, "SBIN");
    assert_eq!(sent.request_id, 1);
    assert!(!sent.cancel.is_cancelled());
}

#[test]
fn test_new_request_cancels_previous_token() {
    let (request_tx, request_rx) = mpsc::channel();
    let (_response_tx, response_rx) = mpsc::channel();
    let mut client = SuggestClient::from_channels(request_tx, response_rx);

    client.request("SB".to_string(), 1);
    client.request("SBIN".to_string(), 2);

    let first = request_rx.try_recv().unwrap();
    let second = request_rx.try_recv().unwrap();
    assert!(first.cancel.is_cancelled());
    assert!(!second.cancel.is_cancelled());
    assert_eq!(client.in_flight(), Some(2));
}

#[test]
fn test_cancel_only_matches_in_flight_id() {
    let (request_tx, request_rx) = mpsc::channel();
    let (_response_tx, response_rx) = mpsc::channel();
    let mut client = SuggestClient::from_channels(request_tx, response_rx);
    client.request("SBIN".to_string(), 4);

    assert!(!client.cancel(3));
    assert!(client.cancel(4));
    assert!(!client.cancel(4));
    assert!(request_rx.try_recv().unwrap().cancel.is_cancelled());
    assert_eq!(client.in_flight(), None);
}

#[test]
fn test_request_fails_when_worker_gone() {
    let (request_tx, request_rx) = mpsc::channel();
    let (_response_tx, response_rx) = mpsc::channel();
    let mut client = SuggestClient::from_channels(request_tx, response_rx);
    drop(request_rx);

    assert!(!client.request("SBIN".to_string(), 1));
    assert_eq!(client.in_flight(), None);
}

#[test]
fn test_try_recv_empty() {
    let (request_tx, _request_rx) = mpsc::channel();
    let (_response_tx, response_rx) = mpsc::channel();
    let mut client = SuggestClient::from_channels(request_tx, response_rx);

    assert!(client.try_recv().is_none());
}

#[test]
fn test_worker_gone_answers_in_flight_request() {
    let (request_tx, _request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut client = SuggestClient::from_channels(request_tx, response_rx);
    client.request("SBIN".to_string(), 4);

    drop(response_tx);

    let response = client.try_recv().unwrap();
    assert_eq!(response.request_id, 4);
    assert!(matches!(response.result, Err(FetchError::Network(_))));
    assert_eq!(client.in_flight(), None);
    // Only answered once
    assert!(client.try_recv().is_none());
}

#[test]
fn test_worker_gone_while_idle_is_quiet() {
    let (request_tx, _request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut client = SuggestClient::from_channels(request_tx, response_rx);

    drop(response_tx);

    assert!(client.try_recv().is_none());
}

#[test]
fn test_spawned_client_round_trip() {
    let mut client = SuggestClient::spawn(EchoSource).unwrap();

    client.request("sbin".to_string(), 9);
    let response = wait_for_response(&mut client);

    assert_eq!(response.request_id, 9);
    assert_eq!(response.result, Ok(vec![Suggestion::from_text("SBIN")]));
    assert_eq!(client.in_flight(), None);
}
