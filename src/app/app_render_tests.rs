//! Rendering tests using ratatui's TestBackend

use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::autocomplete::Suggestion;
use crate::client::FetchResponse;
use crate::notification::NotificationKind;
use crate::search::EXAMPLE_CODES;
use crate::test_utils::test_helpers::{after, test_app, type_text};

use super::App;

const TEST_WIDTH: u16 = 100;
const TEST_HEIGHT: u16 = 24;

fn render(app: &mut App, now: Instant) -> String {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render_at(f, now)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_initial_screen() {
    let (mut app, _harness) = test_app();
    let output = render(&mut app, Instant::now());

    assert!(output.contains("IFSC Finder"));
    assert!(output.contains("Search"));
    assert!(output.contains("Examples:"));
    for code in EXAMPLE_CODES {
        assert!(output.contains(code));
    }
    assert!(output.contains("Suggestions appear after 2 characters."));
}

#[test]
fn test_render_records_layout() {
    let (mut app, _harness) = test_app();
    render(&mut app, Instant::now());

    let input = app.layout.input.unwrap();
    assert_eq!((input.y, input.height), (1, 3));
    assert_eq!(app.layout.examples.len(), EXAMPLE_CODES.len());
    assert!(app.layout.popup.is_none());
    assert!(app.layout.examples.iter().all(|r| r.y == TEST_HEIGHT - 1));
}

#[test]
fn test_example_areas_cover_their_codes() {
    let (mut app, _harness) = test_app();
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render_at(f, Instant::now())).unwrap();

    let buffer = terminal.backend().buffer();
    for (rect, code) in app.layout.examples.iter().zip(EXAMPLE_CODES) {
        let shown: String = (rect.x..rect.x + rect.width)
            .map(|x| buffer[(x, rect.y)].symbol().to_string())
            .collect();
        assert_eq!(shown, code);
    }
}

#[test]
fn test_details_for_valid_ifsc() {
    let (mut app, _harness) = test_app();
    app.input.set_text("sbin0001414");

    let output = render(&mut app, Instant::now());

    assert!(output.contains("[IFSC]"));
    assert!(output.contains("SBIN 0001414"));
    assert!(output.contains("valid format"));
}

#[test]
fn test_details_for_invalid_micr() {
    let (mut app, _harness) = test_app();
    app.input.set_text("1234567890");

    let output = render(&mut app, Instant::now());

    assert!(output.contains("[MICR]"));
    assert!(output.contains("expected exactly 9 digits"));
}

#[test]
fn test_details_for_short_query() {
    let (mut app, _harness) = test_app();
    app.input.set_text("S");

    let output = render(&mut app, Instant::now());

    assert!(output.contains("Search term must be at least 2 characters"));
}

#[test]
fn test_spinner_while_loading() {
    let (mut app, harness) = test_app();
    let start = Instant::now();
    type_text(&mut app, "SBIN", start);
    app.tick(after(start, 300));
    assert!(harness.requests.try_recv().is_ok());

    let output = render(&mut app, after(start, 300));

    assert!(output.contains("loading"));
}

#[test]
fn test_popup_is_drawn_and_recorded() {
    let (mut app, harness) = test_app();
    let start = Instant::now();
    type_text(&mut app, "SBIN", start);
    app.tick(after(start, 300));
    let request = harness.requests.try_recv().unwrap();
    harness
        .responses
        .send(FetchResponse {
            request_id: request.request_id,
            result: Ok(vec![
                Suggestion::new("SBIN0001414 - Mumbai", "SBIN0001414").with_kind("ifsc"),
            ]),
        })
        .unwrap();
    app.tick(after(start, 350));

    let output = render(&mut app, after(start, 350));

    assert!(output.contains("Suggestions (1)"));
    assert!(output.contains("SBIN0001414 - Mumbai"));
    assert!(output.contains("[IFSC]"));
    let popup = app.layout.popup.unwrap();
    assert_eq!(popup.y, 4);
    assert_eq!(app.layout.popup_row_at(5), Some(0));
}

#[test]
fn test_searching_marker_after_submit() {
    let (mut app, _harness) = test_app();
    app.input.set_text("SBIN0001414");
    app.submit();

    let output = render(&mut app, Instant::now());

    assert!(output.contains("Searching..."));
}

#[test]
fn test_toast_is_drawn_then_gone() {
    let (mut app, _harness) = test_app();
    let start = Instant::now();
    app.notification
        .show_at("IFSC code copied to clipboard!", NotificationKind::Success, start);

    assert!(render(&mut app, after(start, 100)).contains("IFSC code copied to clipboard!"));

    app.tick(after(start, 3300));
    assert!(!render(&mut app, after(start, 3300)).contains("IFSC code copied to clipboard!"));
}

#[test]
fn test_click_mapping_follows_scrolled_popup() {
    let (mut app, harness) = test_app();
    let start = Instant::now();
    type_text(&mut app, "ROW", start);
    app.tick(after(start, 300));
    let request = harness.requests.try_recv().unwrap();
    harness
        .responses
        .send(FetchResponse {
            request_id: request.request_id,
            result: Ok((0..10)
                .map(|i| Suggestion::from_text(format!("ROW{i:02}")))
                .collect()),
        })
        .unwrap();
    app.tick(after(start, 350));
    for _ in 0..9 {
        app.handle_key_event(
            crate::test_utils::test_helpers::key(ratatui::crossterm::event::KeyCode::Down),
            after(start, 400),
        );
    }
    assert_eq!(app.autocomplete.focus(), Some(8));

    // 12 rows: the popup starts at row 4 and has room for 6 list rows
    let backend = TestBackend::new(TEST_WIDTH, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render_at(f, after(start, 400))).unwrap();
    let output = terminal.backend().to_string();

    assert!(output.contains("► ROW08"));
    assert_eq!(app.layout.popup_first_row, 3);
    assert_eq!(app.layout.popup_row_at(5), Some(3));
}
