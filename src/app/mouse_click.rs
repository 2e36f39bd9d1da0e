//! Mouse click handling
//!
//! Clicks on a suggestion select it, clicks on an example code fill it in,
//! and clicks anywhere outside the input and the popup dismiss the popup.

use std::time::Instant;

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::autocomplete::WidgetEvent;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent, now: Instant) {
    match region {
        Some(Region::Popup) => click_popup(app, mouse.row),
        Some(Region::Example(index)) => app.choose_example(index, now),
        Some(Region::Input) => {}
        None => app.dispatch(WidgetEvent::ClickOutside),
    }
}

fn click_popup(app: &mut App, row: u16) {
    // Border rows are inside the popup but select nothing
    if let Some(index) = app.layout.popup_row_at(row) {
        app.dispatch(WidgetEvent::ClickRow(index));
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
