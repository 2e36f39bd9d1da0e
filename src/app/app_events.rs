use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;
use crate::autocomplete::{NavKey, WidgetEvent};
use crate::clipboard::clipboard_events;
use crate::layout::region_at;
use crate::search::EXAMPLE_CODES;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            Event::Paste(text) => self.handle_paste_event(text, now),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key, now) {
            return;
        }

        // Navigation keys belong to the widget and never reach the editor
        if let Some(nav) = nav_key(key) {
            self.dispatch(WidgetEvent::Key(nav));
            return;
        }

        if self.input.handle_input(key) {
            self.on_input_changed(now);
        }
    }

    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        if clipboard_events::handle_clipboard_key(self, key) {
            return true;
        }

        // Alt+1..3: fill an example code
        if key.modifiers.contains(KeyModifiers::ALT)
            && let KeyCode::Char(c) = key.code
            && let Some(index) = example_index(c)
        {
            self.choose_example(index, now);
            return true;
        }

        false
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = region_at(&self.layout, mouse.column, mouse.row);
            mouse_click::handle_click(self, region, mouse, now);
        }
    }

    pub fn handle_paste_event(&mut self, text: String, now: Instant) {
        if self.input.paste(&text) {
            self.on_input_changed(now);
        }
    }
}

fn nav_key(key: KeyEvent) -> Option<NavKey> {
    match key.code {
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Down => Some(NavKey::Down),
        KeyCode::Enter => Some(NavKey::Enter),
        KeyCode::Esc => Some(NavKey::Escape),
        _ => None,
    }
}

fn example_index(c: char) -> Option<usize> {
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    (index < EXAMPLE_CODES.len()).then_some(index)
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
