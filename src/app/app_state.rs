use std::time::Instant;

use reqwest::Url;

use crate::autocomplete::{AutocompleteState, WidgetEffect, WidgetEvent};
use crate::client::{FetchError, FetchResponse, SuggestClient};
use crate::config::{ClipboardBackend, Config};
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::search::{SearchForm, SearchOutcome};

/// Application state
pub struct App {
    pub input: InputState,
    pub autocomplete: AutocompleteState,
    pub client: SuggestClient,
    pub notification: NotificationState,
    pub search: SearchForm,
    pub clipboard_backend: ClipboardBackend,
    pub layout: LayoutRegions,
    pub should_quit: bool,
    /// Loop ticks since startup, drives the spinner
    pub tick_count: u64,
}

impl App {
    pub fn new(config: &Config, base_url: Url, client: SuggestClient) -> Self {
        Self {
            input: InputState::new(),
            autocomplete: AutocompleteState::new(&config.autocomplete),
            client,
            notification: NotificationState::new(&config.notification),
            search: SearchForm::new(base_url),
            clipboard_backend: config.clipboard.backend,
            layout: LayoutRegions::new(),
            should_quit: false,
            tick_count: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.search.outcome()
    }

    pub fn into_outcome(self) -> Option<SearchOutcome> {
        self.search.into_outcome()
    }

    /// Advance timers and collect worker responses
    pub fn tick(&mut self, now: Instant) {
        while let Some(response) = self.client.try_recv() {
            self.dispatch(WidgetEvent::Response(response));
        }

        self.dispatch(WidgetEvent::Tick(now));

        if self.search.poll_example(now).is_some() {
            self.submit();
        }

        self.notification.tick(now);
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Feed an event to the autocomplete widget and carry out its effects
    pub(crate) fn dispatch(&mut self, event: WidgetEvent) {
        let effects = self.autocomplete.update(event);
        self.apply_effects(effects);
    }

    pub(crate) fn on_input_changed(&mut self, now: Instant) {
        let text = self.query().to_string();
        self.dispatch(WidgetEvent::Input { text, now });
    }

    fn apply_effects(&mut self, effects: Vec<WidgetEffect>) {
        for effect in effects {
            match effect {
                WidgetEffect::Fetch { query, request_id } => {
                    if !self.client.request(query, request_id) {
                        // Nobody will answer; clear the loading state
                        self.dispatch(WidgetEvent::Response(FetchResponse {
                            request_id,
                            result: Err(FetchError::Network("suggestion worker stopped".into())),
                        }));
                    }
                }
                WidgetEffect::Cancel { request_id } => {
                    self.client.cancel(request_id);
                }
                WidgetEffect::Select(value) => {
                    self.input.set_text(&value);
                    self.submit();
                }
                WidgetEffect::Submit => self.submit(),
            }
        }
    }

    /// Submit the search form with the current input
    pub fn submit(&mut self) {
        if self.search.is_submitted() {
            return;
        }

        match self.search.submit(self.input.query()) {
            Ok(_) => self.should_quit = true,
            Err(e) => self.notification.error(&e.to_string()),
        }
    }

    /// Fill the input with example `index` and submit it after a short delay
    pub fn choose_example(&mut self, index: usize, now: Instant) {
        if let Some(code) = self.search.choose_example(index, now) {
            self.input.set_text(code);
            // Old suggestions no longer match the input
            self.dispatch(WidgetEvent::ClickOutside);
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
