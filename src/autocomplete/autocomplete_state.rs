//! Autocomplete widget state
//!
//! All widget behavior flows through [`AutocompleteState::update`]: the app
//! translates terminal and worker events into [`WidgetEvent`]s and carries
//! out the returned [`WidgetEffect`]s. Rendering reads the state only.

use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use super::suggestion::Suggestion;
use crate::client::{FetchError, FetchResponse};
use crate::config::{AutocompleteConfig, NavigationPolicy};

/// Keys the widget consumes while the input is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

#[derive(Debug)]
pub enum WidgetEvent {
    /// The input text changed
    Input { text: String, now: Instant },
    Key(NavKey),
    /// Mouse click on a rendered row
    ClickRow(usize),
    /// Mouse click outside both the input and the popup
    ClickOutside,
    /// Periodic clock tick, fires due debounced fetches
    Tick(Instant),
    Response(FetchResponse),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEffect {
    Fetch { query: String, request_id: u64 },
    Cancel { request_id: u64 },
    /// Put `value` into the input and submit the search form
    Select(String),
    /// Submit the search form with the input as-is
    Submit,
}

/// Next focus for Down
pub fn next_focus(current: Option<usize>, len: usize, policy: NavigationPolicy) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (current, policy) {
        (None, _) => Some(0),
        (Some(i), NavigationPolicy::Wrap) => Some((i + 1) % len),
        (Some(i), NavigationPolicy::Clamp) => Some((i + 1).min(len - 1)),
    }
}

/// Next focus for Up
pub fn prev_focus(current: Option<usize>, len: usize, policy: NavigationPolicy) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (current, policy) {
        (None, NavigationPolicy::Wrap) | (Some(0), NavigationPolicy::Wrap) => Some(len - 1),
        (None, NavigationPolicy::Clamp) | (Some(0), NavigationPolicy::Clamp) => None,
        (Some(i), _) => Some(i - 1),
    }
}

#[derive(Debug)]
pub struct AutocompleteState {
    suggestions: Vec<Suggestion>,
    /// Focused row; `None` means no row is focused. Always `< suggestions.len()`.
    focus: Option<usize>,
    debouncer: Debouncer<String>,
    /// Id of the most recently issued fetch
    request_id: u64,
    in_flight: Option<u64>,
    policy: NavigationPolicy,
    min_query_len: usize,
    enabled: bool,
}

impl AutocompleteState {
    pub fn new(config: &AutocompleteConfig) -> Self {
        Self {
            suggestions: Vec::new(),
            focus: None,
            debouncer: Debouncer::new(config.debounce()),
            request_id: 0,
            in_flight: None,
            policy: config.navigation,
            min_query_len: config.min_query_len,
            enabled: config.enabled,
        }
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused(&self) -> Option<&Suggestion> {
        self.focus.and_then(|i| self.suggestions.get(i))
    }

    pub fn is_visible(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// A fetch has been issued and its response has not arrived yet
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn time_until_fetch(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    pub fn update(&mut self, event: WidgetEvent) -> Vec<WidgetEffect> {
        match event {
            WidgetEvent::Input { text, now } => self.on_input(&text, now),
            WidgetEvent::Key(key) => self.on_key(key),
            WidgetEvent::ClickRow(index) => self.select(index).into_iter().collect(),
            WidgetEvent::ClickOutside => self.dismiss(),
            WidgetEvent::Tick(now) => self.on_tick(now),
            WidgetEvent::Response(response) => {
                self.on_response(response);
                Vec::new()
            }
        }
    }

    fn on_input(&mut self, text: &str, now: Instant) -> Vec<WidgetEffect> {
        let query = text.trim();
        self.debouncer.cancel();

        if !self.enabled {
            return Vec::new();
        }

        if query.chars().count() < self.min_query_len {
            return self.dismiss();
        }

        self.debouncer.schedule(query.to_string(), now);
        Vec::new()
    }

    fn on_key(&mut self, key: NavKey) -> Vec<WidgetEffect> {
        let len = self.suggestions.len();
        match key {
            NavKey::Down => {
                self.focus = next_focus(self.focus, len, self.policy);
                Vec::new()
            }
            NavKey::Up => {
                self.focus = prev_focus(self.focus, len, self.policy);
                Vec::new()
            }
            NavKey::Enter => match self.focus {
                Some(index) => self.select(index).into_iter().collect(),
                None => vec![WidgetEffect::Submit],
            },
            NavKey::Escape => self.dismiss(),
        }
    }

    fn on_tick(&mut self, now: Instant) -> Vec<WidgetEffect> {
        let Some(query) = self.debouncer.poll(now) else {
            return Vec::new();
        };

        let mut effects = Vec::with_capacity(2);
        if let Some(request_id) = self.in_flight.take() {
            effects.push(WidgetEffect::Cancel { request_id });
        }

        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight = Some(self.request_id);
        self.focus = None;

        log::debug!("Fetching suggestions for {:?} (request {})", query, self.request_id);
        effects.push(WidgetEffect::Fetch {
            query,
            request_id: self.request_id,
        });
        effects
    }

    fn on_response(&mut self, response: FetchResponse) {
        // Only the latest, still wanted request may render
        if self.in_flight != Some(response.request_id) {
            log::debug!(
                "Discarding stale suggestions for request {} (latest {})",
                response.request_id,
                self.request_id
            );
            return;
        }
        self.in_flight = None;

        match response.result {
            Ok(suggestions) => self.show(suggestions),
            Err(FetchError::Cancelled) => {}
            Err(e) => {
                log::warn!("Autocomplete error: {}", e);
                self.hide();
            }
        }
    }

    /// Replace the rendered rows; an empty list hides the popup
    fn show(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.focus = None;
    }

    pub fn hide(&mut self) {
        self.suggestions.clear();
        self.focus = None;
    }

    /// Hide and abandon the in-flight fetch. A pending debounce is kept.
    fn dismiss(&mut self) -> Vec<WidgetEffect> {
        self.hide();
        match self.in_flight.take() {
            Some(request_id) => vec![WidgetEffect::Cancel { request_id }],
            None => Vec::new(),
        }
    }

    fn select(&mut self, index: usize) -> Option<WidgetEffect> {
        let value = self.suggestions.get(index)?.value.clone();
        self.hide();
        Some(WidgetEffect::Select(value))
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
