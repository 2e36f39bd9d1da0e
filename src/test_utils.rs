#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use reqwest::Url;

    use crate::app::App;
    use crate::autocomplete::{AutocompleteState, Suggestion, WidgetEffect, WidgetEvent};
    use crate::client::{FetchRequest, FetchResponse, SuggestClient};
    use crate::config::{AutocompleteConfig, ClipboardBackend, Config, NavigationPolicy};

    pub const TEST_BASE_URL: &str = "http://bank.test";

    /// Worker side of a test app's channels
    pub struct TestHarness {
        pub requests: Receiver<FetchRequest>,
        pub responses: Sender<FetchResponse>,
    }

    pub fn test_config() -> Config {
        let mut config = Config::default();
        // The system clipboard is not reliably reachable in CI
        config.clipboard.backend = ClipboardBackend::Osc52;
        config
    }

    pub fn test_app() -> (App, TestHarness) {
        test_app_with_config(&test_config())
    }

    pub fn test_app_with_config(config: &Config) -> (App, TestHarness) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let client = SuggestClient::from_channels(request_tx, response_rx);
        let base_url = Url::parse(TEST_BASE_URL).unwrap();

        let app = App::new(config, base_url, client);
        let harness = TestHarness {
            requests: request_rx,
            responses: response_tx,
        };
        (app, harness)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` one key at a time, all at `now`
    pub fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)), now);
        }
    }

    /// Widget state already showing `suggestions` for the query "sb"
    pub fn autocomplete_showing(
        policy: NavigationPolicy,
        suggestions: Vec<Suggestion>,
    ) -> AutocompleteState {
        let config = AutocompleteConfig {
            navigation: policy,
            ..AutocompleteConfig::default()
        };
        let mut state = AutocompleteState::new(&config);
        let now = Instant::now();

        state.update(WidgetEvent::Input {
            text: "sb".to_string(),
            now,
        });
        let effects = state.update(WidgetEvent::Tick(now + config.debounce()));
        let request_id = effects
            .iter()
            .find_map(|effect| match effect {
                WidgetEffect::Fetch { request_id, .. } => Some(*request_id),
                _ => None,
            })
            .unwrap();

        state.update(WidgetEvent::Response(FetchResponse {
            request_id,
            result: Ok(suggestions),
        }));
        state
    }

    pub fn after(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }
}
