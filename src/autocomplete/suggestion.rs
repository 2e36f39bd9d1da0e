//! Suggestion records returned by the autocomplete endpoint

use serde::Deserialize;

/// One selectable row in the suggestion popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Text shown in the popup
    pub label: String,
    /// Text written into the input when the row is selected
    pub value: String,
    /// Category badge (`ifsc`, `bank`, `city`, ...)
    pub kind: Option<String>,
}

impl Suggestion {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Bare strings are both label and value
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSuggestion {
    Text(String),
    Record {
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        value: Option<String>,
        #[serde(default, rename = "type")]
        kind: Option<String>,
    },
    Other(serde_json::Value),
}

impl RawSuggestion {
    fn normalize(self) -> Option<Suggestion> {
        match self {
            RawSuggestion::Text(text) => Some(Suggestion::from_text(text)),
            RawSuggestion::Record { label, value, kind } => {
                let (label, value) = match (label, value) {
                    (Some(label), Some(value)) => (label, value),
                    (Some(label), None) => (label.clone(), label),
                    (None, Some(value)) => (value.clone(), value),
                    (None, None) => return None,
                };
                Some(Suggestion {
                    label,
                    value,
                    kind: kind.filter(|k| !k.is_empty()),
                })
            }
            RawSuggestion::Other(value) => {
                log::debug!("Skipping unrecognized suggestion entry: {}", value);
                None
            }
        }
    }
}

/// Parse an endpoint response body
///
/// The body must be a JSON array. Entries may be plain strings or
/// `{label, value, type?}` objects; anything else is skipped.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, serde_json::Error> {
    let raw: Vec<RawSuggestion> = serde_json::from_str(body)?;
    Ok(raw.into_iter().filter_map(RawSuggestion::normalize).collect())
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
