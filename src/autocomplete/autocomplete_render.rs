//! Autocomplete popup rendering
//!
//! Draws the suggestion list under the search input. The output depends only
//! on the widget state and the current query (for match highlighting).

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::autocomplete_state::AutocompleteState;
use super::highlight::highlight_ranges;
use super::suggestion::Suggestion;
use crate::widgets::popup;

// Autocomplete popup display constants
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 76;
const MIN_POPUP_WIDTH: usize = 24;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const BADGE_SPACING: usize = 2;
const MARKER_WIDTH: usize = 2;

/// Where the popup was drawn and which suggestion sits on its first list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedPopup {
    pub area: Rect,
    pub first_row: usize,
}

/// First rendered row so the focused row is on screen when `rows` rows fit
pub fn first_visible_row(focus: Option<usize>, rows: usize) -> usize {
    focus
        .map(|f| f.saturating_sub(rows.max(1) - 1))
        .unwrap_or(0)
}

fn badge(suggestion: &Suggestion) -> Option<String> {
    suggestion
        .kind
        .as_ref()
        .map(|kind| format!("[{}]", kind.to_uppercase()))
}

fn badge_color(kind: Option<&str>) -> Color {
    match kind {
        Some("ifsc") => Color::Yellow,
        Some("micr") => Color::Magenta,
        Some("bank") => Color::Cyan,
        Some("city") => Color::Green,
        _ => Color::Gray,
    }
}

fn label_spans<'a>(label: &'a str, query: &str, base: Style) -> Vec<Span<'a>> {
    let matched = base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let mut spans = Vec::new();
    let mut cursor = 0;

    for (start, end) in highlight_ranges(label, query) {
        if start > cursor {
            spans.push(Span::styled(&label[cursor..start], base));
        }
        spans.push(Span::styled(&label[start..end], matched));
        cursor = end;
    }
    if cursor < label.len() {
        spans.push(Span::styled(&label[cursor..], base));
    }
    spans
}

/// Render the suggestion popup below the input field
///
/// The list scrolls within however many rows fit on screen. Returns `None`
/// when there is nothing to show or no room for a single row.
pub fn render_popup(
    state: &AutocompleteState,
    query: &str,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<RenderedPopup> {
    let suggestions = state.suggestions();
    if suggestions.is_empty() {
        return None;
    }

    // Width covers every row so it stays put while scrolling
    let max_label_width = suggestions
        .iter()
        .map(|s| s.label.width())
        .max()
        .unwrap_or(0);
    let max_badge_width = suggestions
        .iter()
        .filter_map(|s| badge(s).map(|b| b.width()))
        .max()
        .unwrap_or(0);

    let content_width = (MARKER_WIDTH + max_label_width + BADGE_SPACING + max_badge_width)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_width = content_width as u16 + POPUP_PADDING;
    let wanted_rows = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = wanted_rows as u16 + POPUP_BORDER_HEIGHT;

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let rows = (popup_area.height - POPUP_BORDER_HEIGHT) as usize;
    let first_row = first_visible_row(state.focus(), rows);
    let visible: Vec<(usize, &Suggestion)> = suggestions
        .iter()
        .enumerate()
        .skip(first_row)
        .take(rows)
        .collect();

    let items: Vec<ListItem> = visible
        .iter()
        .map(|(i, suggestion)| {
            let focused = state.focus() == Some(*i);
            let (base, badge_style) = if focused {
                let style = Style::default().fg(Color::Black).bg(Color::Cyan);
                (style.add_modifier(Modifier::BOLD), style)
            } else {
                (
                    Style::default().fg(Color::White).bg(Color::Black),
                    Style::default()
                        .fg(badge_color(suggestion.kind.as_deref()))
                        .bg(Color::Black),
                )
            };

            let marker = if focused { "► " } else { "  " };
            let padding = " ".repeat(
                max_label_width.saturating_sub(suggestion.label.width()) + BADGE_SPACING,
            );

            let mut spans = vec![Span::styled(marker, base)];
            spans.extend(label_spans(&suggestion.label, query, base));
            spans.push(Span::styled(padding, base));
            if let Some(badge) = badge(suggestion) {
                spans.push(Span::styled(badge, badge_style));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let title = format!(" Suggestions ({}) ", suggestions.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
    Some(RenderedPopup {
        area: popup_area,
        first_row,
    })
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
