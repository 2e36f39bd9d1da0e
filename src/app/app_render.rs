use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::autocomplete::render_popup;
use crate::codes::{
    SearchType, detect_search_type, format_ifsc, is_valid_ifsc, is_valid_micr,
    validate_search_input,
};
use crate::notification::render_notification;
use crate::search::EXAMPLE_CODES;

const LABEL_WIDTH: usize = 14;
const KEY_HINTS: &str = "  ↑↓ navigate  Enter search  Ctrl+Y copy  Esc close  Ctrl+C quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.render_at(frame, Instant::now());
    }

    /// Render with an explicit clock so toast phases are deterministic
    pub fn render_at(&mut self, frame: &mut Frame, now: Instant) {
        let [header_area, input_area, details_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area);
        crate::input::input_render::render_field(self, frame, input_area);
        self.render_details(frame, details_area);
        self.layout.examples = self.render_footer(frame, footer_area);

        // Popup and toast overlay everything else
        self.layout.input = Some(input_area);
        let popup = render_popup(&self.autocomplete, self.input.query(), frame, input_area);
        if popup.is_none() && self.autocomplete.is_visible() {
            // No room for a single row; keys must not act on rows nobody sees
            self.autocomplete.hide();
        }
        self.layout.popup = popup.map(|p| p.area);
        self.layout.popup_first_row = popup.map_or(0, |p| p.first_row);

        render_notification(&self.notification, frame, now);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " IFSC Finder ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", self.search.base_url()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Details ")
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = Paragraph::new(self.detail_lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn detail_lines(&self) -> Vec<Line<'static>> {
        let query = self.query().trim();
        let dim = Style::default().fg(Color::DarkGray);

        if query.is_empty() {
            return vec![
                Line::from(Span::styled(
                    "Search by IFSC code, MICR code, bank name, city or branch.",
                    dim,
                )),
                Line::from(Span::styled(
                    "Suggestions appear after 2 characters.",
                    dim,
                )),
            ];
        }

        let mut lines = Vec::new();
        if let Err(e) = validate_search_input(query) {
            lines.push(Line::from(Span::styled(
                format!("⚠ {}", e),
                Style::default().fg(Color::Yellow),
            )));
            return lines;
        }

        let search_type = detect_search_type(query);
        lines.push(detail_line("Search type", Span::raw(search_type.to_string())));

        match search_type {
            SearchType::Ifsc => lines.push(code_check_line(
                "IFSC",
                format_ifsc(query),
                is_valid_ifsc(query),
                "expected 4 letters followed by 7 digits",
            )),
            SearchType::Micr => lines.push(code_check_line(
                "MICR",
                query.to_string(),
                is_valid_micr(query),
                "expected exactly 9 digits",
            )),
            SearchType::Bank => {}
        }

        if let Some(suggestion) = self.autocomplete.focused() {
            lines.push(detail_line(
                "Highlighted",
                Span::styled(suggestion.label.clone(), Style::default().fg(Color::Cyan)),
            ));
            if suggestion.value != suggestion.label {
                lines.push(detail_line("Inserts", Span::raw(suggestion.value.clone())));
            }
        }

        lines
    }

    /// Draw the example codes and key hints, returning each example's area
    fn render_footer(&self, frame: &mut Frame, area: Rect) -> Vec<Rect> {
        let dim = Style::default().fg(Color::DarkGray);
        let code_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED);

        let mut spans = vec![Span::styled(" Examples: ", dim)];
        let mut examples = Vec::with_capacity(EXAMPLE_CODES.len());
        let mut offset = spans[0].width();

        for (index, code) in EXAMPLE_CODES.iter().enumerate() {
            let key_hint = format!("Alt+{} ", index + 1);
            offset += key_hint.width();
            spans.push(Span::styled(key_hint, dim));

            let width = code.width();
            if offset + width <= area.width as usize {
                examples.push(Rect::new(area.x + offset as u16, area.y, width as u16, 1));
            }
            spans.push(Span::styled(*code, code_style));
            spans.push(Span::raw("  "));
            offset += width + 2;
        }
        spans.push(Span::styled(KEY_HINTS, dim));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        examples
    }
}

fn detail_line(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<width$}", label, width = LABEL_WIDTH),
            Style::default().fg(Color::DarkGray),
        ),
        value,
    ])
}

fn code_check_line(label: &str, shown: String, valid: bool, hint: &str) -> Line<'static> {
    let verdict = if valid {
        Span::styled("  ✔ valid format", Style::default().fg(Color::Green))
    } else {
        Span::styled(format!("  ✖ {}", hint), Style::default().fg(Color::Red))
    };
    let mut line = detail_line(label, Span::styled(shown, Style::default().add_modifier(Modifier::BOLD)));
    line.spans.push(verdict);
    line
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
