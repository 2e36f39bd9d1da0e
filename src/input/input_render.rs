//! Search field rendering
//!
//! Draws the textarea with a title that reflects the detected search type,
//! a spinner while suggestions load and a "Searching..." marker after submit.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use crate::app::App;
use crate::codes::{MIN_SEARCH_LEN, SearchType, detect_search_type};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame at the 50ms loop interval
const TICKS_PER_FRAME: u64 = 2;

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

fn search_type_color(search_type: SearchType) -> Color {
    match search_type {
        SearchType::Ifsc => Color::Green,
        SearchType::Micr => Color::Magenta,
        SearchType::Bank => Color::Blue,
    }
}

/// Render the search field
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let query = app.query().trim().to_string();

    let mut title_spans = vec![Span::raw(" Search ")];
    if query.chars().count() >= MIN_SEARCH_LEN {
        let search_type = detect_search_type(&query);
        title_spans.push(Span::raw("["));
        title_spans.push(Span::styled(
            search_type.to_string(),
            Style::default().fg(search_type_color(search_type)),
        ));
        title_spans.push(Span::raw("] "));
    }

    let status = if app.search.is_submitted() {
        Some(Line::from(Span::styled(
            " Searching... ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
    } else if app.autocomplete.is_loading() {
        Some(Line::from(vec![
            Span::styled(
                format!(" {} ", spinner_frame(app.tick_count)),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled("loading ", Style::default().fg(Color::DarkGray)),
        ]))
    } else {
        None
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(title_spans))
        .border_style(Style::default().fg(Color::Cyan));

    if let Some(status) = status {
        block = block.title_top(status.alignment(Alignment::Right));
    }

    app.input.textarea.set_block(block);
    frame.render_widget(&app.input.textarea, area);
}
