use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationKind, NotificationState, ToastPhase};
use crate::widgets::popup;

const MIN_TOAST_WIDTH: u16 = 30;
const TOAST_HEIGHT: u16 = 3;
const TOAST_MARGIN: u16 = 1;
// icon, spaces and borders around the message
const TOAST_CHROME: u16 = 6;

fn style_for(kind: NotificationKind) -> (Color, &'static str) {
    match kind {
        NotificationKind::Info => (Color::Cyan, "ℹ"),
        NotificationKind::Success => (Color::Green, "✔"),
        NotificationKind::Error => (Color::Red, "✖"),
    }
}

/// Render the current toast, if any, and return its area
pub fn render_notification(
    state: &NotificationState,
    frame: &mut Frame,
    now: Instant,
) -> Option<Rect> {
    let notification = state.current()?;
    let phase = state.phase(now)?;

    let (color, icon) = style_for(notification.kind);
    let mut style = Style::default().fg(color).bg(Color::Black);
    if phase == ToastPhase::Fading {
        style = style.add_modifier(Modifier::DIM);
    }

    let width = (notification.message.width() as u16 + TOAST_CHROME).max(MIN_TOAST_WIDTH);
    let area = popup::top_right(frame.area(), width, TOAST_HEIGHT, TOAST_MARGIN);
    if area.width == 0 || area.height < TOAST_HEIGHT {
        return None;
    }

    let line = Line::from(vec![
        Span::styled(format!("{} ", icon), style.add_modifier(Modifier::BOLD)),
        Span::styled(notification.message.as_str(), style),
    ]);
    let toast = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .style(Style::default().bg(Color::Black)),
    );

    popup::clear_area(frame, area);
    frame.render_widget(toast, area);
    Some(area)
}
