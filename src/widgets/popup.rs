use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly under `anchor`, clipped to the bottom of `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let space_below = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x + x_offset,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(space_below),
    }
}

/// Area in the top-right corner of `frame_area`, `margin` cells from both edges
pub fn top_right(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let popup_width = width.min(frame_area.width.saturating_sub(margin));
    let popup_height = height.min(frame_area.height.saturating_sub(margin));

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(popup_width + margin),
        y: frame_area.y + margin.min(frame_area.height),
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
