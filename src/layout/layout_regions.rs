use ratatui::layout::Rect;

/// Clickable UI component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Input,
    Popup,
    Example(usize),
}

/// Screen areas recorded during the last render
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub popup: Option<Rect>,
    /// Suggestion index shown on the popup's first row
    pub popup_first_row: usize,
    pub examples: Vec<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggestion index under terminal row `row`, if it is inside the popup list
    pub fn popup_row_at(&self, row: u16) -> Option<usize> {
        let popup = self.popup?;
        let first = popup.y + 1;
        let last = popup.y + popup.height.saturating_sub(1);
        if row < first || row >= last {
            return None;
        }
        Some(self.popup_first_row + (row - first) as usize)
    }
}
