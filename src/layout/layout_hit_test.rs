use ratatui::layout::Rect;

use super::layout_regions::{LayoutRegions, Region};

/// Find the region at `(x, y)`
///
/// The popup is checked first because it overlays the content below the input.
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    if regions.popup.is_some_and(|rect| contains(rect, x, y)) {
        return Some(Region::Popup);
    }

    if regions.input.is_some_and(|rect| contains(rect, x, y)) {
        return Some(Region::Input);
    }

    regions
        .examples
        .iter()
        .position(|rect| contains(*rect, x, y))
        .map(Region::Example)
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
