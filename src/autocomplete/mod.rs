mod autocomplete_render;
mod autocomplete_state;
mod debouncer;
mod highlight;
mod suggestion;

pub use autocomplete_render::{RenderedPopup, render_popup};
pub use autocomplete_state::{
    AutocompleteState, NavKey, WidgetEffect, WidgetEvent, next_focus, prev_focus,
};
pub use debouncer::Debouncer;
pub use highlight::highlight_ranges;
pub use suggestion::{Suggestion, parse_suggestions};
