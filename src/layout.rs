//! Layout module for tracking UI component regions
//!
//! Rendering records where the input, the suggestion popup and the example
//! codes were drawn; `region_at()` maps a click position back to one of them.
//! Anything that maps to no region counts as a click outside the widget.

mod layout_hit_test;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
