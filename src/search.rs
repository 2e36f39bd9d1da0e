//! Search form
//!
//! Owns what happens when the user submits: validation, the loading state,
//! example-code shortcuts, and the final outcome handed back to the caller.

mod form;

pub use form::{EXAMPLE_CODES, EXAMPLE_SUBMIT_DELAY, SearchForm, SearchOutcome};
