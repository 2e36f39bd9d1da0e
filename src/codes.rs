//! Bank code formats
//!
//! Pure checks for IFSC (4 letters + 7 digits) and MICR (9 digits) codes,
//! plus the helpers the search form uses to classify and validate input.

use std::fmt;

use thiserror::Error;

pub const IFSC_LEN: usize = 11;
pub const IFSC_BANK_PREFIX_LEN: usize = 4;
pub const MICR_LEN: usize = 9;
pub const MIN_SEARCH_LEN: usize = 2;

/// Kind of lookup a search term most likely is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Ifsc,
    Micr,
    Bank,
}

impl SearchType {
    pub fn as_param(&self) -> &'static str {
        match self {
            SearchType::Ifsc => "ifsc",
            SearchType::Micr => "micr",
            SearchType::Bank => "bank",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchType::Ifsc => "IFSC",
            SearchType::Micr => "MICR",
            SearchType::Bank => "Bank / City / Branch",
        };
        write!(f, "{}", label)
    }
}

/// Reasons a search term is rejected before submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchInputError {
    #[error("Please enter a search term")]
    Empty,

    #[error("Search term must be at least 2 characters")]
    TooShort,
}

/// Check an IFSC code: 4 letters followed by 7 digits, case-insensitive
pub fn is_valid_ifsc(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == IFSC_LEN
        && bytes[..IFSC_BANK_PREFIX_LEN]
            .iter()
            .all(|b| b.is_ascii_alphabetic())
        && bytes[IFSC_BANK_PREFIX_LEN..]
            .iter()
            .all(|b| b.is_ascii_digit())
}

/// Check a MICR code: exactly 9 digits
pub fn is_valid_micr(code: &str) -> bool {
    code.len() == MICR_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

/// Uppercase an IFSC code and split the bank prefix from the branch part
///
/// `"sbin0001414"` becomes `"SBIN 0001414"`. Input shorter than an IFSC code
/// is only uppercased.
pub fn format_ifsc(code: &str) -> String {
    let upper = code.to_uppercase();
    if upper.chars().count() < IFSC_LEN {
        return upper;
    }

    let mut formatted = String::with_capacity(upper.len() + 1);
    for (i, ch) in upper.chars().enumerate() {
        if i == IFSC_BANK_PREFIX_LEN {
            formatted.push(' ');
        }
        formatted.push(ch);
    }
    formatted
}

/// Guess which lookup a search term is meant for
pub fn detect_search_type(query: &str) -> SearchType {
    let query = query.trim();

    if query.chars().count() == IFSC_LEN && query.chars().all(|c| c.is_ascii_alphanumeric()) {
        SearchType::Ifsc
    } else if query.len() >= MICR_LEN && query.chars().all(|c| c.is_ascii_digit()) {
        SearchType::Micr
    } else {
        SearchType::Bank
    }
}

pub fn validate_search_input(query: &str) -> Result<(), SearchInputError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchInputError::Empty);
    }
    if query.chars().count() < MIN_SEARCH_LEN {
        return Err(SearchInputError::TooShort);
    }
    Ok(())
}

/// Human-readable classification of a complete code, `None` if it is neither
///
/// `"sbin0001414"` describes as `"IFSC SBIN 0001414"`.
pub fn describe_code(code: &str) -> Option<String> {
    let code = code.trim();
    if is_valid_ifsc(code) {
        Some(format!("IFSC {}", format_ifsc(code)))
    } else if is_valid_micr(code) {
        Some(format!("MICR {}", code))
    } else {
        None
    }
}
