//! Terminal lookup of Indian bank branches by IFSC, MICR, bank, city or
//! branch name, with live suggestions from a search server.

pub mod app;
pub mod autocomplete;
pub mod cli;
pub mod client;
pub mod clipboard;
pub mod codes;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod notification;
pub mod search;
pub mod widgets;

mod test_utils;
