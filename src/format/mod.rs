//! Positional tag substitution.
//!
//! Provides:
//! - `$n`-style tag replacement from an ordered list of values
//! - Configurable tag prefix and numeric offsets
//! - Reusable tag maps for formatting many templates with one list

pub mod list;
pub mod options;
pub mod tags;

pub use list::{format_captures, format_list, format_list_opt};
pub use options::{FormatOptions, DEFAULT_TAG_STR};
pub use tags::TagMap;
