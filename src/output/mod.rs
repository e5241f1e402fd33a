//! Output module for console output.
//!
//! Provides:
//! - Colored console messages
//! - Status reporting

pub mod console;
pub mod status;

pub use self::console::{print_answer, print_error, print_info, print_warning};
pub use status::print_status;
