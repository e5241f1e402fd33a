//! taglist - positional tag substitution and normalized file status.
//!
//! This library provides two independent utilities.
//!
//! # Features
//!
//! - Replace `$0`, `$1`, ... tags in a string with values from a list
//! - Custom tag prefixes and tag/index offsets
//! - Fill templates straight from regex capture groups
//! - Link-aware file status with a single `file`/`dir`/`symlink` kind
//! - Blocking and async existence checks where a missing path is not an error
//!
//! # Example
//!
//! ```no_run
//! use taglist::{exists_kind_async, format_list, FsKind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let greeting = format_list("hello $0, meet $1", &["alice", "bob"], None);
//!     assert_eq!(greeting, "hello alice, meet bob");
//!
//!     if exists_kind_async("Cargo.toml", FsKind::File).await? {
//!         println!("found the manifest");
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use format::{format_captures, format_list, format_list_opt, FormatOptions, TagMap};
pub use fs::{
    exists_kind, exists_kind_async, normalize_kind, try_get_status, try_get_status_async, FsKind,
    FsStatus,
};
