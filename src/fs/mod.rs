//! Filesystem module.
//!
//! Provides:
//! - Normalized file kinds in place of raw type flags
//! - Link-aware status queries where a missing path is `None`, not an error

pub mod kind;
pub mod status;

pub use kind::{normalize_kind, FsKind, KindFlags};
pub use status::{exists_kind, exists_kind_async, try_get_status, try_get_status_async, FsStatus};
