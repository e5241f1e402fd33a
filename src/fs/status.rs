//! Link-aware status queries with a normalized kind.

use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fs::kind::{normalize_kind, FsKind};

/// Status of a path with its type flags collapsed into a single kind.
///
/// Everything other than the type flags is carried over from the platform
/// record as-is. Unix-only fields are `None` elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsStatus {
    pub kind: FsKind,
    pub len: u64,
    pub readonly: bool,
    pub modified: Option<DateTime<Utc>>,
    pub accessed: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
    pub dev: Option<u64>,
    pub ino: Option<u64>,
    pub mode: Option<u32>,
    pub nlink: Option<u64>,
    pub uid: Option<u32>,
    pub gid: Option<u32>,
    pub rdev: Option<u64>,
    pub blksize: Option<u64>,
    pub blocks: Option<u64>,
}

impl FsStatus {
    /// Normalize a platform metadata record.
    pub fn from_metadata(meta: &Metadata) -> Result<Self> {
        let kind = normalize_kind(meta)?;

        let mut status = Self {
            kind,
            len: meta.len(),
            readonly: meta.permissions().readonly(),
            modified: meta.modified().ok().map(to_utc),
            accessed: meta.accessed().ok().map(to_utc),
            created: meta.created().ok().map(to_utc),
            dev: None,
            ino: None,
            mode: None,
            nlink: None,
            uid: None,
            gid: None,
            rdev: None,
            blksize: None,
            blocks: None,
        };

        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;

            status.dev = Some(meta.dev());
            status.ino = Some(meta.ino());
            status.mode = Some(meta.mode());
            status.nlink = Some(meta.nlink());
            status.uid = Some(meta.uid());
            status.gid = Some(meta.gid());
            status.rdev = Some(meta.rdev());
            status.blksize = Some(meta.blksize());
            status.blocks = Some(meta.blocks());
        }

        Ok(status)
    }
}

fn to_utc(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}

/// Turn a link-status result into an optional status, absorbing only "not found".
fn absorb_not_found(path: &Path, result: std::io::Result<Metadata>) -> Result<Option<FsStatus>> {
    match result {
        Ok(meta) => FsStatus::from_metadata(&meta).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No such path: {}", path.display());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Get the status of a path without following symlinks.
///
/// Returns `Ok(None)` if the path does not exist. Any other failure is returned as an error.
pub fn try_get_status<P: AsRef<Path>>(path: P) -> Result<Option<FsStatus>> {
    let path = path.as_ref();
    tracing::debug!("lstat {}", path.display());
    absorb_not_found(path, std::fs::symlink_metadata(path))
}

/// Async variant of [`try_get_status`].
pub async fn try_get_status_async<P: AsRef<Path>>(path: P) -> Result<Option<FsStatus>> {
    let path = path.as_ref();
    tracing::debug!("lstat {}", path.display());
    absorb_not_found(path, tokio::fs::symlink_metadata(path).await)
}

/// Check whether a path exists and has the given kind.
pub fn exists_kind<P: AsRef<Path>>(path: P, kind: FsKind) -> Result<bool> {
    let status = try_get_status(path)?;
    Ok(status.is_some_and(|s| s.kind == kind))
}

/// Async variant of [`exists_kind`].
pub async fn exists_kind_async<P: AsRef<Path>>(path: P, kind: FsKind) -> Result<bool> {
    let status = try_get_status_async(path).await?;
    Ok(status.is_some_and(|s| s.kind == kind))
}
