//! Status reporting.

use std::path::Path;

use chrono::{DateTime, Utc};
use console::style;

use crate::fs::FsStatus;

/// Print a normalized status in human-readable form.
pub fn print_status(path: &Path, status: &FsStatus) {
    println!("{}", style(path.display()).bold());
    println!("  Kind:     {}", style(status.kind).cyan());
    println!("  Size:     {} bytes", status.len);
    println!("  Readonly: {}", status.readonly);
    println!("  Modified: {}", format_time(status.modified));
    println!("  Accessed: {}", format_time(status.accessed));
    println!("  Created:  {}", format_time(status.created));

    if let Some(mode) = status.mode {
        println!("  Mode:     {:o}", mode);
    }
    if let (Some(uid), Some(gid)) = (status.uid, status.gid) {
        println!("  Owner:    {}:{}", uid, gid);
    }
    if let Some(ino) = status.ino {
        println!("  Inode:    {}", ino);
    }
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t.to_rfc3339(),
        None => style("n/a").dim().to_string(),
    }
}
