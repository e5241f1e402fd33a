//! File kind classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{FileType, Metadata};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Normalized classification of a filesystem path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FsKind {
    File,
    Dir,
    Symlink,
}

impl fmt::Display for FsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsKind::File => write!(f, "file"),
            FsKind::Dir => write!(f, "dir"),
            FsKind::Symlink => write!(f, "symlink"),
        }
    }
}

impl FromStr for FsKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(FsKind::File),
            "dir" => Ok(FsKind::Dir),
            "symlink" => Ok(FsKind::Symlink),
            _ => Err(format!("Unknown file kind: {}", s)),
        }
    }
}

/// A raw status record exposing the platform's three file type flags.
pub trait KindFlags {
    fn is_file(&self) -> bool;
    fn is_dir(&self) -> bool;
    fn is_symlink(&self) -> bool;
}

impl KindFlags for FileType {
    fn is_file(&self) -> bool {
        FileType::is_file(self)
    }

    fn is_dir(&self) -> bool {
        FileType::is_dir(self)
    }

    fn is_symlink(&self) -> bool {
        FileType::is_symlink(self)
    }
}

impl KindFlags for Metadata {
    fn is_file(&self) -> bool {
        self.file_type().is_file()
    }

    fn is_dir(&self) -> bool {
        self.file_type().is_dir()
    }

    fn is_symlink(&self) -> bool {
        self.file_type().is_symlink()
    }
}

/// Collapse the three type flags into a single kind.
///
/// Flags are checked in file, dir, symlink order. A record with none set
/// (sockets, FIFOs, devices) is rejected with [`Error::InvalidStatus`].
pub fn normalize_kind<R: KindFlags + ?Sized>(raw: &R) -> Result<FsKind> {
    if raw.is_file() {
        Ok(FsKind::File)
    } else if raw.is_dir() {
        Ok(FsKind::Dir)
    } else if raw.is_symlink() {
        Ok(FsKind::Symlink)
    } else {
        Err(Error::InvalidStatus(
            "is_file, is_dir and is_symlink are all false".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flags(bool, bool, bool);

    impl KindFlags for Flags {
        fn is_file(&self) -> bool {
            self.0
        }

        fn is_dir(&self) -> bool {
            self.1
        }

        fn is_symlink(&self) -> bool {
            self.2
        }
    }

    #[test]
    fn test_normalize_single_flag() {
        assert_eq!(normalize_kind(&Flags(true, false, false)).unwrap(), FsKind::File);
        assert_eq!(normalize_kind(&Flags(false, true, false)).unwrap(), FsKind::Dir);
        assert_eq!(
            normalize_kind(&Flags(false, false, true)).unwrap(),
            FsKind::Symlink
        );
    }

    #[test]
    fn test_normalize_flag_precedence() {
        assert_eq!(normalize_kind(&Flags(true, true, true)).unwrap(), FsKind::File);
        assert_eq!(normalize_kind(&Flags(false, true, true)).unwrap(), FsKind::Dir);
    }

    #[test]
    fn test_normalize_no_flags() {
        let err = normalize_kind(&Flags(false, false, false)).unwrap_err();
        assert!(matches!(err, Error::InvalidStatus(_)));
    }

    #[test]
    fn test_normalize_metadata() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let meta = std::fs::symlink_metadata(file.path()).unwrap();
        assert_eq!(normalize_kind(&meta).unwrap(), FsKind::File);
        assert_eq!(normalize_kind(&meta.file_type()).unwrap(), FsKind::File);

        let dir = tempfile::tempdir().unwrap();
        let meta = std::fs::symlink_metadata(dir.path()).unwrap();
        assert_eq!(normalize_kind(&meta).unwrap(), FsKind::Dir);
    }

    #[test]
    fn test_kind_text_forms() {
        for kind in [FsKind::File, FsKind::Dir, FsKind::Symlink] {
            assert_eq!(kind.to_string().parse::<FsKind>().unwrap(), kind);
        }
        assert_eq!("DIR".parse::<FsKind>().unwrap(), FsKind::Dir);
        assert!("socket".parse::<FsKind>().is_err());
        assert_eq!(serde_json::to_string(&FsKind::Symlink).unwrap(), "\"symlink\"");
    }
}
