//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::format::FormatOptions;
use crate::fs::FsKind;

/// Tag substitution and file status CLI.
#[derive(Parser, Debug)]
#[command(
    name = "taglist",
    version,
    about = "Fill $n tags from a list and query normalized file status",
    long_about = "Replace positional tags ($0, $1, ...) in a template with values from a list,\n\
                  and inspect paths as file, dir or symlink without following links."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, global = true, default_value = "taglist.toml", env = "TAGLIST_CONFIG")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace tags in a template with the given values.
    Format {
        /// Template containing tags such as $0.
        template: String,

        /// Values in tag order.
        values: Vec<String>,

        #[command(flatten)]
        options: FormatArgs,
    },

    /// Run a regex over some input and fill the template from the match.
    Match {
        /// Regular expression to run.
        pattern: String,

        /// Text to match against.
        input: String,

        /// Template containing tags such as $1.
        template: String,

        /// Use every match of the whole pattern as the value list instead of
        /// the capture groups of the first match.
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        options: FormatArgs,
    },

    /// Show the status of a path without following symlinks.
    Stat {
        path: PathBuf,

        /// Print the status as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check whether a path exists with the given kind.
    Exists {
        path: PathBuf,

        /// Kind the path must have.
        #[arg(short, long, value_enum)]
        kind: KindArg,
    },
}

/// Tag substitution overrides.
#[derive(clap::Args, Debug, Default)]
pub struct FormatArgs {
    /// Text that prefixes every tag.
    #[arg(long)]
    pub tag_str: Option<String>,

    /// Number of the first tag.
    #[arg(long, allow_hyphen_values = true)]
    pub tag_start: Option<i64>,

    /// List index to start consuming values from.
    #[arg(long, allow_hyphen_values = true)]
    pub index_start: Option<i64>,
}

/// CLI file kind argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Regular file.
    File,
    /// Directory.
    Dir,
    /// Symbolic link.
    Symlink,
}

impl From<KindArg> for FsKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::File => FsKind::File,
            KindArg::Dir => FsKind::Dir,
            KindArg::Symlink => FsKind::Symlink,
        }
    }
}

impl FormatArgs {
    /// Merge CLI overrides into options loaded from config.
    pub fn merge_into(self, options: &mut FormatOptions) {
        if let Some(tag_str) = self.tag_str {
            options.tag_str = tag_str;
        }

        if let Some(tag_start) = self.tag_start {
            options.tag_start = tag_start;
        }

        if let Some(index_start) = self.index_start {
            options.index_start = index_start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        let args = Args::try_parse_from([
            "taglist",
            "format",
            "foo &1 baz",
            "a",
            "bar",
            "--tag-str",
            "&",
            "--tag-start",
            "-1",
        ])
        .unwrap();

        let Command::Format {
            template,
            values,
            options,
        } = args.command
        else {
            panic!("expected format command");
        };
        assert_eq!(template, "foo &1 baz");
        assert_eq!(values, vec!["a", "bar"]);
        assert_eq!(options.tag_start, Some(-1));

        let mut merged = FormatOptions::default().with_index_start(1);
        options.merge_into(&mut merged);
        assert_eq!(merged.tag_str, "&");
        assert_eq!(merged.tag_start, -1);
        assert_eq!(merged.index_start, 1);
    }

    #[test]
    fn test_parse_exists() {
        let args =
            Args::try_parse_from(["taglist", "exists", "some/path", "--kind", "dir"]).unwrap();
        match args.command {
            Command::Exists { path, kind } => {
                assert_eq!(path, PathBuf::from("some/path"));
                assert_eq!(FsKind::from(kind), FsKind::Dir);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(Args::try_parse_from(["taglist", "exists", "p", "--kind", "socket"]).is_err());
    }
}
