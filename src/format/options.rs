//! Tag substitution options.

use serde::{Deserialize, Serialize};

/// Default tag prefix.
pub const DEFAULT_TAG_STR: &str = "$";

/// Options controlling which list entries map to which tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Text that prefixes every tag.
    #[serde(default = "default_tag_str")]
    pub tag_str: String,

    /// Number of the first tag, i.e. `0` means the first consumed entry replaces `$0`.
    #[serde(default)]
    pub tag_start: i64,

    /// List index to start consuming values from.
    #[serde(default)]
    pub index_start: i64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tag_str: default_tag_str(),
            tag_start: 0,
            index_start: 0,
        }
    }
}

impl FormatOptions {
    /// Set the tag prefix.
    pub fn with_tag_str(mut self, tag_str: impl Into<String>) -> Self {
        self.tag_str = tag_str.into();
        self
    }

    /// Set the number of the first tag.
    pub fn with_tag_start(mut self, tag_start: i64) -> Self {
        self.tag_start = tag_start;
        self
    }

    /// Set the list index to start consuming from.
    pub fn with_index_start(mut self, index_start: i64) -> Self {
        self.index_start = index_start;
        self
    }
}

fn default_tag_str() -> String {
    DEFAULT_TAG_STR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = FormatOptions::default();
        assert_eq!(opts.tag_str, "$");
        assert_eq!(opts.tag_start, 0);
        assert_eq!(opts.index_start, 0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts: FormatOptions = toml::from_str("tag_start = 2").unwrap();
        assert_eq!(opts.tag_str, "$");
        assert_eq!(opts.tag_start, 2);
        assert_eq!(opts.index_start, 0);
    }
}
