//! Tag token mapping and matching.

use std::cmp::Reverse;
use std::collections::HashMap;

use regex::{Captures, Regex, RegexBuilder};

use crate::format::options::FormatOptions;

/// Compiled size limit for the combined tag pattern.
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Mapping from tag tokens to replacement values, with a compiled matcher.
///
/// Built once from a value list and reusable across any number of templates.
#[derive(Debug, Clone)]
pub struct TagMap {
    /// Tokens and values in registration order.
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
    /// Entry indices in match priority order: longest token first, then registration order.
    order: Vec<usize>,
    matcher: Option<Regex>,
}

impl TagMap {
    /// Build the mapping for a list of optional values.
    ///
    /// Entry `i` (for `i >= index_start`) maps to tag number
    /// `i + tag_start - index_start`. Absent entries register nothing.
    pub fn build<I, S>(values: I, options: &FormatOptions) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (i, value) in values.into_iter().enumerate() {
            let i = i as i128;
            if i < i128::from(options.index_start) {
                continue;
            }
            let Some(value) = value else {
                continue;
            };

            let number = i + i128::from(options.tag_start) - i128::from(options.index_start);
            let token = format!("{}{}", options.tag_str, number);
            let value = value.as_ref().to_string();

            match index.get(&token) {
                Some(&existing) => entries[existing].1 = value,
                None => {
                    index.insert(token.clone(), entries.len());
                    entries.push((token, value));
                }
            }
        }

        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by_key(|&i| Reverse(entries[i].0.len()));

        let matcher = compile_matcher(&entries, &order);

        tracing::debug!("Built tag map with {} tokens", entries.len());

        Self {
            entries,
            index,
            order,
            matcher,
        }
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no token is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the replacement value for a token.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.index
            .get(token)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Iterate over `(token, value)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    /// Replace every registered token in `template` in one left-to-right pass.
    pub fn apply(&self, template: &str) -> String {
        if self.entries.is_empty() {
            return template.to_string();
        }

        match &self.matcher {
            Some(re) => re
                .replace_all(template, |caps: &Captures| {
                    let token = &caps[0];
                    self.get(token).unwrap_or(token).to_string()
                })
                .into_owned(),
            None => self.apply_literal(template),
        }
    }

    /// Scan without a compiled pattern, trying tokens in priority order at each position.
    fn apply_literal(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        'scan: while let Some(c) = rest.chars().next() {
            for &i in &self.order {
                let (token, value) = &self.entries[i];
                if rest.starts_with(token.as_str()) {
                    out.push_str(value);
                    rest = &rest[token.len()..];
                    continue 'scan;
                }
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }

        out
    }
}

/// Compile the tokens into one alternation of escaped literals.
///
/// Alternation is leftmost-first, so the priority order decides ties at a position.
fn compile_matcher(entries: &[(String, String)], order: &[usize]) -> Option<Regex> {
    if entries.is_empty() {
        return None;
    }

    let pattern = order
        .iter()
        .map(|&i| regex::escape(&entries[i].0))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&pattern)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("Falling back to literal tag scan: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[&str], options: &FormatOptions) -> TagMap {
        TagMap::build(values.iter().map(Some), options)
    }

    #[test]
    fn test_tokens_follow_offsets() {
        let map = build(
            &["a", "b", "c", "d"],
            &FormatOptions::default()
                .with_tag_start(3)
                .with_index_start(2),
        );
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("$3", "c"), ("$4", "d")]);
    }

    #[test]
    fn test_index_start_past_end_is_empty() {
        let map = build(&["a"], &FormatOptions::default().with_index_start(4));
        assert!(map.is_empty());
        assert_eq!(map.apply("foo $0 $4"), "foo $0 $4");
    }

    #[test]
    fn test_negative_index_start() {
        let map = build(&["a", "b"], &FormatOptions::default().with_index_start(-1));
        assert_eq!(map.get("$1"), Some("a"));
        assert_eq!(map.get("$2"), Some("b"));
        assert_eq!(map.get("$0"), None);
    }

    #[test]
    fn test_negative_tag_numbers() {
        let map = build(&["a"], &FormatOptions::default().with_tag_start(-2));
        assert_eq!(map.apply("$-2 $2"), "a $2");
    }

    #[test]
    fn test_absent_entries_register_nothing() {
        let map = TagMap::build(vec![Some("a"), None, Some("c")], &FormatOptions::default());
        assert_eq!(map.len(), 2);
        assert_eq!(map.apply("$0 $1 $2"), "a $1 c");
    }

    #[test]
    fn test_longer_token_wins_at_position() {
        let values: Vec<String> = (0..13).map(|i| format!("v{}", i)).collect();
        let map = TagMap::build(values.iter().map(Some), &FormatOptions::default());
        assert_eq!(map.apply("$1 $12 $123"), "v1 v12 v123");
    }

    #[test]
    fn test_literal_scan_matches_pattern_scan() {
        let values: Vec<String> = (0..13).map(|i| format!("<{}>", i)).collect();
        let map = TagMap::build(
            values.iter().map(Some),
            &FormatOptions::default().with_tag_str(".*"),
        );
        let template = "x.*1 .*12 $1 .*99 .*0.*0 £.*3";
        assert_eq!(map.apply_literal(template), map.apply(template));
        assert_eq!(map.apply(template), "x<1> <12> $1 <9>9 <0><0> £<3>");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let map = build(&["$1", "x"], &FormatOptions::default());
        assert_eq!(map.apply("$0 $1"), "$1 x");
    }
}
