//! Positional list formatting.

use regex::Captures;

use crate::format::options::FormatOptions;
use crate::format::tags::TagMap;

/// Format a list of values into a string using the `$n` tags.
///
/// By default index 0 replaces `$0` and numbering goes up by one from there.
/// Tags without a corresponding value are left as they are.
///
/// ```
/// use taglist::format::{format_list, FormatOptions};
///
/// assert_eq!(format_list("foo $0 baz", &["bar"], None), "foo bar baz");
///
/// let opts = FormatOptions::default().with_tag_str("&");
/// assert_eq!(format_list("foo &0 baz", &["bar"], Some(&opts)), "foo bar baz");
/// ```
pub fn format_list<S: AsRef<str>>(
    template: &str,
    values: &[S],
    options: Option<&FormatOptions>,
) -> String {
    if values.is_empty() {
        return template.to_string();
    }

    let options = options.cloned().unwrap_or_default();
    TagMap::build(values.iter().map(Some), &options).apply(template)
}

/// Format a list of optional values; absent entries leave their tag untouched.
pub fn format_list_opt<S: AsRef<str>>(
    template: &str,
    values: &[Option<S>],
    options: Option<&FormatOptions>,
) -> String {
    if values.is_empty() {
        return template.to_string();
    }

    let options = options.cloned().unwrap_or_default();
    TagMap::build(values.iter().map(Option::as_ref), &options).apply(template)
}

/// Format the capture groups of a regex match into a string.
///
/// Group 0 is the whole match; groups that did not participate are absent.
pub fn format_captures(
    template: &str,
    captures: &Captures<'_>,
    options: Option<&FormatOptions>,
) -> String {
    let values: Vec<Option<&str>> = captures
        .iter()
        .map(|group| group.map(|m| m.as_str()))
        .collect();

    format_list_opt(template, &values, options)
}
