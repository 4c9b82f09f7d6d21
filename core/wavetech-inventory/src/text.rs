//! Helpers for free-text form input.

/// Splits comma-separated input into trimmed, non-empty items.
///
/// ```
/// use wavetech_inventory::text::split_list;
/// assert_eq!(split_list("a, b,,c"), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
