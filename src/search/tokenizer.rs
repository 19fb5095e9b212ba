/// Lowercase ASCII-alphanumeric tokens of `text`.
///
/// Any run of characters outside `[A-Za-z0-9]` is a separator, so non-ASCII
/// letters split tokens rather than joining them. Empty tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect()
}
