use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Lowercase letter or digit directly followed by an uppercase letter
    static ref HUMP: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^a-zA-Z0-9\s_-]").unwrap();
    static ref DELIMITERS: Regex = Regex::new(r"[\s_-]+").unwrap();
}

/// Split `input` into its words.
///
/// camelCase and PascalCase humps become word boundaries, anything that is not
/// an ASCII letter, digit, whitespace, hyphen or underscore is dropped, and the
/// rest is split on runs of whitespace, hyphens and underscores. Case is kept
/// as found; folding happens when the words are formatted.
pub fn tokenize(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let split_humps = HUMP.replace_all(input, "${1} ${2}");
    let cleaned = DISALLOWED.replace_all(&split_humps, "");

    DELIMITERS
        .split(&cleaned)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
