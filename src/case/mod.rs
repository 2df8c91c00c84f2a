pub mod tokenizer;

use crate::error::{RecaseError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use tokenizer::tokenize;

/// Target naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `firstName`
    Camel,
    /// `first-name`
    #[default]
    Kebab,
    /// `first.name`
    Dot,
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Style::Camel),
            "kebab" | "kebab-case" => Ok(Style::Kebab),
            "dot" | "dot.case" => Ok(Style::Dot),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Camel => write!(f, "camel"),
            Style::Kebab => write!(f, "kebab"),
            Style::Dot => write!(f, "dot"),
        }
    }
}

/// Join `words` under `style`. An empty slice gives an empty string.
pub fn format<S: AsRef<str>>(words: &[S], style: Style) -> String {
    match style {
        Style::Camel => words
            .iter()
            .enumerate()
            .map(|(idx, word)| {
                let word = word.as_ref().to_ascii_lowercase();
                if idx == 0 {
                    word
                } else {
                    capitalize(&word)
                }
            })
            .collect(),
        Style::Kebab => join_lowercase(words, "-"),
        Style::Dot => join_lowercase(words, "."),
    }
}

fn join_lowercase<S: AsRef<str>>(words: &[S], separator: &str) -> String {
    words
        .iter()
        .map(|word| word.as_ref().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Tokenize `input` and format the words under `style`.
pub fn convert(input: &str, style: Style) -> String {
    format(&tokenize(input), style)
}

pub fn to_camel_case(input: &str) -> String {
    convert(input, Style::Camel)
}

pub fn to_kebab_case(input: &str) -> String {
    convert(input, Style::Kebab)
}

pub fn to_dot_case(input: &str) -> String {
    convert(input, Style::Dot)
}

/// Convert a dynamically typed value. Anything but a JSON string is rejected.
pub fn convert_value(value: &Value, style: Style) -> Result<String> {
    match value {
        Value::String(s) => Ok(convert(s, style)),
        other => Err(RecaseError::InvalidArgument {
            found: value_kind(other),
        }),
    }
}

/// Convert an input that may be absent. `None` is rejected.
pub fn convert_optional(input: Option<&str>, style: Style) -> Result<String> {
    input
        .map(|s| convert(s, style))
        .ok_or(RecaseError::InvalidArgument { found: "null" })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
