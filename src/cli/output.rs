use crate::case::Style;
use crate::ConvertResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEntry {
    source: String,
    line: usize,
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    style: String,
    total: usize,
    failed: usize,
    results: Vec<JsonEntry>,
}

pub fn print_results(result: &ConvertResult, style: Style, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_results(result, colored_output),
        OutputFormat::Json => print_json_results(result, style),
    }
}

fn print_text_results(result: &ConvertResult, colored_output: bool) {
    for entry in &result.entries {
        match &entry.outcome {
            Ok(output) => println!("{}", output),
            Err(e) => {
                let location = format!("{}:{}", entry.source, entry.line);
                if colored_output {
                    eprintln!("{} {}", location.blue().bold(), e.to_string().red());
                } else {
                    eprintln!("{} {}", location, e);
                }
            }
        }
    }
}

fn json_output(result: &ConvertResult, style: Style) -> JsonOutput {
    let results = result
        .entries
        .iter()
        .map(|e| JsonEntry {
            source: e.source.clone(),
            line: e.line,
            input: e.input.clone(),
            output: e.outcome.as_ref().ok().cloned(),
            error: e.outcome.as_ref().err().map(|err| err.to_string()),
        })
        .collect();

    JsonOutput {
        style: style.to_string(),
        total: result.total(),
        failed: result.failed_count,
        results,
    }
}

fn print_json_results(result: &ConvertResult, style: Style) {
    match serde_json::to_string_pretty(&json_output(result, style)) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("failed to serialize results: {}", e),
    }
}

/// Report rejected inputs on stderr. Silent when everything converted.
pub fn print_summary(result: &ConvertResult, colored: bool) {
    if result.failed_count == 0 {
        return;
    }

    let input_word = if result.total() == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} rejected",
            "✗".red().bold(),
            result.failed_count.to_string().red().bold(),
            result.total(),
            input_word
        );
    } else {
        eprintln!(
            "✗ {} of {} {} rejected",
            result.failed_count,
            result.total(),
            input_word
        );
    }
}

pub fn print_words(words: &[String]) {
    for word in words {
        println!("{}", word);
    }
}
