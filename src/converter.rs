use crate::case::{convert, convert_value, Style};
use crate::error::RecaseError;
use crate::{Config, Conversion, ConvertResult};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::BufRead;
use std::path::Path;

pub const ARGS_SOURCE: &str = "<args>";
pub const STDIN_SOURCE: &str = "<stdin>";

/// Applies one configured conversion to every input it is handed.
pub struct Converter {
    style: Style,
    skip_empty: bool,
    json_input: bool,
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        Self {
            style: config.style,
            skip_empty: config.skip_empty,
            json_input: config.json_input,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Convert command-line arguments, numbering them from 1.
    pub fn convert_args(&self, inputs: &[String]) -> ConvertResult {
        let mut result = ConvertResult::default();
        for (idx, input) in inputs.iter().enumerate() {
            self.push(&mut result, ARGS_SOURCE, idx + 1, input);
        }
        result
    }

    pub fn convert_file(&self, path: &Path) -> Result<ConvertResult> {
        let content =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        self.convert_reader(content.as_slice(), &path.display().to_string())
    }

    /// Convert every line of `reader`. A line that is not valid UTF-8 is
    /// rejected on its own and the remaining lines still convert.
    pub fn convert_reader<R: BufRead>(&self, reader: R, source: &str) -> Result<ConvertResult> {
        let mut result = ConvertResult::default();
        for (idx, bytes) in reader.split(b'\n').enumerate() {
            let mut bytes = bytes.with_context(|| format!("Failed to read from {}", source))?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }

            match String::from_utf8(bytes) {
                Ok(line) => self.push(&mut result, source, idx + 1, &line),
                Err(e) => {
                    let input = String::from_utf8_lossy(e.as_bytes()).into_owned();
                    let outcome = Err(RecaseError::InvalidArgument {
                        found: "invalid UTF-8",
                    });
                    self.record(&mut result, source, idx + 1, &input, outcome);
                }
            }
        }
        Ok(result)
    }

    /// Convert `content` line by line.
    pub fn convert_text(&self, content: &str, source: &str) -> ConvertResult {
        let mut result = ConvertResult::default();
        for (idx, line) in content.lines().enumerate() {
            self.push(&mut result, source, idx + 1, line);
        }
        result
    }

    fn push(&self, result: &mut ConvertResult, source: &str, line: usize, input: &str) {
        // Blank lines carry no JSON value at all
        if self.json_input && input.trim().is_empty() {
            return;
        }

        let outcome = self.convert_one(input);
        self.record(result, source, line, input, outcome);
    }

    fn record(
        &self,
        result: &mut ConvertResult,
        source: &str,
        line: usize,
        input: &str,
        outcome: std::result::Result<String, RecaseError>,
    ) {
        match &outcome {
            Ok(output) if output.is_empty() && self.skip_empty => {
                log::debug!("{}:{}: skipping empty conversion", source, line);
                return;
            }
            Err(e) => log::warn!("{}:{}: {}", source, line, e),
            Ok(_) => {}
        }

        result.push(Conversion {
            source: source.to_string(),
            line,
            input: input.to_string(),
            outcome,
        });
    }

    fn convert_one(&self, input: &str) -> std::result::Result<String, RecaseError> {
        if !self.json_input {
            return Ok(convert(input, self.style));
        }

        match serde_json::from_str::<Value>(input) {
            Ok(value) => convert_value(&value, self.style),
            Err(_) => Err(RecaseError::InvalidArgument {
                found: "malformed JSON",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn converter(style: Style) -> Converter {
        Converter::new(&Config {
            style,
            ..Default::default()
        })
    }

    fn json_converter(style: Style) -> Converter {
        Converter::new(&Config {
            style,
            json_input: true,
            ..Default::default()
        })
    }

    fn outputs(result: &ConvertResult) -> Vec<String> {
        result
            .entries
            .iter()
            .map(|e| e.outcome.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_convert_args() {
        let args = vec!["first name".to_string(), "SCREEN_NAME".to_string()];
        let result = converter(Style::Camel).convert_args(&args);

        assert_eq!(result.converted_count, 2);
        assert_eq!(result.failed_count, 0);
        assert_eq!(outputs(&result), vec!["firstName", "screenName"]);
        assert_eq!(result.entries[1].line, 2);
        assert_eq!(result.entries[1].source, ARGS_SOURCE);
    }

    #[test]
    fn test_convert_text_keeps_empty_lines() {
        let result = converter(Style::Dot).convert_text("user_id\n\n---\nmobile-number", "t");

        assert_eq!(result.total(), 4);
        assert_eq!(outputs(&result), vec!["user.id", "", "", "mobile.number"]);
    }

    #[test]
    fn test_skip_empty() {
        let converter = Converter::new(&Config {
            style: Style::Kebab,
            skip_empty: true,
            ..Default::default()
        });
        let result = converter.convert_text("firstName\n   \n!!\nuser_id", "t");

        assert_eq!(outputs(&result), vec!["first-name", "user-id"]);
        assert_eq!(result.entries[1].line, 4);
    }

    #[test]
    fn test_json_input() {
        let content = "\"first name\"\nnull\n42\n\n{\"a\": 1}\nnot json\n\"\"";
        let result = json_converter(Style::Camel).convert_text(content, "t");

        assert_eq!(result.total(), 6);
        assert_eq!(result.converted_count, 2);
        assert_eq!(result.failed_count, 4);
        assert_eq!(result.entries[0].outcome, Ok("firstName".to_string()));
        assert_eq!(
            result.entries[1].outcome,
            Err(RecaseError::InvalidArgument { found: "null" })
        );
        assert_eq!(
            result.entries[2].outcome,
            Err(RecaseError::InvalidArgument { found: "number" })
        );
        assert_eq!(
            result.entries[4].outcome,
            Err(RecaseError::InvalidArgument {
                found: "malformed JSON"
            })
        );
        assert_eq!(result.entries[5].outcome, Ok(String::new()));
    }

    #[test]
    fn test_convert_reader() {
        let reader = Cursor::new("firstName\nuser_id\n");
        let result = converter(Style::Kebab)
            .convert_reader(reader, STDIN_SOURCE)
            .unwrap();

        assert_eq!(outputs(&result), vec!["first-name", "user-id"]);
        assert_eq!(result.entries[0].source, STDIN_SOURCE);
    }

    #[test]
    fn test_convert_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "first name\nuser_id\n").unwrap();

        let result = converter(Style::Dot).convert_file(&path).unwrap();
        assert_eq!(outputs(&result), vec!["first.name", "user.id"]);

        fs::write(&path, "first name\r\nuser_id\r\n").unwrap();
        let result = converter(Style::Dot).convert_file(&path).unwrap();
        assert_eq!(outputs(&result), vec!["first.name", "user.id"]);

        let missing = dir.path().join("missing.txt");
        assert!(converter(Style::Dot).convert_file(&missing).is_err());
    }

    #[test]
    fn test_invalid_utf8_line_rejected_alone() {
        let reader = Cursor::new(b"firstName\n\xff\xfe bad\nuser_id\n".to_vec());
        let result = converter(Style::Kebab)
            .convert_reader(reader, STDIN_SOURCE)
            .unwrap();

        assert_eq!(result.total(), 3);
        assert_eq!(result.converted_count, 2);
        assert_eq!(result.failed_count, 1);
        assert_eq!(result.entries[0].outcome, Ok("first-name".to_string()));
        assert_eq!(
            result.entries[1].outcome,
            Err(RecaseError::InvalidArgument {
                found: "invalid UTF-8"
            })
        );
        assert_eq!(result.entries[1].line, 2);
        assert_eq!(result.entries[2].outcome, Ok("user-id".to_string()));
    }

    #[test]
    fn test_extend_results() {
        let converter = json_converter(Style::Kebab);
        let mut total = converter.convert_text("\"a b\"", "one");
        total.extend(converter.convert_text("true", "two"));

        assert_eq!(total.total(), 2);
        assert_eq!(total.converted_count, 1);
        assert_eq!(total.failed_count, 1);
    }
}
