pub mod case;
pub mod cli;
pub mod config;
pub mod converter;
pub mod date;
pub mod error;
pub mod logging;

pub use case::{
    convert, convert_optional, convert_value, format, to_camel_case, to_dot_case, to_kebab_case,
    tokenize, Style,
};
pub use config::Config;
pub use converter::Converter;
pub use date::format_date;
pub use error::{RecaseError, Result};

#[derive(Debug, Clone, Default)]
pub struct ConvertResult {
    pub converted_count: usize,
    pub failed_count: usize,
    pub entries: Vec<Conversion>,
}

impl ConvertResult {
    pub fn push(&mut self, entry: Conversion) {
        match entry.outcome {
            Ok(_) => self.converted_count += 1,
            Err(_) => self.failed_count += 1,
        }
        self.entries.push(entry);
    }

    pub fn extend(&mut self, other: ConvertResult) {
        self.converted_count += other.converted_count;
        self.failed_count += other.failed_count;
        self.entries.extend(other.entries);
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub struct Conversion {
    /// Where the input came from: `<args>`, `<stdin>` or a file path
    pub source: String,
    pub line: usize,
    pub input: String,
    pub outcome: std::result::Result<String, RecaseError>,
}
