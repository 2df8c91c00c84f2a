use crate::error::{RecaseError, Result};

/// Reformat a `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Fields are not checked for being numeric. Anything past the third
/// hyphen-separated field is ignored.
pub fn format_date(date: &str) -> Result<String> {
    let mut fields = date.split('-');

    match (fields.next(), fields.next(), fields.next()) {
        (Some(year), Some(month), Some(day)) => Ok(format!("{}/{}/{}", day, month, year)),
        _ => Err(RecaseError::MalformedDate(date.to_string())),
    }
}
