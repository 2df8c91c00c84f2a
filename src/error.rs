use thiserror::Error;

/// Errors raised by the conversion functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecaseError {
    /// The value handed to a conversion was not a string.
    #[error("invalid argument: expected a string, found {found}")]
    InvalidArgument { found: &'static str },

    /// A date did not have the `YYYY-MM-DD` shape.
    #[error("malformed date '{0}': expected YYYY-MM-DD")]
    MalformedDate(String),
}

pub type Result<T> = std::result::Result<T, RecaseError>;
