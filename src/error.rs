use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid UTF-8 input: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
    /// The requested key is not in the table.
    #[error("variable `{0}` is not set")]
    Missing(String),
    /// The stored value does not parse as the requested type.
    #[error("variable `{key}` has value {value:?}, which is not a valid {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}
