use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelioError {
    #[error("Invalid hash length: expected 32 hex digits, got {0}")]
    InvalidHashLength(usize),

    #[error("Invalid hex digit in hash: {0:?}")]
    InvalidHashDigit(char),
}

pub type Result<T> = std::result::Result<T, HelioError>;
