use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid hex data: {0}")]
    InvalidHex(String),

    #[error("Invalid base64 data: {0}")]
    InvalidBase64(String),

    #[error("tag key '{0}' is undefined")]
    KeyUndefined(String),

    #[error("Tag too long: {0} bytes (max 65535)")]
    TagTooLong(usize),

    #[error("Tagset too large: {0} tags (max 65535)")]
    TagsetTooLarge(usize),

    #[error("Malformed tagset: {0}")]
    MalformedTagset(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
