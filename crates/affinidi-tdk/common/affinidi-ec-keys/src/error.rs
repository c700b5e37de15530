//! Error types for EC key conversion and validation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcKeyError {
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("invalid EC public key")]
    InvalidPublicKey,

    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Invalid length for {field}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Missing key parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Key error: {0}")]
    KeyError(String),
}

pub type Result<T> = std::result::Result<T, EcKeyError>;
