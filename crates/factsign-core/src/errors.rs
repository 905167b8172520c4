use factsign_canonical::CodecError;
use thiserror::Error;

use crate::keys::KeyError;

/// Errors raised while signing or verifying an operation.
#[derive(Error, Debug)]
pub enum SignError {
    /// The input could not be read as an operation record.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// `fact.hash` is missing or not valid base58.
    #[error("malformed fact: {0}")]
    MalformedFact(String),
    /// The signing key's suffix does not name a supported key type.
    #[error("unsupported key format: '{0}'")]
    UnsupportedKeyFormat(String),
    /// The key type is supported but the key body is unusable.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),
    /// A signature or timestamp field failed to decode.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    /// Reading the operation file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<KeyError> for SignError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::UnsupportedFormat(suffix) => SignError::UnsupportedKeyFormat(suffix),
            other => SignError::InvalidKey(other.to_string()),
        }
    }
}
