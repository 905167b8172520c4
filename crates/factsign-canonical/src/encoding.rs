//! Base58 text encoding (Bitcoin alphabet) used for hashes, signatures and keys.

use thiserror::Error;

/// Error raised when a text-encoded field cannot be decoded.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The field is not valid base58.
    #[error("{field} is not valid base58: {source}")]
    Base58 {
        /// Field that failed to decode.
        field: &'static str,
        /// Underlying decoder error.
        #[source]
        source: bs58::decode::Error,
    },
    /// The field is not a usable ISO-8601 timestamp.
    #[error("{field} ('{value}') is not a valid ISO-8601 timestamp")]
    Timestamp {
        /// Field that failed to parse.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Encodes bytes as base58 text.
pub fn base58_encode(bytes: impl AsRef<[u8]>) -> String {
    bs58::encode(bytes).into_string()
}

/// Decodes base58 text, naming `field` in the error on failure.
pub fn base58_decode(field: &'static str, text: &str) -> Result<Vec<u8>, CodecError> {
    bs58::decode(text)
        .into_vec()
        .map_err(|source| CodecError::Base58 { field, source })
}

/// Decodes base58check text carrying the expected version byte.
///
/// The returned payload still starts with the version byte; only the
/// trailing 4-byte checksum is stripped.
pub fn base58check_decode(
    field: &'static str,
    text: &str,
    version: u8,
) -> Result<Vec<u8>, CodecError> {
    bs58::decode(text)
        .with_check(Some(version))
        .into_vec()
        .map_err(|source| CodecError::Base58 { field, source })
}
