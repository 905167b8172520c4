use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;

use crate::encoding::{base58_decode, base58_encode};
use crate::validation::ValidationError;

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// Computes the SHA-256 digest of `bytes`.
pub fn sum256(bytes: impl AsRef<[u8]>) -> [u8; DIGEST_LEN] {
    Sha256::digest(bytes.as_ref()).into()
}

/// Content hash of an operation: SHA-256 digest rendered as base58 text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationHash(String);

impl OperationHash {
    /// Hashes `bytes` with SHA-256 and wraps the base58 text.
    pub fn of(bytes: impl AsRef<[u8]>) -> Self {
        Self(base58_encode(sum256(bytes)))
    }

    /// Parses a validated hash: base58 text decoding to exactly 32 bytes.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let bytes = base58_decode("hash", &s).map_err(|_| ValidationError::PatternMismatch {
            field: "hash",
            value: s.clone(),
        })?;
        if bytes.len() != DIGEST_LEN {
            return Err(ValidationError::InvalidLength {
                field: "hash",
                expected: DIGEST_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(s))
    }

    /// Returns the base58 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<OperationHash> for String {
    fn from(value: OperationHash) -> Self {
        value.0
    }
}

impl AsRef<str> for OperationHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum256_matches_known_vector() {
        assert_eq!(
            hex::encode(sum256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn parse_accepts_what_of_produces() {
        let hash = OperationHash::of(b"payload");
        assert_eq!(OperationHash::parse(hash.as_str()).unwrap(), hash);
    }

    #[test]
    fn parse_rejects_short_digest() {
        let err = OperationHash::parse(base58_encode([1u8; 16])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLength {
                field: "hash",
                expected: 32,
                actual: 16
            }
        );
    }
}
