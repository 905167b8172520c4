//! Canonical byte primitives for fact-signed operations.
//!
//! An operation hash is `base58(sha256(fact_hash ‖ fact_signs ‖ memo))`, where
//! every segment is concatenated without delimiters. This crate owns the
//! pieces of that formula that are independent of the operation schema:
//! base58 text encoding, SHA-256 digests, the UTC byte form of timestamps and
//! the byte accumulator that strings segments together.
//!
#![deny(missing_docs)]

/// Byte accumulator and the canonical-bytes trait.
pub mod canonicalizer;
/// Digest primitives.
pub mod digest;
/// Base58 codec.
pub mod encoding;
/// Signing timestamps.
pub mod timestamp;
/// Validation helpers used by canonical types.
pub mod validation;

pub use canonicalizer::{CanonicalBytes, Canonicalizer};
pub use digest::{sum256, OperationHash, DIGEST_LEN};
pub use encoding::{base58_decode, base58_encode, base58check_decode, CodecError};
pub use timestamp::SignedAt;
pub use validation::ValidationError;
