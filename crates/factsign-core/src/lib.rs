//! Fact signing for blockchain operations.
//!
//! This crate provides:
//! - [`SignatureBuilder`]: signs `fact_hash ‖ network_id` with a suffixed key
//! - [`OperationSigner`]: appends the resulting fact sign to an operation and
//!   recomputes the operation hash
//! - Offline verification of operation hashes and fact signs
//!
//! Core invariants:
//! - `fact_signs` is append-only; earlier entries are never touched
//! - The operation hash is always recomputed from fact hash, fact signs and memo
//! - Signing never mutates its input; a fresh operation is returned
//!
//! ## Quick Start
//!
//! ```rust
//! use factsign_core::{KeyWithSuffix, OperationSigner, SignerConfig};
//! use serde_json::json;
//!
//! let key = KeyWithSuffix::new(factsign_canonical::base58_encode([7u8; 32]) + "spr");
//! let signer = OperationSigner::new(SignerConfig::new("mitum"), key);
//!
//! let operation = json!({
//!     "_hint": "example-operation",
//!     "memo": "",
//!     "fact": { "hash": factsign_canonical::base58_encode(b"fact") },
//!     "fact_signs": []
//! });
//!
//! let signed = signer.sign_operation(operation)?.expect("object input");
//! assert_eq!(signed.fact_signs.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
#![deny(missing_docs)]

/// Fact sign construction.
pub mod builder;
/// Timestamp sources.
pub mod clock;
/// Error types for signing operations.
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod signer;
pub mod verification;

pub use builder::SignatureBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::SignError;
pub use hashing::{compute_operation_hash, fact_signs_bytes, operation_hash, signing_message};
pub use keys::{KeyError, KeyKind, KeyWithSuffix, PrivateKey};
pub use signer::{OperationInput, OperationSigner, SignerConfig};
pub use verification::{verify_fact_sign, verify_fact_signs, verify_operation_hash, SignVerdict};
