//! Offline checks of signed operations.

use factsign_schemas::{FactSign, Operation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::SignError;
use crate::hashing::{compute_operation_hash, fact_hash_bytes, signing_message};
use crate::keys::{verify_signature, KeyError};

/// Outcome of checking one fact sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignVerdict {
    /// Signature is valid for the signer over fact hash ‖ network id.
    Ok,
    /// Signature, or the signer's public key, does not check out.
    BadSignature,
    /// Signer suffix names no supported key type.
    UnsupportedSigner,
}

/// Checks that `hash` equals the hash recomputed from the operation's contents.
///
/// An operation without a `hash` does not verify.
pub fn verify_operation_hash(operation: &Operation) -> Result<bool, SignError> {
    let Some(claimed) = &operation.hash else {
        return Ok(false);
    };
    let computed = compute_operation_hash(operation)?;
    debug!(claimed = %claimed, computed = %computed, "checked operation hash");
    Ok(claimed == &computed)
}

/// Checks one fact sign against the message it should commit to.
pub fn verify_fact_sign(fact_sign: &FactSign, message: &[u8]) -> Result<SignVerdict, SignError> {
    let signature = fact_sign.signature_bytes()?;
    let verdict = match verify_signature(&fact_sign.signer, message, &signature) {
        Ok(true) => SignVerdict::Ok,
        Ok(false) | Err(KeyError::Codec(_)) | Err(KeyError::InvalidKey { .. }) => {
            SignVerdict::BadSignature
        }
        Err(KeyError::UnsupportedFormat(_)) => SignVerdict::UnsupportedSigner,
    };
    Ok(verdict)
}

/// Checks every fact sign of an operation for `network_id`, in order.
pub fn verify_fact_signs(
    operation: &Operation,
    network_id: &str,
) -> Result<Vec<SignVerdict>, SignError> {
    let fact_hash = fact_hash_bytes(operation)?;
    let message = signing_message(&fact_hash, network_id);
    operation
        .fact_signs
        .iter()
        .map(|fact_sign| verify_fact_sign(fact_sign, &message))
        .collect()
}
