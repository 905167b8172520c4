//! Signing message and operation hash.
//!
//! - signing message: `fact_hash_bytes ‖ UTF8(network_id)`
//! - operation hash: `base58(sha256(fact_hash_bytes ‖ fact_signs_bytes ‖ UTF8(memo)))`
//!
//! where `fact_signs_bytes` concatenates, per entry and in order,
//! `UTF8(signer) ‖ signature bytes ‖ utc_bytes(signed_at)`.

use factsign_canonical::{base58_decode, Canonicalizer, CodecError, OperationHash};
use factsign_schemas::{FactSign, Operation};

use crate::errors::SignError;

/// Builds the payload a fact sign commits to.
pub fn signing_message(fact_hash: &[u8], network_id: &str) -> Vec<u8> {
    let mut c = Canonicalizer::new();
    c.push_bytes(fact_hash).push_str(network_id);
    c.finish()
}

/// Decodes `fact.hash` of an operation into raw bytes.
///
/// # Errors
///
/// Returns [`SignError::MalformedFact`] if the hash is missing, not a string,
/// or not valid base58. An empty string decodes to no bytes.
pub fn fact_hash_bytes(operation: &Operation) -> Result<Vec<u8>, SignError> {
    let text = operation
        .fact
        .hash()
        .ok_or_else(|| SignError::MalformedFact("missing fact.hash".to_string()))?;
    base58_decode("fact.hash", text).map_err(|e| SignError::MalformedFact(e.to_string()))
}

/// Concatenates the canonical bytes of every fact sign, in order.
pub fn fact_signs_bytes(fact_signs: &[FactSign]) -> Result<Vec<u8>, CodecError> {
    let mut c = Canonicalizer::new();
    c.push_all(fact_signs)?;
    Ok(c.finish())
}

/// Computes the operation hash from its three inputs.
pub fn operation_hash(
    fact_hash: &[u8],
    fact_signs: &[FactSign],
    memo: &str,
) -> Result<OperationHash, CodecError> {
    let signs = fact_signs_bytes(fact_signs)?;
    let mut c = Canonicalizer::new();
    c.push_bytes(fact_hash).push_bytes(signs).push_str(memo);
    Ok(c.digest())
}

/// Recomputes the hash of an operation as it currently stands.
pub fn compute_operation_hash(operation: &Operation) -> Result<OperationHash, SignError> {
    let fact_hash = fact_hash_bytes(operation)?;
    Ok(operation_hash(&fact_hash, &operation.fact_signs, &operation.memo)?)
}
