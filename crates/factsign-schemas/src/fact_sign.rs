//! Fact sign: one party's endorsement of a fact.

use factsign_canonical::{base58_decode, CanonicalBytes, CodecError, SignedAt};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Signature entry in an operation's `fact_signs` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSign {
    /// Identity of the signing party (public key text with its type suffix).
    pub signer: String,
    /// Signature bytes (base58).
    pub signature: String,
    /// When the signature was produced.
    pub signed_at: SignedAt,
    /// Any other members of the entry (e.g. `_hint`), carried through
    /// untouched and never hashed.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FactSign {
    /// Creates an entry with no extra members.
    pub fn new(signer: String, signature: String, signed_at: SignedAt) -> Self {
        Self {
            signer,
            signature,
            signed_at,
            extra: Map::new(),
        }
    }

    /// Decodes the base58 signature into raw bytes.
    pub fn signature_bytes(&self) -> Result<Vec<u8>, CodecError> {
        base58_decode("fact_signs.signature", &self.signature)
    }
}

impl CanonicalBytes for FactSign {
    /// `UTF8(signer) ‖ signature bytes ‖ utc_bytes(signed_at)`.
    fn canonical_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let signature = self.signature_bytes()?;
        let signed_at = self.signed_at.utc_bytes()?;

        let mut bytes = Vec::with_capacity(self.signer.len() + signature.len() + signed_at.len());
        bytes.extend_from_slice(self.signer.as_bytes());
        bytes.extend_from_slice(&signature);
        bytes.extend_from_slice(&signed_at);
        Ok(bytes)
    }
}
