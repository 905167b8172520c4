use factsign_canonical::{base58_encode, SignedAt};
use factsign_schemas::FactSign;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::errors::SignError;
use crate::keys::KeyWithSuffix;

/// Produces fact signs over a message.
///
/// The timestamp is read from the clock exactly once per signature, and the
/// same text is stored in the fact sign and later fed to hashing.
#[derive(Debug, Clone, Default)]
pub struct SignatureBuilder<C: Clock = SystemClock> {
    clock: C,
}

impl SignatureBuilder {
    /// Builder reading the system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> SignatureBuilder<C> {
    /// Builder reading timestamps from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Signs `message` with `signing_key`.
    ///
    /// `message` is expected to be `fact_hash_bytes ‖ network_id_bytes`; see
    /// [`signing_message`](crate::hashing::signing_message).
    ///
    /// # Errors
    ///
    /// - [`SignError::UnsupportedKeyFormat`] if the key suffix is unknown
    /// - [`SignError::InvalidKey`] if the key body cannot be decoded
    pub fn build(
        &self,
        message: &[u8],
        signing_key: &KeyWithSuffix,
    ) -> Result<FactSign, SignError> {
        let private = signing_key.private_key()?;
        let signed_at = SignedAt::from_datetime(self.clock.now());
        let signature = base58_encode(private.sign(message));
        let signer = private.identity();

        debug!(
            kind = %private.kind(),
            signer = %signer,
            signed_at = %signed_at,
            message_len = message.len(),
            "built fact sign"
        );

        Ok(FactSign::new(signer, signature, signed_at))
    }
}
