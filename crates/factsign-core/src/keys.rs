//! Signing keys tagged with a type suffix.
//!
//! Key text ends in a three-character tag that selects the algorithm:
//!
//! | private | public | algorithm | private key body |
//! |---------|--------|-----------|------------------|
//! | `mpr`   | `mpu`  | secp256k1 ECDSA over SHA-256, DER signature | Bitcoin WIF |
//! | `spr`   | `spu`  | Ed25519 | base58 of the 32-byte seed |
//!
//! Public identities are `base58(public key) + public suffix`, using the
//! compressed SEC1 point for secp256k1.

use std::fmt;

use factsign_canonical::{base58_decode, base58_encode, base58check_decode, CodecError};
use thiserror::Error;

/// Length of the type suffix on key text.
pub const SUFFIX_LEN: usize = 3;

const WIF_VERSION: u8 = 0x80;
const SECRET_LEN: usize = 32;

/// Errors raised while interpreting key text.
#[derive(Error, Debug)]
pub enum KeyError {
    /// The suffix does not name a supported key type.
    #[error("unsupported key format: '{0}'")]
    UnsupportedFormat(String),
    /// The suffix is known but the key body is unusable.
    #[error("invalid {kind} key: {reason}")]
    InvalidKey {
        /// Key type selected by the suffix.
        kind: KeyKind,
        /// Reason for invalidity.
        reason: String,
    },
    /// The key body is not valid base58.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Signature algorithm selected by a key suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// secp256k1 ECDSA.
    Secp256k1,
    /// Ed25519.
    Ed25519,
}

impl KeyKind {
    /// Suffix carried by private key text.
    pub const fn private_suffix(self) -> &'static str {
        match self {
            KeyKind::Secp256k1 => "mpr",
            KeyKind::Ed25519 => "spr",
        }
    }

    /// Suffix carried by signer identities.
    pub const fn public_suffix(self) -> &'static str {
        match self {
            KeyKind::Secp256k1 => "mpu",
            KeyKind::Ed25519 => "spu",
        }
    }

    fn from_private_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "mpr" => Some(KeyKind::Secp256k1),
            "spr" => Some(KeyKind::Ed25519),
            _ => None,
        }
    }

    fn from_public_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "mpu" => Some(KeyKind::Secp256k1),
            "spu" => Some(KeyKind::Ed25519),
            _ => None,
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Secp256k1 => f.write_str("secp256k1"),
            KeyKind::Ed25519 => f.write_str("ed25519"),
        }
    }
}

/// Splits `text` into `(body, suffix)`; `None` when too short to carry a suffix.
fn split_suffix(text: &str) -> Option<(&str, &str)> {
    if text.len() <= SUFFIX_LEN || !text.is_char_boundary(text.len() - SUFFIX_LEN) {
        return None;
    }
    Some(text.split_at(text.len() - SUFFIX_LEN))
}

/// Private key text with its type suffix, e.g. `L1...mpr`.
///
/// The text is kept as given; it is interpreted only when a signature is
/// produced, so an unsupported suffix surfaces at signing time.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyWithSuffix(String);

impl KeyWithSuffix {
    /// Wraps key text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Key type selected by the suffix.
    pub fn kind(&self) -> Result<KeyKind, KeyError> {
        let (_, suffix) = self.split()?;
        KeyKind::from_private_suffix(suffix)
            .ok_or_else(|| KeyError::UnsupportedFormat(suffix.to_string()))
    }

    /// Decodes the key body into a usable private key.
    pub fn private_key(&self) -> Result<PrivateKey, KeyError> {
        let (body, _) = self.split()?;
        match self.kind()? {
            KeyKind::Secp256k1 => {
                let payload = base58check_decode("signing key", body, WIF_VERSION)?;
                // version ‖ secret ‖ optional 0x01 compression flag
                let secret = match payload.len() {
                    33 => &payload[1..],
                    34 if payload[33] == 0x01 => &payload[1..33],
                    n => {
                        return Err(KeyError::InvalidKey {
                            kind: KeyKind::Secp256k1,
                            reason: format!("WIF payload has {} bytes", n),
                        })
                    }
                };
                let key = k256::ecdsa::SigningKey::from_slice(secret).map_err(|e| {
                    KeyError::InvalidKey {
                        kind: KeyKind::Secp256k1,
                        reason: e.to_string(),
                    }
                })?;
                Ok(PrivateKey::Secp256k1(key))
            }
            KeyKind::Ed25519 => {
                let seed = base58_decode("signing key", body)?;
                let seed: [u8; SECRET_LEN] =
                    seed.as_slice().try_into().map_err(|_| KeyError::InvalidKey {
                        kind: KeyKind::Ed25519,
                        reason: format!("seed has {} bytes", seed.len()),
                    })?;
                Ok(PrivateKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&seed)))
            }
        }
    }

    fn split(&self) -> Result<(&str, &str), KeyError> {
        split_suffix(&self.0).ok_or_else(|| KeyError::UnsupportedFormat(self.0.clone()))
    }
}

impl fmt::Debug for KeyWithSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = split_suffix(&self.0).map(|(_, s)| s).unwrap_or("");
        write!(f, "KeyWithSuffix(<redacted>{})", suffix)
    }
}

impl From<String> for KeyWithSuffix {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Decoded private key, ready to sign.
pub enum PrivateKey {
    /// secp256k1 signing key.
    Secp256k1(k256::ecdsa::SigningKey),
    /// Ed25519 signing key.
    Ed25519(ed25519_dalek::SigningKey),
}

impl PrivateKey {
    /// Key type.
    pub fn kind(&self) -> KeyKind {
        match self {
            PrivateKey::Secp256k1(_) => KeyKind::Secp256k1,
            PrivateKey::Ed25519(_) => KeyKind::Ed25519,
        }
    }

    /// Signer identity derived from the public key.
    pub fn identity(&self) -> String {
        let public = match self {
            PrivateKey::Secp256k1(key) => {
                base58_encode(key.verifying_key().to_encoded_point(true).as_bytes())
            }
            PrivateKey::Ed25519(key) => base58_encode(key.verifying_key().to_bytes()),
        };
        public + self.kind().public_suffix()
    }

    /// Signs `message`, returning raw signature bytes.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        match self {
            PrivateKey::Secp256k1(key) => {
                use k256::ecdsa::signature::Signer;
                let signature: k256::ecdsa::Signature = key.sign(message);
                signature.to_der().as_bytes().to_vec()
            }
            PrivateKey::Ed25519(key) => {
                use ed25519_dalek::Signer;
                key.sign(message).to_bytes().to_vec()
            }
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({}, <redacted>)", self.kind())
    }
}

/// Verifies `signature` over `message` against a signer identity.
///
/// Returns `Ok(false)` for a well-formed identity whose key or signature
/// bytes do not check out, and `UnsupportedFormat` for an unknown suffix.
pub fn verify_signature(signer: &str, message: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
    let (body, suffix) =
        split_suffix(signer).ok_or_else(|| KeyError::UnsupportedFormat(signer.to_string()))?;
    let kind = KeyKind::from_public_suffix(suffix)
        .ok_or_else(|| KeyError::UnsupportedFormat(suffix.to_string()))?;
    let public = base58_decode("signer", body)?;

    let valid = match kind {
        KeyKind::Secp256k1 => {
            use k256::ecdsa::signature::Verifier;
            let Ok(key) = k256::ecdsa::VerifyingKey::from_sec1_bytes(&public) else {
                return Ok(false);
            };
            let Ok(signature) = k256::ecdsa::Signature::from_der(signature) else {
                return Ok(false);
            };
            key.verify(message, &signature).is_ok()
        }
        KeyKind::Ed25519 => {
            use ed25519_dalek::Verifier;
            let Ok(public) = <[u8; 32]>::try_from(public.as_slice()) else {
                return Ok(false);
            };
            let Ok(key) = ed25519_dalek::VerifyingKey::from_bytes(&public) else {
                return Ok(false);
            };
            let Ok(signature) = ed25519_dalek::Signature::from_slice(signature) else {
                return Ok(false);
            };
            key.verify(message, &signature).is_ok()
        }
    };
    Ok(valid)
}
