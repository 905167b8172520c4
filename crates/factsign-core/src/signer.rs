//! Operation signer: appends a fact sign and refreshes the operation hash.

use std::fs;
use std::path::{Path, PathBuf};

use factsign_schemas::Operation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::builder::SignatureBuilder;
use crate::clock::{Clock, SystemClock};
use crate::errors::SignError;
use crate::hashing::{fact_hash_bytes, operation_hash, signing_message};
use crate::keys::KeyWithSuffix;

/// Signer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerConfig {
    /// Network identifier appended to the fact hash in the signed message.
    pub network_id: String,
}

impl SignerConfig {
    /// Configuration for `network_id`.
    pub fn new(network_id: impl Into<String>) -> Self {
        Self {
            network_id: network_id.into(),
        }
    }
}

/// Where an operation to sign comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationInput {
    /// Path to a JSON-encoded operation.
    FilePath(PathBuf),
    /// JSON object not yet checked against the operation schema.
    Record(Map<String, Value>),
    /// Already-typed operation.
    Parsed(Operation),
    /// Anything else; signing yields no result.
    Unrecognized,
}

impl OperationInput {
    /// Resolves the input to an operation.
    ///
    /// Returns `Ok(None)` for [`OperationInput::Unrecognized`] and for files
    /// whose JSON is not an object.
    ///
    /// # Errors
    ///
    /// - [`SignError::Io`] if the file cannot be read
    /// - [`SignError::InvalidInput`] if the JSON cannot be parsed or does not
    ///   have the shape of an operation
    pub fn resolve(self) -> Result<Option<Operation>, SignError> {
        match self {
            OperationInput::FilePath(path) => {
                let text = fs::read_to_string(&path)?;
                let value: Value = serde_json::from_str(&text).map_err(|e| {
                    SignError::InvalidInput(format!("{}: {}", path.display(), e))
                })?;
                match value {
                    Value::Object(map) => OperationInput::Record(map).resolve(),
                    _ => Ok(None),
                }
            }
            OperationInput::Record(map) => serde_json::from_value(Value::Object(map))
                .map(Some)
                .map_err(|e| SignError::InvalidInput(e.to_string())),
            OperationInput::Parsed(operation) => Ok(Some(operation)),
            OperationInput::Unrecognized => Ok(None),
        }
    }
}

impl From<Value> for OperationInput {
    /// Strings are file paths, objects are records, anything else is unrecognized.
    fn from(value: Value) -> Self {
        match value {
            Value::String(path) => OperationInput::FilePath(PathBuf::from(path)),
            Value::Object(map) => OperationInput::Record(map),
            _ => OperationInput::Unrecognized,
        }
    }
}

impl From<Operation> for OperationInput {
    fn from(value: Operation) -> Self {
        OperationInput::Parsed(value)
    }
}

impl From<PathBuf> for OperationInput {
    fn from(value: PathBuf) -> Self {
        OperationInput::FilePath(value)
    }
}

impl From<&Path> for OperationInput {
    fn from(value: &Path) -> Self {
        OperationInput::FilePath(value.to_path_buf())
    }
}

/// Adds fact signs to operations.
///
/// A signer is immutable: [`with_network_id`](Self::with_network_id) returns a
/// new signer, and changing keys means constructing a new one.
#[derive(Debug, Clone)]
pub struct OperationSigner<C: Clock = SystemClock> {
    config: SignerConfig,
    signing_key: KeyWithSuffix,
    builder: SignatureBuilder<C>,
}

impl OperationSigner {
    /// Signer stamping fact signs with the system clock.
    pub fn new(config: SignerConfig, signing_key: KeyWithSuffix) -> Self {
        Self::with_clock(config, signing_key, SystemClock)
    }
}

impl<C: Clock> OperationSigner<C> {
    /// Signer stamping fact signs with `clock`.
    pub fn with_clock(config: SignerConfig, signing_key: KeyWithSuffix, clock: C) -> Self {
        Self {
            config,
            signing_key,
            builder: SignatureBuilder::with_clock(clock),
        }
    }

    /// Returns a signer for another network, keeping the key and clock.
    pub fn with_network_id(self, network_id: impl Into<String>) -> Self {
        Self {
            config: SignerConfig::new(network_id),
            ..self
        }
    }

    /// Network identifier bound into every signature.
    pub fn network_id(&self) -> &str {
        &self.config.network_id
    }

    /// Resolves `input` and signs it.
    ///
    /// Returns `Ok(None)` when the input is not something that can hold an
    /// operation; see [`OperationInput::resolve`].
    #[instrument(skip_all, fields(network_id = %self.network_id()))]
    pub fn sign_operation(
        &self,
        input: impl Into<OperationInput>,
    ) -> Result<Option<Operation>, SignError> {
        match input.into().resolve()? {
            Some(operation) => self.sign(&operation).map(Some),
            None => {
                warn!("input does not hold an operation; nothing signed");
                Ok(None)
            }
        }
    }

    /// Appends a fact sign to a copy of `operation` and recomputes its hash.
    ///
    /// The returned operation carries exactly `memo`, `_hint`, `fact`,
    /// `fact_signs` and `hash`. The input is left untouched.
    ///
    /// # Errors
    ///
    /// - [`SignError::MalformedFact`] if `fact.hash` is missing or invalid
    /// - [`SignError::UnsupportedKeyFormat`] / [`SignError::InvalidKey`] for key problems
    /// - [`SignError::Codec`] if an existing fact sign cannot be decoded
    pub fn sign(&self, operation: &Operation) -> Result<Operation, SignError> {
        let fact_hash = fact_hash_bytes(operation)?;
        let message = signing_message(&fact_hash, self.network_id());
        let fact_sign = self.builder.build(&message, &self.signing_key)?;

        let mut fact_signs = operation.fact_signs.clone();
        fact_signs.push(fact_sign);

        let hash = operation_hash(&fact_hash, &fact_signs, &operation.memo)?;
        debug!(
            fact_hash = operation.fact.hash().unwrap_or_default(),
            fact_signs = fact_signs.len(),
            hash = %hash,
            "signed operation"
        );

        Ok(Operation {
            memo: operation.memo.clone(),
            hint: operation.hint.clone(),
            fact: operation.fact.clone(),
            fact_signs,
            hash: Some(hash),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use factsign_canonical::base58_encode;
    use serde_json::json;

    fn signer(network_id: &str) -> OperationSigner<FixedClock> {
        OperationSigner::with_clock(
            SignerConfig::new(network_id),
            KeyWithSuffix::new(base58_encode([5u8; 32]) + "spr"),
            FixedClock(Utc.with_ymd_and_hms(2022, 2, 2, 2, 2, 2).unwrap()),
        )
    }

    fn record() -> Value {
        json!({
            "_hint": "h",
            "memo": "m",
            "fact": { "hash": base58_encode(b"AB") }
        })
    }

    #[test]
    fn non_object_values_are_unrecognized() {
        for value in [json!(1), json!(null), json!(true), json!([1, 2])] {
            assert_eq!(OperationInput::from(value), OperationInput::Unrecognized);
        }
        assert!(signer("net").sign_operation(json!(3.5)).unwrap().is_none());
    }

    #[test]
    fn with_network_id_changes_signed_message() {
        let original = signer("net-a");
        let moved = original.clone().with_network_id("net-b");
        assert_eq!(original.network_id(), "net-a");
        assert_eq!(moved.network_id(), "net-b");

        let a = original.sign_operation(record()).unwrap().unwrap();
        let b = moved.sign_operation(record()).unwrap().unwrap();
        assert_ne!(a.fact_signs[0].signature, b.fact_signs[0].signature);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn record_with_wrong_shape_is_invalid_input() {
        let err = signer("net")
            .sign_operation(json!({ "fact": { "hash": "x" }, "fact_signs": "nope" }))
            .unwrap_err();
        assert!(matches!(err, SignError::InvalidInput(_)));
    }
}
