//! Operation record.

use factsign_canonical::OperationHash;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::fact_sign::FactSign;

/// Opaque fact body. Only its `hash` member is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fact(Map<String, Value>);

impl Fact {
    /// The fact's base58 hash, if present and a string.
    pub fn hash(&self) -> Option<&str> {
        self.0.get("hash").and_then(Value::as_str)
    }
}

/// Reads a claimed operation hash, keeping it only if it is a well-formed digest.
///
/// The input hash is derived data and may be stale or junk; it never makes
/// an operation unreadable.
fn claimed_hash<'de, D>(deserializer: D) -> Result<Option<OperationHash>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| OperationHash::parse(s).ok()))
}

/// Operation: an opaque fact, its accumulated signatures and a memo.
///
/// Only these five members are modeled; anything else on an input record is
/// dropped on deserialization and never re-emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Free-form memo; participates in the operation hash.
    #[serde(default)]
    pub memo: String,
    /// Type tag, passed through untouched.
    #[serde(rename = "_hint", default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<Value>,
    /// The fact being endorsed.
    #[serde(default)]
    pub fact: Fact,
    /// Endorsements, in the order they were added.
    #[serde(default)]
    pub fact_signs: Vec<FactSign>,
    /// Content hash over fact hash, fact signs and memo.
    ///
    /// On input this is only the claimed hash; signing never reads it.
    #[serde(
        default,
        deserialize_with = "claimed_hash",
        skip_serializing_if = "Option::is_none"
    )]
    pub hash: Option<OperationHash>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fact_signs_and_hash_default() {
        let op: Operation = serde_json::from_value(json!({
            "_hint": "mitum-currency-transfers-operation-v0.0.1",
            "memo": "",
            "fact": { "hash": "abc", "items": [1, 2] }
        }))
        .unwrap();
        assert!(op.fact_signs.is_empty());
        assert!(op.hash.is_none());
        assert_eq!(op.fact.hash(), Some("abc"));
    }

    #[test]
    fn unknown_members_are_dropped() {
        let op: Operation = serde_json::from_value(json!({
            "memo": "m",
            "fact": { "hash": "abc" },
            "fact_signs": [],
            "extra": true
        }))
        .unwrap();
        let out = serde_json::to_value(&op).unwrap();
        assert!(out.get("extra").is_none());
        assert!(out.get("_hint").is_none());
    }

    #[test]
    fn serializes_members_in_output_order() {
        let op = Operation {
            memo: "m".into(),
            hint: Some(json!("h")),
            fact: serde_json::from_value(json!({ "hash": "abc" })).unwrap(),
            fact_signs: vec![],
            hash: Some(OperationHash::of(b"x")),
        };
        let text = serde_json::to_string(&op).unwrap();
        let memo = text.find("\"memo\"").unwrap();
        let hint = text.find("\"_hint\"").unwrap();
        let fact = text.find("\"fact\"").unwrap();
        let signs = text.find("\"fact_signs\"").unwrap();
        let hash = text.rfind("\"hash\"").unwrap();
        assert!(memo < hint && hint < fact && fact < signs && signs < hash);
    }

    #[test]
    fn stale_or_junk_hash_does_not_fail_deserialization() {
        for junk in [json!({ "stale": 1 }), json!(7), json!("not-a-digest"), json!(null)] {
            let op: Operation = serde_json::from_value(json!({
                "memo": "m",
                "fact": { "hash": "abc" },
                "hash": junk
            }))
            .unwrap();
            assert!(op.hash.is_none());
        }

        let digest = OperationHash::of(b"x");
        let op: Operation = serde_json::from_value(json!({
            "fact": { "hash": "abc" },
            "hash": digest.as_str()
        }))
        .unwrap();
        assert_eq!(op.hash, Some(digest));
    }

    #[test]
    fn non_string_fact_hash_is_absent() {
        let fact: Fact = serde_json::from_value(json!({ "hash": 5 })).unwrap();
        assert_eq!(fact.hash(), None);
    }
}
