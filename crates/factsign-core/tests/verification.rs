use chrono::{TimeZone, Utc};
use factsign_canonical::{base58_encode, OperationHash};
use factsign_core::{
    verify_fact_signs, verify_operation_hash, FixedClock, KeyWithSuffix, OperationSigner,
    SignVerdict, SignerConfig,
};
use factsign_schemas::Operation;
use serde_json::json;

fn make_operation() -> Operation {
    serde_json::from_value(json!({
        "_hint": "test-operation",
        "memo": "hello",
        "fact": { "hash": base58_encode(b"fact-hash-bytes") },
        "fact_signs": []
    }))
    .unwrap()
}

fn make_signer(seed: u8, network_id: &str) -> OperationSigner<FixedClock> {
    OperationSigner::with_clock(
        SignerConfig::new(network_id),
        KeyWithSuffix::new(base58_encode([seed; 32]) + "spr"),
        FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
    )
}

fn make_signed() -> Operation {
    let once = make_signer(1, "net").sign(&make_operation()).unwrap();
    make_signer(2, "net").sign(&once).unwrap()
}

#[test]
fn signed_operation_verifies() {
    let signed = make_signed();
    assert!(verify_operation_hash(&signed).unwrap());
    assert_eq!(
        verify_fact_signs(&signed, "net").unwrap(),
        vec![SignVerdict::Ok, SignVerdict::Ok]
    );
}

#[test]
fn other_network_fails_signature_check() {
    let signed = make_signed();
    assert_eq!(
        verify_fact_signs(&signed, "other").unwrap(),
        vec![SignVerdict::BadSignature, SignVerdict::BadSignature]
    );
}

#[test]
fn tampered_memo_fails_hash_check() {
    let mut signed = make_signed();
    signed.memo.push('!');
    assert!(!verify_operation_hash(&signed).unwrap());
}

#[test]
fn reordered_fact_signs_fail_hash_check() {
    let mut signed = make_signed();
    signed.fact_signs.swap(0, 1);
    assert!(!verify_operation_hash(&signed).unwrap());
    // Each entry is still individually valid.
    assert_eq!(
        verify_fact_signs(&signed, "net").unwrap(),
        vec![SignVerdict::Ok, SignVerdict::Ok]
    );
}

#[test]
fn missing_hash_does_not_verify() {
    let mut signed = make_signed();
    signed.hash = None;
    assert!(!verify_operation_hash(&signed).unwrap());
    signed.hash = Some(OperationHash::of(b"wrong"));
    assert!(!verify_operation_hash(&signed).unwrap());
}

#[test]
fn unknown_signer_suffix_is_reported() {
    let mut signed = make_signed();
    signed.fact_signs[0].signer = "abcdefgxyz".into();
    assert_eq!(
        verify_fact_signs(&signed, "net").unwrap()[0],
        SignVerdict::UnsupportedSigner
    );
}

#[test]
fn swapped_signer_is_bad_signature() {
    let mut signed = make_signed();
    let other = signed.fact_signs[1].signer.clone();
    signed.fact_signs[0].signer = other;
    assert_eq!(
        verify_fact_signs(&signed, "net").unwrap()[0],
        SignVerdict::BadSignature
    );
}
