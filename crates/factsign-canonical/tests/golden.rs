use factsign_canonical::{
    base58_encode, sum256, CanonicalBytes, Canonicalizer, CodecError, OperationHash, SignedAt,
};

#[test]
fn base58_matches_bitcoin_alphabet_vector() {
    assert_eq!(base58_encode(b"hello world"), "StV1DL6CwTryKyV");
    assert_eq!(base58_encode([0u8, 0, 0]), "111");
}

#[test]
fn operation_hash_serializes_as_plain_string() {
    let hash = OperationHash::of(b"");
    assert_eq!(
        serde_json::to_string(&hash).unwrap(),
        format!("\"{}\"", base58_encode(sum256(b"")))
    );
}

#[test]
fn signed_at_serializes_transparently() {
    let signed_at = SignedAt::parse("2021-06-10T08:20:05.123Z").unwrap();
    assert_eq!(
        serde_json::to_string(&signed_at).unwrap(),
        r#""2021-06-10T08:20:05.123Z""#
    );
    assert_eq!(
        signed_at.utc_bytes().unwrap(),
        b"2021-06-10 08:20:05.123 +0000 UTC".to_vec()
    );
}

struct Entry {
    signer: &'static str,
    signed_at: SignedAt,
}

impl CanonicalBytes for Entry {
    fn canonical_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut bytes = self.signer.as_bytes().to_vec();
        bytes.extend(self.signed_at.utc_bytes()?);
        Ok(bytes)
    }
}

#[test]
fn canonicalizer_digest_is_order_sensitive() {
    let a = Entry {
        signer: "a",
        signed_at: SignedAt::new("2020-01-01T00:00:00Z".into()),
    };
    let b = Entry {
        signer: "b",
        signed_at: SignedAt::new("2020-01-01T00:00:00Z".into()),
    };

    let mut ab = Canonicalizer::new();
    ab.push_str("h").push_all([&a, &b]).unwrap().push_str("memo");
    let mut ba = Canonicalizer::new();
    ba.push_str("h").push_all([&b, &a]).unwrap().push_str("memo");

    assert_ne!(ab.digest(), ba.digest());
    assert_eq!(
        ab.digest(),
        OperationHash::of(b"ha2020-01-01 00:00:00 +0000 UTCb2020-01-01 00:00:00 +0000 UTCmemo")
    );
}

#[test]
fn bad_timestamp_propagates_through_canonicalizer() {
    let bad = Entry {
        signer: "a",
        signed_at: SignedAt::new("01/01/2020".into()),
    };
    let mut c = Canonicalizer::new();
    assert!(matches!(c.push(&bad), Err(CodecError::Timestamp { .. })));
}
