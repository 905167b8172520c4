use crate::digest::OperationHash;
use crate::encoding::CodecError;

/// Types with a deterministic byte form used as hash input.
pub trait CanonicalBytes {
    /// Returns the canonical bytes of `self`.
    fn canonical_bytes(&self) -> Result<Vec<u8>, CodecError>;
}

/// Accumulates canonical bytes by plain concatenation.
///
/// Segments carry no delimiter and no length prefix; the order of `push_*`
/// calls is the order of the bytes.
#[derive(Debug, Default, Clone)]
pub struct Canonicalizer {
    bytes: Vec<u8>,
}

impl Canonicalizer {
    /// Creates an empty canonicalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw bytes.
    pub fn push_bytes(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.bytes.extend_from_slice(bytes.as_ref());
        self
    }

    /// Appends the UTF-8 bytes of `text`.
    pub fn push_str(&mut self, text: &str) -> &mut Self {
        self.push_bytes(text.as_bytes())
    }

    /// Appends the canonical bytes of `item`.
    pub fn push<T: CanonicalBytes + ?Sized>(&mut self, item: &T) -> Result<&mut Self, CodecError> {
        let bytes = item.canonical_bytes()?;
        Ok(self.push_bytes(bytes))
    }

    /// Appends the canonical bytes of every item, in order.
    pub fn push_all<'a, T, I>(&mut self, items: I) -> Result<&mut Self, CodecError>
    where
        T: CanonicalBytes + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for item in items {
            self.push(item)?;
        }
        Ok(self)
    }

    /// Returns the accumulated bytes.
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Hashes the accumulated bytes.
    pub fn digest(&self) -> OperationHash {
        OperationHash::of(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, &'static str);

    impl CanonicalBytes for Pair {
        fn canonical_bytes(&self) -> Result<Vec<u8>, CodecError> {
            Ok([self.0.as_bytes(), self.1.as_bytes()].concat())
        }
    }

    #[test]
    fn segments_concatenate_without_delimiters() {
        let mut c = Canonicalizer::new();
        c.push_bytes([1u8, 2]).push_str("ab");
        c.push_all(&[Pair("x", "y"), Pair("z", "")]).unwrap();
        assert_eq!(c.finish(), vec![1, 2, b'a', b'b', b'x', b'y', b'z']);
    }

    #[test]
    fn digest_matches_direct_hash() {
        let mut c = Canonicalizer::new();
        c.push_str("m");
        assert_eq!(c.digest(), OperationHash::of(b"m"));
    }
}
