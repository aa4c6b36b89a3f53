//! Stored representations: the packed artifact and the size-selecting
//! wrapper.
//!
//! An encoded buffer is useless without its decoded symbol count, so the
//! two always travel together here as one value. On top of that sits the
//! selection rule: a literal is stored packed only when packing is strictly
//! smaller, and falls back to its raw bytes otherwise. Short or
//! escape-heavy strings routinely fail to shrink, and the fallback keeps
//! the wrapper monotone — it never costs more than the input.

use log::trace;

use crate::codec::{encode, measure, SHORT_CODE_BITS};
use crate::decode::Decoder;
use crate::error::PackError;
use crate::traits::ByteSequence;

/// Minimum bytes any well-formed encoding of `count` symbols occupies.
fn min_encoded_bytes(count: usize) -> usize {
    (count * SHORT_CODE_BITS as usize).div_ceil(8)
}

/// A borrowed encoded artifact: packed bits plus the decoded length.
///
/// This is the read-side view over storage the caller persists, e.g. a
/// static byte array baked into the binary at build time. The decoded
/// length is authoritative for termination and must be the exact symbol
/// count the encoder saw.
#[derive(Clone, Copy, Debug)]
pub struct Packed<'a> {
    data: &'a [u8],
    decoded_len: usize,
}

impl<'a> Packed<'a> {
    /// Wrap an encoded buffer and its declared symbol count.
    ///
    /// Rejects buffers that are too short to possibly hold `decoded_len`
    /// symbols (every symbol costs at least six bits). This catches a
    /// mismatched `(buffer, count)` pair early; it cannot detect deeper
    /// corruption, which the codec by design does not validate.
    pub fn from_parts(data: &'a [u8], decoded_len: usize) -> Result<Self, PackError> {
        let min_bytes = min_encoded_bytes(decoded_len);
        if data.len() < min_bytes {
            return Err(PackError::Truncated {
                declared: decoded_len,
                min_bytes,
                have: data.len(),
            });
        }
        Ok(Self { data, decoded_len })
    }

    /// The encoded bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Decode the whole artifact into an owned byte string.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes().collect()
    }
}

impl ByteSequence for Packed<'_> {
    type Bytes<'b>
        = Decoder<'b>
    where
        Self: 'b;

    fn decoded_len(&self) -> usize {
        self.decoded_len
    }

    fn bytes(&self) -> Decoder<'_> {
        Decoder::new(self.data, self.decoded_len)
    }
}

/// An owned byte string stored in whichever representation is smaller.
///
/// [`CompactBytes::new`] measures the packed size of the input and keeps the
/// raw bytes whenever packing would not strictly shrink them. Both variants
/// expose the same read contract, so consumers never branch on which one
/// was picked.
///
/// # Example
///
/// ```rust
/// use litpak::{ByteSequence, CompactBytes};
///
/// let stored = CompactBytes::new(b"Hello, World! Hello again.");
/// assert!(stored.stored_len() <= stored.decoded_len());
/// let decoded: Vec<u8> = stored.bytes().collect();
/// assert_eq!(decoded, b"Hello, World! Hello again.");
/// ```
#[derive(Clone, Debug)]
pub enum CompactBytes {
    /// The original bytes, kept because packing would not shrink them.
    Raw(Vec<u8>),
    /// The bit-packed encoding plus the decoded length.
    Packed {
        /// Encoded bytes, exactly `measure` of the original input.
        data: Vec<u8>,
        /// Symbol count of the original input.
        decoded_len: usize,
    },
}

impl CompactBytes {
    /// Store `input` in its smaller representation.
    pub fn new(input: &[u8]) -> Self {
        let packed_len = measure(input);
        if packed_len >= input.len() {
            trace!(
                "keeping {} bytes raw (packed would be {})",
                input.len(),
                packed_len
            );
            return CompactBytes::Raw(input.to_vec());
        }

        let mut data = vec![0u8; packed_len];
        let written = encode(input, &mut data);
        debug_assert_eq!(written, packed_len);
        trace!("packed {} bytes into {}", input.len(), packed_len);
        CompactBytes::Packed {
            data,
            decoded_len: input.len(),
        }
    }

    /// Bytes occupied by the stored representation.
    pub fn stored_len(&self) -> usize {
        match self {
            CompactBytes::Raw(bytes) => bytes.len(),
            CompactBytes::Packed { data, .. } => data.len(),
        }
    }

    /// True if the packed representation won the size selection.
    pub fn is_packed(&self) -> bool {
        matches!(self, CompactBytes::Packed { .. })
    }

    /// Decode back into an owned byte string.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes().collect()
    }
}

impl ByteSequence for CompactBytes {
    type Bytes<'a>
        = Bytes<'a>
    where
        Self: 'a;

    fn decoded_len(&self) -> usize {
        match self {
            CompactBytes::Raw(bytes) => bytes.len(),
            CompactBytes::Packed { decoded_len, .. } => *decoded_len,
        }
    }

    fn bytes(&self) -> Bytes<'_> {
        match self {
            CompactBytes::Raw(bytes) => Bytes::Raw(bytes.iter()),
            CompactBytes::Packed { data, decoded_len } => {
                Bytes::Packed(Decoder::new(data, *decoded_len))
            }
        }
    }
}

/// Store `input` in its smaller representation.
///
/// Convenience alias for [`CompactBytes::new`].
pub fn pack(input: &[u8]) -> CompactBytes {
    CompactBytes::new(input)
}

/// Lazy decoded-byte iterator over either representation.
#[derive(Clone, Debug)]
pub enum Bytes<'a> {
    /// Reading stored raw bytes unchanged.
    Raw(std::slice::Iter<'a, u8>),
    /// Decoding the packed bitstream.
    Packed(Decoder<'a>),
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        match self {
            Bytes::Raw(iter) => iter.next().copied(),
            Bytes::Packed(decoder) => decoder.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Bytes::Raw(iter) => iter.size_hint(),
            Bytes::Packed(decoder) => decoder.size_hint(),
        }
    }
}

impl ExactSizeIterator for Bytes<'_> {}

impl std::iter::FusedIterator for Bytes<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressible_input_is_packed() {
        let input = b"Hello World Hello World";
        let stored = CompactBytes::new(input);
        assert!(stored.is_packed());
        assert!(stored.stored_len() < input.len());
        assert_eq!(stored.decoded_len(), input.len());
        assert_eq!(stored.to_vec(), input);
    }

    #[test]
    fn incompressible_input_stays_raw() {
        // A run of spaces after the first costs 6 bits each, but the first
        // escape pushes a 2-byte string past its raw size.
        let stored = CompactBytes::new(b"  ");
        assert!(!stored.is_packed());
        assert_eq!(stored.stored_len(), 2);
        assert_eq!(stored.to_vec(), b"  ");
    }

    #[test]
    fn empty_input_stays_raw() {
        let stored = CompactBytes::new(b"");
        assert!(!stored.is_packed());
        assert_eq!(stored.decoded_len(), 0);
        assert!(stored.is_empty());
        assert_eq!(stored.bytes().next(), None);
    }

    #[test]
    fn stored_size_never_exceeds_input() {
        let samples: [&[u8]; 5] = [
            b"",
            b"x",
            b"~~~~\"\"\"\"",
            b"a longer piece of ordinary prose, with punctuation.",
            b"\x00\xff\x00\xff",
        ];
        for input in samples {
            let stored = CompactBytes::new(input);
            assert!(
                stored.stored_len() <= input.len(),
                "grew on {:?}",
                input
            );
            assert_eq!(stored.to_vec(), input);
        }
    }

    #[test]
    fn packed_view_round_trips() {
        let input = b"borrowed artifact";
        let packed_len = measure(input);
        let mut buf = vec![0u8; packed_len];
        encode(input, &mut buf);

        let packed = Packed::from_parts(&buf, input.len()).unwrap();
        assert_eq!(packed.decoded_len(), input.len());
        assert_eq!(packed.data().len(), packed_len);
        assert_eq!(packed.to_vec(), input);
    }

    #[test]
    fn packed_view_rejects_impossible_counts() {
        // 8 declared symbols need at least 48 bits = 6 bytes.
        let err = Packed::from_parts(&[0u8; 4], 8).unwrap_err();
        assert_eq!(
            err,
            PackError::Truncated {
                declared: 8,
                min_bytes: 6,
                have: 4
            }
        );
    }

    #[test]
    fn uniform_iterator_hides_the_representation() {
        for input in [&b"unpacked!!"[..], b"packed packed packed"] {
            let stored = pack(input);
            let via_contract: Vec<u8> = stored.bytes().collect();
            assert_eq!(via_contract, input);
            assert_eq!(stored.bytes().len(), input.len());
        }
    }
}
