//! Lazy, restartable decoding of an encoded buffer.
//!
//! Decoding is incremental by design: the main consumer is a string literal
//! unpacked character by character, so the decoder is a small value-typed
//! cursor rather than a function that materializes the whole string. Cloning
//! a [`Decoder`] mid-stream yields an independent cursor at the same logical
//! position, which is how "restart from here" works.

use crate::bits::BitReader;
use crate::codec::{translate, LONG_CODE_BITS, SEED, SHORT_CODE_BITS};

/// A finite, forward sequence of decoded bytes.
///
/// Built from an encoded buffer plus the out-of-band decoded length; the
/// length is authoritative for termination, since the bitstream itself
/// carries no end marker. Yields exactly `decoded_len` original bytes.
///
/// The decoder keeps one symbol of lookahead: construction decodes the first
/// symbol eagerly, and each `next` hands out the current symbol before
/// decoding its successor. The delta chain state is stored untranslated;
/// [`translate`](crate::translate) is applied only to yielded bytes, and
/// being self-inverse it undoes the encoder's remapping.
///
/// # Example
///
/// ```rust
/// use litpak::{encode, measure, Decoder};
///
/// let input = b"Hello";
/// let mut buf = vec![0u8; measure(input)];
/// encode(input, &mut buf);
///
/// let decoded: Vec<u8> = Decoder::new(&buf, input.len()).collect();
/// assert_eq!(decoded, input);
/// ```
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    reader: BitReader<'a>,
    /// Delta chain state, untranslated.
    current: u8,
    /// Symbols not yet yielded.
    remaining: usize,
}

impl<'a> Decoder<'a> {
    /// Start decoding `data`, which must hold exactly `decoded_len` encoded
    /// symbols.
    ///
    /// The codec trusts its input: a `decoded_len` that overstates the real
    /// symbol count makes the trailing symbols decode from a drained reader
    /// (yielding unspecified but memory-safe bytes), and an understated one
    /// simply stops early.
    pub fn new(data: &'a [u8], decoded_len: usize) -> Self {
        let mut decoder = Self {
            reader: BitReader::new(data),
            current: SEED,
            remaining: decoded_len,
        };
        if decoder.remaining > 0 {
            decoder.step();
        }
        decoder
    }

    /// Symbols left to yield, including the buffered lookahead.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// True once every symbol has been yielded.
    ///
    /// This is the sequence's only terminal condition; the encoded bit
    /// length is never consulted.
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Decode one symbol into the delta chain state.
    ///
    /// Rents a worst-case 9 bits and picks the branch off the escape flag.
    /// A short read (fewer than 9 valid bits) can only legitimately happen
    /// at the tail of the stream where the final code is short, so it
    /// selects the short branch; anything else is malformed input, which
    /// the codec does not detect.
    fn step(&mut self) {
        let (bits, valid) = self.reader.rent(LONG_CODE_BITS);
        let diff = if valid >= LONG_CODE_BITS && bits & 1 != 0 {
            self.reader.advance(LONG_CODE_BITS);
            (bits >> 1) as u8
        } else {
            self.reader.advance(SHORT_CODE_BITS);
            ((bits >> 1) & 0x1F) as u8
        };
        self.current ^= diff;
    }
}

impl Iterator for Decoder<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let byte = translate(self.current);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.step();
        }
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Decoder<'_> {}

impl std::iter::FusedIterator for Decoder<'_> {}
