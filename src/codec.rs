//! The delta/escape codec: symbol translation, sizing, and encoding.
//!
//! # Scheme
//!
//! Each input byte is translated through a fixed permutation, then XORed with
//! the previous translated byte. The XOR delta of neighboring characters in
//! ordinary text is small, so most deltas fit in five bits:
//!
//! ```text
//! delta < 32:   0 ddddd        (6 bits)
//! delta >= 32:  1 dddddddd     (9 bits)
//! ```
//!
//! Codes are self-delimiting and packed LSB first with no header and no
//! stored bit count; the decoder must learn the symbol count out of band.
//! Both sides seed the delta chain with the same fixed byte ([`SEED`]), an
//! arbitrary anchor that must match or the formats diverge silently.
//!
//! # Trust model
//!
//! The codec validates nothing. `encode` assumes a zeroed destination of at
//! least `measure(input)` bytes; sizing the buffer is the caller's burden
//! (use [`try_encode`] for a checked variant). This keeps the per-symbol
//! path free of branches that well-formed use never takes.

use crate::bits::BitWriter;
use crate::error::PackError;

/// Previous-symbol seed shared by encoder and decoder.
///
/// Arbitrary but load-bearing: a reimplementation that picks a different
/// anchor produces streams that decode to garbage with no error to catch it.
pub(crate) const SEED: u8 = b'A';

/// Bits in a short (unescaped) symbol code.
pub(crate) const SHORT_CODE_BITS: u32 = 6;

/// Bits in an escaped symbol code.
pub(crate) const LONG_CODE_BITS: u32 = 9;

/// Remap a byte through the fixed self-inverse permutation.
///
/// Space (32) swaps with DEL (127) and double-quote (34) with tilde (126);
/// everything else maps to itself. The two swaps pull the most frequent
/// punctuation bytes next to the letter range so their XOR deltas against
/// neighboring letters stay under 32, without paying for a lookup table.
/// Applying `translate` twice is the identity for all 256 values, which is
/// why the same function undoes itself after decoding.
#[inline]
pub const fn translate(byte: u8) -> u8 {
    match byte {
        32 => 127,
        127 => 32,
        34 => 126,
        126 => 34,
        other => other,
    }
}

/// Minimal number of bits needed to represent `value`; zero has width zero.
#[inline]
const fn bit_width(value: u8) -> u32 {
    u8::BITS - value.leading_zeros()
}

/// Compute the exact encoded size of `input`, in bytes.
///
/// Performs the same traversal as [`encode`] without writing anything, so
/// `measure(x) == encode(x, buf)` for any sufficiently large zeroed `buf`.
/// Use it to size the destination before encoding; the result is already
/// rounded up to whole bytes.
pub fn measure(input: &[u8]) -> usize {
    let mut bits = 0usize;
    let mut prev = SEED;
    for &c in input {
        let translated = translate(c);
        let diff = translated ^ prev;
        bits += if bit_width(diff) > 5 {
            LONG_CODE_BITS as usize
        } else {
            SHORT_CODE_BITS as usize
        };
        prev = translated;
    }
    bits.div_ceil(8)
}

/// Encode `input` into `out`, returning the number of bytes written.
///
/// `out` must be zero-initialized and at least [`measure`]`(input)` bytes
/// long; the encoder only ORs bits into it and panics on an undersized
/// slice. The return value always equals `measure(input)`.
pub fn encode(input: &[u8], out: &mut [u8]) -> usize {
    let mut writer = BitWriter::new(out);
    let mut prev = SEED;
    for &c in input {
        let translated = translate(c);
        let diff = translated ^ prev;
        if bit_width(diff) > 5 {
            writer.write_bit(true);
            writer.write_byte(diff);
        } else {
            writer.write_bits(diff << 1, SHORT_CODE_BITS);
        }
        prev = translated;
    }
    writer.bits_written().div_ceil(8)
}

/// Checked variant of [`encode`].
///
/// Measures first and fails with [`PackError::BufferTooSmall`] instead of
/// panicking when `out` cannot hold the encoded form.
pub fn try_encode(input: &[u8], out: &mut [u8]) -> Result<usize, PackError> {
    let needed = measure(input);
    if out.len() < needed {
        return Err(PackError::BufferTooSmall {
            needed,
            have: out.len(),
        });
    }
    Ok(encode(input, out))
}
