//! Bit-packed compression for short string literals.
//!
//! `litpak` shrinks short ASCII-ish byte strings into a compact bitstream
//! and decodes them incrementally, one byte at a time. The intended use is
//! fixed string literals embedded in a binary: strings are known ahead of
//! time, encoding happens once, and decoding must be branch-cheap and
//! allocation-free.
//!
//! # Compression scheme
//!
//! - **Symbol translation**: a fixed self-inverse byte permutation pulls two
//!   frequent punctuation bytes (space, double-quote) next to the letter
//!   range, with no table to store
//! - **XOR-delta coding**: each translated byte is XORed with its
//!   predecessor; neighboring text characters produce small deltas
//! - **Escape coding**: deltas under 32 cost 6 bits, everything else 9
//!
//! There is no dictionary and no adaptive modeling; the code is fixed,
//! stateless, and single-pass. Compression ratio is secondary to the
//! decoder staying tiny.
//!
//! # Example
//!
//! ```rust
//! use litpak::{ByteSequence, Decoder, encode, measure, pack};
//!
//! let input = b"Hello, World!";
//!
//! // Manual buffer management: measure, zero-allocate, encode.
//! let mut buf = vec![0u8; measure(input)];
//! let written = encode(input, &mut buf);
//! assert_eq!(written, buf.len());
//!
//! // Decode lazily; the symbol count travels out of band.
//! let decoded: Vec<u8> = Decoder::new(&buf, input.len()).collect();
//! assert_eq!(decoded, input);
//!
//! // Or let the wrapper pick the smaller representation.
//! let stored = pack(input);
//! assert!(stored.stored_len() <= input.len());
//! assert_eq!(stored.bytes().collect::<Vec<u8>>(), input);
//! ```
//!
//! # Trust model
//!
//! The core codec performs no validation: buffers are caller-sized (via
//! [`measure`]) and pre-zeroed, and the decoded symbol count is caller
//! supplied. Checked entry points ([`try_encode`], [`Packed::from_parts`])
//! exist at the boundary for callers that want cheap sanity checks.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bits;
mod codec;
mod compact;
mod decode;
mod error;
mod traits;

pub use bits::{BitReader, BitWriter};
pub use codec::{encode, measure, translate, try_encode};
pub use compact::{pack, Bytes, CompactBytes, Packed};
pub use decode::Decoder;
pub use error::PackError;
pub use traits::ByteSequence;
