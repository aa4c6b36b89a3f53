//! Bit-level cursors over caller-supplied byte buffers.
//!
//! Both cursors are plain values over borrowed storage: they never allocate,
//! never resize, and copying one yields an independent cursor at the same
//! position. Bits are packed least-significant-bit first within each byte,
//! which lets the writer emit a field with a single shift-and-OR and lets the
//! reader consume one with a single shift.
//!
//! # Layout
//!
//! ```text
//! byte 0            byte 1
//! 7 6 5 4 3 2 1 0 | 7 6 5 4 3 2 1 0
//! ^ bit 7  bit 0 ^   ^ bit 15 bit 8
//! ```
//!
//! A field written at bit offset 5 with width 6 lands in bits 5..=7 of byte 0
//! and bits 0..=2 of byte 1.

/// Packs bits into a pre-zeroed byte buffer, LSB first.
///
/// The writer only ever ORs into the buffer; it never clears bits. The caller
/// must supply a zero-initialized buffer at least [`measure`](crate::measure)
/// bytes long, and the writer performs no bounds checks beyond slice
/// indexing.
pub struct BitWriter<'a> {
    buf: &'a mut [u8],
    /// Absolute bit position from the start of `buf`.
    pos: usize,
}

impl<'a> BitWriter<'a> {
    /// Create a writer positioned at bit 0 of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bits written so far.
    pub fn bits_written(&self) -> usize {
        self.pos
    }

    /// Write a single bit and advance the cursor by one.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.buf[self.pos >> 3] |= 1 << (self.pos & 7);
        }
        self.pos += 1;
    }

    /// Write a full 8-bit value, splitting across the byte boundary when the
    /// cursor is not byte-aligned.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.write_bits(byte, 8);
    }

    /// Write the low `n` bits of `value` (`n <= 8`).
    ///
    /// If the current byte has room for all `n` bits the field is ORed in
    /// place; otherwise the low bits fill the current byte and the remainder
    /// recurses against the next one. Each recursive step strictly shrinks
    /// the remaining width, so the split terminates and drops no bits.
    pub fn write_bits(&mut self, value: u8, n: u32) {
        debug_assert!(n <= 8);
        let offset = (self.pos & 7) as u32;
        let available = 8 - offset;
        if n <= available {
            let mask = ((1u16 << n) - 1) as u8;
            self.buf[self.pos >> 3] |= (value & mask) << offset;
            self.pos += n as usize;
        } else {
            self.write_bits(value, available);
            self.write_bits(value >> available, n - available);
        }
    }
}

/// Pulls bits out of an immutable byte buffer through a small register.
///
/// Bytes move from the buffer into a 16-bit accumulator lazily, only when a
/// [`rent`](BitReader::rent) asks for more bits than are buffered. Sixteen
/// bits cover the worst-case lookahead: one 9-bit symbol code plus the slack
/// left over from the previous byte pull.
///
/// This is a value-typed cursor: `Clone` gives an independent reader at the
/// same position. Equality compares the remaining buffer view and the
/// register state and is meant only for terminal-state checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitReader<'a> {
    buf: &'a [u8],
    register: u16,
    valid: u32,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `buf` with an empty register.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            register: 0,
            valid: 0,
        }
    }

    /// Ensure up to `n` bits are buffered and peek at the register.
    ///
    /// Whole bytes are pulled from the buffer until `n` bits are available or
    /// the buffer runs out. Returns the register value and the number of
    /// valid bits now buffered, which may be less than `n` at end of stream;
    /// the caller must mask the register to the bits it actually uses.
    ///
    /// Renting does not consume anything; call [`advance`](BitReader::advance)
    /// to discard bits once they are decoded.
    pub fn rent(&mut self, n: u32) -> (u16, u32) {
        while self.valid < n {
            let Some((&byte, rest)) = self.buf.split_first() else {
                break;
            };
            self.register |= (byte as u16) << self.valid;
            self.valid += 8;
            self.buf = rest;
        }
        (self.register, self.valid)
    }

    /// Discard the `n` low bits of the register.
    ///
    /// Never touches the buffer. On a truncated stream the valid count
    /// saturates at zero rather than underflowing, so decoding degrades to
    /// reading zeros instead of panicking.
    #[inline]
    pub fn advance(&mut self, n: u32) {
        self.register >>= n;
        self.valid = self.valid.saturating_sub(n);
    }
}
