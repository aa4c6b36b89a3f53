//! The uniform read contract over stored representations.

/// A byte string readable through a lazy decoded-byte iterator.
///
/// Both representations a literal can end up in — raw bytes or the
/// bit-packed form — implement this, so a consumer can iterate either
/// without knowing which one the size selection picked.
pub trait ByteSequence {
    /// The lazy decoded-byte iterator.
    type Bytes<'a>: Iterator<Item = u8>
    where
        Self: 'a;

    /// Length of the decoded byte string.
    fn decoded_len(&self) -> usize;

    /// Whether the decoded byte string is empty.
    fn is_empty(&self) -> bool {
        self.decoded_len() == 0
    }

    /// Iterate the decoded bytes from the start.
    fn bytes(&self) -> Self::Bytes<'_>;
}
