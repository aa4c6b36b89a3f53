//! Error type for the checked outer surface.
//!
//! The codec core is deliberately infallible: it trusts well-formed input
//! and caller-sized buffers. Errors exist only at the boundary where a
//! caller hands in storage or metadata the library can sanity-check cheaply.

use thiserror::Error;

/// Errors from the checked encoding and artifact-construction paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    /// The destination buffer cannot hold the encoded form.
    #[error("destination buffer too small: need {needed} bytes, have {have}")]
    BufferTooSmall {
        /// Bytes the encoded form requires, per `measure`.
        needed: usize,
        /// Bytes the caller supplied.
        have: usize,
    },

    /// An encoded buffer is too short for its declared symbol count.
    #[error(
        "encoded data truncated: {declared} symbols need at least \
         {min_bytes} bytes, have {have}"
    )]
    Truncated {
        /// Symbol count the caller declared.
        declared: usize,
        /// Minimum bytes any well-formed encoding of that count occupies.
        min_bytes: usize,
        /// Bytes actually present.
        have: usize,
    },
}
