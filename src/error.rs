//! Typed error taxonomy for the cyclotomic primality engine.
//!
//! Every fallible public operation in this crate returns `Result<T, Error>`
//! rather than a boxed/dynamic error — the error surface here is closed and
//! known in advance (invalid sizes, mismatched ring operands, out-of-range
//! coordinates, table exhaustion), so a hand-rolled enum with a `Display`
//! impl is the better fit than an opaque catch-all.

use rug::Integer;

/// Errors produced by the cyclotomic ring, Q-matrix, and primality engine.
#[derive(Debug, Clone)]
pub enum Error {
    /// A nil/uninitialized input, mismatched `size` between operands that
    /// must share one, or a parameter `l` that is not an odd prime known to
    /// the table.
    InvalidArgument(String),
    /// The requested ring size is zero or exceeds [`crate::CYCLO_MAX_SIZE`].
    InvalidSize { size: usize, max: usize },
    /// A coordinate index is out of bounds for the ring's size.
    OutOfRange { index: usize, size: usize },
    /// The engine exhausted its small-prime table before the running bound
    /// exceeded the candidate — N can be neither certified prime nor
    /// rejected with the table at hand.
    TableExhausted { bound: Integer, candidate: Integer },
    /// Reserved for parity with the source's error taxonomy. Unreachable in
    /// practice: Rust's global allocator aborts the process on allocation
    /// failure instead of returning an error, so this variant is never
    /// constructed. Kept so an exhaustive match on `Error` doesn't need a
    /// wildcard arm that would silently swallow a future variant.
    AllocationFailure,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::InvalidSize { size, max } => {
                write!(f, "invalid ring size {size} (must be 1..={max})")
            }
            Error::OutOfRange { index, size } => {
                write!(f, "coordinate index {index} out of range for size {size}")
            }
            Error::TableExhausted { bound, candidate } => write!(
                f,
                "table exhausted: bound {bound} never exceeded candidate {candidate}"
            ),
            Error::AllocationFailure => write!(f, "allocation failure"),
        }
    }
}

impl std::error::Error for Error {}
