//! Error types for the dispatch-route library
//!
//! Construction and query failures are typed so callers can distinguish
//! malformed input from a genuinely unreachable destination. "Unreachable"
//! by itself is not an error: it is a normal table state that only becomes
//! [`Error::NoPath`] once endpoint selection finds no viable candidate.

use thiserror::Error;

/// Main error type for dispatch-route operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Graph construction input referenced a node outside the declared range
    /// or carried a negative / non-finite weight
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: usize,
        to: usize,
        reason: String,
    },

    /// Malformed query argument (source, candidate set, or stage shape)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Every acceptable destination is unreachable from the source
    #[error("no path to any acceptable destination")]
    NoPath,

    /// Predecessor walk revisited a node, so the predecessor table is
    /// malformed
    #[error("predecessor walk cycled at node {0}")]
    DisconnectedPath(usize),
}

/// Convenience result type for dispatch-route operations
pub type Result<T> = std::result::Result<T, Error>;
