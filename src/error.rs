//! Error types for history manipulation and entry classification.
//!
//! Filesystem failures met during a walk are not represented here: the
//! traversal logs them and truncates the affected subtree instead.

use thiserror::Error;

/// Structural errors surfaced to the immediate caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A history would grow past the maximum traversal depth.
    #[error("end state history exceeds maximum depth of {max}")]
    DepthExceeded {
        /// The depth limit that was hit.
        max: usize,
    },

    /// An index outside `[0, len)` was used on a history.
    #[error("index {index} out of bounds for history of length {len}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the history at the time of access.
        len: usize,
    },

    /// A raw entry type code did not name any known entry type.
    #[error("invalid entry type code: {0}")]
    InvalidEntryType(u8),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, TreeError>;
