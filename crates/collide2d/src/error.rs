//! Error taxonomy for shape construction and use
//!
//! Every error here is a deterministic consequence of caller misuse or
//! malformed input, never a transient runtime condition. The expected
//! response is "fail immediately, fail loudly": the world-step loop treats
//! any of these as a bug in setup code, not something to catch and continue
//! with a corrupted shape.

use thiserror::Error;

/// Broad classification of a [`ShapeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid parameters at shape construction time
    Construction,
    /// An operation called in the wrong lifecycle state
    State,
    /// A malformed value passed to an otherwise valid operation
    Argument,
}

/// Errors reported by the geometry and collision layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A width, height, or diameter was zero or negative at construction
    #[error("dimension `{name}` must be positive, got {value}")]
    NonPositiveDimension {
        /// Which dimension was rejected
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A polygon edge with identical base and head points was added
    #[error("edge from ({x}, {y}) to itself has no direction")]
    DegenerateEdge {
        /// The repeated x-coordinate
        x: f64,
        /// The repeated y-coordinate
        y: f64,
    },

    /// A NaN coordinate reached the math layer
    #[error("coordinate `{name}` must be a number")]
    NanCoordinate {
        /// Which coordinate was rejected
        name: &'static str,
    },

    /// An operation that requires a finalized shape ran on an unlocked one
    #[error("`{operation}` requires a locked shape")]
    NotLocked {
        /// The operation that was refused
        operation: &'static str,
    },

    /// An edge was added after the shape was finalized
    #[error("cannot add an edge to a locked shape")]
    AlreadyLocked,

    /// A polygon was locked with fewer than the minimum 3 edges
    #[error("a polygon needs at least 3 edges, got {found}")]
    TooFewEdges {
        /// How many edges the polygon had
        found: usize,
    },

    /// The other shape in a pairwise test was not locked
    #[error("the shape passed to `{operation}` is not locked")]
    UnlockedArgument {
        /// The operation that was refused
        operation: &'static str,
    },
}

impl ShapeError {
    /// Classify this error into the construction/state/argument taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NonPositiveDimension { .. } | Self::DegenerateEdge { .. } => {
                ErrorKind::Construction
            }
            Self::NotLocked { .. } | Self::AlreadyLocked | Self::TooFewEdges { .. } => {
                ErrorKind::State
            }
            Self::NanCoordinate { .. } | Self::UnlockedArgument { .. } => ErrorKind::Argument,
        }
    }
}
