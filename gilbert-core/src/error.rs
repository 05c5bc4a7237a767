//! Error types for the gilbert core library.
//!
//! Defines the error enum exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while configuring or running a [`crate::Gilbert`] trial.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GilbertError {
    /// Path-length estimation is undefined for fewer than two nodes, so
    /// generation is rejected before any sampling happens.
    #[error("node count must be at least 2 (got {got})")]
    InvalidNodeCount {
        /// The invalid node count supplied by the caller.
        got: usize,
    },
    /// Edge probability must be a finite value in `[0, 1]`.
    #[error("edge probability must be a finite value in [0, 1] (got {got})")]
    InvalidEdgeProbability {
        /// The invalid probability supplied by the caller.
        got: f64,
    },
    /// An explicit edge referenced a missing node or formed a self-loop.
    #[error("edge ({left}, {right}) is invalid for a graph of {nodes} nodes")]
    InvalidEdge {
        /// First endpoint of the rejected edge.
        left: usize,
        /// Second endpoint of the rejected edge.
        right: usize,
        /// Number of nodes in the target graph.
        nodes: usize,
    },
    /// The generated graph was not a single connected component. Fatal for
    /// the trial; retrying with fresh randomness is the caller's decision.
    #[error("generated graph with {nodes} nodes and {edges} edges is not connected")]
    Disconnected {
        /// Node count of the rejected graph.
        nodes: usize,
        /// Edge count of the rejected graph.
        edges: usize,
    },
    /// Internal pipeline state violated an expected invariant.
    #[error("internal invariant violated while {context}")]
    InvariantViolation {
        /// Human-readable context describing which step failed.
        context: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GilbertError`] variants.
    enum GilbertErrorCode for GilbertError {
        /// Path-length estimation is undefined for fewer than two nodes.
        InvalidNodeCount => InvalidNodeCount { .. } => "GILBERT_INVALID_NODE_COUNT",
        /// Edge probability must be a finite value in `[0, 1]`.
        InvalidEdgeProbability => InvalidEdgeProbability { .. } => "GILBERT_INVALID_EDGE_PROBABILITY",
        /// An explicit edge referenced a missing node or formed a self-loop.
        InvalidEdge => InvalidEdge { .. } => "GILBERT_INVALID_EDGE",
        /// The generated graph was not a single connected component.
        Disconnected => Disconnected { .. } => "GILBERT_DISCONNECTED",
        /// Internal pipeline state violated an expected invariant.
        InvariantViolation => InvariantViolation { .. } => "GILBERT_INVARIANT_VIOLATION",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GilbertError>;
