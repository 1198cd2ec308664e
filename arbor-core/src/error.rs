//! Error types for the Arbor core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::Vertex;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )?
                    => $code:expr, $kind:ident
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
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }

            /// Return the broad [`ErrorKind`] this code belongs to.
            #[must_use]
            pub const fn kind(self) -> ErrorKind {
                match self {
                    $(Self::$CodeVariant => ErrorKind::$kind,)+
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
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }

            /// Return the broad [`ErrorKind`] of this error.
            #[must_use]
            pub const fn kind(&self) -> ErrorKind {
                self.code().kind()
            }
        }
    };
}

/// Coarse classification of [`ArborError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The caller supplied an empty or malformed graph, or an invalid `k`.
    InvalidArgument,
    /// A vertex was referenced that the structure does not track.
    IndexOutOfRange,
}

/// Error type produced by graph construction and the MST algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArborError {
    /// The graph contains no vertices.
    #[error("cannot operate on an empty graph")]
    EmptyGraph,
    /// The requested number of clusters must be at least one.
    #[error("cluster count must be at least 1 (got {got})")]
    InvalidClusterCount {
        /// The invalid cluster count supplied by the caller.
        got: usize,
    },
    /// An edge connected a vertex to itself.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The vertex carrying the loop.
        vertex: Vertex,
    },
    /// An edge weight was negative, NaN or infinite.
    #[error("edge ({left}, {right}) has a negative or non-finite weight")]
    InvalidWeight {
        /// Endpoint the edge was read from.
        left: Vertex,
        /// Endpoint the edge points to.
        right: Vertex,
    },
    /// An edge was stored in one direction only or with differing weights.
    #[error("edge ({left}, {right}) has no matching reverse edge")]
    AsymmetricEdge {
        /// Endpoint the edge was read from.
        left: Vertex,
        /// Endpoint whose adjacency lacks the reverse edge.
        right: Vertex,
    },
    /// A point had a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the point in the input slice.
        index: usize,
    },
    /// Vertex ids do not form the dense range `0..vertex_count`.
    #[error("vertex {vertex} is outside the dense id range 0..{vertex_count}")]
    NonDenseVertices {
        /// First offending vertex id.
        vertex: Vertex,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A vertex id was used that the structure does not track.
    #[error("vertex {vertex} is out of range for {vertex_count} tracked vertices")]
    VertexOutOfRange {
        /// The unknown vertex id.
        vertex: Vertex,
        /// Number of vertices tracked.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ArborError`] variants.
    enum ArborErrorCode for ArborError {
        /// The graph contains no vertices.
        EmptyGraph => EmptyGraph => "ARBOR_EMPTY_GRAPH", InvalidArgument,
        /// The requested number of clusters must be at least one.
        InvalidClusterCount => InvalidClusterCount { .. } => "ARBOR_INVALID_CLUSTER_COUNT", InvalidArgument,
        /// An edge connected a vertex to itself.
        SelfLoop => SelfLoop { .. } => "ARBOR_SELF_LOOP", InvalidArgument,
        /// An edge weight was negative, NaN or infinite.
        InvalidWeight => InvalidWeight { .. } => "ARBOR_INVALID_WEIGHT", InvalidArgument,
        /// An edge was stored in one direction only.
        AsymmetricEdge => AsymmetricEdge { .. } => "ARBOR_ASYMMETRIC_EDGE", InvalidArgument,
        /// A point had a NaN or infinite coordinate.
        NonFiniteCoordinate => NonFiniteCoordinate { .. } => "ARBOR_NON_FINITE_COORDINATE", InvalidArgument,
        /// Vertex ids do not form a dense range.
        NonDenseVertices => NonDenseVertices { .. } => "ARBOR_NON_DENSE_VERTICES", InvalidArgument,
        /// A vertex id was used that the structure does not track.
        VertexOutOfRange => VertexOutOfRange { .. } => "ARBOR_VERTEX_OUT_OF_RANGE", IndexOutOfRange,
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ArborError>;
