//! Property-based tests for the MST algorithms and MST clustering.
//!
//! Generated graphs are checked against a matrix-based oracle, for
//! structural soundness of the returned forest and for the spacing
//! guarantee of single-linkage clustering. Kruskal and Prim are also checked
//! against each other.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
