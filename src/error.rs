//! Error taxonomy for the detection pipeline
//!
//! Every failure propagates upward; nothing is retried or silently swallowed.
//! The algorithm is deterministic per step, so a retry has no meaning.

use thiserror::Error;

/// Errors raised by the graph container, the loader, and the removal loop
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectError {
    /// An edge-list line did not parse into two whitespace-separated integers
    #[error("line {line}: expected two whitespace-separated integers, got {content:?}")]
    MalformedInput {
        /// 1-based line number in the input file
        line: usize,
        /// The offending line, verbatim
        content: String,
    },

    /// `remove_edge` was asked to remove an occurrence that is not present
    #[error("edge ({v}, {w}) not present in adjacency list")]
    EdgeNotFound {
        /// First endpoint of the missing edge
        v: u32,
        /// Second endpoint of the missing edge
        w: u32,
    },

    /// Modularity requested while total edge weight is zero (Q is undefined)
    #[error("modularity is undefined for a graph with zero total edge weight")]
    DegenerateGraph,

    /// The betweenness table came back empty while edges remain to be removed.
    /// This is an internal invariant violation, not a user input error.
    #[error("betweenness table empty with {edges_remaining} edges remaining")]
    EmptyMaxSet {
        /// Edges still in the graph when the empty table was observed
        edges_remaining: usize,
    },
}
