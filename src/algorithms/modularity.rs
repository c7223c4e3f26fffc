//! Modularity scoring (Newman-Girvan Q)
//!
//! Modularity measures how much denser edges fall within communities than a
//! random-graph null model with the same degree sequence would predict:
//!
//! ```text
//! Q = (1 / 2m) * sum over i,j in the same community of ( A[i][j] - k_i * k_j / 2m )
//! ```
//!
//! The score is computed from the graph's dense adjacency matrix as last
//! rebuilt — during detection that is the *original* matrix, while the
//! community labels come from the progressively cut graph. Q lies in [-1, 1]
//! for any simple undirected graph.
//!
//! # References
//!
//! - Newman & Girvan (2004): "Finding and evaluating community structure in networks"

use crate::error::DetectError;
use crate::storage::AdjacencyGraph;
use anyhow::Result;

/// Decimal digits kept in the reported score, for reproducible comparisons
const ROUNDING_DIGITS: f64 = 1e7;

/// Score the graph's current partition against its stored adjacency matrix
///
/// # Errors
///
/// [`DetectError::DegenerateGraph`] when the matrix holds no edges at all
/// (total edge weight zero), since Q is undefined there.
///
/// # Example
///
/// ```
/// use girvan_newman::{label_components, modularity, AdjacencyGraph, IndexBase};
///
/// // A single community always scores exactly zero
/// let mut graph = AdjacencyGraph::from_edge_list(&[(1, 2), (2, 3)], IndexBase::One);
/// label_components(&mut graph);
/// assert_eq!(modularity(&graph).unwrap(), 0.0);
/// ```
pub fn modularity(graph: &AdjacencyGraph) -> Result<f64> {
    let n = graph.matrix_dim();
    let a = graph.matrix();

    let m: f64 = a.iter().sum::<f64>() / 2.0;
    if m == 0.0 {
        return Err(DetectError::DegenerateGraph.into());
    }

    // Degree vector; the matrix is symmetric so row sums suffice
    let degrees: Vec<f64> = (0..n).map(|i| a[i * n..(i + 1) * n].iter().sum()).collect();

    let mut q = 0.0;
    for i in 0..n {
        let label_i = graph.label_of(AdjacencyGraph::matrix_id(i));
        for j in 0..n {
            if label_i == graph.label_of(AdjacencyGraph::matrix_id(j)) {
                q += a[i * n + j] - degrees[i] * degrees[j] / (2.0 * m);
            }
        }
    }

    Ok((q / (2.0 * m) * ROUNDING_DIGITS).round() / ROUNDING_DIGITS)
}
