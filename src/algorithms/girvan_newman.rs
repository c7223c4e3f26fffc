//! Divisive community detection (Girvan-Newman removal loop)
//!
//! The driver ties the pipeline together: score every edge's betweenness,
//! cut the maximal edge, relabel components, rescore modularity, and keep
//! the best partition seen. The loop never stops early — the search runs
//! until the graph has no edges left, because modularity is not monotone
//! along the removal sequence.
//!
//! The only non-determinism is the tie-break among maximal edges, drawn from
//! an injected random source so a fixed seed reproduces a run exactly.
//!
//! # References
//!
//! - Girvan & Newman (2002): "Community structure in social and biological networks"

use crate::algorithms::{edge_betweenness, label_components, modularity};
use crate::error::DetectError;
use crate::storage::AdjacencyGraph;
use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Progress record emitted once per edge removal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReport {
    /// Modularity of the partition after this removal
    pub modularity: f64,
    /// Number of connected components after this removal
    pub community_count: u32,
}

/// Best partition found across the whole removal sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionResult {
    /// Highest modularity observed, inclusive of the initial all-edges state
    pub best_modularity: f64,
    /// Community count of the best-scoring partition
    pub best_community_count: u32,
    /// Number of edges removed before the loop ended
    pub iterations: usize,
}

/// Run the removal loop to exhaustion with an injected random source
///
/// The `on_iteration` callback receives one [`IterationReport`] per removal;
/// the core never prints on its own.
///
/// # Errors
///
/// Propagates [`DetectError::DegenerateGraph`] for an edgeless input,
/// [`DetectError::EdgeNotFound`] if the graph loses its adjacency symmetry,
/// and [`DetectError::EmptyMaxSet`] if the betweenness table comes back empty
/// while edges remain.
///
/// # Example
///
/// ```
/// use girvan_newman::{detect_communities, AdjacencyGraph, IndexBase};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// // Two triangles joined by a bridge: the best partition cuts the bridge
/// let mut graph = AdjacencyGraph::from_edge_list(
///     &[(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4), (3, 4)],
///     IndexBase::One,
/// );
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let result = detect_communities(&mut graph, &mut rng, |_| {}).unwrap();
/// assert_eq!(result.best_community_count, 2);
/// assert!((result.best_modularity - 0.3571429).abs() < 1e-9);
/// ```
pub fn detect_communities<R, F>(
    graph: &mut AdjacencyGraph,
    rng: &mut R,
    on_iteration: F,
) -> Result<DetectionResult>
where
    R: Rng + ?Sized,
    F: FnMut(&IterationReport),
{
    detect_communities_capped(graph, rng, None, on_iteration)
}

/// Removal loop with an optional defensive iteration cap
///
/// Base behavior (`cap = None`) always runs until every edge is removed; the
/// cap exists only as a bound for pathological inputs and is surfaced by the
/// CLI as `--max-iterations`.
///
/// # Errors
///
/// Same failure modes as [`detect_communities`].
pub fn detect_communities_capped<R, F>(
    graph: &mut AdjacencyGraph,
    rng: &mut R,
    cap: Option<usize>,
    mut on_iteration: F,
) -> Result<DetectionResult>
where
    R: Rng + ?Sized,
    F: FnMut(&IterationReport),
{
    let (_, components) = label_components(graph);
    let mut best_modularity = modularity(graph)?;
    let mut best_community_count = components;
    let mut iterations = 0_usize;

    while graph.edge_count() > 0 {
        if cap.is_some_and(|limit| iterations >= limit) {
            break;
        }

        let scores = edge_betweenness(graph);
        let (v, w) = select_max_edge(graph, &scores, rng)?;
        graph.remove_edge(v, w)?;

        let (_, community_count) = label_components(graph);
        let score = modularity(graph)?;
        iterations += 1;

        on_iteration(&IterationReport {
            modularity: score,
            community_count,
        });

        if score > best_modularity {
            best_modularity = score;
            best_community_count = community_count;
        }
    }

    Ok(DetectionResult {
        best_modularity,
        best_community_count,
        iterations,
    })
}

/// Convenience entry point: entropy-seeded RNG, progress logged at info level
///
/// # Errors
///
/// Same failure modes as [`detect_communities`].
pub fn run_detection(graph: &mut AdjacencyGraph) -> Result<DetectionResult> {
    let mut rng = StdRng::from_entropy();
    detect_communities(graph, &mut rng, |report| {
        info!(
            "modularity: {} - communities: {}",
            report.modularity, report.community_count
        );
    })
}

/// Pick the maximal-betweenness edge, reproducing the reference tie-break
///
/// Candidates are enumerated in the graph's edge order (both directions of
/// every undirected edge). More than two keys tied at the maximum draw
/// uniformly from the injected Rng; otherwise the first key in enumeration
/// order wins. A single maximal undirected edge therefore always takes the
/// deterministic branch, since its two directed keys tie with each other.
#[allow(clippy::float_cmp)] // ties must match the stored maximum exactly
fn select_max_edge<R>(
    graph: &AdjacencyGraph,
    scores: &HashMap<(u32, u32), f64>,
    rng: &mut R,
) -> Result<(u32, u32)>
where
    R: Rng + ?Sized,
{
    let order = graph.edges();

    let mut max = f64::NEG_INFINITY;
    for edge in &order {
        if let Some(&score) = scores.get(edge) {
            if score > max {
                max = score;
            }
        }
    }

    let tied: Vec<(u32, u32)> = order
        .into_iter()
        .filter(|edge| scores.get(edge).is_some_and(|&score| score == max))
        .collect();

    if tied.is_empty() {
        return Err(DetectError::EmptyMaxSet {
            edges_remaining: graph.edge_count(),
        }
        .into());
    }

    if tied.len() > 2 {
        if let Some(&edge) = tied.choose(rng) {
            return Ok(edge);
        }
    }
    Ok(tied[0])
}
