//! Edge betweenness centrality via Brandes' accumulation
//!
//! Edge betweenness is the fraction of all-pairs shortest paths that pass
//! through a given edge, summed over all source nodes. Naive computation is
//! O(V^3); Brandes (2001) reaches O(VE) for unweighted graphs by running one
//! BFS per source and back-propagating path dependencies in a single reverse
//! pass over the BFS visit order:
//!
//! ```text
//! delta_s(v) = sum over successors w of v:  (sigma_sv / sigma_sw) * (1 + delta_s(w))
//! ```
//!
//! Every undirected edge is keyed under both orderings with identical scores,
//! and the final global halving corrects the double count from each node
//! acting as both source and implicit target.
//!
//! # References
//!
//! - Brandes (2001): "A faster algorithm for betweenness centrality"
//! - Girvan & Newman (2002): "Community structure in social and biological networks"

use crate::storage::AdjacencyGraph;
use std::collections::{HashMap, VecDeque};

/// Per-source BFS output consumed by the dependency accumulation
struct ShortestPaths {
    /// Nodes in non-decreasing distance order (valid reverse-topological order)
    visit_order: Vec<u32>,
    /// Immediate predecessors on some shortest path from the source
    predecessors: HashMap<u32, Vec<u32>>,
    /// Number of shortest paths from the source to each node
    sigma: HashMap<u32, f64>,
}

/// Compute the betweenness centrality of every edge in the graph
///
/// The returned table holds both directed orderings of every undirected edge
/// with identical, non-negative scores. It is a value object: callers select
/// the maximal edge and discard it.
///
/// # Example
///
/// ```
/// use girvan_newman::{edge_betweenness, AdjacencyGraph};
///
/// // Path 1 - 2 - 3: the shortest path between 1 and 3 crosses both edges
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 3);
///
/// let scores = edge_betweenness(&graph);
/// assert_eq!(scores[&(1, 2)], 2.0); // pairs (1,2) and (1,3)
/// assert_eq!(scores[&(1, 2)], scores[&(2, 1)]);
/// ```
#[must_use]
pub fn edge_betweenness(graph: &AdjacencyGraph) -> HashMap<(u32, u32), f64> {
    let mut scores: HashMap<(u32, u32), f64> =
        graph.edges().into_iter().map(|edge| (edge, 0.0)).collect();

    for &source in graph.nodes() {
        let paths = shortest_path_counts(graph, source);
        accumulate(&mut scores, paths);
    }

    // Each undirected shortest path was counted from both endpoints
    for score in scores.values_mut() {
        *score *= 0.5;
    }

    scores
}

/// Single-source BFS recording path counts, predecessors, and visit order
fn shortest_path_counts(graph: &AdjacencyGraph, source: u32) -> ShortestPaths {
    let mut visit_order = Vec::with_capacity(graph.node_count());
    let mut predecessors: HashMap<u32, Vec<u32>> =
        graph.nodes().iter().map(|&v| (v, Vec::new())).collect();
    let mut sigma: HashMap<u32, f64> = graph.nodes().iter().map(|&v| (v, 0.0)).collect();
    let mut distance: HashMap<u32, u32> = HashMap::new();

    sigma.insert(source, 1.0);
    distance.insert(source, 0);

    let mut queue = VecDeque::from([source]);
    while let Some(v) = queue.pop_front() {
        visit_order.push(v);
        let distance_v = distance[&v];
        let sigma_v = sigma[&v];

        for &w in graph.neighbors(v) {
            if !distance.contains_key(&w) {
                queue.push_back(w);
                distance.insert(w, distance_v + 1);
            }
            // w sits one level deeper: v's paths extend to w
            if distance[&w] == distance_v + 1 {
                *sigma.entry(w).or_insert(0.0) += sigma_v;
                predecessors.entry(w).or_default().push(v);
            }
        }
    }

    ShortestPaths {
        visit_order,
        predecessors,
        sigma,
    }
}

/// Reverse-order dependency accumulation onto the edge score table
fn accumulate(scores: &mut HashMap<(u32, u32), f64>, paths: ShortestPaths) {
    let ShortestPaths {
        mut visit_order,
        predecessors,
        sigma,
    } = paths;

    let mut delta: HashMap<u32, f64> = visit_order.iter().map(|&v| (v, 0.0)).collect();

    while let Some(w) = visit_order.pop() {
        let coefficient = (1.0 + delta[&w]) / sigma[&w];
        if let Some(preds) = predecessors.get(&w) {
            for &v in preds {
                let contribution = sigma[&v] * coefficient;
                *scores.entry((w, v)).or_insert(0.0) += contribution;
                *scores.entry((v, w)).or_insert(0.0) += contribution;
                *delta.entry(v).or_insert(0.0) += contribution;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_empty_table() {
        let graph = AdjacencyGraph::new();
        assert!(edge_betweenness(&graph).is_empty());
    }

    #[test]
    fn test_single_edge() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(1, 2);

        let scores = edge_betweenness(&graph);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[&(1, 2)], 1.0);
        assert_eq!(scores[&(2, 1)], 1.0);
    }

    #[test]
    fn test_path_graph_middle_edge_dominates() {
        // 1 - 2 - 3 - 4: edge (2,3) carries the most shortest paths
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);

        let scores = edge_betweenness(&graph);
        assert!(scores[&(2, 3)] > scores[&(1, 2)]);
        assert!(scores[&(2, 3)] > scores[&(3, 4)]);

        // Closed forms: (1,2) carries pairs {1-2, 1-3, 1-4},
        // (2,3) carries {1-3, 1-4, 2-3, 2-4}
        assert_eq!(scores[&(1, 2)], 3.0);
        assert_eq!(scores[&(2, 3)], 4.0);
    }

    #[test]
    fn test_star_closed_form() {
        // Star with center 1 and k = 4 leaves: every spoke carries the pair
        // to its own leaf plus the k - 1 leaf-to-leaf pairs, so each spoke
        // scores exactly k
        let mut graph = AdjacencyGraph::new();
        for leaf in 2..=5 {
            graph.add_edge(1, leaf);
        }

        let scores = edge_betweenness(&graph);
        for leaf in 2..=5 {
            assert_eq!(scores[&(1, leaf)], 4.0);
            assert_eq!(scores[&(leaf, 1)], 4.0);
        }
    }

    #[test]
    fn test_bridge_between_triangles_dominates() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 1);
        graph.add_edge(4, 5);
        graph.add_edge(5, 6);
        graph.add_edge(6, 4);
        graph.add_edge(3, 4);

        let scores = edge_betweenness(&graph);
        let bridge = scores[&(3, 4)];
        // Every cross pair routes over the bridge: 3 x 3 = 9
        assert_eq!(bridge, 9.0);
        for (&edge, &score) in &scores {
            if edge != (3, 4) && edge != (4, 3) {
                assert!(score < bridge, "edge {edge:?} scored {score}");
            }
        }
    }

    #[test]
    fn test_scores_symmetric_and_non_negative() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);
        graph.add_edge(4, 1);
        graph.add_edge(1, 3);

        let scores = edge_betweenness(&graph);
        for (&(v, w), &score) in &scores {
            assert!(score >= 0.0);
            assert_eq!(score, scores[&(w, v)]);
        }
    }

    #[test]
    fn test_disconnected_components_are_independent() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(3, 4);

        let scores = edge_betweenness(&graph);
        assert_eq!(scores[&(1, 2)], 1.0);
        assert_eq!(scores[&(3, 4)], 1.0);
    }
}
