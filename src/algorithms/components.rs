//! Connected-component labeling
//!
//! Breadth-first labeling of the undirected graph: components receive
//! successive ids 1, 2, 3, … in the order they are first discovered while
//! scanning nodes in insertion order. Every call recomputes the partition
//! from scratch and overwrites the labels stored on the graph.

use crate::storage::AdjacencyGraph;
use std::collections::{HashMap, VecDeque};

/// Label every node with its connected-component id
///
/// Deterministic given the graph's node insertion order. Mutates the graph's
/// stored labels and component count, and returns both for callers that want
/// a snapshot.
///
/// # Example
///
/// ```
/// use girvan_newman::{label_components, AdjacencyGraph};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge(1, 2);
/// graph.add_edge(3, 4);
///
/// let (labels, count) = label_components(&mut graph);
/// assert_eq!(count, 2);
/// assert_eq!(labels[&1], labels[&2]);
/// assert_ne!(labels[&1], labels[&3]);
/// ```
pub fn label_components(graph: &mut AdjacencyGraph) -> (HashMap<u32, u32>, u32) {
    let mut labels: HashMap<u32, u32> = HashMap::with_capacity(graph.node_count());
    let mut component = 0_u32;
    let mut queue = VecDeque::new();

    for index in 0..graph.node_count() {
        let start = graph.nodes()[index];
        if labels.contains_key(&start) {
            continue;
        }

        component += 1;
        labels.insert(start, component);
        queue.push_back(start);

        while let Some(v) = queue.pop_front() {
            for &w in graph.neighbors(v) {
                if !labels.contains_key(&w) {
                    labels.insert(w, component);
                    queue.push_back(w);
                }
            }
        }
    }

    graph.apply_partition(&labels, component);
    (labels, component)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_has_no_components() {
        let mut graph = AdjacencyGraph::new();
        let (labels, count) = label_components(&mut graph);
        assert_eq!(count, 0);
        assert!(labels.is_empty());
    }

    #[test]
    fn test_single_chain_single_component() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);

        let (labels, count) = label_components(&mut graph);
        assert_eq!(count, 1);
        assert!(labels.values().all(|&c| c == 1));
    }

    #[test]
    fn test_component_ids_follow_discovery_order() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(5, 6);
        graph.add_edge(3, 4);

        let (labels, count) = label_components(&mut graph);
        assert_eq!(count, 3);
        // Discovery order follows node insertion: {1,2} then {5,6} then {3,4}
        assert_eq!(labels[&1], 1);
        assert_eq!(labels[&5], 2);
        assert_eq!(labels[&3], 3);
    }

    #[test]
    fn test_relabeling_overwrites_graph_state() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);

        label_components(&mut graph);
        assert_eq!(graph.component_count(), 1);

        graph.remove_edge(2, 3).unwrap();
        let (labels, count) = label_components(&mut graph);
        assert_eq!(count, 2);
        assert_eq!(graph.component_count(), 2);
        assert_ne!(labels[&1], labels[&3]);
    }

    #[test]
    fn test_labeling_is_idempotent() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(4, 5);
        graph.add_edge(2, 3);

        let (first, first_count) = label_components(&mut graph);
        let (second, second_count) = label_components(&mut graph);

        assert_eq!(first, second);
        assert_eq!(first_count, second_count);
    }
}
