//! Adjacency-list graph representation
//!
//! The container the whole pipeline operates on: neighbor lists keyed by node
//! id, a dense adjacency matrix derived from them, and the per-node community
//! label written by component relabeling.
//!
//! # Layout
//!
//! ```text
//! Graph: 1 — 2, 2 — 3
//!
//! order:     [1, 2, 3]                 // node iteration order (insertion)
//! adjacency: {1: [2], 2: [1, 3], 3: [2]}
//! matrix:    [0 1 0]
//!            [1 0 1]                   // row-major, indexed by id - 1
//!            [0 1 0]
//! ```
//!
//! Node ids are positive and expected to cover the closed range `[1, N]` once
//! loading is complete; the matrix is sized `N x N` and indexed through
//! [`AdjacencyGraph::matrix_index`]. Parallel edges are never deduplicated and
//! self-loops are never rejected — well-formed input is a caller precondition.

use crate::error::DetectError;
use anyhow::Result;
use std::collections::HashMap;

/// Interpretation of raw node ids in an edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBase {
    /// Ids are 0-based and get shifted by +1 into the internal 1-based range
    Zero,
    /// Ids are already 1-based and are used as given
    One,
}

/// Mutable undirected graph: adjacency lists, derived dense matrix, labels
///
/// # Example
///
/// ```
/// use girvan_newman::AdjacencyGraph;
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 3);
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbors(2), &[1, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    /// Node ids in first-insertion order; the crate-wide iteration order
    order: Vec<u32>,

    /// Neighbor lists; duplicates appear only if the caller inserts a
    /// parallel edge
    adjacency: HashMap<u32, Vec<u32>>,

    /// Dense N x N symmetric 0/1 matrix, row-major, rebuilt only by
    /// `rebuild_matrix`
    matrix: Vec<f64>,

    /// Matrix dimension at the time of the last rebuild
    matrix_dim: usize,

    /// Community label per node; 0 is the unlabeled sentinel
    labels: HashMap<u32, u32>,

    /// Component count from the last relabeling
    component_count: u32,

    /// Undirected edges, each counted once
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from raw edge pairs, then derive the adjacency matrix
    ///
    /// With [`IndexBase::Zero`], every raw id is shifted by +1 so the internal
    /// ids stay 1-based. The matrix is built here exactly once; detection
    /// never rebuilds it (see [`Self::rebuild_matrix`]).
    ///
    /// # Example
    ///
    /// ```
    /// use girvan_newman::{AdjacencyGraph, IndexBase};
    ///
    /// let graph = AdjacencyGraph::from_edge_list(&[(0, 1), (1, 2)], IndexBase::Zero);
    /// assert_eq!(graph.neighbors(1), &[2]);
    /// assert_eq!(graph.neighbors(2), &[1, 3]);
    /// ```
    #[must_use]
    pub fn from_edge_list(pairs: &[(u32, u32)], base: IndexBase) -> Self {
        let mut graph = Self::new();
        for &(v, w) in pairs {
            match base {
                IndexBase::One => graph.add_edge(v, w),
                IndexBase::Zero => graph.add_edge(v + 1, w + 1),
            }
        }
        graph.rebuild_matrix();
        graph
    }

    /// Insert an undirected edge, creating unseen endpoints on the way
    ///
    /// No self-loop or duplicate-edge rejection: a repeated call appends a
    /// second occurrence to both neighbor lists.
    pub fn add_edge(&mut self, v: u32, w: u32) {
        self.touch(v);
        self.touch(w);
        if let Some(neighbors) = self.adjacency.get_mut(&v) {
            neighbors.push(w);
        }
        if let Some(neighbors) = self.adjacency.get_mut(&w) {
            neighbors.push(v);
        }
        self.edge_count += 1;
    }

    /// Remove exactly one occurrence of the undirected edge (v, w)
    ///
    /// Both occurrence checks run before either list is touched, so a failed
    /// removal leaves the adjacency symmetric.
    ///
    /// # Errors
    ///
    /// [`DetectError::EdgeNotFound`] if either directed occurrence is absent.
    pub fn remove_edge(&mut self, v: u32, w: u32) -> Result<()> {
        if !self.has_occurrence(v, w) || !self.has_occurrence(w, v) {
            return Err(DetectError::EdgeNotFound { v, w }.into());
        }
        self.detach(v, w)?;
        self.detach(w, v)?;
        self.edge_count -= 1;
        Ok(())
    }

    /// Every directed pair (v, w) with w in v's neighbor list
    ///
    /// Each undirected edge appears twice, once per direction, in node
    /// insertion order. This is the crate-wide edge enumeration order; the
    /// driver relies on it for the deterministic branch of the tie-break.
    #[must_use]
    pub fn edges(&self) -> Vec<(u32, u32)> {
        let mut edges = Vec::with_capacity(self.edge_count * 2);
        for &v in &self.order {
            for &w in self.neighbors(v) {
                edges.push((v, w));
            }
        }
        edges
    }

    /// Recompute the dense matrix from the current adjacency lists
    ///
    /// Called once at load time and intentionally never again: modularity is
    /// always scored against the original graph's density while the partition
    /// evolves on the shrinking graph. Callers who want a matrix of the
    /// current state must invoke this explicitly.
    pub fn rebuild_matrix(&mut self) {
        let n = self.order.len();
        self.matrix = vec![0.0; n * n];
        self.matrix_dim = n;
        for &v in &self.order {
            if let Some(neighbors) = self.adjacency.get(&v) {
                for &w in neighbors {
                    let (i, j) = (Self::matrix_index(v), Self::matrix_index(w));
                    self.matrix[i * n + j] = 1.0;
                    self.matrix[j * n + i] = 1.0;
                }
            }
        }
    }

    /// Translate a 1-based node id to a 0-based matrix index
    ///
    /// The single place where the id/index shift happens. Ids must be
    /// positive; id 0 is out of the supported range.
    #[must_use]
    pub fn matrix_index(id: u32) -> usize {
        id as usize - 1
    }

    /// Translate a 0-based matrix index back to a 1-based node id
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // matrix dim is bounded by u32 ids
    pub fn matrix_id(index: usize) -> u32 {
        index as u32 + 1
    }

    /// Node ids in insertion order
    #[must_use]
    pub fn nodes(&self) -> &[u32] {
        &self.order
    }

    /// Neighbor list of a node (empty for unknown nodes)
    #[must_use]
    pub fn neighbors(&self, v: u32) -> &[u32] {
        self.adjacency.get(&v).map_or(&[], Vec::as_slice)
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges, each counted once
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The dense adjacency matrix as last rebuilt (row-major)
    #[must_use]
    pub fn matrix(&self) -> &[f64] {
        &self.matrix
    }

    /// Dimension of the matrix as last rebuilt
    #[must_use]
    pub fn matrix_dim(&self) -> usize {
        self.matrix_dim
    }

    /// Community label of a node; 0 means unlabeled
    #[must_use]
    pub fn label_of(&self, v: u32) -> u32 {
        self.labels.get(&v).copied().unwrap_or(0)
    }

    /// The full label mapping
    #[must_use]
    pub fn labels(&self) -> &HashMap<u32, u32> {
        &self.labels
    }

    /// Component count recorded by the last relabeling
    #[must_use]
    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    /// Overwrite the stored partition with a fresh labeling
    pub fn apply_partition(&mut self, labels: &HashMap<u32, u32>, component_count: u32) {
        for (&v, &community) in labels {
            self.labels.insert(v, community);
        }
        self.component_count = component_count;
    }

    /// Register a node if unseen: empty neighbor list, unlabeled sentinel
    fn touch(&mut self, v: u32) {
        if !self.adjacency.contains_key(&v) {
            self.order.push(v);
            self.adjacency.insert(v, Vec::new());
            self.labels.insert(v, 0);
        }
    }

    fn has_occurrence(&self, v: u32, w: u32) -> bool {
        self.neighbors(v).contains(&w)
    }

    /// Remove the first occurrence of w from v's neighbor list
    fn detach(&mut self, v: u32, w: u32) -> Result<()> {
        let neighbors = self
            .adjacency
            .get_mut(&v)
            .ok_or(DetectError::EdgeNotFound { v, w })?;
        let position = neighbors
            .iter()
            .position(|&n| n == w)
            .ok_or(DetectError::EdgeNotFound { v, w })?;
        neighbors.remove(position);
        Ok(())
    }
}
