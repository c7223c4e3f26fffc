//! Graph storage layer
//!
//! Provides the adjacency-list graph container and the edge-list file loader.

pub mod adjacency;
pub mod edge_list;

pub use adjacency::{AdjacencyGraph, IndexBase};
pub use edge_list::{parse_edge_list, read_edge_list};
