//! Detection pipeline algorithms (labeling, betweenness, modularity, driver)

pub mod betweenness;
pub mod components;
pub mod girvan_newman;
pub mod modularity;

pub use betweenness::edge_betweenness;
pub use components::label_components;
pub use girvan_newman::{
    detect_communities, detect_communities_capped, run_detection, DetectionResult,
    IterationReport,
};
pub use modularity::modularity;
