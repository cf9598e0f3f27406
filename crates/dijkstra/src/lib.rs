mod distance;
mod engine;
mod error;
pub mod generator;
pub mod graph;
mod parse;
mod path;
pub mod report;

pub use distance::Distance;
pub use engine::DistanceMap;
pub use engine::Frontier;
pub use engine::ShortestPathEngine;
pub use engine::ShortestPaths;
pub use error::Error;
pub use error::Result;
pub use graph::Edge;
pub use graph::Graph;
pub use graph::NodeId;
pub use parse::ParsePolicy;
pub use parse::ParseWarning;
pub use parse::ParsedGraph;
pub use parse::load_edge_list;
pub use parse::parse_edge_list;
pub use path::PredecessorMap;
pub use path::path_to;
pub use report::Route;
pub use report::SourceReport;
pub use report::all_pairs;
pub use report::all_pairs_parallel;
