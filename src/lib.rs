pub mod config;
pub mod error;
pub mod graph;
pub mod parse;
pub mod query;

pub use config::Config;
pub use error::{GraphError, Result};
pub use graph::{find_path, Graph, Node, NodeId, Reachability};
pub use parse::{load_graph, parse_description, BuildOptions};
