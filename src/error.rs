use std::path::PathBuf;
use thiserror::Error;

/// Main error type for reachgraph
#[derive(Error, Debug)]
pub enum GraphError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph description could not be opened or read
    #[error("Failed to open {} for reading: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input ended before the edge-count line was seen
    #[error("Missing edge count: the description contains no content lines")]
    MissingEdgeCount,

    /// Edge-count line did not start with a non-negative integer
    #[error("Invalid edge count on line {line}: {content:?}")]
    InvalidEdgeCount { line: usize, content: String },

    /// Edge line without exactly two node names
    #[error("Malformed edge on line {line}: expected two node names, got {content:?}")]
    MalformedEdge { line: usize, content: String },

    /// Node name longer than the configured maximum
    #[error("Node name on line {line} exceeds {max} characters: {name:?}")]
    NameTooLong { line: usize, name: String, max: usize },

    /// Declared and parsed edge counts differ
    #[error("Wrong number of edges: declared {declared}, found {parsed}")]
    EdgeCountMismatch { declared: usize, parsed: usize },

    /// Bounded node store is full
    #[error("Node capacity exceeded: graph holds at most {capacity} nodes")]
    CapacityExceeded { capacity: usize },

    /// Node id or name not present in the graph
    #[error("Node not found: {0}")]
    UnknownNode(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GraphError {
    /// Construction errors end the process; everything else is reported and survived.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, GraphError::UnknownNode(_))
    }
}

/// Convenient Result type using GraphError
pub type Result<T> = std::result::Result<T, GraphError>;
