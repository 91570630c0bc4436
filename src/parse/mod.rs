//! Graph description parser.
//!
//! A description is line oriented: the first content line declares the number
//! of edges, every following content line names one `source destination` pair.
//! Blank lines, `#` comments and lines without letters or digits are skipped.

pub mod lines;

use std::path::Path;

use serde::Deserialize;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};

/// Default maximum length of a node name.
pub const DEFAULT_MAX_NAME_LEN: usize = 40;

/// Upper bound on up-front node storage, whatever the declared edge count.
const MAX_PRESIZE: usize = 1 << 16;

/// What to do when a name appears on more than one edge line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Insert a fresh node per occurrence; lookups only ever see the first.
    Keep,
    /// Reuse the existing node with that name.
    #[default]
    Merge,
}

/// How an edge line is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `A B` records only `A -> B`.
    #[default]
    Directed,
    /// `A B` records `A -> B` and `B -> A`.
    Undirected,
}

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub duplicates: DuplicatePolicy,
    pub direction: Direction,
    pub max_name_len: usize,
    /// Hard limit on stored nodes; `None` lets the graph grow.
    pub max_nodes: Option<usize>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::default(),
            direction: Direction::default(),
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_nodes: None,
        }
    }
}

impl BuildOptions {
    /// Apply command-line switches on top of configured settings.
    /// A switch that is off leaves the configured value alone.
    pub fn with_overrides(mut self, undirected: bool, keep_duplicates: bool) -> Self {
        if undirected {
            self.direction = Direction::Undirected;
        }
        if keep_duplicates {
            self.duplicates = DuplicatePolicy::Keep;
        }
        self
    }

    fn empty_graph(&self, declared_edges: usize) -> Graph {
        match self.max_nodes {
            Some(max) => Graph::with_capacity(max),
            // Worst case every edge brings two new names.
            None => Graph::unbounded_with_hint(declared_edges.saturating_mul(2).min(MAX_PRESIZE)),
        }
    }

    fn record_edge(&self, graph: &mut Graph, from: &str, to: &str) -> Result<()> {
        let (src, dest) = match self.duplicates {
            DuplicatePolicy::Merge => (graph.insert_or_get(from)?, graph.insert_or_get(to)?),
            DuplicatePolicy::Keep => {
                graph.insert_node(from)?;
                graph.insert_node(to)?;
                (lookup(graph, from)?, lookup(graph, to)?)
            }
        };
        graph.insert_adjacency(src, dest)?;
        if self.direction == Direction::Undirected {
            graph.insert_adjacency(dest, src)?;
        }
        Ok(())
    }
}

fn lookup(graph: &Graph, name: &str) -> Result<NodeId> {
    graph
        .find_node(name)
        .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
}

/// Split an edge line into its two node names.
fn parse_edge_line<'a>(line: &'a str, line_no: usize, max_len: usize) -> Result<(&'a str, &'a str)> {
    let mut tokens = line.split_whitespace();
    let (Some(from), Some(to), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(GraphError::MalformedEdge {
            line: line_no,
            content: line.trim().to_string(),
        });
    };
    for name in [from, to] {
        if name.chars().count() > max_len {
            return Err(GraphError::NameTooLong {
                line: line_no,
                name: name.to_string(),
                max: max_len,
            });
        }
    }
    Ok((from, to))
}

/// Build a graph from description text.
///
/// Any error aborts the build; no partially built graph is returned.
pub fn parse_description(content: &str, options: &BuildOptions) -> Result<Graph> {
    let mut declared: Option<usize> = None;
    let mut parsed = 0usize;
    let mut graph = Graph::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if lines::is_ignorable(line) {
            continue;
        }

        match declared {
            None => {
                let count = lines::leading_count(line).ok_or_else(|| GraphError::InvalidEdgeCount {
                    line: line_no,
                    content: line.trim().to_string(),
                })?;
                log::debug!("Declared edge count: {}", count);
                graph = options.empty_graph(count);
                declared = Some(count);
            }
            Some(_) => {
                let (from, to) = parse_edge_line(line, line_no, options.max_name_len)?;
                options.record_edge(&mut graph, from, to)?;
                parsed += 1;
                log::debug!("Edge {}: {} -> {}", parsed, from, to);
            }
        }
    }

    let declared = declared.ok_or(GraphError::MissingEdgeCount)?;
    if declared != parsed {
        return Err(GraphError::EdgeCountMismatch { declared, parsed });
    }

    log::info!(
        "Graph built: {} nodes, {} adjacencies from {} edge lines",
        graph.node_count(),
        graph.edge_count(),
        parsed
    );
    Ok(graph)
}

/// Read and parse the description at `path`.
pub fn load_graph(path: &Path, options: &BuildOptions) -> Result<Graph> {
    log::info!("Loading graph description from {}", path.display());
    let bytes = std::fs::read(path).map_err(|source| GraphError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    // Stray non-UTF-8 bytes (usually in comments) must not reject the file
    let content = String::from_utf8_lossy(&bytes);
    parse_description(&content, options)
}
