//! Graph module: node registry, directed adjacencies and BFS reachability.
//!
//! Nodes are kept in insertion order in an arena and addressed by [`NodeId`].
//! Traversal state lives outside the graph (see [`VisitedSet`]), so a built
//! graph is only ever read during queries.

mod node;
mod traversal;
mod visited;

pub use node::{Node, NodeId};
pub use traversal::{find_path, reachable_from, trace_path, Reachability};
pub use visited::VisitedSet;

use crate::error::{GraphError, Result};

/// Append-only collection of named nodes and their outgoing adjacencies.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    capacity: Option<usize>,
    edge_count: usize,
}

impl Graph {
    /// Empty graph without a node limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph holding at most `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity: Some(capacity),
            edge_count: 0,
        }
    }

    /// Empty graph pre-sized for `hint` nodes but allowed to grow past it.
    pub fn unbounded_with_hint(hint: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(hint),
            capacity: None,
            edge_count: 0,
        }
    }

    /// Maximum node count, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Append a node named `name`. No existence check: repeated names
    /// produce distinct nodes, and only the first is visible to [`find_node`](Self::find_node).
    pub fn insert_node(&mut self, name: &str) -> Result<NodeId> {
        if let Some(capacity) = self.capacity {
            if self.nodes.len() >= capacity {
                return Err(GraphError::CapacityExceeded { capacity });
            }
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name));
        Ok(id)
    }

    /// Return the first node named `name`, inserting it if absent.
    pub fn insert_or_get(&mut self, name: &str) -> Result<NodeId> {
        match self.find_node(name) {
            Some(id) => Ok(id),
            None => self.insert_node(name),
        }
    }

    /// Linear scan in insertion order; first exact match wins.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.name() == name)
            .map(NodeId)
    }

    /// Record a directed adjacency `from -> to`. The reverse is not added.
    pub fn insert_adjacency(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check(to)?;
        let node = self
            .nodes
            .get_mut(from.index())
            .ok_or_else(|| GraphError::UnknownNode(format!("#{}", from.index())))?;
        node.push_neighbour(to);
        self.edge_count += 1;
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Name of `id`, or an empty string for ids from another graph.
    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).map(Node::name).unwrap_or("")
    }

    pub fn neighbours(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::neighbours).unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of recorded adjacencies.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_edges(&self) -> bool {
        self.edge_count > 0
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(format!("#{}", id.index())))
        }
    }
}
