use serde::Serialize;

/// Index of a node in its graph's arena. Only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named vertex with its outgoing adjacencies.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    neighbours: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            neighbours: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing adjacencies in insertion order.
    pub fn neighbours(&self) -> &[NodeId] {
        &self.neighbours
    }

    pub(crate) fn push_neighbour(&mut self, to: NodeId) {
        self.neighbours.push(to);
    }

    /// Names are compared by exact, case-sensitive equality.
    pub fn same_name(&self, other: &Node) -> bool {
        self.name == other.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_is_case_sensitive() {
        let a = Node::new("Umea");
        let b = Node::new("umea");
        let c = Node::new("Umea");
        assert!(!a.same_name(&b));
        assert!(a.same_name(&c));
    }

    #[test]
    fn test_neighbours_keep_insertion_order() {
        let mut n = Node::new("A");
        n.push_neighbour(NodeId(3));
        n.push_neighbour(NodeId(1));
        n.push_neighbour(NodeId(3));
        assert_eq!(n.neighbours(), &[NodeId(3), NodeId(1), NodeId(3)]);
    }
}
