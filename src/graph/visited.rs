//! Per-query visited flags, indexed by [`NodeId`].

use super::NodeId;

/// Visited markers for one traversal.
///
/// Owned by the traversal engine rather than stored on nodes, so the graph
/// itself stays read-only while a query runs.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    flags: Vec<bool>,
    marked: Vec<NodeId>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make room for `node_count` nodes. Existing flags are cleared.
    pub fn prepare(&mut self, node_count: usize) {
        self.reset();
        if self.flags.len() < node_count {
            self.flags.resize(node_count, false);
        }
    }

    pub fn set_visited(&mut self, id: NodeId, flag: bool) {
        let idx = id.index();
        if idx >= self.flags.len() {
            if !flag {
                return;
            }
            self.flags.resize(idx + 1, false);
        }
        if flag && !self.flags[idx] {
            self.marked.push(id);
        }
        self.flags[idx] = flag;
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.flags.get(id.index()).copied().unwrap_or(false)
    }

    /// Clear every flag. Only touches entries that were set, so the cost
    /// follows the size of the last search rather than the graph.
    pub fn reset(&mut self) {
        for id in self.marked.drain(..) {
            self.flags[id.index()] = false;
        }
    }

    pub fn all_clear(&self) -> bool {
        self.flags.iter().all(|f| !f)
    }

    /// Number of nodes currently marked.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_query() {
        let mut v = VisitedSet::new();
        v.prepare(3);
        assert!(!v.is_visited(NodeId(1)));
        v.set_visited(NodeId(1), true);
        assert!(v.is_visited(NodeId(1)));
        assert_eq!(v.count(), 1);
        v.set_visited(NodeId(1), false);
        assert!(!v.is_visited(NodeId(1)));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut v = VisitedSet::new();
        v.prepare(4);
        v.set_visited(NodeId(0), true);
        v.set_visited(NodeId(3), true);
        v.set_visited(NodeId(3), true);
        v.reset();
        assert!(v.all_clear());
        assert_eq!(v.count(), 0);
    }

    #[test]
    fn test_out_of_range_grows_on_set() {
        let mut v = VisitedSet::new();
        assert!(!v.is_visited(NodeId(10)));
        v.set_visited(NodeId(10), true);
        assert!(v.is_visited(NodeId(10)));
        v.reset();
        assert!(v.all_clear());
    }

    #[test]
    fn test_unset_then_reset_does_not_panic() {
        let mut v = VisitedSet::new();
        v.prepare(2);
        v.set_visited(NodeId(0), true);
        v.set_visited(NodeId(0), false);
        v.set_visited(NodeId(0), true);
        v.reset();
        assert!(v.all_clear());
    }
}
