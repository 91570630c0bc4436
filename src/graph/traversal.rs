//! BFS reachability over a built [`Graph`].

use std::collections::VecDeque;

use super::{Graph, NodeId, VisitedSet};

/// Reusable breadth-first search state.
///
/// The visited set and work queue are kept between queries to avoid
/// reallocating, but both are cleared before every call returns.
#[derive(Debug, Default)]
pub struct Reachability {
    visited: VisitedSet,
    queue: VecDeque<NodeId>,
}

impl Reachability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited flags as left by the last query. Always all clear between calls.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// True iff a node named like `dest` is reachable from `src` along directed adjacencies.
    ///
    /// Both ids must come from `graph`; the caller resolves names first.
    pub fn find_path(&mut self, graph: &Graph, src: NodeId, dest: NodeId) -> bool {
        let (Some(src_node), Some(dest_node)) = (graph.node(src), graph.node(dest)) else {
            log::warn!("find_path called with a node id outside the graph");
            return false;
        };
        if src_node.same_name(dest_node) {
            return true;
        }

        self.begin(graph);
        self.visited.set_visited(src, true);
        self.queue.push_back(src);

        while let Some(current) = self.queue.pop_front() {
            for &neighbour in graph.neighbours(current) {
                if !self.visited.is_visited(neighbour) {
                    self.visited.set_visited(neighbour, true);
                    self.queue.push_back(neighbour);
                }
                if graph.name(neighbour) == dest_node.name() {
                    self.finish();
                    return true;
                }
            }
        }

        self.finish();
        false
    }

    /// One shortest directed route from `src` to a node named like `dest`, endpoints included.
    pub fn trace_path(&mut self, graph: &Graph, src: NodeId, dest: NodeId) -> Option<Vec<NodeId>> {
        let src_node = graph.node(src)?;
        let dest_node = graph.node(dest)?;
        if src_node.same_name(dest_node) {
            return Some(vec![src]);
        }

        let mut parent: Vec<Option<NodeId>> = vec![None; graph.node_count()];
        self.begin(graph);
        self.visited.set_visited(src, true);
        self.queue.push_back(src);

        while let Some(current) = self.queue.pop_front() {
            for &neighbour in graph.neighbours(current) {
                if self.visited.is_visited(neighbour) {
                    continue;
                }
                self.visited.set_visited(neighbour, true);
                parent[neighbour.index()] = Some(current);
                self.queue.push_back(neighbour);
                if graph.name(neighbour) == dest_node.name() {
                    let mut route = vec![neighbour];
                    let mut step = neighbour;
                    while let Some(prev) = parent[step.index()] {
                        route.push(prev);
                        step = prev;
                    }
                    route.reverse();
                    self.finish();
                    return Some(route);
                }
            }
        }

        self.finish();
        None
    }

    /// Every node reachable from `src`, in BFS discovery order, `src` first.
    pub fn reachable_from(&mut self, graph: &Graph, src: NodeId) -> Vec<NodeId> {
        if graph.node(src).is_none() {
            return Vec::new();
        }

        let mut order = vec![src];
        self.begin(graph);
        self.visited.set_visited(src, true);
        self.queue.push_back(src);

        while let Some(current) = self.queue.pop_front() {
            for &neighbour in graph.neighbours(current) {
                if !self.visited.is_visited(neighbour) {
                    self.visited.set_visited(neighbour, true);
                    self.queue.push_back(neighbour);
                    order.push(neighbour);
                }
            }
        }

        self.finish();
        order
    }

    fn begin(&mut self, graph: &Graph) {
        self.queue.clear();
        self.visited.prepare(graph.node_count());
    }

    fn finish(&mut self) {
        self.queue.clear();
        self.visited.reset();
        debug_assert_eq!(self.visited.count(), 0, "visited flags survived a query");
    }
}

/// One-off reachability check; see [`Reachability::find_path`].
pub fn find_path(graph: &Graph, src: NodeId, dest: NodeId) -> bool {
    Reachability::new().find_path(graph, src, dest)
}

/// One-off shortest route; see [`Reachability::trace_path`].
pub fn trace_path(graph: &Graph, src: NodeId, dest: NodeId) -> Option<Vec<NodeId>> {
    Reachability::new().trace_path(graph, src, dest)
}

/// One-off reachable set; see [`Reachability::reachable_from`].
pub fn reachable_from(graph: &Graph, src: NodeId) -> Vec<NodeId> {
    Reachability::new().reachable_from(graph, src)
}
