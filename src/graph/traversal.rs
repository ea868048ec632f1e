//! Depth-first and breadth-first traversal producing discovery edges

use std::collections::VecDeque;

use super::{Edge, Graph, Label, VertexId};
use crate::error::Result;

/// Per-traversal record of reached vertices, indexed by `VertexId`
#[derive(Debug)]
struct Visited(Vec<bool>);

impl Visited {
    /// Creates a record where no vertex has been reached
    fn new(vertex_count: usize) -> Self {
        Self(vec![false; vertex_count])
    }

    /// Returns true if `id` has been reached. Unknown ids count as reached.
    fn contains(&self, id: VertexId) -> bool {
        self.0.get(id.index()).copied().unwrap_or(true)
    }

    /// Marks `id` as reached
    fn insert(&mut self, id: VertexId) {
        if let Some(flag) = self.0.get_mut(id.index()) {
            *flag = true;
        }
    }
}

impl Graph {
    /// Depth-first traversal from the first inserted vertex.
    ///
    /// Returns the discovery edges `(parent, child)` in the order children were first
    /// reached. Only vertices reachable from the start are visited; an empty graph yields
    /// no edges.
    #[must_use]
    pub fn depth_first_search(&self) -> Vec<Edge> {
        self.first_vertex().map_or_else(Vec::new, |start| self.depth_first_from(start))
    }

    /// Depth-first traversal from the vertex labelled `start`
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if there is no
    /// such vertex.
    pub fn depth_first_search_from(&self, start: Label) -> Result<Vec<Edge>> {
        let start = self.vertex_id(start)?;
        Ok(self.depth_first_from(start))
    }

    /// Breadth-first traversal from the first inserted vertex.
    ///
    /// Returns the discovery edges `(parent, child)` in the order children were first
    /// reached. Only vertices reachable from the start are visited; an empty graph yields
    /// no edges.
    #[must_use]
    pub fn breadth_first_search(&self) -> Vec<Edge> {
        self.first_vertex().map_or_else(Vec::new, |start| self.breadth_first_from(start))
    }

    /// Breadth-first traversal from the vertex labelled `start`
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if there is no
    /// such vertex.
    pub fn breadth_first_search_from(&self, start: Label) -> Result<Vec<Edge>> {
        let start = self.vertex_id(start)?;
        Ok(self.breadth_first_from(start))
    }

    /// Handle of the first inserted vertex, if any
    fn first_vertex(&self) -> Option<VertexId> {
        (self.vertex_count() > 0).then_some(VertexId(0))
    }

    /// Iterative depth-first walk.
    ///
    /// Each stack frame keeps a cursor into its adjacency list. Everything before the
    /// cursor is already visited, so resuming there finds the same first unvisited
    /// neighbour as a scan from the start would.
    fn depth_first_from(&self, start: VertexId) -> Vec<Edge> {
        let mut visited = Visited::new(self.vertex_count());
        let mut discovered = Vec::new();
        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];
        visited.insert(start);

        while let Some((parent, cursor)) = stack.last_mut() {
            let next = self
                .adjacency(*parent)
                .iter()
                .enumerate()
                .skip(*cursor)
                .find(|&(_, &child)| !visited.contains(child));

            let Some((position, &child)) = next else {
                stack.pop();
                continue;
            };

            *cursor = position.saturating_add(1);
            visited.insert(child);
            if let (Some(from), Some(to)) = (self.label(*parent), self.label(child)) {
                discovered.push((from, to));
            }
            stack.push((child, 0));
        }

        discovered
    }

    /// Queue-based breadth-first walk
    fn breadth_first_from(&self, start: VertexId) -> Vec<Edge> {
        let mut visited = Visited::new(self.vertex_count());
        let mut discovered = Vec::new();
        let mut queue = VecDeque::from([start]);
        visited.insert(start);

        while let Some(parent) = queue.pop_front() {
            for &child in self.adjacency(parent) {
                if visited.contains(child) {
                    continue;
                }
                visited.insert(child);
                if let (Some(from), Some(to)) = (self.label(parent), self.label(child)) {
                    discovered.push((from, to));
                }
                queue.push_back(child);
            }
        }

        discovered
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Graph, Label};
    use crate::Error;

    /// Builds a graph from labels and directed edges, in the given order
    fn build(labels: &[Label], edges: &[(Label, Label)]) -> Graph {
        let mut graph = Graph::new();
        for &label in labels {
            graph.add_vertex(label).unwrap();
        }
        for &(from, to) in edges {
            graph.add_edge(from, to).unwrap();
        }
        graph
    }

    /// Vertices 1..=5 with edges (1,2), (1,3), (2,4), (3,4), (4,5)
    fn diamond_with_tail() -> Graph {
        build(&[1, 2, 3, 4, 5], &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)])
    }

    #[test]
    fn test_breadth_first_suppresses_revisited_vertex() {
        let graph = diamond_with_tail();
        assert_eq!(graph.breadth_first_search(), vec![(1, 2), (1, 3), (2, 4), (4, 5)]);
    }

    #[test]
    fn test_depth_first_order() {
        let graph = diamond_with_tail();
        assert_eq!(graph.depth_first_search(), vec![(1, 2), (2, 4), (4, 5), (1, 3)]);
    }

    #[test]
    fn test_depth_first_backtracks_to_first_unvisited() {
        // 1 -> 2, 1 -> 3, 1 -> 4 where 2 -> 3: DFS reaches 3 through 2 and then 4 from 1
        let graph = build(&[1, 2, 3, 4], &[(1, 2), (1, 3), (1, 4), (2, 3)]);
        assert_eq!(graph.depth_first_search(), vec![(1, 2), (2, 3), (1, 4)]);
        assert_eq!(graph.breadth_first_search(), vec![(1, 2), (1, 3), (1, 4)]);
    }

    #[test]
    fn test_unreachable_vertices_are_not_discovered() {
        let graph = build(&[1, 2, 3, 4], &[(1, 2), (3, 4)]);
        assert_eq!(graph.depth_first_search(), vec![(1, 2)]);
        assert_eq!(graph.breadth_first_search(), vec![(1, 2)]);
    }

    #[test]
    fn test_edges_are_directed() {
        // Vertex 1 only has incoming edges
        let graph = build(&[1, 2, 3], &[(2, 1), (3, 1)]);
        assert!(graph.depth_first_search().is_empty());
        assert_eq!(graph.depth_first_search_from(2).unwrap(), vec![(2, 1)]);
    }

    #[test]
    fn test_cycles_terminate() {
        let graph = build(&[1, 2, 3], &[(1, 2), (2, 3), (3, 1), (1, 1)]);
        assert_eq!(graph.depth_first_search(), vec![(1, 2), (2, 3)]);
        assert_eq!(graph.breadth_first_search(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert!(graph.depth_first_search().is_empty());
        assert!(graph.breadth_first_search().is_empty());
    }

    #[test]
    fn test_search_from_label() {
        let graph = diamond_with_tail();
        assert_eq!(graph.breadth_first_search_from(3).unwrap(), vec![(3, 4), (4, 5)]);
        assert!(graph.depth_first_search_from(5).unwrap().is_empty());
        assert!(matches!(graph.depth_first_search_from(42), Err(Error::VertexNotFound(42))));
        assert!(matches!(graph.breadth_first_search_from(42), Err(Error::VertexNotFound(42))));
    }

    #[test]
    fn test_traversals_are_repeatable() {
        let graph = diamond_with_tail();
        let first = graph.depth_first_search();
        let second = graph.depth_first_search();
        assert_eq!(first, second);
        assert_eq!(graph.breadth_first_search(), graph.breadth_first_search());
    }
}
