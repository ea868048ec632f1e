use super::{Graph, Label, VertexId};

/// Adjacency matrix of a graph, with rows and columns in vertex insertion order.
///
/// `is_adjacent(i, j)` is true iff the `j`-th vertex appears in the adjacency list of the
/// `i`-th vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Vertex labels, giving the order of both rows and columns
    labels: Vec<Label>,
    /// Row-major adjacency cells
    cells: Vec<Vec<bool>>,
}

impl AdjacencyMatrix {
    /// Labels heading the rows and columns
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of rows (and columns)
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true for the matrix of an empty graph
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns true if the vertex at `row` has an edge to the vertex at `column`.
    /// Out-of-range positions are never adjacent.
    #[must_use]
    pub fn is_adjacent(&self, row: usize, column: usize) -> bool {
        self.cells.get(row).and_then(|cells| cells.get(column)).copied().unwrap_or(false)
    }

    /// Rows of the matrix
    #[must_use]
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }
}

impl Graph {
    /// Derives the adjacency matrix from the current edges
    #[must_use]
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let count = self.vertex_count();
        let labels = self.labels().collect();
        let cells = self
            .vertices
            .iter()
            .map(|vertex| {
                (0..count).map(|column| vertex.adjacency.contains(&VertexId(column))).collect()
            })
            .collect();

        AdjacencyMatrix { labels, cells }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    #[test]
    fn test_adjacency_matrix() {
        let mut graph = Graph::new();
        for label in [10, 20, 30] {
            graph.add_vertex(label).unwrap();
        }
        graph.add_edge(10, 30).unwrap();
        graph.add_edge(30, 20).unwrap();
        graph.add_edge(20, 20).unwrap();

        let matrix = graph.adjacency_matrix();
        assert_eq!(matrix.labels(), &[10, 20, 30]);
        assert_eq!(matrix.len(), 3);
        assert_eq!(
            matrix.rows(),
            &[vec![false, false, true], vec![false, true, false], vec![false, true, false]]
        );
        assert!(matrix.is_adjacent(0, 2));
        assert!(!matrix.is_adjacent(2, 0));
        assert!(!matrix.is_adjacent(5, 5));
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = Graph::new().adjacency_matrix();
        assert!(matrix.is_empty());
        assert!(matrix.rows().is_empty());
    }

    #[test]
    fn test_matrix_counts_match_edges() {
        let mut graph = Graph::new();
        for label in 0..6 {
            graph.add_vertex(label).unwrap();
        }
        for (from, to) in [(0, 1), (0, 2), (1, 2), (2, 0), (4, 5), (5, 4)] {
            graph.add_edge(from, to).unwrap();
        }

        let matrix = graph.adjacency_matrix();
        let set_cells = matrix.rows().iter().flatten().filter(|&&cell| cell).count();
        assert_eq!(set_cells, graph.edge_count());
    }
}
