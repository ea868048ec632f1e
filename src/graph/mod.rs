//! Directed graph over integer-labelled vertices.
//!
//! Vertices live in an arena owned by the [`Graph`] and are addressed by [`VertexId`].
//! Adjacency lists hold ids rather than vertex copies, so an edge is a handle comparison
//! and cycles need no shared ownership.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};

mod loader;
mod matrix;
mod render;
mod traversal;

pub use loader::LoadReport;
pub use matrix::AdjacencyMatrix;
pub use render::AdjacencyList;

/// Label identifying a vertex, unique within a graph
pub type Label = u32;

/// A directed `(from, to)` pair of vertex labels
pub type Edge = (Label, Label);

/// Stable handle of a vertex inside its graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in insertion order
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A vertex and its outgoing edges
#[derive(Debug, Clone)]
struct Vertex {
    /// Label of the vertex
    label: Label,
    /// Targets of the outgoing edges, in insertion order
    adjacency: Vec<VertexId>,
}

/// A directed graph with insertion-ordered vertices.
///
/// Vertices are never removed. Each vertex keeps at most one edge to any given target;
/// an edge `a -> b` says nothing about `b -> a`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex arena, indexed by `VertexId`
    vertices: Vec<Vertex>,
    /// Label lookup into the arena
    index: HashMap<Label, VertexId>,
    /// Number of edges across all adjacency lists
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex with the given label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if the graph already contains `label`.
    pub fn add_vertex(&mut self, label: Label) -> Result<VertexId> {
        if self.index.contains_key(&label) {
            return Err(Error::DuplicateKey(label));
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex { label, adjacency: Vec::new() });
        self.index.insert(label, id);
        debug!(label, id = id.index(), "vertex added");
        Ok(id)
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either label is absent, and
    /// [`Error::DuplicateEdge`] if `to` is already adjacent to `from`.
    pub fn add_edge(&mut self, from: Label, to: Label) -> Result<()> {
        let source = self.vertex_id(from)?;
        let target = self.vertex_id(to)?;

        let vertex = self.vertices.get_mut(source.index()).ok_or(Error::VertexNotFound(from))?;
        if vertex.adjacency.contains(&target) {
            return Err(Error::DuplicateEdge { from, to });
        }

        vertex.adjacency.push(target);
        self.edge_count = self.edge_count.saturating_add(1);
        debug!(from, to, edges = self.edge_count, "edge added");
        Ok(())
    }

    /// Returns the handle of the vertex labelled `label`
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the graph has no such vertex.
    pub fn vertex_id(&self, label: Label) -> Result<VertexId> {
        self.index.get(&label).copied().ok_or(Error::VertexNotFound(label))
    }

    /// Returns the number of vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if a vertex with `label` exists
    #[must_use]
    pub fn contains_vertex(&self, label: Label) -> bool {
        self.index.contains_key(&label)
    }

    /// Returns true if the edge `from -> to` exists
    #[must_use]
    pub fn has_edge(&self, from: Label, to: Label) -> bool {
        match (self.index.get(&from), self.index.get(&to)) {
            (Some(&source), Some(target)) => self.adjacency(source).contains(target),
            _ => false,
        }
    }

    /// Vertex labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.vertices.iter().map(|vertex| vertex.label)
    }

    /// Labels adjacent to `label`, in the order the edges were added
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the graph has no such vertex.
    pub fn neighbors(&self, label: Label) -> Result<Vec<Label>> {
        let id = self.vertex_id(label)?;
        Ok(self.adjacency(id).iter().filter_map(|&target| self.label(target)).collect())
    }

    /// Outgoing edges of the vertex `id`
    fn adjacency(&self, id: VertexId) -> &[VertexId] {
        self.vertices.get(id.index()).map_or(&[], |vertex| vertex.adjacency.as_slice())
    }

    /// Label of the vertex `id`
    fn label(&self, id: VertexId) -> Option<Label> {
        self.vertices.get(id.index()).map(|vertex| vertex.label)
    }
}
