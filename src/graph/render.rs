//! Text rendering of adjacency lists and matrices

use std::fmt;

use super::{AdjacencyMatrix, Graph, Label};

/// Displays a label as its character when it is a printable ASCII code point, and as a
/// decimal number otherwise. Honors width and alignment flags.
#[derive(Debug, Clone, Copy)]
struct Glyph(Label);

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match char::from_u32(self.0).filter(char::is_ascii_graphic) {
            Some(glyph) => f.pad(glyph.encode_utf8(&mut [0; 4])),
            None => f.pad(&self.0.to_string()),
        }
    }
}

/// Adjacency-list view of a [`Graph`], rendered one vertex per line
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyList<'a> {
    /// Graph being rendered
    graph: &'a Graph,
}

impl Graph {
    /// Returns a view that renders the graph as an adjacency list
    #[must_use]
    pub fn adjacency_list(&self) -> AdjacencyList<'_> {
        AdjacencyList { graph: self }
    }
}

impl fmt::Display for AdjacencyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertex |Adjacent")?;
        for vertex in &self.graph.vertices {
            write!(f, "{:<7}|", Glyph(vertex.label))?;
            for &target in &vertex.adjacency {
                if let Some(label) = self.graph.label(target) {
                    write!(f, "{} ", Glyph(label))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("   |{}", "---|".repeat(self.len()));

        writeln!(f, "Vertex Matrix")?;
        write!(f, "    ")?;
        for &label in self.labels() {
            write!(f, "{:>3}|", Glyph(label))?;
        }
        writeln!(f)?;
        writeln!(f, "{border}")?;

        for (&label, row) in self.labels().iter().zip(self.rows()) {
            write!(f, "{:>3}|", Glyph(label))?;
            for &cell in row {
                write!(f, "{:>3}|", u8::from(cell))?;
            }
            writeln!(f)?;
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}
