//! Builds a graph from line-oriented text.
//!
//! Every non-blank line names one directed edge as two whitespace-separated tokens; the
//! first character of each token is the vertex label. A bad line is reported and
//! skipped, the rest of the input still loads.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{info, warn};

use super::{Graph, Label};
use crate::error::{Error, Result};

/// Outcome of loading a graph from text
#[derive(Debug)]
pub struct LoadReport {
    /// Graph built from the accepted lines
    pub graph: Graph,
    /// Lines that were skipped, as one-based line number and the reason
    pub rejected: Vec<(usize, Error)>,
}

impl Graph {
    /// Loads a graph from `reader`, one edge per line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails. Malformed lines and duplicate edges do not
    /// fail the load; they are listed in [`LoadReport::rejected`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<LoadReport> {
        let mut graph = Self::new();
        let mut rejected = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = number.saturating_add(1);
            if line.trim().is_empty() {
                continue;
            }

            if let Err(error) = graph.add_line(line_number, &line) {
                warn!(line = line_number, %error, "skipping graph line");
                rejected.push((line_number, error));
            }
        }

        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            rejected = rejected.len(),
            "graph loaded"
        );
        Ok(LoadReport { graph, rejected })
    }

    /// Loads a graph from the file at `path`, one edge per line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<LoadReport> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Adds the edge described by one line, creating missing vertices first
    fn add_line(&mut self, line_number: usize, line: &str) -> Result<()> {
        let mut tokens = line.split_whitespace().map(leading_label);
        let (Some(Some(from)), Some(Some(to)), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(Error::MalformedLine { line: line_number, content: line.to_owned() });
        };

        for label in [from, to] {
            if !self.contains_vertex(label) {
                self.add_vertex(label)?;
            }
        }
        self.add_edge(from, to)
    }
}

/// Label named by a token: the code point of its first character
fn leading_label(token: &str) -> Option<Label> {
    token.chars().next().map(Label::from)
}
