//! Error type shared by the hash table, the B-tree and the graph

use thiserror::Error;

use crate::graph::Label;

/// Errors returned by table, tree, graph and loader operations.
///
/// Every failure is local to the call that produced it: a failed operation leaves the
/// structure exactly as it was before the call.
#[derive(Debug, Error)]
pub enum Error {
    /// A constructor or configuration argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No entry with the given key exists in the table or tree.
    #[error("element with key {0:?} does not exist")]
    KeyNotFound(String),
    /// The B-tree already holds an entry with the given key.
    #[error("keys must be unique: {0:?} already present")]
    KeyExists(String),
    /// No vertex with the given label exists in the graph.
    #[error("graph does not contain vertex {0}")]
    VertexNotFound(Label),
    /// A vertex with the given label is already present.
    #[error("graph already contains vertex {0}")]
    DuplicateKey(Label),
    /// The edge is already present in the source vertex's adjacency list.
    #[error("edge {from} -> {to} already present")]
    DuplicateEdge {
        /// Source vertex label
        from: Label,
        /// Target vertex label
        to: Label,
    },
    /// A graph description line is not made of exactly two tokens.
    #[error("line {line}: expected two vertex labels, found {content:?}")]
    MalformedLine {
        /// One-based line number in the input
        line: usize,
        /// The offending line
        content: String,
    },
    /// Reading graph input failed.
    #[error("error in file processing: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
