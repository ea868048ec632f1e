//! # Double Hash Table, B-Tree and Graph
//!
//! A Rust implementation of an open-addressed hash table with double hashing, together
//! with a string-keyed B-tree, a small directed graph and a set of classic sorts.
//!
//! This crate provides:
//!
//! - `DoubleHashTable`: a string-keyed table with prime capacities, double-hash probing,
//!   tombstone deletion and load-driven grow/shrink
//! - `Graph`: an arena-backed directed graph with depth-first and breadth-first traversal,
//!   adjacency-matrix derivation, text rendering and a line-oriented loader
//! - `BTree`: an ordered string-keyed map of configurable order that splits full nodes
//!   around their median
//! - `sorts`: bubble, insertion, selection, merge and quick sort over slices
//!
//! ## Basic Usage
//!
//! ```rust
//! use dsa_collections::DoubleHashTable;
//!
//! // Create a table with room for at least 10 entries
//! let mut table = DoubleHashTable::new(10)?;
//!
//! // Insert values
//! table.put("apple", 1);
//! table.put("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(table.get("apple")?, &1);
//!
//! // Update values in place
//! assert_eq!(table.put("apple", 10), Some(1));
//! assert_eq!(table.get("apple")?, &10);
//!
//! // Remove values
//! assert_eq!(table.remove("apple")?, 10);
//! assert!(table.get("apple").is_err());
//! # Ok::<(), dsa_collections::Error>(())
//! ```
//!
//! ## B-Tree
//!
//! ```rust
//! use dsa_collections::BTree;
//!
//! let mut tree = BTree::new(2)?;
//! for (value, key) in ["pear", "apple", "fig", "banana", "cherry"].into_iter().enumerate() {
//!     tree.insert(key, value)?;
//! }
//!
//! // The fifth key split the root
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.get("fig")?, &2);
//! assert!(tree.insert("fig", 9).is_err());
//!
//! let keys: Vec<&str> = tree.iter().map(|(key, _)| key).collect();
//! assert_eq!(keys, ["apple", "banana", "cherry", "fig", "pear"]);
//! # Ok::<(), dsa_collections::Error>(())
//! ```
//!
//! ## Graph Traversal
//!
//! ```rust
//! use dsa_collections::Graph;
//!
//! let mut graph = Graph::new();
//! for label in 1..=5 {
//!     graph.add_vertex(label)?;
//! }
//! for (from, to) in [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)] {
//!     graph.add_edge(from, to)?;
//! }
//!
//! // (3, 4) is not a discovery edge: 4 was already reached through 2
//! assert_eq!(graph.breadth_first_search(), vec![(1, 2), (1, 3), (2, 4), (4, 5)]);
//! assert_eq!(graph.depth_first_search(), vec![(1, 2), (2, 4), (4, 5), (1, 3)]);
//! # Ok::<(), dsa_collections::Error>(())
//! ```

/// Ordered string-keyed B-tree
mod btree;
/// Error type shared by every module
mod error;
/// Directed graph with traversal, matrix, rendering and loading
mod graph;
/// Open-addressed table with double hashing
mod hash_table;
/// The primary and stride string hashes
pub mod hashing;
/// Resize thresholds for the table
mod policy;
/// Prime number helpers for table sizing
pub mod primes;
/// In-place comparison sorts
pub mod sorts;
/// Utility functions and traits for the table
mod utils;

pub use btree::{BTree, Iter as BTreeIter};
pub use error::{Error, Result};
pub use graph::{AdjacencyList, AdjacencyMatrix, Edge, Graph, Label, LoadReport, VertexId};
pub use hash_table::{DoubleHashTable, Iter};
pub use policy::{DEFAULT_GROW_AT, DEFAULT_SHRINK_AT, DEFAULT_TARGET, ResizePolicy};
pub use utils::{TableExtensions, from_pairs};
