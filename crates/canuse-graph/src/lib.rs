//! # canuse-graph
//!
//! Pure data structures for dependency reason graphs.
//!
//! This crate provides the core graph primitives used to explain *why* a
//! package is being checked: every tracked package records the single parent
//! that introduced it, and chains are reconstructed by walking those parent
//! pointers back to a root. There is no I/O and no knowledge of any package
//! index here.
//!
//! ## Overview
//!
//! - [`ProjectId`] - a canonical, lowercase package identifier
//! - [`ReasonGraph`] - package -> introducing parent (or none, for roots)
//! - [`BlockingChain`] - one reconstructed path from a leaf blocker to a root
//! - [`reconstruct_paths`] - turn a [`ReasonGraph`] into a set of chains
//!
//! ## Quick Start
//!
//! ```rust
//! use canuse_graph::{ProjectId, ReasonGraph, reconstruct_paths};
//!
//! let a = ProjectId::new("A");
//! let b = ProjectId::new("B");
//!
//! let mut graph = ReasonGraph::new();
//! graph.insert_root(a.clone());
//! graph.record(b.clone(), a.clone());
//!
//! let chains = reconstruct_paths(&graph).unwrap();
//! assert_eq!(chains.len(), 1);
//! ```
//!
//! ## Invariants
//!
//! - A package is recorded in the graph at most once; the first parent that
//!   discovers it wins and is never overwritten. Because discovery happens
//!   level by level, the recorded parent is always a shortest-path parent.
//! - Reconstruction terminates for acyclic parent chains and reports a
//!   [`GraphError::CircularDependency`] otherwise, never looping.

mod chain;
mod error;
mod project_id;
mod reason_graph;

pub use chain::{reconstruct_paths, BlockingChain};
pub use error::GraphError;
pub use project_id::ProjectId;
pub use reason_graph::ReasonGraph;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
