//! Timeline Graph Library
//!
//! This crate derives a directed graph from the `edge/2` facts of a
//! parsed answer set and exports it in two layout-ready forms:
//!
//! - [`DependencyGraph::to_nested_notation`]: recursive
//!   `(child1,child2,...)name` notation rooted at a start node.
//! - [`DependencyGraph::to_parent_list`]: flat `{id, parentIds}` records,
//!   the input shape of layered-DAG layout engines.
//!
//! # Example
//! ```rust
//! use parser::AnswerSet;
//! use timeline::DependencyGraph;
//!
//! let set = AnswerSet::parse("edge(start,a) edge(a,b)").expect("one answer set");
//! let graph = DependencyGraph::from_answer_set(&set);
//! assert_eq!(graph.to_nested_notation("start").unwrap(), "((b)a)start");
//! ```

pub mod dependency_graph;
pub mod error;

pub use dependency_graph::{DependencyGraph, GraphNode, ParentListEntry};
pub use error::GraphError;
