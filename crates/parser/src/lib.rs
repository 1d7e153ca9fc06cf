//! Answer-Set Parser Library
//!
//! A parser for the textual output of an Answer Set Programming solver.
//! Provides structured representations for ground facts plus the
//! filter/group/sort pipeline a front end drives over them.
//!
//! # Example
//! ```rust
//! use parser::AnswerSet;
//!
//! let set = AnswerSet::parse("Answer: 1\nedge(a,b) edge(b,c) start\nSATISFIABLE")
//!     .expect("single answer set");
//! assert_eq!(set.answer_number(), Some(1));
//! assert_eq!(set.signatures(), ["edge/2", "start/0"]);
//! assert_eq!(set.max_arity(), 2);
//! ```

/// Whole-blob answer set parsing and summary queries.
pub mod answer_set;
/// Parse-level error types.
pub mod error;
/// Single ground fact parsing and display.
pub mod fact;
/// Filtering, grouping and sorting over parsed facts.
pub mod filter;
/// Text rendering of grouped facts.
pub mod report;

// Re-export core types for convenient access
pub use answer_set::AnswerSet;
pub use error::ParseError;
pub use fact::{Fact, FactDiagnostic};
pub use filter::{GroupMode, SortKey};
pub use report::GroupedReport;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests;
