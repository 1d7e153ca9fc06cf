use thiserror::Error;

/// Errors surfaced by graph exports.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("Graph error: unknown start node '{0}'")]
    UnknownNode(String),
    #[error("Graph error: cycle through node '{0}' cannot be rendered as nested notation")]
    CycleDetected(String),
}
