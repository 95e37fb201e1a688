use thiserror::Error;

/// Errors returned by graph store mutations that name a node or edge id.
///
/// The store never fails for semantic reasons (dangling branches, duplicate
/// edges, missing start nodes); those are reported by the validation pass.
/// A `GraphError` always means the caller referenced an id that is not in
/// the graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node '{0}' does not exist in the graph")]
    UnknownNode(String),

    #[error("Edge '{0}' does not exist in the graph")]
    UnknownEdge(String),
}

/// Errors that can occur when converting an external flow format into a
/// `GraphStore`.
#[derive(Error, Debug, Clone)]
pub enum ImportError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Duplicate node id '{0}' in flow definition")]
    DuplicateNodeId(String),
}
