use std::fmt::Debug;

use thiserror::Error;

/// Errors produced by the graph algorithms in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node was used that was never registered with the structure.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// An argument was malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }

    /// Builds a `NodeNotFound` carrying the `Debug` rendering of `node`.
    pub fn node_not_found<V: Debug + ?Sized>(node: &V) -> Self {
        GraphError::NodeNotFound(format!("{node:?}"))
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_message() {
        let err = GraphError::node_not_found(&42);
        assert_eq!(err, GraphError::NodeNotFound("42".to_string()));
        assert_eq!(err.to_string(), "node not found: 42");
    }

    #[test]
    fn test_invalid_input_message() {
        let err = GraphError::invalid_input("empty graph");
        assert!(matches!(err, GraphError::InvalidInput(ref m) if m == "empty graph"));
        assert_eq!(err.to_string(), "invalid input: empty graph");
    }
}
