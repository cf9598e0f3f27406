//! Error types for graph loading and shortest-path runs.

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The edge-list file could not be opened or read.
    #[error("cannot read edge list {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declaration line is structurally incomplete.
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// A token that should be a node id or a weight does not parse as one.
    #[error("line {line}: `{token}` is not a valid {expected}")]
    InvalidNumber {
        line: usize,
        token: String,
        expected: &'static str,
    },

    /// Weights must be finite and non-negative.
    #[error("line {line}: weight {weight} must be finite and non-negative")]
    InvalidWeight { line: usize, weight: f64 },

    /// A run was requested from a node the graph does not contain.
    #[error("source node {0} is not in the graph")]
    UnknownSourceNode(NodeId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_location() {
        let err = Error::InvalidNumber {
            line: 3,
            token: "x7".to_string(),
            expected: "node id",
        };
        assert_eq!(err.to_string(), "line 3: `x7` is not a valid node id");

        let err = Error::UnknownSourceNode(42);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn input_unavailable_keeps_io_source() {
        let err = Error::InputUnavailable {
            path: PathBuf::from("missing/graph.dat"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing/graph.dat"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
