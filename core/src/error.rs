use thiserror::Error;

use crate::graph::Label;

/// Errors raised by graph queries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The label never appeared as an edge endpoint.
    #[error("unknown vertex '{0}'")]
    UnknownVertex(Label),
    /// BFS from `from` never reached `to`.
    #[error("no path from '{from}' to '{to}'")]
    NoPath {
        /// Start of the requested path.
        from: Label,
        /// End of the requested path.
        to: Label,
    },
}

/// Result type for graph queries.
pub type Result<T> = std::result::Result<T, GraphError>;
