use std::fmt;

/// Which end of an edge failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Source,
    Target,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Errors raised while building a graph model or applying interaction events.
#[derive(Debug, thiserror::Error)]
pub enum DagError {
    /// An edge names a node id that the graph does not contain.
    #[error("edge {index} has unknown {endpoint} node `{id}`")]
    InvalidEdge {
        index: usize,
        endpoint: EdgeEnd,
        id: String,
    },
    /// Two nodes share the same id.
    #[error("node id `{0}` is defined more than once")]
    DuplicateNode(String),
    /// An interaction event names a node that is not part of the graph.
    #[error("event references unknown node `{0}`")]
    UnknownNodeReference(String),
    /// A graph or view configuration document failed to parse.
    #[error("malformed document: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DagError>;
