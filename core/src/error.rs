//! Invalid operations on boards and search structures.

use crate::board::{ EdgeId, NodeId };

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors signalling that an operation was invoked in violation of its
/// preconditions. Unreachable or invisible targets are never errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The node handle does not belong to the board.
    UnknownNode(NodeId),
    /// The edge handle does not belong to the board.
    UnknownEdge(EdgeId),
    /// There is no edge between the two nodes.
    NotAdjacent(NodeId, NodeId),
    /// An edge cannot connect a node to itself.
    SelfLoop(NodeId),
    /// The two nodes are already connected by the given edge.
    AlreadyConnected(NodeId, NodeId, EdgeId),
    /// `pop` on an empty priority queue.
    EmptyQueue,
    /// The node has no grid position, so grid distances are undefined.
    NoPosition(NodeId),
    /// The node has no shape to trace lines through.
    NoShape(NodeId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownNode(n) => write!(f, "unknown {}", n),
            Error::UnknownEdge(e) => write!(f, "unknown {}", e),
            Error::NotAdjacent(a, b) => write!(f, "no edge between {} and {}", a, b),
            Error::SelfLoop(n) => write!(f, "cannot connect {} to itself", n),
            Error::AlreadyConnected(a, b, e) =>
                write!(f, "{} and {} are already connected by {}", a, b, e),
            Error::EmptyQueue => write!(f, "pop on an empty priority queue"),
            Error::NoPosition(n) => write!(f, "{} has no grid position", n),
            Error::NoShape(n) => write!(f, "{} has no shape", n),
        }
    }
}

impl std::error::Error for Error {}
