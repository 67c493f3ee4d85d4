use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::topology::{EdgeIndex, NodeIndex};

/// The topology is malformed. Nothing is computed for a topology that fails validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    #[error("edge {edge} references node {endpoint}, but the topology only has {num_nodes} nodes")]
    EndpointOutOfRange {
        edge: EdgeIndex,
        endpoint: NodeIndex,
        num_nodes: usize,
    },
    /// Relaxation is meaningless over NaN or infinite weights
    #[error("edge {edge} has a non-finite weight ({weight})")]
    NonFiniteWeight { edge: EdgeIndex, weight: f64 },
    /// Weights beyond [`MAX_WEIGHT`](crate::concepts::topology::MAX_WEIGHT) in magnitude could
    /// overflow when summed along a route
    #[error("edge {edge} has weight {weight}, outside the supported range")]
    WeightOutOfRange { edge: EdgeIndex, weight: f64 },
    /// A node description declares an id that does not match its position in the node list
    #[error("node at position {position} declares id {id}")]
    NodeIdMismatch { position: usize, id: u64 },
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Errors that abort a whole computation before any engine runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputationError {
    #[error("invalid topology: {0}")]
    InvalidTopology(#[from] TopologyError),
    /// Link-state routing was requested, but its engine cannot handle negative weights.
    #[error("non-negative weights required: edge {edge} has weight {weight}")]
    NegativeWeightRejected { edge: EdgeIndex, weight: f64 },
}

/// Failure attached to a single source's slot. Sibling sources are unaffected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SourceError {
    #[error("negative weight cycle reachable from node {node}")]
    NegativeCycleDetected { node: NodeIndex },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy '{0}', expected one of: link-state, distance-vector, both")]
pub struct UnknownStrategy(pub String);
