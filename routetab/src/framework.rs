use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::topology::{Adjacency, NodeIndex};
use crate::engine::ShortestPaths;
use crate::feedback::{SourceError, UnknownStrategy};

/// A single-source shortest path algorithm. Implementations must only read the adjacency view,
/// so one engine can serve every source concurrently.
pub trait PathEngine: Sync {
    /// The routing protocol family this engine models
    const PROTOCOL: Protocol;

    fn shortest_paths(&self, adjacency: &Adjacency, source: NodeIndex) -> Result<ShortestPaths, SourceError>;
}

/// Routing protocol families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum Protocol {
    /// Every node knows the full topology and runs a priority-frontier search. Requires
    /// non-negative weights.
    LinkState,
    /// Iterative neighbour relaxation. Tolerates negative weights, detects negative cycles.
    DistanceVector,
}

impl Display for Protocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::LinkState => write!(f, "link-state"),
            Protocol::DistanceVector => write!(f, "distance-vector"),
        }
    }
}

/// Which protocol families a computation runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum Strategy {
    LinkState,
    DistanceVector,
    Both,
}

impl Strategy {
    pub fn runs_link_state(&self) -> bool {
        matches!(self, Strategy::LinkState | Strategy::Both)
    }

    pub fn runs_distance_vector(&self) -> bool {
        matches!(self, Strategy::DistanceVector | Strategy::Both)
    }

    pub fn protocols(&self) -> &'static [Protocol] {
        match self {
            Strategy::LinkState => &[Protocol::LinkState],
            Strategy::DistanceVector => &[Protocol::DistanceVector],
            Strategy::Both => &[Protocol::LinkState, Protocol::DistanceVector],
        }
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "link-state" | "ls" => Ok(Strategy::LinkState),
            "distance-vector" | "dv" => Ok(Strategy::DistanceVector),
            "both" => Ok(Strategy::Both),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Tunables for a computation
#[derive(Clone, Debug)]
pub struct ComputeParams {
    /// dispatch per-source runs onto the rayon pool
    pub parallel: bool,
    /// topologies smaller than this always run sequentially
    pub parallel_threshold: usize,
}

impl Default for ComputeParams {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64,
        }
    }
}

impl ComputeParams {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    pub(crate) fn runs_parallel(&self, num_nodes: usize) -> bool {
        self.parallel && num_nodes >= self.parallel_threshold
    }
}
