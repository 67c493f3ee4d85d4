//! Single-source shortest path engines, one per protocol family.

pub mod distance_vector;
pub mod link_state;

pub use distance_vector::DistanceVector;
pub use link_state::LinkState;

use crate::concepts::route::NextHop;
use crate::concepts::topology::NodeIndex;
use crate::resolver::resolve_next_hop;
use crate::util::Cost;

/// Distances and predecessors from one completed engine run.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    pub source: NodeIndex,
    /// best known cost from `source`, `Infinite` if never reached
    pub dist: Vec<Cost>,
    /// the node directly preceding each node on its best path, `None` for the source and
    /// unreached nodes
    pub prev: Vec<Option<NodeIndex>>,
    /// the neighbour of `source` each best route leaves through, for engines whose routes do not
    /// form a predecessor tree. `None` means `prev` alone determines the next hops.
    pub departures: Option<Vec<Option<NodeIndex>>>,
}

impl ShortestPaths {
    pub(crate) fn new(num_nodes: usize, source: NodeIndex) -> Self {
        let mut dist = vec![Cost::Infinite; num_nodes];
        dist[source] = Cost::ZERO;
        Self {
            source,
            dist,
            prev: vec![None; num_nodes],
            departures: None,
        }
    }

    pub fn cost_to(&self, node: NodeIndex) -> Cost {
        self.dist[node]
    }

    pub fn is_reachable(&self, node: NodeIndex) -> bool {
        self.dist[node].is_finite()
    }

    pub fn num_reached(&self) -> usize {
        self.dist.iter().filter(|cost| cost.is_finite()).count()
    }

    /// The neighbour of the source through which the route to `destination` departs
    pub fn next_hop(&self, destination: NodeIndex) -> NextHop {
        match &self.departures {
            Some(departures) if destination != self.source => {
                departures[destination].map_or(NextHop::Unreachable, NextHop::Via)
            }
            _ => resolve_next_hop(&self.prev, self.source, destination),
        }
    }

    pub(crate) fn relax(&mut self, from: NodeIndex, to: NodeIndex, candidate: Cost) -> bool {
        if candidate.improves_on(self.dist[to]) {
            self.dist[to] = candidate;
            self.prev[to] = Some(from);
            true
        } else {
            false
        }
    }
}
