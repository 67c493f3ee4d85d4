use log::{debug, warn};

use crate::concepts::topology::{Adjacency, EdgeIndex, Link, NodeIndex};
use crate::engine::ShortestPaths;
use crate::feedback::SourceError;
use crate::framework::{PathEngine, Protocol};
use crate::util::Cost;

/// Iterative neighbour relaxation (Bellman-Ford).
///
/// Negative weights are allowed. A cycle of negative total weight reachable from the source is
/// reported as [`SourceError::NegativeCycleDetected`] instead of a result.
///
/// Edges are undirected, so a route never turns straight back over the edge it just crossed.
/// Otherwise any single negative edge would count as a two hop cycle `u -> v -> u`. Each node keeps
/// its two cheapest labels that arrived over different edges, so whichever link it relaxes next,
/// one of them did not arrive over that link. Parallel edges are distinct, so two of them can
/// still form a negative cycle.
///
/// Routes found this way need not form a predecessor tree (with `0 - 1` and `0 - 2` at 3 and
/// `1 - 2` at -5, node 1 is best reached through 2 and node 2 through 1). Every label therefore
/// carries the hop its route left the source through, reported as [`ShortestPaths::departures`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DistanceVector;

/// A route that arrived at some node over `arrived_over`
#[derive(Clone, Copy, Debug)]
struct Label {
    cost: f64,
    arrived_over: EdgeIndex,
    from: NodeIndex,
    first_hop: NodeIndex,
}

/// The two cheapest labels of a node over different arrival edges, `best` first.
#[derive(Clone, Copy, Debug, Default)]
struct Labels {
    best: Option<Label>,
    second: Option<Label>,
}

impl Labels {
    fn held(&self) -> impl Iterator<Item = Label> {
        self.best.into_iter().chain(self.second)
    }

    /// The cheapest label that may continue over `edge`
    fn leaving_over(&self, edge: EdgeIndex) -> Option<Label> {
        self.held().find(|label| label.arrived_over != edge)
    }

    /// Whether `candidate` would displace a held label
    fn admits(&self, candidate: &Label) -> bool {
        match self.held().find(|label| label.arrived_over == candidate.arrived_over) {
            Some(same_edge) => candidate.cost < same_edge.cost,
            None => self.second.map_or(true, |second| candidate.cost < second.cost),
        }
    }

    fn offer(&mut self, candidate: Label) -> bool {
        if !self.admits(&candidate) {
            return false;
        }
        let arrived_over = Some(candidate.arrived_over);
        if self.best.map(|label| label.arrived_over) == arrived_over {
            self.best = Some(candidate);
        } else if self.second.map(|label| label.arrived_over) == arrived_over {
            self.second = Some(candidate);
        } else if self.best.map_or(true, |best| candidate.cost < best.cost) {
            self.second = self.best.replace(candidate);
        } else {
            self.second = Some(candidate);
        }

        if let (Some(best), Some(second)) = (self.best, self.second) {
            if second.cost < best.cost {
                std::mem::swap(&mut self.best, &mut self.second);
            }
        }
        true
    }
}

/// Per-run relaxation state
struct Relaxation {
    source: NodeIndex,
    /// routes that came back to the source are held like any other, the empty route to it is
    /// implicit
    labels: Vec<Labels>,
}

impl Relaxation {
    fn new(num_nodes: usize, source: NodeIndex) -> Self {
        Self {
            source,
            labels: vec![Labels::default(); num_nodes],
        }
    }

    fn is_reached(&self, node: NodeIndex) -> bool {
        node == self.source || self.labels[node].best.is_some()
    }

    /// The label `link.neighbour` would receive from `node`, if that traversal is allowed at all
    fn candidate(&self, node: NodeIndex, link: &Link) -> Option<Label> {
        if link.neighbour == node {
            return None;
        }
        let (cost, first_hop) = match self.labels[node].leaving_over(link.edge) {
            Some(label) if node != self.source || label.cost < 0.0 => (label.cost, label.first_hop),
            _ if node == self.source => (0.0, link.neighbour),
            _ => return None,
        };
        Some(Label {
            cost: cost + link.weight,
            arrived_over: link.edge,
            from: node,
            first_hop,
        })
    }

    /// One pass over every reached node's links. Returns whether anything changed.
    fn pass(&mut self, adjacency: &Adjacency) -> bool {
        let mut updated = false;
        for node in 0..adjacency.num_nodes() {
            for link in adjacency.neighbours(node) {
                if let Some(candidate) = self.candidate(node, link) {
                    updated |= self.labels[link.neighbour].offer(candidate);
                }
            }
        }
        updated
    }

    /// Finds a link that still admits relaxation after the passes have run out. A negative
    /// self-loop on a reached node counts as well.
    fn find_relaxable(&self, adjacency: &Adjacency) -> Option<(NodeIndex, NodeIndex)> {
        for node in 0..adjacency.num_nodes() {
            if !self.is_reached(node) {
                continue;
            }
            for link in adjacency.neighbours(node) {
                if link.neighbour == node {
                    if link.weight < 0.0 {
                        return Some((node, node));
                    }
                    continue;
                }
                if let Some(candidate) = self.candidate(node, link) {
                    if self.labels[link.neighbour].admits(&candidate) {
                        return Some((node, link.neighbour));
                    }
                }
            }
        }
        None
    }

    fn into_paths(self) -> ShortestPaths {
        let num_nodes = self.labels.len();
        let mut paths = ShortestPaths::new(num_nodes, self.source);
        let mut departures = vec![None; num_nodes];
        for (node, labels) in self.labels.iter().enumerate() {
            if node == self.source {
                continue;
            }
            if let Some(best) = labels.best {
                paths.dist[node] = Cost::Finite(best.cost);
                paths.prev[node] = Some(best.from);
                departures[node] = Some(best.first_hop);
            }
        }
        paths.departures = Some(departures);
        paths
    }
}

impl PathEngine for DistanceVector {
    const PROTOCOL: Protocol = Protocol::DistanceVector;

    fn shortest_paths(&self, adjacency: &Adjacency, source: NodeIndex) -> Result<ShortestPaths, SourceError> {
        let num_nodes = adjacency.num_nodes();
        let mut state = Relaxation::new(num_nodes, source);

        // without a negative cycle the cheapest route crosses each link at most once per direction
        let max_passes: usize = (0..num_nodes)
            .map(|node| adjacency.neighbours(node).iter().filter(|link| link.neighbour != node).count())
            .sum();
        let mut passes = 0;
        while passes < max_passes {
            passes += 1;
            if !state.pass(adjacency) {
                break;
            }
        }

        if let Some((from, to)) = state.find_relaxable(adjacency) {
            warn!("distance-vector run from {source}: link {from} -> {to} still relaxes after {passes} passes, negative cycle");
            return Err(SourceError::NegativeCycleDetected { node: source });
        }

        let paths = state.into_paths();
        debug!(
            "distance-vector run from {source}: stable after {passes} passes, reached {} of {num_nodes} nodes",
            paths.num_reached()
        );
        Ok(paths)
    }
}
