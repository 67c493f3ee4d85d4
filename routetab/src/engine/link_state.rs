use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::concepts::topology::{Adjacency, NodeIndex};
use crate::engine::ShortestPaths;
use crate::feedback::SourceError;
use crate::framework::{PathEngine, Protocol};
use crate::util::Cost;

/// Priority-frontier search (Dijkstra).
///
/// Every edge weight must be non-negative. The engine does not check this, callers validate the
/// topology beforehand.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinkState;

/// Frontier entry, ordered so that `BinaryHeap` pops the cheapest first
#[derive(Clone, Copy, Debug)]
struct Frontier {
    cost: f64,
    node: NodeIndex,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PathEngine for LinkState {
    const PROTOCOL: Protocol = Protocol::LinkState;

    fn shortest_paths(&self, adjacency: &Adjacency, source: NodeIndex) -> Result<ShortestPaths, SourceError> {
        let mut paths = ShortestPaths::new(adjacency.num_nodes(), source);
        let mut frontier = BinaryHeap::new();
        frontier.push(Frontier { cost: 0.0, node: source });

        let mut finalised = 0usize;
        while let Some(Frontier { cost, node }) = frontier.pop() {
            if Cost::Finite(cost) > paths.dist[node] {
                // stale, a cheaper entry for this node was already expanded
                continue;
            }
            finalised += 1;
            for link in adjacency.neighbours(node) {
                let candidate = cost + link.weight;
                if paths.relax(node, link.neighbour, Cost::Finite(candidate)) {
                    frontier.push(Frontier {
                        cost: candidate,
                        node: link.neighbour,
                    });
                }
            }
        }

        debug!("link-state run from {source}: finalised {finalised} of {} nodes", adjacency.num_nodes());
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Frontier { cost: 4.0, node: 1 });
        heap.push(Frontier { cost: 0.5, node: 3 });
        heap.push(Frontier { cost: 2.0, node: 2 });
        heap.push(Frontier { cost: 0.5, node: 0 });

        let order: Vec<NodeIndex> = std::iter::from_fn(|| heap.pop().map(|f| f.node)).collect();
        assert_eq!(order, vec![0, 3, 2, 1]);
    }
}
