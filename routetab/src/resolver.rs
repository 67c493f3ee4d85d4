use log::error;

use crate::concepts::route::NextHop;
use crate::concepts::topology::NodeIndex;

/// Finds the neighbour of `source` through which the best path to `destination` departs.
///
/// Walks backwards from `destination` along `prev` until reaching the node whose predecessor is
/// the source (or none). A destination without a predecessor, other than the source itself, is
/// unreachable. The walk only reads `prev`. Engines whose routes do not form a predecessor tree
/// report first hops directly instead, see [`ShortestPaths::next_hop`](crate::engine::ShortestPaths::next_hop).
///
/// # Examples
///
/// ```
/// use routetab::concepts::route::NextHop;
/// use routetab::resolver::resolve_next_hop;
///
/// // 0 - 1 - 2 - 3, plus an isolated node 4
/// let prev = vec![None, Some(0), Some(1), Some(2), None];
/// assert_eq!(resolve_next_hop(&prev, 0, 3), NextHop::Via(1));
/// assert_eq!(resolve_next_hop(&prev, 0, 1), NextHop::Via(1));
/// assert_eq!(resolve_next_hop(&prev, 0, 4), NextHop::Unreachable);
/// ```
pub fn resolve_next_hop(prev: &[Option<NodeIndex>], source: NodeIndex, destination: NodeIndex) -> NextHop {
    if destination != source && prev[destination].is_none() {
        return NextHop::Unreachable;
    }

    let mut cursor = destination;
    // a well-formed chain has fewer links than there are nodes
    for _ in 0..prev.len() {
        match prev[cursor] {
            Some(parent) if parent != source => cursor = parent,
            _ => return NextHop::Via(cursor),
        }
    }

    error!("predecessor chain from {destination} never reaches {source}, treating it as unreachable");
    NextHop::Unreachable
}
