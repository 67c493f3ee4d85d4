use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::topology::NodeIndex;
use crate::util::Cost;

/// The neighbour of the source through which a route departs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NextHop {
    Via(NodeIndex),
    Unreachable,
}

impl NextHop {
    pub fn node(&self) -> Option<NodeIndex> {
        match self {
            NextHop::Via(node) => Some(*node),
            NextHop::Unreachable => None,
        }
    }
}

impl Display for NextHop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NextHop::Via(node) => write!(f, "{node}"),
            NextHop::Unreachable => write!(f, "-"),
        }
    }
}

/// A single row of a routing table, relative to the table's source.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "PascalCase"))]
pub struct RouteEntry {
    pub destination: NodeIndex,
    pub next_hop: NextHop,
    /// `Infinite` exactly when `next_hop` is `Unreachable`
    pub cost: Cost,
}

impl RouteEntry {
    pub fn unreachable(destination: NodeIndex) -> Self {
        Self {
            destination,
            next_hop: NextHop::Unreachable,
            cost: Cost::Infinite,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.next_hop != NextHop::Unreachable
    }
}
