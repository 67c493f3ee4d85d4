use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::route::RouteEntry;
use crate::concepts::topology::NodeIndex;
use crate::feedback::SourceError;
use crate::framework::Protocol;
use crate::util::Cost;

/// Relative tolerance used when comparing costs produced by different protocol families
pub const COST_TOLERANCE: f64 = 1e-9;

/// Routes from one source to every other node, ordered by destination.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoutingTable {
    source: NodeIndex,
    entries: Vec<RouteEntry>,
}

impl RoutingTable {
    pub(crate) fn new(source: NodeIndex, entries: Vec<RouteEntry>) -> Self {
        Self { source, entries }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn entry(&self, destination: NodeIndex) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.destination == destination)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome for a single source: its table, or the reason it was withheld
pub type SourceResult = Result<RoutingTable, SourceError>;

/// Every source's outcome under one protocol family.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProtocolTables {
    pub protocol: Protocol,
    /// serialised as `(source, result)` pairs
    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<Vec<(serde_with::Same, serde_with::Same)>>")
    )]
    pub tables: BTreeMap<NodeIndex, SourceResult>,
}

impl ProtocolTables {
    pub fn table(&self, source: NodeIndex) -> Option<&SourceResult> {
        self.tables.get(&source)
    }

    /// Sources whose table was withheld
    pub fn failures(&self) -> impl Iterator<Item = (NodeIndex, &SourceError)> {
        self.tables
            .iter()
            .filter_map(|(source, result)| result.as_ref().err().map(|err| (*source, err)))
    }
}

/// Pair of costs for which the two protocol families disagree.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Disagreement {
    pub source: NodeIndex,
    pub destination: NodeIndex,
    pub link_state: Cost,
    pub distance_vector: Cost,
}

/// The full output of one computation. Owned entirely by the caller.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerTopologyResult {
    pub link_state: Option<ProtocolTables>,
    pub distance_vector: Option<ProtocolTables>,
}

impl PerTopologyResult {
    pub fn tables(&self, protocol: Protocol) -> Option<&ProtocolTables> {
        match protocol {
            Protocol::LinkState => self.link_state.as_ref(),
            Protocol::DistanceVector => self.distance_vector.as_ref(),
        }
    }

    pub(crate) fn insert(&mut self, tables: ProtocolTables) {
        match tables.protocol {
            Protocol::LinkState => self.link_state = Some(tables),
            Protocol::DistanceVector => self.distance_vector = Some(tables),
        }
    }

    /// Compares both families wherever both produced a table for the same source.
    ///
    /// Over non-negative weights the two must agree, so any entry here points at a bug.
    pub fn disagreements(&self) -> Vec<Disagreement> {
        let (Some(ls), Some(dv)) = (&self.link_state, &self.distance_vector) else {
            return Vec::new();
        };
        let mut found = Vec::new();
        for (source, ls_result) in &ls.tables {
            let (Ok(ls_table), Some(Ok(dv_table))) = (ls_result, dv.tables.get(source)) else {
                continue;
            };
            for entry in ls_table.entries() {
                let dv_cost = dv_table.entry(entry.destination).map_or(Cost::Infinite, |e| e.cost);
                if !entry.cost.approx_eq(dv_cost, COST_TOLERANCE) {
                    found.push(Disagreement {
                        source: *source,
                        destination: entry.destination,
                        link_state: entry.cost,
                        distance_vector: dv_cost,
                    });
                }
            }
        }
        found
    }
}
