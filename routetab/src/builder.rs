use std::collections::BTreeMap;

use log::{info, warn};
use rayon::prelude::*;

use crate::concepts::route::RouteEntry;
use crate::concepts::table::{PerTopologyResult, ProtocolTables, RoutingTable, SourceResult};
use crate::concepts::topology::{Adjacency, NodeIndex, Topology};
use crate::engine::{DistanceVector, LinkState, ShortestPaths};
use crate::feedback::ComputationError;
use crate::framework::{ComputeParams, PathEngine, Strategy};

/// Computes routing tables for every node of `topology` with default parameters.
pub fn compute(topology: &Topology, strategy: Strategy) -> Result<PerTopologyResult, ComputationError> {
    compute_with(topology, strategy, &ComputeParams::default())
}

/// Validates the topology for `strategy`, then builds one table per source for each requested
/// protocol family.
///
/// Structural problems abort the whole computation. A negative cycle only withholds the table of
/// the sources that can reach it.
pub fn compute_with(
    topology: &Topology,
    strategy: Strategy,
    params: &ComputeParams,
) -> Result<PerTopologyResult, ComputationError> {
    let adjacency = validate_for(topology, strategy)?;
    let result = build_tables(&adjacency, strategy, params);

    let withheld: usize = strategy
        .protocols()
        .iter()
        .filter_map(|protocol| result.tables(*protocol))
        .map(|tables| tables.failures().count())
        .sum();
    info!(
        "computed {strategy:?} tables for {} nodes and {} edges ({withheld} withheld)",
        topology.num_nodes,
        topology.edges.len()
    );
    Ok(result)
}

/// Caller-facing checks that must pass before any engine runs.
pub fn validate_for(topology: &Topology, strategy: Strategy) -> Result<Adjacency, ComputationError> {
    topology.validate()?;
    if strategy.runs_link_state() {
        if let Some((edge, weight)) = topology.has_negative_weight() {
            return Err(ComputationError::NegativeWeightRejected { edge, weight });
        }
    }
    Ok(Adjacency::build(topology)?)
}

/// Runs the engines selected by `strategy` once per source. The adjacency must already be
/// validated for that strategy.
pub fn build_tables(adjacency: &Adjacency, strategy: Strategy, params: &ComputeParams) -> PerTopologyResult {
    let mut result = PerTopologyResult::default();
    if strategy.runs_link_state() {
        result.insert(build_protocol_tables(adjacency, &LinkState, params));
    }
    if strategy.runs_distance_vector() {
        result.insert(build_protocol_tables(adjacency, &DistanceVector, params));
    }
    result
}

/// Runs `engine` with every node as the source. Each run only reads the shared adjacency, so runs
/// are independent and may execute in parallel.
pub fn build_protocol_tables<E: PathEngine>(adjacency: &Adjacency, engine: &E, params: &ComputeParams) -> ProtocolTables {
    let num_nodes = adjacency.num_nodes();
    let run = |source: NodeIndex| (source, table_for(adjacency, engine, source));

    let tables: BTreeMap<NodeIndex, SourceResult> = if params.runs_parallel(num_nodes) {
        (0..num_nodes).into_par_iter().map(run).collect()
    } else {
        (0..num_nodes).map(run).collect()
    };

    ProtocolTables {
        protocol: E::PROTOCOL,
        tables,
    }
}

/// Computes the routing table of a single source
pub fn table_for<E: PathEngine>(adjacency: &Adjacency, engine: &E, source: NodeIndex) -> SourceResult {
    let paths = engine.shortest_paths(adjacency, source).inspect_err(|err| {
        warn!("{} table for {source} withheld: {err}", E::PROTOCOL);
    })?;
    Ok(assemble_table(&paths))
}

/// Turns a completed run into a table with one entry per destination other than the source.
pub fn assemble_table(paths: &ShortestPaths) -> RoutingTable {
    let source = paths.source;
    let entries = (0..paths.dist.len())
        .filter(|destination| *destination != source)
        .map(|destination| {
            if paths.is_reachable(destination) {
                RouteEntry {
                    destination,
                    next_hop: paths.next_hop(destination),
                    cost: paths.cost_to(destination),
                }
            } else {
                RouteEntry::unreachable(destination)
            }
        })
        .collect();
    RoutingTable::new(source, entries)
}
