use routetab::concepts::route::NextHop;
use routetab::concepts::table::PerTopologyResult;
use routetab::concepts::topology::TopologyRequest;
use routetab::feedback::{ComputationError, TopologyError};
use routetab::util::Cost;
use routetab::{compute, compute_with, ComputeParams, Protocol, Strategy, Topology};

use crate::common::tables::{entry, route, table};

mod common;

#[test]
fn out_of_range_endpoint_aborts_everything() {
    let topology = Topology::from_edges(2, [(0, 1, 1.0), (1, 2, 1.0)]);
    for strategy in [Strategy::LinkState, Strategy::DistanceVector, Strategy::Both] {
        assert_eq!(
            compute(&topology, strategy),
            Err(ComputationError::InvalidTopology(TopologyError::EndpointOutOfRange {
                edge: 1,
                endpoint: 2,
                num_nodes: 2
            }))
        );
    }
}

#[test]
fn nan_weight_is_invalid() {
    let topology = Topology::from_edges(2, [(0, 1, f64::NAN)]);
    assert!(matches!(
        compute(&topology, Strategy::DistanceVector),
        Err(ComputationError::InvalidTopology(TopologyError::NonFiniteWeight { edge: 0, .. }))
    ));
}

#[test]
fn oversized_weight_is_invalid() {
    let topology = Topology::from_edges(3, [(0, 1, 1.0), (1, 2, -1e300)]);
    assert_eq!(
        compute(&topology, Strategy::DistanceVector),
        Err(ComputationError::InvalidTopology(TopologyError::WeightOutOfRange { edge: 1, weight: -1e300 }))
    );
    assert!(matches!(
        routetab::concepts::topology::Adjacency::build(&topology),
        Err(TopologyError::WeightOutOfRange { edge: 1, .. })
    ));
}

#[test]
fn tables_exclude_their_source() {
    let topology = common::graphs::simple_weighted();
    let result = compute(&topology, Strategy::Both).unwrap();

    for protocol in Strategy::Both.protocols() {
        for source in 0..topology.num_nodes {
            let table = table(&result, *protocol, source);
            assert_eq!(table.source(), source);
            assert_eq!(table.len(), topology.num_nodes - 1);
            assert!(table.entry(source).is_none());
            let destinations: Vec<usize> = table.entries().iter().map(|e| e.destination).collect();
            let expected: Vec<usize> = (0..topology.num_nodes).filter(|d| *d != source).collect();
            assert_eq!(destinations, expected);
        }
    }
}

#[test]
fn strategy_selects_families() {
    let topology = common::graphs::chain_with_shortcut();

    let ls = compute(&topology, Strategy::LinkState).unwrap();
    assert!(ls.link_state.is_some());
    assert!(ls.distance_vector.is_none());

    let dv = compute(&topology, Strategy::DistanceVector).unwrap();
    assert!(dv.link_state.is_none());
    assert_eq!(
        dv.tables(Protocol::DistanceVector).map(|t| t.protocol),
        Some(Protocol::DistanceVector)
    );

    let both = compute(&topology, Strategy::Both).unwrap();
    assert_eq!(
        table(&both, Protocol::LinkState, 0).entries(),
        table(&both, Protocol::DistanceVector, 0).entries()
    );
}

#[test]
fn empty_and_single_node_topologies() {
    let empty = compute(&Topology::new(0), Strategy::Both).unwrap();
    assert!(empty.link_state.unwrap().tables.is_empty());

    let single = compute(&Topology::new(1), Strategy::Both).unwrap();
    assert!(table(&single, Protocol::DistanceVector, 0).is_empty());
}

#[test]
fn parallel_matches_sequential() {
    let topology = common::graphs::negative_triangle();
    let parallel = ComputeParams {
        parallel: true,
        parallel_threshold: 0,
    };
    assert_eq!(
        compute_with(&topology, Strategy::DistanceVector, &parallel),
        compute_with(&topology, Strategy::DistanceVector, &ComputeParams::sequential())
    );
}

#[test]
fn request_body_to_tables() {
    let request = TopologyRequest::from_json(
        r#"{
            "nodes": [{"id": 0, "ip": "10.0.0.1"}, {"id": 1, "ip": "10.0.0.2"}, {"id": 2, "ip": "10.0.0.3"}],
            "edges": [{"from": 0, "to": 1, "weight": 3}, {"from": 1, "to": 2, "weight": 4}]
        }"#,
    )
    .unwrap();
    let topology = request.into_topology().unwrap();
    let result = compute(&topology, Strategy::Both).unwrap();

    assert_eq!(entry(table(&result, Protocol::LinkState, 2), 0), route(0, 1, 7.0));
    assert!(result.disagreements().is_empty());
}

#[test]
fn edge_list_text() {
    let topology = Topology::parse_edge_list("# generated\n- 0 1 2\n\n1 2 0.5\n", None).unwrap();
    assert_eq!(topology.num_nodes, 3);
    assert_eq!(topology.edges.len(), 2);

    let padded = Topology::parse_edge_list("0 1 2", Some(4)).unwrap();
    let result = compute(&padded, Strategy::LinkState).unwrap();
    assert_eq!(entry(table(&result, Protocol::LinkState, 0), 3).next_hop, NextHop::Unreachable);

    assert_eq!(
        Topology::parse_edge_list("0 1 2\n0 x 1", None),
        Err(TopologyError::Malformed {
            line: 2,
            reason: "bad endpoint 'x': invalid digit found in string".to_string()
        })
    );
    assert!(matches!(
        Topology::parse_edge_list("0 3 1", Some(2)),
        Err(TopologyError::EndpointOutOfRange { endpoint: 3, .. })
    ));
}

#[test]
fn edge_list_rejects_largest_index() {
    let input = format!("{} 0 1", usize::MAX);
    assert!(matches!(
        Topology::parse_edge_list(&input, None),
        Err(TopologyError::Malformed { line: 1, .. })
    ));
    assert!(Topology::parse_edge_list("0 18446744073709551615 1", Some(2)).is_err());
}

#[test]
fn serialized_entries_use_table_column_names() {
    let result = compute(&common::graphs::disconnected(), Strategy::LinkState).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    let (source, slot) = (&json["link_state"]["tables"][0][0], &json["link_state"]["tables"][0][1]);
    assert_eq!(source, 0);
    let entries = &slot["Ok"]["entries"];
    assert_eq!(entries[0]["Destination"], 1);
    assert_eq!(entries[0]["NextHop"]["Via"], 1);
    assert_eq!(entries[1]["NextHop"], "Unreachable");
    assert_eq!(entries[1]["Cost"], "Infinite");

    let restored: PerTopologyResult = serde_json::from_value(json).unwrap();
    assert_eq!(restored, result);
}

#[test]
fn disagreements_flag_mismatched_costs() {
    let mut result = compute(&common::graphs::chain_with_shortcut(), Strategy::Both).unwrap();
    let tables = result.distance_vector.as_mut().unwrap();
    let at_0 = tables.tables.get_mut(&0).unwrap().as_mut().unwrap();
    let tampered = routetab::builder::assemble_table(&routetab::engine::ShortestPaths {
        source: 0,
        dist: vec![Cost::ZERO, Cost::Finite(1.0), Cost::Finite(3.0), Cost::Finite(10.0)],
        prev: vec![None, Some(0), Some(1), Some(0)],
        departures: None,
    });
    *at_0 = tampered;

    let found = result.disagreements();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].destination, 3);
    assert_eq!(found[0].link_state, Cost::Finite(4.0));
    assert_eq!(found[0].distance_vector, Cost::Finite(10.0));
}
