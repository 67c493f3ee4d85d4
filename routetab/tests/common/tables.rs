use routetab::concepts::route::{NextHop, RouteEntry};
use routetab::concepts::table::{PerTopologyResult, RoutingTable};
use routetab::util::Cost;
use routetab::Protocol;

pub fn table(result: &PerTopologyResult, protocol: Protocol, source: usize) -> &RoutingTable {
    result
        .tables(protocol)
        .unwrap_or_else(|| panic!("no {protocol} tables computed"))
        .table(source)
        .unwrap_or_else(|| panic!("no slot for source {source}"))
        .as_ref()
        .unwrap_or_else(|err| panic!("table for {source} withheld: {err}"))
}

pub fn entry(table: &RoutingTable, destination: usize) -> RouteEntry {
    *table
        .entry(destination)
        .unwrap_or_else(|| panic!("no entry for {destination} at {}", table.source()))
}

pub fn route(destination: usize, hop: usize, cost: f64) -> RouteEntry {
    RouteEntry {
        destination,
        next_hop: NextHop::Via(hop),
        cost: Cost::Finite(cost),
    }
}
