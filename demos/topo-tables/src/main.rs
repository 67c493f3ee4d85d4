mod config;

use std::fs;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use routetab::concepts::table::{PerTopologyResult, ProtocolTables};
use routetab::concepts::topology::TopologyRequest;
use routetab::{compute_with, Topology};
use simplelog::*;

use crate::config::{Cli, InputFormat};

fn load(cli: &Cli) -> anyhow::Result<Topology> {
    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read topology from {}", cli.input.display()))?;
    let topology = match cli.format {
        InputFormat::Json => TopologyRequest::from_json(&input)
            .context("topology is not a valid request body")?
            .into_topology()?,
        InputFormat::Edges => Topology::parse_edge_list(&input, cli.nodes)?,
    };
    Ok(topology)
}

fn print_tables(tables: &ProtocolTables) {
    println!("== {} ==", tables.protocol);
    for (source, slot) in &tables.tables {
        println!("router {source}");
        match slot {
            Ok(table) => {
                println!("  {:<12}{:<12}{}", "destination", "next hop", "cost");
                for entry in table.entries() {
                    println!("  {:<12}{:<12}{}", entry.destination, entry.next_hop.to_string(), entry.cost);
                }
            }
            Err(err) => println!("  {err}"),
        }
    }
}

fn report(result: &PerTopologyResult) {
    for tables in [&result.link_state, &result.distance_vector].into_iter().flatten() {
        print_tables(tables);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    TermLogger::init(cli.log_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .context("failed to init logger")?;

    let topology = load(&cli)?;
    info!("Loaded topology with {} nodes and {} edges", topology.num_nodes, topology.edges.len());

    let result = compute_with(&topology, cli.strategy, &cli.params())?;

    for mismatch in result.disagreements() {
        warn!(
            "{} -> {}: link-state cost {} but distance-vector cost {}",
            mismatch.source, mismatch.destination, mismatch.link_state, mismatch.distance_vector
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report(&result);
    }
    Ok(())
}
