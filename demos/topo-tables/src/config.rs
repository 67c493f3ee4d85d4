use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use routetab::{ComputeParams, Strategy};
use simplelog::LevelFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `{"nodes": [...], "edges": [{"from", "to", "weight"}]}`
    Json,
    /// one `u v weight` triple per line
    Edges,
}

#[derive(Parser, Debug)]
#[command(name = "topo-tables", about = "Compute link-state and distance-vector routing tables for a topology")]
pub struct Cli {
    /// Topology file
    pub input: PathBuf,
    /// Format of the topology file
    #[arg(long, value_enum, default_value_t = InputFormat::Json)]
    pub format: InputFormat,
    /// Node count for edge lists, defaults to one more than the largest endpoint
    #[arg(long)]
    pub nodes: Option<usize>,
    /// link-state, distance-vector or both
    #[arg(long, default_value = "both")]
    pub strategy: Strategy,
    /// Run every source on the current thread
    #[arg(long)]
    pub sequential: bool,
    /// Print the result as JSON instead of tables
    #[arg(long)]
    pub json: bool,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn params(&self) -> ComputeParams {
        if self.sequential {
            ComputeParams::sequential()
        } else {
            ComputeParams::default()
        }
    }
}
