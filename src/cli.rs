//! CLI argument parsing for matpath
//!
//! Uses clap for argument parsing. Two positionals (matrix file, start node)
//! plus output and logging flags.

use std::path::PathBuf;

use clap::Parser;

use matpath_core::format::OutputFormat;
use matpath_core::graph::FrontierPolicy;

/// Matpath - shortest-path distances over a csv distance matrix
#[derive(Parser, Debug)]
#[command(name = "matpath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The input csv distance matrix
    pub matrix: PathBuf,

    /// Column name of the starting node
    pub start_node: String,

    /// Echo the result table to stdout
    #[arg(long, short)]
    pub print: bool,

    /// The output csv file
    #[arg(long, short, value_name = "out.csv", default_value = "out.csv")]
    pub outfile: PathBuf,

    /// Frontier selection policy
    #[arg(long, value_parser = parse_policy, default_value = "local-greedy")]
    pub policy: FrontierPolicy,

    /// Output format
    #[arg(long, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

fn parse_policy(s: &str) -> Result<FrontierPolicy, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e| format!("{e}"))
}
