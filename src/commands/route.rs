//! The matpath pipeline: matrix file -> graph -> shortest paths -> outputs

use std::path::Path;
use std::time::Instant;

use matpath_core::error::Result;
use matpath_core::format::OutputFormat;
use matpath_core::graph::{compute, Graph, ShortestPaths};
use matpath_core::matrix::MatrixTable;

use crate::cli::Cli;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let table = MatrixTable::from_path(&cli.matrix)?;
    tracing::debug!(elapsed = ?start.elapsed(), "read_matrix");

    let graph = Graph::from_matrix(&table)?;
    tracing::debug!(elapsed = ?start.elapsed(), nodes = graph.len(), "build_graph");

    let paths = compute(&graph, &cli.start_node, cli.policy)?;
    tracing::debug!(elapsed = ?start.elapsed(), "compute");

    write_csv(&cli.outfile, &paths)?;

    match cli.format {
        OutputFormat::Json => print_json(cli, &paths)?,
        OutputFormat::Human => {
            if cli.print {
                println!("Start node: {}\n", cli.start_node);
                print_table(&paths);
            }
        }
    }

    Ok(())
}

/// Write results to the output csv file as `node,dist,prev` rows.
///
/// Unreachable nodes render as `inf`; a missing predecessor renders as `-`.
fn write_csv(path: &Path, paths: &ShortestPaths) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["node", "dist", "prev"])?;

    for (node, dist) in &paths.distances {
        let dist = dist.to_string();
        writer.write_record([node.as_str(), dist.as_str(), paths.predecessor(node).unwrap_or("-")])?;
    }

    writer.flush()?;
    Ok(())
}

/// Print node distances and predecessors in a tabular format.
fn print_table(paths: &ShortestPaths) {
    println!("{:^10} | {:^10} | {:^10}", "Node", "Distance", "Previous");
    println!("{}", "-".repeat(36));
    for (node, dist) in &paths.distances {
        println!(
            "{:^10} | {:>10} | {:^10}",
            node,
            dist,
            paths.predecessor(node).unwrap_or("-")
        );
    }
}

/// Print the machine envelope. JSON has no Infinity, so unreachable nodes
/// carry a null distance.
fn print_json(cli: &Cli, paths: &ShortestPaths) -> Result<()> {
    let nodes: Vec<serde_json::Value> = paths
        .distances
        .iter()
        .map(|(node, dist)| {
            serde_json::json!({
                "node": node,
                "dist": if dist.is_finite() {
                    serde_json::json!(dist)
                } else {
                    serde_json::Value::Null
                },
                "prev": paths.predecessor(node),
            })
        })
        .collect();

    let envelope = serde_json::json!({
        "start": cli.start_node,
        "policy": cli.policy.to_string(),
        "nodes": nodes,
    });

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
