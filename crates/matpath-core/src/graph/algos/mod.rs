//! Shortest-path algorithms
//!
//! Two frontier policies share one entry point and one result shape:
//! - `local-greedy`: the reference walk, which advances to the closest
//!   unvisited neighbor of the current node by raw edge weight
//! - `dijkstra`: textbook Dijkstra over a global min-heap keyed by tentative
//!   distance

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MatpathError, Result};
use crate::graph::Graph;

pub mod dijkstra;
pub mod walk;

/// How the next current node is chosen during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierPolicy {
    /// Advance to the closest unvisited neighbor of the current node, by raw
    /// edge weight. This reproduces the reference behavior, including its
    /// known limitation: the walk stops as soon as the current node has no
    /// unvisited neighbor, so it can leave reachable nodes unreached and is
    /// not optimal on every topology.
    #[default]
    LocalGreedy,
    /// Always expand the unvisited node with the smallest tentative distance,
    /// from a global min-heap. Optimal for non-negative weights.
    GlobalMinHeap,
}

impl FromStr for FrontierPolicy {
    type Err = MatpathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "local-greedy" => Ok(FrontierPolicy::LocalGreedy),
            "dijkstra" | "global-min-heap" => Ok(FrontierPolicy::GlobalMinHeap),
            other => Err(MatpathError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for FrontierPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierPolicy::LocalGreedy => write!(f, "local-greedy"),
            FrontierPolicy::GlobalMinHeap => write!(f, "dijkstra"),
        }
    }
}

/// Single-source shortest-path result.
///
/// `distances` holds every node of the graph; unreached nodes keep
/// `f64::INFINITY`. `previous` holds the predecessor on the shortest path;
/// the start node and unreached nodes are absent from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub distances: BTreeMap<String, f64>,
    pub previous: BTreeMap<String, String>,
}

impl ShortestPaths {
    pub fn distance(&self, name: &str) -> Option<f64> {
        self.distances.get(name).copied()
    }

    pub fn predecessor(&self, name: &str) -> Option<&str> {
        self.previous.get(name).map(String::as_str)
    }
}

/// Compute shortest-path distances from `start` to every node of `graph`.
///
/// Fails with `UnknownStartNode` before any traversal if `start` is not in
/// the graph. The graph is never mutated; visited bookkeeping is private to
/// the call, so the same graph may be used by any number of computations.
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn compute(graph: &Graph, start: &str, policy: FrontierPolicy) -> Result<ShortestPaths> {
    if !graph.contains(start) {
        return Err(MatpathError::UnknownStartNode {
            name: start.to_string(),
        });
    }

    let paths = match policy {
        FrontierPolicy::LocalGreedy => walk::local_greedy_walk(graph, start),
        FrontierPolicy::GlobalMinHeap => dijkstra::global_min_heap(graph, start),
    };

    tracing::debug!(
        reached = paths.distances.values().filter(|d| d.is_finite()).count(),
        "compute_done"
    );
    Ok(paths)
}

/// Initial distance map: every node at +infinity, the start at zero.
fn initial_distances(graph: &Graph, start: &str) -> BTreeMap<String, f64> {
    let mut distances: BTreeMap<String, f64> = graph
        .nodes()
        .iter()
        .map(|n| (n.name().to_string(), f64::INFINITY))
        .collect();
    distances.insert(start.to_string(), 0.0);
    distances
}
