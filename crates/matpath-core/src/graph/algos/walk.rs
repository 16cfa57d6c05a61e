//! Local-greedy walk (the reference traversal)
//!
//! Label-setting like Dijkstra, but the next current node is chosen from the
//! current node's own neighbor list by raw edge weight, not from a global
//! frontier by tentative distance. The walk halts the moment the current node
//! has no unvisited neighbor. Both properties are reproduced deliberately;
//! the corrected variant lives in [`super::dijkstra`].

use std::collections::HashSet;

use crate::graph::{Graph, Node};

use super::{initial_distances, ShortestPaths};

pub(super) fn local_greedy_walk(graph: &Graph, start: &str) -> ShortestPaths {
    let mut distances = initial_distances(graph, start);
    let mut previous = std::collections::BTreeMap::new();
    let mut visited: HashSet<&str> = HashSet::new();

    let mut current = graph.get(start);

    while let Some(node) = current {
        let base = distances[node.name()];

        // Relax every unvisited neighbor; strict `<` keeps the first-found
        // predecessor on ties.
        for edge in node.edges() {
            if visited.contains(edge.to()) {
                continue;
            }
            let alt = base + edge.weight();
            if alt < distances[edge.to()] {
                distances.insert(edge.to().to_string(), alt);
                previous.insert(edge.to().to_string(), node.name().to_string());
            }
        }

        visited.insert(node.name());
        current = closest_unvisited_neighbor(graph, node, &visited);
    }

    ShortestPaths {
        distances,
        previous,
    }
}

/// The unvisited neighbor with the smallest edge weight from `node`, first in
/// column order on ties. `None` ends the walk.
fn closest_unvisited_neighbor<'g>(
    graph: &'g Graph,
    node: &'g Node,
    visited: &HashSet<&str>,
) -> Option<&'g Node> {
    node.edges()
        .iter()
        .filter(|e| !visited.contains(e.to()))
        .min_by(|a, b| a.weight().total_cmp(&b.weight()))
        .and_then(|e| graph.get(e.to()))
}
