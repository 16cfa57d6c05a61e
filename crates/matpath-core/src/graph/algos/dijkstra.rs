//! Global min-heap shortest path (textbook Dijkstra)
//!
//! The corrected counterpart of [`super::walk`]: the next node to finalize is
//! always the unvisited node with the smallest tentative distance, taken from
//! a global min-heap. Optimal for non-negative weights and reaches every
//! connected node.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::graph::Graph;

use super::{initial_distances, ShortestPaths};

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node: String,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.distance == other.distance
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

pub(super) fn global_min_heap(graph: &Graph, start: &str) -> ShortestPaths {
    let mut distances = initial_distances(graph, start);
    let mut previous = std::collections::BTreeMap::new();
    let mut visited: HashSet<&str> = HashSet::new();

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        node: start.to_string(),
        distance: 0.0,
    }));

    while let Some(Reverse(HeapEntry { node, distance })) = heap.pop() {
        let Some(current) = graph.get(&node) else {
            continue;
        };
        // Stale entry from an earlier, longer tentative distance.
        if !visited.insert(current.name()) {
            continue;
        }

        for edge in current.edges() {
            if visited.contains(edge.to()) {
                continue;
            }
            let alt = distance + edge.weight();
            if alt < distances[edge.to()] {
                distances.insert(edge.to().to_string(), alt);
                previous.insert(edge.to().to_string(), current.name().to_string());
                heap.push(Reverse(HeapEntry {
                    node: edge.to().to_string(),
                    distance: alt,
                }));
            }
        }
    }

    ShortestPaths {
        distances,
        previous,
    }
}

#[cfg(test)]
mod tests;
