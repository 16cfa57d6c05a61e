//! Graph model and shortest-path operations
//!
//! The graph is an arena of named nodes with ordered adjacency lists, built
//! once from a distance matrix and immutable afterwards. Traversal state
//! (visited bookkeeping) lives inside each `compute` call, never on the
//! nodes, so one graph supports any number of computations.

use std::collections::HashMap;

pub mod algos;
mod build;

pub use algos::{compute, FrontierPolicy, ShortestPaths};

/// A directed weighted edge to a named node.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    to: String,
    weight: f64,
}

impl Edge {
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Non-negative, finite. Enforced at construction.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A named node with its outgoing edges in column-encounter order.
///
/// The edge list doubles as the neighbor set; there is no separate neighbor
/// map to keep in sync. A node never lists itself.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    edges: Vec<Edge>,
}

impl Node {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Weight of the edge to `to`, if one exists.
    pub fn edge_weight(&self, to: &str) -> Option<f64> {
        self.edges.iter().find(|e| e.to == to).map(|e| e.weight)
    }
}

/// All nodes of one loaded matrix, keyed by name, row-encounter order
/// preserved.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in row-encounter order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}
