//! Graph construction from a distance-matrix table
//!
//! Two passes: create every node first (so edges can only ever point at known
//! nodes), then store one directed edge per non-sentinel cell. The input is
//! expected to be symmetric but is never symmetrized here; an asymmetric
//! matrix yields a directed graph and is traversed as such.

use std::collections::HashMap;

use crate::error::{MatpathError, Result};
use crate::graph::{Edge, Graph, Node};
use crate::matrix::MatrixTable;

impl Graph {
    /// Build a graph from a matrix table.
    ///
    /// A cell parses to an edge when its value is a finite number >= 0 and the
    /// column names a different node; negative values are the "no edge"
    /// sentinel. Diagonal cells never produce self-loops, whatever their
    /// value.
    #[tracing::instrument(skip(table), fields(rows = table.rows().len()))]
    pub fn from_matrix(table: &MatrixTable) -> Result<Graph> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut nodes: Vec<Node> = Vec::new();

        for row in table.rows() {
            if index.insert(row.node().to_string(), nodes.len()).is_some() {
                return Err(MatpathError::DuplicateNode {
                    name: row.node().to_string(),
                });
            }
            nodes.push(Node::new(row.node()));
        }

        for column in table.columns() {
            if !index.contains_key(column) {
                return Err(MatpathError::UnknownNode {
                    column: column.clone(),
                });
            }
        }

        for (i, row) in table.rows().iter().enumerate() {
            for (column, cell) in table.columns().iter().zip(row.cells()) {
                let weight: f64 = cell
                    .trim()
                    .parse()
                    .map_err(|_| malformed(row.node(), column, cell))?;
                if !weight.is_finite() {
                    return Err(malformed(row.node(), column, cell));
                }
                if weight < 0.0 {
                    // sentinel: no edge
                    continue;
                }
                if column == row.node() {
                    // diagonal cell, never a self-loop
                    continue;
                }
                nodes[i].edges.push(Edge {
                    to: column.clone(),
                    weight,
                });
            }
        }

        Ok(Graph { nodes, index })
    }
}

fn malformed(node: &str, column: &str, value: &str) -> MatpathError {
    MatpathError::MalformedWeight {
        node: node.to_string(),
        column: column.to_string(),
        value: value.to_string(),
    }
}
