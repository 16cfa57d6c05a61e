//! Dense distance-matrix input
//!
//! Reads a delimited matrix file into an ordered table of records. The header
//! must contain a `NODE` column naming each row's node; every other column
//! names a node and holds either a non-negative weight or a negative sentinel
//! meaning "no edge". Cell values are kept as raw strings here; numeric
//! interpretation happens during graph construction.

use std::path::Path;

use crate::error::{MatpathError, Result};

/// Reserved header naming the row-node column.
pub const NODE_COLUMN: &str = "NODE";

/// One matrix row: the row's node name plus one raw cell per distance column.
#[derive(Debug, Clone)]
pub struct MatrixRow {
    node: String,
    cells: Vec<String>,
}

impl MatrixRow {
    pub fn new(node: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            node: node.into(),
            cells,
        }
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    /// Cells in header order, parallel to [`MatrixTable::columns`].
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// An ordered distance-matrix table: distance column names plus rows in file
/// order.
#[derive(Debug, Clone)]
pub struct MatrixTable {
    columns: Vec<String>,
    rows: Vec<MatrixRow>,
}

impl MatrixTable {
    /// Build a table from already-split records, validating that every row
    /// has one cell per distance column.
    pub fn new(columns: Vec<String>, rows: Vec<MatrixRow>) -> Result<Self> {
        for row in &rows {
            if row.cells.len() != columns.len() {
                return Err(MatpathError::MatrixShape {
                    reason: format!(
                        "row {} has {} cells, expected {}",
                        row.node,
                        row.cells.len(),
                        columns.len()
                    ),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Read a matrix from a delimited file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?.clone();
        let node_idx = headers
            .iter()
            .position(|h| h == NODE_COLUMN)
            .ok_or_else(|| MatpathError::MatrixShape {
                reason: format!("missing required {NODE_COLUMN} column"),
            })?;

        let columns: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != node_idx)
            .map(|(_, h)| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let node = record
                .get(node_idx)
                .ok_or_else(|| MatpathError::MatrixShape {
                    reason: format!("row {} is missing its {NODE_COLUMN} cell", rows.len() + 1),
                })?
                .to_string();
            let cells = record
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != node_idx)
                .map(|(_, cell)| cell.to_string())
                .collect();
            rows.push(MatrixRow { node, cells });
        }

        tracing::debug!(columns = columns.len(), rows = rows.len(), "read_matrix");
        Self::new(columns, rows)
    }

    /// Distance column names in header order (the `NODE` column excluded).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in file order.
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatpathError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_matrix_with_node_column_in_any_position() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.csv");
        fs::write(&path, "A,NODE,B\n0,A,1\n1,B,0\n").unwrap();

        let table = MatrixTable::from_path(&path).unwrap();
        assert_eq!(table.columns(), ["A", "B"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].node(), "A");
        assert_eq!(table.rows()[0].cells(), ["0", "1"]);
        assert_eq!(table.rows()[1].node(), "B");
        assert_eq!(table.rows()[1].cells(), ["1", "0"]);
    }

    #[test]
    fn missing_node_column_is_a_shape_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.csv");
        fs::write(&path, "A,B\n0,1\n1,0\n").unwrap();

        let err = MatrixTable::from_path(&path).unwrap_err();
        assert!(matches!(err, MatpathError::MatrixShape { .. }));
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let row = MatrixRow::new("A", vec!["0".to_string()]);
        let err = MatrixTable::new(vec!["A".to_string(), "B".to_string()], vec![row]).unwrap_err();
        assert!(matches!(err, MatpathError::MatrixShape { .. }));
    }

    #[test]
    fn node_names_keep_case_and_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.csv");
        fs::write(&path, "NODE, a ,B\n a ,0,1\nB,1,0\n").unwrap();

        let table = MatrixTable::from_path(&path).unwrap();
        assert_eq!(table.columns()[0], " a ");
        assert_eq!(table.rows()[0].node(), " a ");
    }
}
