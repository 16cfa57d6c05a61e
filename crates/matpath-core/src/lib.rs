//! Matpath Core Library
//!
//! Domain logic for computing single-source shortest-path distances over a
//! weighted graph loaded from a dense distance matrix.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod matrix;
