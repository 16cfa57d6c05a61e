use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn matpath() -> Command {
    cargo_bin_cmd!("matpath")
}

/// Write a matrix csv into `dir` and return its path.
#[allow(dead_code)]
pub fn write_matrix(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("matrix.csv");
    fs::write(&path, contents).unwrap();
    path
}

/// A-B=1, B-C=2, no direct A-C edge.
#[allow(dead_code)]
pub const PATH_MATRIX: &str = "\
NODE,A,B,C
A,0,1,-1
B,1,0,2
C,-1,2,0
";
