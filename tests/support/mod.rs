use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for graphkit
pub fn graphkit() -> Command {
    let mut cmd = cargo_bin_cmd!("graphkit");
    cmd.env_remove("GRAPHKIT_GRAPH")
        .env_remove("GRAPHKIT_CONFIG")
        .env_remove("GRAPHKIT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 0 -1-> 1 -2-> 2 -1-> 3, plus a direct 0 -4-> 2
pub const DIAMOND: &str = r#"{
    "directed": true,
    "weighted": true,
    "nodes": [0, 1, 2, 3],
    "edges": [
        {"from": 0, "to": 1, "weight": 1.0},
        {"from": 1, "to": 2, "weight": 2.0},
        {"from": 0, "to": 2, "weight": 4.0},
        {"from": 2, "to": 3, "weight": 1.0}
    ]
}"#;

/// Six-node route map; the cheapest 1 -> 6 route is 1 3 4 5 6 (cost 9)
pub const ROUTE_MAP: &str = r#"
directed: true
weighted: true
nodes: [1, 2, 3, 4, 5, 6]
edges:
  - { from: 1, to: 2, weight: 2 }
  - { from: 1, to: 3, weight: 4 }
  - { from: 2, to: 4, weight: 7 }
  - { from: 3, to: 4, weight: 1 }
  - { from: 4, to: 5, weight: 3 }
  - { from: 5, to: 6, weight: 1 }
  - { from: 3, to: 6, weight: 10 }
"#;

/// Course prerequisites 1 -> 2 -> 4, 1 -> 3 -> 4, 4 -> 5
pub const COURSES: &str = r#"{
    "nodes": [1, 2, 3, 4, 5],
    "edges": [
        {"from": 1, "to": 2},
        {"from": 1, "to": 3},
        {"from": 2, "to": 4},
        {"from": 3, "to": 4},
        {"from": 4, "to": 5}
    ]
}"#;

pub const CATALOG: &str = r#"{
    "directed": true,
    "weighted": true,
    "nodes": [1, 2, 3, 4, 5],
    "edges": [
        {"from": 1, "to": 2, "weight": 0.8},
        {"from": 1, "to": 3, "weight": 0.6},
        {"from": 2, "to": 3, "weight": 0.9},
        {"from": 4, "to": 5, "weight": 0.7}
    ],
    "products": [
        {"id": 1, "labels": ["electronics", "phone"]},
        {"id": 2, "labels": ["electronics", "laptop"]},
        {"id": 3, "labels": ["electronics", "tablet"]},
        {"id": 4, "labels": ["furniture", "chair"]},
        {"id": 5, "labels": ["furniture", "desk"]}
    ]
}"#;
