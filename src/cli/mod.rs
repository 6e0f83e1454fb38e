//! CLI argument parsing for graphkit
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use output::OutputFormat;

/// Graphkit - run graph algorithms over a graph description file
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph description file (.json, .yaml or .yml)
    #[arg(long, short, global = true, env = "GRAPHKIT_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "GRAPHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. "debug" or "graphkit_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show node and edge counts and the graph's modes
    Info,

    /// Breadth-first traversal order from a start node
    Bfs {
        /// Start node
        start: i64,
    },

    /// Depth-first traversal order from a start node
    Dfs {
        /// Start node
        start: i64,
    },

    /// Random walk from a start node
    Walk {
        /// Start node
        start: i64,

        /// Positions to produce, start included (default from config)
        #[arg(long, short = 'n')]
        steps: Option<usize>,

        /// RNG seed for a reproducible walk (default from config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Single-source shortest distances (Dijkstra)
    Dijkstra {
        /// Source node
        start: i64,
    },

    /// Shortest path between two nodes (Dijkstra)
    Path {
        /// Source node
        from: i64,
        /// Target node
        to: i64,
    },

    /// Shortest path between two nodes (A*)
    ///
    /// The path is shortest only when the heuristic never overestimates the
    /// remaining cost. `zero` always qualifies; `id-distance` does only when
    /// every edge weighs at least the gap between its endpoint ids.
    Astar {
        /// Source node
        from: i64,
        /// Target node
        to: i64,

        /// Heuristic estimating the remaining cost; `id-distance` may return a
        /// path that is not the shortest
        #[arg(long, value_enum, default_value = "zero")]
        heuristic: Heuristic,
    },

    /// Topological order of a directed acyclic graph
    Topo,

    /// Report whether the graph contains a cycle
    Cycle,

    /// List all cliques of a given size
    Cliques {
        /// Clique size
        #[arg(long, short = 'k', default_value_t = 3)]
        size: usize,
    },

    /// Render the graph as a PlantUML-wrapped DOT diagram
    Export {
        /// Write the diagram to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Digits after the decimal point in weight labels, 0 to 17 (default from config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(0..=17))]
        precision: Option<u64>,

        /// Layout direction: LR, RL, TB or BT (default from config)
        #[arg(long)]
        rankdir: Option<String>,
    },

    /// Recommend similar products
    Recommend {
        /// Product id
        product: i64,

        /// Number of recommendations (default from config)
        #[arg(long, short = 'n')]
        top: Option<usize>,

        /// Add similarity edges from shared labels before ranking
        #[arg(long)]
        connect_labels: bool,

        /// Minimum label overlap for --connect-labels (default from config)
        #[arg(long, requires = "connect_labels")]
        min_similarity: Option<f64>,
    },

    /// Write the effective configuration as TOML
    Config {
        /// Destination file
        output: PathBuf,
    },
}

/// Heuristics available to the A* command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Heuristic {
    /// Always 0; A* then behaves like Dijkstra
    Zero,
    /// Absolute difference between node ids; may overestimate, so the path
    /// found may not be the shortest
    IdDistance,
}

impl Heuristic {
    pub fn estimate(self, current: i64, goal: i64) -> f64 {
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::IdDistance => goal.abs_diff(current) as f64,
        }
    }
}
