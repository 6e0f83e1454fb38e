//! Command dispatch logic for graphkit
use std::time::Instant;

use graphkit_core::config::EngineConfig;
use graphkit_core::error::Result;
use graphkit_core::{bail_usage, trace_time};

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::document::GraphDocument;

pub fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    trace_time!(start, "load_config");

    // Writing a config is the only command that does not read a graph
    if let Commands::Config { output } = &cli.command {
        return commands::config::execute(cli, &config, output);
    }

    let Some(path) = cli.graph.as_deref() else {
        bail_usage!("this command needs a graph file (--graph <FILE>)");
    };
    let document = GraphDocument::load(path)?;
    trace_time!(start, "load_graph");

    if let Commands::Recommend {
        product,
        top,
        connect_labels,
        min_similarity,
    } = &cli.command
    {
        let mut products = document.build_products()?;
        let options = commands::recommend::RecommendOptions {
            top_n: top.unwrap_or(config.recommend.top_n),
            connect_labels: *connect_labels,
            min_similarity: min_similarity.unwrap_or(config.recommend.min_label_similarity),
        };
        return commands::recommend::execute(cli, &mut products, *product, &options);
    }

    let graph = document.build_graph()?;
    trace_time!(start, "build_graph");

    let result = match &cli.command {
        Commands::Info => commands::info::execute(cli, &graph),
        Commands::Bfs { start } => commands::traverse::execute_bfs(cli, &graph, *start),
        Commands::Dfs { start } => commands::traverse::execute_dfs(cli, &graph, *start),
        Commands::Walk { start, steps, seed } => commands::traverse::execute_walk(
            cli,
            &graph,
            *start,
            steps.unwrap_or(config.walk.steps),
            seed.or(config.walk.seed),
        ),
        Commands::Dijkstra { start } => commands::paths::execute_dijkstra(cli, &graph, *start),
        Commands::Path { from, to } => commands::paths::execute_path(cli, &graph, *from, *to),
        Commands::Astar {
            from,
            to,
            heuristic,
        } => commands::paths::execute_astar(cli, &graph, *from, *to, *heuristic),
        Commands::Topo => commands::ordering::execute_topo(cli, &graph),
        Commands::Cycle => commands::ordering::execute_cycle(cli, &graph),
        Commands::Cliques { size } => commands::ordering::execute_cliques(cli, &graph, *size),
        Commands::Export {
            output,
            precision,
            rankdir,
        } => {
            let mut export = config.export.clone();
            if let Some(precision) = precision {
                // clap bounds the flag to 0..=17
                export.label_precision = *precision as usize;
            }
            if let Some(rankdir) = rankdir {
                export.rankdir = rankdir.clone();
            }
            commands::export::execute(cli, &graph, &export, output.as_deref())
        }
        Commands::Recommend { .. } | Commands::Config { .. } => Ok(()),
    };

    trace_time!(start, "command");
    result
}
