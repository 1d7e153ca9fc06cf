use parser::AnswerSet;
use std::env;
use std::fs;
use std::process;
use timeline::dependency_graph::DEFAULT_START_NODE;
use timeline::DependencyGraph;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing similar to parser main
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <solver_output_file> [start_node]", args[0]);
        eprintln!("Examples:");
        eprintln!("  {} ./solver_output.txt", args[0]);
        eprintln!("  {} ./solver_output.txt t0", args[0]);
        process::exit(1);
    }

    let raw = match fs::read_to_string(&args[1]) {
        Ok(raw) => raw,
        Err(e) => {
            error!("Failed to read {}: {e}", args[1]);
            process::exit(1);
        }
    };

    let answer_set = match AnswerSet::parse(&raw) {
        Ok(set) => set,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let graph = DependencyGraph::from_answer_set(&answer_set);
    info!(
        "Built graph: {} nodes from {} edge facts",
        graph.nodes().len(),
        graph.source_facts().len()
    );
    info!("{graph}");

    // Parent-list records, the input shape for layered-DAG layout
    match serde_json::to_string_pretty(&graph.to_parent_list()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize parent list: {e}");
            process::exit(1);
        }
    }

    let start = args.get(2).map_or(DEFAULT_START_NODE, String::as_str);
    match graph.to_nested_notation(start) {
        Ok(notation) => info!("Nested notation from '{start}': {notation}"),
        Err(e) => error!("{e}"),
    }
}
