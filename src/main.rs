use clap::Parser;
use hopcheck::{
    fs::GraphFile,
    graph::{Graph, SparseGraph},
    statistics::TraversalStats,
    traversal::has_path_within_recorded,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

/// Bounded-length reachability checker for directed graphs
#[derive(Parser, Debug)]
#[command(name = "hopcheck")]
#[command(about = "Answers bounded-length reachability queries over directed graphs", long_about = None)]
struct Args {
    /// Path to a JSON graph file ({"vertices": N, "edges": [[u, v], ...]})
    #[arg(short, long)]
    graph: Option<String>,

    /// Generate a seeded random graph with this many vertices instead of loading one
    #[arg(long)]
    random_order: Option<usize>,

    /// Edge probability used when generating a random graph
    #[arg(long, default_value_t = 0.05)]
    edge_probability: f64,

    /// RNG seed used when generating a random graph
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Source vertex of the query
    #[arg(short, long)]
    source: usize,

    /// Target vertex of the query
    #[arg(short, long)]
    target: usize,

    /// Length bounds to sweep (comma-separated list, e.g. "0,1,2,8")
    #[arg(short, long, value_delimiter = ',')]
    bounds: Vec<usize>,
}

fn random_graph(order: usize, edge_probability: f64, seed: u64) -> SparseGraph {
    // seeded so that repeated invocations sweep the exact same graph
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = SparseGraph::new(order);

    for from in 0..order {
        for to in 0..order {
            if from != to && rng.random_bool(edge_probability) {
                graph.add_edge(from, to);
            }
        }
    }

    graph
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let graph = match (&args.graph, args.random_order) {
        (Some(path), _) => {
            println!("Loading graph from {path}...");
            GraphFile::load_from_path(path).into_sparse()
        }
        (None, Some(order)) => {
            println!(
                "Generating random graph: order {} - edge probability {} - seed {}",
                order, args.edge_probability, args.seed
            );
            random_graph(order, args.edge_probability, args.seed)
        }
        (None, None) => panic!("provide either --graph or --random-order"),
    };

    println!(
        "Graph ready with {} vertices and {} edges",
        graph.size(),
        graph.edge_count()
    );

    println!("\nStarting bound sweep:");
    println!("  Query: {} -> {}", args.source, args.target);
    println!("  Bounds: {:?}", args.bounds);

    let mut combined_stats = TraversalStats::new();

    for &bound in &args.bounds {
        let mut stats = TraversalStats::new();
        let reachable =
            has_path_within_recorded(&graph, args.source, args.target, bound, &mut stats);

        println!(
            "  within {:>3} edges: {} ({} expansions, {} edge probes)",
            bound,
            if reachable { "reachable" } else { "unreachable" },
            stats.get_expansions(),
            stats.get_edge_probes(),
        );

        combined_stats = combined_stats.merge(&stats);
    }

    println!("\n==========");
    println!(
        "Sweep completed: {} expansions, {} edge probes, {} queries stopped by the prefilter",
        combined_stats.get_expansions(),
        combined_stats.get_edge_probes(),
        combined_stats.get_gap_rejections(),
    );
    println!("==========");
}
