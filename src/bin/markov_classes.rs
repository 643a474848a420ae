use computation_process::{Algorithm, Stateful};
use env_logger::Builder;
use log::LevelFilter;
use markov_classes::classify::{Classification, classify, is_irreducible};
use markov_classes::condensation::hasse_links;
use markov_classes::evolution::{
    DistributionSimulation, SimulationConfig, StationaryOutcome, StationarySearch,
};
use markov_classes::graph::{ChainGraph, StateId, check_stochastic};
use markov_classes::matrix::Matrix;
use markov_classes::render::{write_chain_diagram, write_class_diagram, write_trajectory};
use markov_classes::scc::{Partition, TarjanScc};
use std::fs::File;
use std::io::{BufWriter, Write};

use clap::Parser;

#[derive(Parser)]
#[command(name = "markov_classes")]
#[command(about = "Analyze the communicating classes and limiting behavior of a Markov chain")]
struct Args {
    /// Path to a chain description: a state count followed by `start end weight` triples
    #[arg(value_name = "FILE")]
    file: String,

    /// Write a Mermaid diagram of the raw chain to this path
    #[arg(long, value_name = "PATH", require_equals = true)]
    chain_diagram: Option<String>,

    /// Write a Mermaid diagram of the classes and their Hasse links to this path
    #[arg(long, value_name = "PATH", require_equals = true)]
    class_diagram: Option<String>,

    /// Simulate the chain step-wise, starting from this state (1-based)
    #[arg(long, value_name = "STATE", require_equals = true)]
    simulate_from: Option<usize>,

    /// Number of simulation steps
    #[arg(long, default_value_t = 50, require_equals = true)]
    steps: usize,

    /// Write the simulated trajectory to this CSV path
    #[arg(long, value_name = "PATH", require_equals = true)]
    csv: Option<String>,

    /// Comma-separated states to track in the CSV export (default: all states)
    #[arg(long, value_name = "STATES", value_delimiter = ',', require_equals = true)]
    track: Vec<usize>,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn main() {
    let args = Args::parse();

    // Configure logging:
    // Handle verbose flag: None = not specified, Some(None) = specified without value (defaults to info), Some(Some(level)) = specified with value
    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    // Load the chain description.
    let graph = ChainGraph::from_file(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to load chain file {}: {}", args.file, e);
        std::process::exit(1);
    });

    println!(
        "Loaded chain with {} states and {} transitions.",
        graph.state_count(),
        graph.edge_count()
    );

    let issues = check_stochastic(&graph);
    if issues.is_empty() {
        println!("The graph is a Markov graph.");
    } else {
        println!("The graph is not a Markov graph:");
        for issue in &issues {
            println!("  -> {issue}");
        }
    }

    if let Some(path) = &args.chain_diagram {
        write_to_file(path, |out| write_chain_diagram(out, &graph));
        println!("Chain diagram written to {path}.");
    }

    // Communicating classes and their partial order.
    let partition = TarjanScc::run(&graph, &graph).unwrap_or_else(|e| {
        eprintln!("Class search did not finish: {e}");
        std::process::exit(1);
    });
    let classifications = classify(&graph, &partition);
    let links = hasse_links(&graph, &partition);

    println!("\nFound {} communicating classes.", partition.len());
    for (class, classification) in partition.classes().iter().zip(&classifications) {
        println!("  {class} ({classification})");
    }
    if is_irreducible(&partition) {
        println!("The Markov graph is irreducible.");
    } else {
        println!("The Markov graph is not irreducible.");
    }

    if let Some(path) = &args.class_diagram {
        write_to_file(path, |out| {
            write_class_diagram(out, &partition, &classifications, &links)
        });
        println!("Class diagram written to {path}.");
    }

    let matrix = Matrix::from_graph(&graph);

    if let Some(start) = args.simulate_from {
        simulate(&args, &graph, &matrix, start);
    }

    stationary_report(&partition, &classifications, &matrix);
}

/// Step-wise simulation from a point distribution, with optional CSV export.
fn simulate(args: &Args, graph: &ChainGraph, matrix: &Matrix, start: usize) {
    let state_count = graph.state_count();
    if start == 0 || start > state_count {
        eprintln!("Initial state {start} out of range 1..={state_count}.");
        std::process::exit(1);
    }

    println!("\nSimulating {} steps from state {start}...", args.steps);
    let initial = Matrix::point_distribution(state_count, StateId::new(start));
    let simulation =
        DistributionSimulation::configure(SimulationConfig::new(matrix.clone(), args.steps), initial);

    let mut trajectory = Vec::new();
    for element in simulation {
        let distribution = element.unwrap_or_else(|e| {
            eprintln!("Simulation did not finish: {e}");
            std::process::exit(1);
        });
        trajectory.push(distribution);
    }

    if let Some(last) = trajectory.last() {
        println!("Distribution after {} steps:", trajectory.len());
        print!("{last}");
    }

    if let Some(path) = &args.csv {
        let tracked: Vec<StateId> = if args.track.is_empty() {
            graph.states().collect()
        } else {
            args.track
                .iter()
                .map(|state| {
                    if *state == 0 || *state > state_count {
                        eprintln!("Tracked state {state} out of range 1..={state_count}.");
                        std::process::exit(1);
                    }
                    StateId::new(*state)
                })
                .collect()
        };

        write_to_file(path, |out| write_trajectory(out, &tracked, &trajectory));
        println!("Trajectory written to {path}.");
    }
}

/// Run the stationary-distribution search on every persistent class.
fn stationary_report(partition: &Partition, classifications: &[Classification], matrix: &Matrix) {
    println!("\n--- Limiting behavior ---");
    for (class, classification) in partition.classes().iter().zip(classifications) {
        if !classification.is_persistent() {
            println!("Class {} is transient; its limiting distribution is zero.", class.name());
            continue;
        }

        let submatrix = matrix.submatrix(class.states());
        let outcome = StationarySearch::run(&submatrix, &submatrix).unwrap_or_else(|e| {
            eprintln!("Stationary search did not finish: {e}");
            std::process::exit(1);
        });

        match outcome {
            StationaryOutcome::Converged { matrix, iterations } => {
                println!(
                    "Class {} converged after {iterations} iterations; stationary distribution:",
                    class.name()
                );
                print!("{matrix}");
            }
            StationaryOutcome::NotConverged { iterations } => {
                println!(
                    "Class {} did not converge within {iterations} iterations; it is likely periodic.",
                    class.name()
                );
            }
        }
    }
}

fn write_to_file<F>(path: &str, render: F)
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create {path}: {e}");
        std::process::exit(1);
    });
    let mut out = BufWriter::new(file);
    render(&mut out).and_then(|_| out.flush()).unwrap_or_else(|e| {
        eprintln!("Failed to write {path}: {e}");
        std::process::exit(1);
    });
}
