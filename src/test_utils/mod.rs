use crate::graph::{ChainGraph, StateId};
use crate::scc::{Partition, TarjanScc};
use computation_process::Algorithm;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Build a chain over `state_count` states from `(source, target, weight)`
/// triples with 1-based state numbers.
pub fn from_edges(state_count: usize, edges: &[(usize, usize, f64)]) -> ChainGraph {
    let mut graph = ChainGraph::new(state_count);
    for (source, target, weight) in edges {
        graph.add_edge(StateId::new(*source), StateId::new(*target), *weight);
    }
    graph
}

/// Drive the communicating-class search to completion on the given graph.
pub fn run_tarjan(graph: &ChainGraph) -> Partition {
    TarjanScc::run(graph, graph).unwrap()
}

/// Normalize a partition into sorted state-number sets (each class sorted
/// ascending, classes ordered by their smallest state) so tests do not depend
/// on discovery order.
pub fn class_sets(partition: &Partition) -> Vec<Vec<usize>> {
    let mut result: Vec<Vec<usize>> = partition
        .classes()
        .iter()
        .map(|class| {
            let mut states: Vec<usize> = class.states().iter().map(|it| it.get()).collect();
            states.sort();
            states
        })
        .collect();
    result.sort();
    result
}
