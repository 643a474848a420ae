//! Round-trip tests for the `serde` feature: plain analysis data must
//! survive JSON serialization unchanged.

use crate::condensation::hasse_links;
use crate::matrix::Matrix;
use crate::test_utils::{from_edges, init_logger, run_tarjan};

#[test]
fn graph_round_trips_through_json() {
    init_logger();
    let graph = from_edges(3, &[(1, 2, 0.5), (1, 3, 0.5), (2, 2, 1.0), (3, 1, 1.0)]);

    let json = serde_json::to_string(&graph).expect("Failed to serialize graph");
    let restored = serde_json::from_str(&json).expect("Failed to deserialize graph");
    assert_eq!(graph, restored);
}

#[test]
fn partition_round_trips_through_json() {
    init_logger();
    let graph = from_edges(3, &[(1, 2, 1.0), (2, 1, 0.5), (2, 3, 0.5), (3, 3, 1.0)]);
    let partition = run_tarjan(&graph);

    let json = serde_json::to_string(&partition).expect("Failed to serialize partition");
    let restored = serde_json::from_str(&json).expect("Failed to deserialize partition");
    assert_eq!(partition, restored);
}

#[test]
fn links_and_matrices_round_trip_through_json() {
    init_logger();
    let graph = from_edges(3, &[(1, 2, 1.0), (2, 2, 0.5), (2, 3, 0.5), (3, 3, 1.0)]);
    let partition = run_tarjan(&graph);

    let links = hasse_links(&graph, &partition);
    let json = serde_json::to_string(&links).expect("Failed to serialize links");
    let restored: Vec<crate::condensation::Link> =
        serde_json::from_str(&json).expect("Failed to deserialize links");
    assert_eq!(links, restored);

    let matrix = Matrix::from_graph(&graph);
    let json = serde_json::to_string(&matrix).expect("Failed to serialize matrix");
    let restored: Matrix = serde_json::from_str(&json).expect("Failed to deserialize matrix");
    assert_eq!(matrix, restored);
}
