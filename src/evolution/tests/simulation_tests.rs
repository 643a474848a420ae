use crate::evolution::tests::cycle_matrix;
use crate::evolution::{DistributionSimulation, SimulationConfig};
use crate::graph::StateId;
use crate::matrix::Matrix;
use crate::test_utils::{from_edges, init_logger};
use computation_process::Stateful;

fn collect(simulation: DistributionSimulation) -> Vec<Matrix> {
    simulation.map(|item| item.unwrap()).collect()
}

#[test]
fn each_element_is_the_exact_matrix_power_iterate() {
    init_logger();
    let graph = from_edges(
        3,
        &[
            (1, 2, 0.5),
            (1, 3, 0.5),
            (2, 1, 0.25),
            (2, 3, 0.75),
            (3, 3, 1.0),
        ],
    );
    let matrix = Matrix::from_graph(&graph);
    let initial = Matrix::point_distribution(3, StateId::new(1));

    let simulation =
        DistributionSimulation::configure(SimulationConfig::new(matrix.clone(), 6), &initial);
    let produced = collect(simulation);
    assert_eq!(produced.len(), 6);

    // Recompute each element directly as the i-fold product.
    let mut expected = initial;
    for element in &produced {
        expected = expected.multiply(&matrix);
        assert!(expected.l1_diff(element) < 1e-12);
    }
}

#[test]
fn the_sequence_ends_after_the_requested_number_of_steps() {
    init_logger();
    let matrix = cycle_matrix(2);
    let initial = Matrix::point_distribution(2, StateId::new(1));

    let mut simulation =
        DistributionSimulation::configure(SimulationConfig::new(matrix, 4), &initial);
    assert_eq!(simulation.by_ref().count(), 4);
    // The generator is exhausted, not restartable.
    assert!(simulation.next().is_none());
}

#[test]
fn period_three_cycle_returns_to_the_start() {
    init_logger();
    let matrix = cycle_matrix(3);
    let initial = Matrix::point_distribution(3, StateId::new(1));

    let simulation =
        DistributionSimulation::configure(SimulationConfig::new(matrix, 3), &initial);
    let produced = collect(simulation);

    assert_eq!(produced[0].row(0), &[0.0, 1.0, 0.0]);
    assert_eq!(produced[1].row(0), &[0.0, 0.0, 1.0]);
    // After exactly three steps the distribution is back at state 1.
    assert_eq!(produced[2].row(0), &[1.0, 0.0, 0.0]);
}

#[test]
fn probability_mass_is_conserved() {
    init_logger();
    let graph = from_edges(
        3,
        &[
            (1, 2, 0.9),
            (1, 1, 0.1),
            (2, 3, 0.5),
            (2, 1, 0.5),
            (3, 3, 1.0),
        ],
    );
    let matrix = Matrix::from_graph(&graph);
    let initial =
        Matrix::uniform_distribution(3, &[StateId::new(1), StateId::new(2), StateId::new(3)]);

    let simulation =
        DistributionSimulation::configure(SimulationConfig::new(matrix, 20), &initial);
    for element in collect(simulation) {
        let mass: f64 = element.row(0).iter().sum();
        assert!((mass - 1.0).abs() < 1e-9, "Mass drifted to {mass}.");
    }
}
