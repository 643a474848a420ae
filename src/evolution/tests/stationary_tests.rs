use crate::evolution::tests::{cycle_matrix, lazy_cycle_matrix};
use crate::evolution::{
    MAX_POWER_ITERATIONS, StationaryOutcome, StationarySearch,
};
use crate::matrix::Matrix;
use crate::test_utils::init_logger;
use computation_process::{Algorithm, Computable, Stateful};

#[test]
fn absorbing_class_converges_immediately() {
    init_logger();
    let submatrix = Matrix::identity(1);
    let outcome = StationarySearch::run(&submatrix, &submatrix).unwrap();

    match outcome {
        StationaryOutcome::Converged { matrix, iterations } => {
            assert_eq!(iterations, 1);
            assert_eq!(matrix, Matrix::identity(1));
        }
        other => panic!("Expected convergence, got {other:?}"),
    }
}

#[test]
fn identical_rows_converge_in_one_multiplication() {
    init_logger();
    // Both rows already equal the stationary distribution, so P^2 = P.
    let mut submatrix = Matrix::zeros(2, 2);
    for row in 0..2 {
        submatrix.set(row, 0, 0.5);
        submatrix.set(row, 1, 0.5);
    }

    let outcome = StationarySearch::run(&submatrix, &submatrix).unwrap();
    match outcome {
        StationaryOutcome::Converged { matrix, iterations } => {
            assert_eq!(iterations, 1);
            assert!(matrix.l1_diff(&submatrix) < 1e-12);
        }
        other => panic!("Expected convergence, got {other:?}"),
    }
}

#[test]
fn lazy_cycle_relaxes_to_uniform_rows() {
    init_logger();
    let submatrix = lazy_cycle_matrix(3);
    let outcome = StationarySearch::run(&submatrix, &submatrix).unwrap();

    match outcome {
        StationaryOutcome::Converged { matrix, .. } => {
            for row in 0..3 {
                for col in 0..3 {
                    assert!(
                        (matrix.get(row, col) - 1.0 / 3.0).abs() < 1e-3,
                        "Entry ({row}, {col}) is {} instead of 1/3.",
                        matrix.get(row, col)
                    );
                }
            }
        }
        other => panic!("Expected convergence, got {other:?}"),
    }
}

/// Regression fixture for the periodicity heuristic: the powers of a pure
/// 3-cycle permutation matrix rotate forever, so every successive L1
/// difference stays at 6 and the search must exhaust its whole budget.
#[test]
fn pure_cycle_exhausts_the_budget() {
    init_logger();
    let submatrix = cycle_matrix(3);
    let outcome = StationarySearch::run(&submatrix, &submatrix).unwrap();

    assert_eq!(
        outcome,
        StationaryOutcome::NotConverged {
            iterations: MAX_POWER_ITERATIONS
        }
    );
    assert!(!outcome.is_converged());
}

#[test]
fn the_search_can_be_polled_step_by_step() {
    init_logger();
    let submatrix = lazy_cycle_matrix(4);
    let mut search = StationarySearch::configure(&submatrix, &submatrix);

    let mut polls = 0usize;
    let outcome = loop {
        match search.try_compute() {
            Ok(outcome) => break outcome.clone(),
            Err(_) => {
                polls += 1;
                assert!(polls <= MAX_POWER_ITERATIONS + 1, "The search never finished.");
            }
        }
    };

    assert!(outcome.is_converged());
    assert!(polls > 0, "A non-trivial search must suspend at least once.");
}
