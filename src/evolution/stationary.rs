use crate::evolution::{CONVERGENCE_TOLERANCE, MAX_POWER_ITERATIONS};
use crate::matrix::Matrix;
use cancel_this::is_cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::{debug, info};

/// Configuration of a stationary-distribution search: the class submatrix
/// that gets powered forward.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationaryConfig {
    /// The restricted transition matrix `P` of one persistent class.
    pub matrix: Matrix,
}

impl From<Matrix> for StationaryConfig {
    fn from(value: Matrix) -> Self {
        StationaryConfig { matrix: value }
    }
}

impl From<&Matrix> for StationaryConfig {
    fn from(value: &Matrix) -> Self {
        StationaryConfig::from(value.clone())
    }
}

/// Internal state of the search: the current power `P_t` and the number of
/// multiplications performed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationaryState {
    current: Matrix,
    iterations: usize,
}

impl From<Matrix> for StationaryState {
    fn from(value: Matrix) -> Self {
        StationaryState {
            current: value,
            iterations: 0,
        }
    }
}

impl From<&Matrix> for StationaryState {
    fn from(value: &Matrix) -> Self {
        StationaryState::from(value.clone())
    }
}

/// The result of a stationary-distribution search.
///
/// Not converging is an ordinary outcome, not an error: it is the expected
/// behavior for a periodic class, whose powers cycle instead of settling.
/// See the module documentation for the limits of that interpretation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StationaryOutcome {
    /// Successive powers settled below the tolerance. For an ergodic class,
    /// every row of `matrix` approximates the stationary distribution.
    Converged {
        matrix: Matrix,
        /// The number of multiplications performed, counting the one that
        /// met the tolerance.
        iterations: usize,
    },
    /// The iteration budget ran out before the powers settled; the class is
    /// likely periodic.
    NotConverged { iterations: usize },
}

impl StationaryOutcome {
    /// Whether the search settled within its budget.
    pub fn is_converged(&self) -> bool {
        matches!(self, StationaryOutcome::Converged { .. })
    }
}

/// Step implementation of the search: one forward multiplication
/// `P_{t+1} = P_t · P` and one L1 comparison per invocation.
pub struct StationaryStep;

impl ComputationStep<StationaryConfig, StationaryState, StationaryOutcome> for StationaryStep {
    fn step(
        context: &StationaryConfig,
        state: &mut StationaryState,
    ) -> Completable<StationaryOutcome> {
        is_cancelled!()?;

        if state.iterations >= MAX_POWER_ITERATIONS {
            info!(
                "No convergence within {MAX_POWER_ITERATIONS} iterations; \
                 the class is likely periodic."
            );
            return Ok(StationaryOutcome::NotConverged {
                iterations: state.iterations,
            });
        }

        let next = state.current.multiply(&context.matrix);
        let diff = state.current.l1_diff(&next);
        state.current = next;
        state.iterations += 1;

        if diff < CONVERGENCE_TOLERANCE {
            info!(
                "Converged after {} iterations (diff={diff:.2e}).",
                state.iterations
            );
            Ok(StationaryOutcome::Converged {
                matrix: state.current.clone(),
                iterations: state.iterations,
            })
        } else {
            debug!(
                "[iteration:{}] Powers still apart (diff={diff:.2e}).",
                state.iterations
            );
            Err(Suspended)
        }
    }
}
