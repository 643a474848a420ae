use crate::log_matrix;
use crate::matrix::Matrix;
use cancel_this::is_cancelled;
use computation_process::{Completable, GeneratorStep};
use log::trace;

/// Configuration of a step-wise distribution simulation.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// The full transition matrix the distribution is multiplied with.
    pub matrix: Matrix,
    /// The number of steps to produce before the sequence ends.
    pub steps: usize,
}

impl SimulationConfig {
    /// Create a new instance of [`SimulationConfig`] for the given matrix
    /// and step budget.
    pub fn new(matrix: Matrix, steps: usize) -> SimulationConfig {
        SimulationConfig { matrix, steps }
    }
}

/// Internal state of a simulation: the current distribution row and the
/// number of elements produced so far.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationState {
    current: Matrix,
    produced: usize,
}

impl From<Matrix> for SimulationState {
    fn from(value: Matrix) -> Self {
        SimulationState {
            current: value,
            produced: 0,
        }
    }
}

impl From<&Matrix> for SimulationState {
    fn from(value: &Matrix) -> Self {
        SimulationState::from(value.clone())
    }
}

/// Step implementation of the simulation: one right-multiplication per
/// produced element, so element `n` is exactly the `n`-fold iterate
/// `π·Mⁿ` of the initial distribution.
pub struct SimulationStep;

impl GeneratorStep<SimulationConfig, SimulationState, Matrix> for SimulationStep {
    /// # Panics
    ///
    /// Panics when the distribution width does not match the matrix; this is
    /// a composition error, not a runtime condition.
    fn step(context: &SimulationConfig, state: &mut SimulationState) -> Completable<Option<Matrix>> {
        is_cancelled!()?;

        if state.produced >= context.steps {
            return Ok(None);
        }

        let next = state.current.multiply(&context.matrix);
        state.produced += 1;
        state.current = next.clone();

        trace!(
            "[step:{}] Distribution advanced ({}).",
            state.produced,
            log_matrix(&state.current)
        );

        Ok(Some(next))
    }
}
