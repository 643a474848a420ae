//! Iterative matrix-powering engines for chain evolution.
//!
//! Both engines share one primitive, matrix multiplication, and one
//! comparison, the L1 difference of successive iterates
//! (see [`crate::matrix::Matrix`]).
//!
//! # Engines
//!
//! - [`DistributionSimulation`]: step-wise evolution of a `1×N` distribution
//!   row under the full transition matrix. The generator lazily yields
//!   `π·M, π·M², …, π·Mᵏ`, one element per produced item; the sequence is
//!   finite and non-restartable.
//! - [`StationarySearch`]: limiting behavior of a persistent class's
//!   restricted matrix. Starting from `P`, it repeatedly multiplies forward
//!   (`P_{t+1} = P_t · P`) and reports [`StationaryOutcome::Converged`] once
//!   the L1 difference of successive powers drops below
//!   [`CONVERGENCE_TOLERANCE`]. For an ergodic class, every row of the
//!   converged matrix approximates the same stationary distribution.
//!
//! # Periodicity heuristic
//!
//! When the search exhausts [`MAX_POWER_ITERATIONS`] multiplications without
//! meeting the tolerance, it reports [`StationaryOutcome::NotConverged`].
//! This outcome is conventionally read as "the class is likely periodic",
//! because powers of a periodic restriction cycle forever instead of
//! settling. It is a detection heuristic, not a proof: a rigorous test would
//! take the gcd of all cycle lengths through the class, and a slow-converging
//! aperiodic class can exhaust the budget too. Callers should present the
//! outcome with that caveat.
//!
//! # Example
//!
//! ```
//! use markov_classes::evolution::{StationaryOutcome, StationarySearch};
//! use markov_classes::matrix::Matrix;
//! use computation_process::Algorithm;
//!
//! // An absorbing class restricts to the 1x1 matrix [[1]].
//! let submatrix = Matrix::identity(1);
//! let outcome = StationarySearch::run(&submatrix, &submatrix).unwrap();
//! assert!(matches!(outcome, StationaryOutcome::Converged { iterations: 1, .. }));
//! ```

mod simulation;
mod stationary;

#[cfg(test)]
mod tests;

pub use simulation::{SimulationConfig, SimulationState, SimulationStep};
pub use stationary::{StationaryConfig, StationaryOutcome, StationaryState, StationaryStep};

use crate::matrix::Matrix;
use computation_process::{Computation, Generator};

/// Successive matrix powers closer than this L1 distance count as converged.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-5;

/// The fixed multiplication budget of the stationary search.
pub const MAX_POWER_ITERATIONS: usize = 1000;

/// Lazy step-wise simulation of a distribution row under a transition matrix.
///
/// Configure with a [`SimulationConfig`] (matrix plus step budget) and the
/// initial `1×N` distribution; the generator implements `Iterator` and yields
/// one successive distribution per step.
pub type DistributionSimulation = Generator<SimulationConfig, SimulationState, Matrix, SimulationStep>;

/// Convergence-based stationary-distribution search over a class submatrix.
///
/// Configure with the restricted matrix on both sides (context and initial
/// power), then poll with `try_compute` or drive with `run`/`compute`.
pub type StationarySearch = Computation<StationaryConfig, StationaryState, StationaryOutcome, StationaryStep>;
