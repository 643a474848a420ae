//! Dense matrices over `f64`, shared by the transition-matrix builder and the
//! evolution engine.
//!
//! The same type covers three shapes: the full `N×N` transition matrix of a
//! chain, the `k×k` principal submatrix restricted to one communicating class,
//! and `1×N` distribution rows. The type itself enforces no stochastic
//! invariant; that is a property of well-formed inputs and their submatrices.
//!
//! Matrices are ephemeral values: derived on demand, consumed by whichever
//! computation needs them, and dropped. Nothing here is shared for mutation.

use crate::graph::{ChainGraph, StateId};
use std::fmt::{Display, Formatter};

/// A dense row-major matrix of `f64` values.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create the `n × n` identity matrix.
    pub fn identity(n: usize) -> Matrix {
        let mut result = Matrix::zeros(n, n);
        for i in 0..n {
            result.set(i, i, 1.0);
        }
        result
    }

    /// Materialize the full `N×N` transition matrix of a chain: entry `[i][j]`
    /// is the weight of the transition from state `i+1` to state `j+1`, or zero
    /// when there is none.
    ///
    /// When the adjacency list holds several entries for the same state pair,
    /// the one seen last overwrites the others.
    pub fn from_graph(graph: &ChainGraph) -> Matrix {
        let n = graph.state_count();
        let mut result = Matrix::zeros(n, n);
        for state in graph.states() {
            for edge in graph.out_edges(state) {
                result.set(state.to_index(), edge.target.to_index(), edge.weight);
            }
        }
        result
    }

    /// Extract the principal submatrix given by an ordered list of states:
    /// entry `[a][b]` of the result is `self[states[a]][states[b]]`.
    ///
    /// The state order is preserved exactly, so the result's rows/columns can
    /// be mapped back to chain states by the same list.
    ///
    /// # Panics
    ///
    /// Panics if any state id exceeds the matrix bounds; this is a programming
    /// error, not a recoverable condition.
    pub fn submatrix(&self, states: &[StateId]) -> Matrix {
        let k = states.len();
        let mut result = Matrix::zeros(k, k);
        for (a, row_state) in states.iter().enumerate() {
            for (b, col_state) in states.iter().enumerate() {
                result.set(a, b, self.get(row_state.to_index(), col_state.to_index()));
            }
        }
        result
    }

    /// A `1×n` distribution row with all probability mass on one state.
    pub fn point_distribution(n: usize, state: StateId) -> Matrix {
        let mut result = Matrix::zeros(1, n);
        result.set(0, state.to_index(), 1.0);
        result
    }

    /// A `1×n` distribution row with equal probability mass on each of the
    /// given states.
    pub fn uniform_distribution(n: usize, states: &[StateId]) -> Matrix {
        let mut result = Matrix::zeros(1, n);
        let mass = 1.0 / states.len() as f64;
        for state in states {
            result.set(0, state.to_index(), mass);
        }
        result
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read the entry at `(row, col)` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Write the entry at `(row, col)` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// One row of the matrix as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Standard matrix product `self · rhs`.
    ///
    /// # Panics
    ///
    /// Panics when `self.cols() != rhs.rows()`. A mismatch can only come from
    /// incorrect component composition, so it is treated as an assertion
    /// failure rather than a recoverable error.
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            self.cols, rhs.rows,
            "Dimension mismatch: {}x{} * {}x{}.",
            self.rows, self.cols, rhs.rows, rhs.cols
        );
        let mut result = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * rhs.get(k, j);
                }
                result.set(i, j, sum);
            }
        }
        result
    }

    /// The L1-style difference `Σ |a - b|` over all matching entries.
    ///
    /// # Panics
    ///
    /// Panics when the dimensions differ.
    pub fn l1_diff(&self, other: &Matrix) -> f64 {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "Dimension mismatch in matrix difference."
        );
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs())
            .sum()
    }
}

impl Display for Matrix {
    /// Fixed four-decimal rendering, one matrix row per line.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:.4} ", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
