mod simulation_tests;
mod stationary_tests;

use crate::matrix::Matrix;

/// The `n × n` cyclic permutation matrix: state `i` moves to `i + 1 (mod n)`
/// with probability one.
pub fn cycle_matrix(n: usize) -> Matrix {
    let mut result = Matrix::zeros(n, n);
    for i in 0..n {
        result.set(i, (i + 1) % n, 1.0);
    }
    result
}

/// A lazy variant of [`cycle_matrix`]: stay put with probability one half,
/// advance otherwise. Aperiodic and irreducible, so its powers converge.
pub fn lazy_cycle_matrix(n: usize) -> Matrix {
    let mut result = Matrix::zeros(n, n);
    for i in 0..n {
        result.set(i, i, 0.5);
        result.set(i, (i + 1) % n, 0.5);
    }
    result
}
