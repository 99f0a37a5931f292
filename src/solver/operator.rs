//! Banded linear operator for implicit time stepping
//!
//! Implicit finite-difference discretizations of 1D transport equations
//! produce tridiagonal systems: each grid point couples only to its two
//! neighbours. Storing the full nx×nx matrix and running a general LU
//! factorization would cost O(nx²) memory and O(nx³) time for a matrix
//! that is ~99.7% zeros at nx = 1000.
//!
//! # Mathematical Background
//!
//! A tridiagonal system
//!
//! ```text
//! | d₀ u₀          |   | x₀ |   | b₀ |
//! | l₀ d₁ u₁       |   | x₁ |   | b₁ |
//! |    l₁ d₂ u₂    | · | x₂ | = | b₂ |
//! |       ⋱  ⋱  ⋱  |   | ⋮  |   | ⋮  |
//! |         lₙ₋₂ dₙ₋₁|  | xₙ₋₁|  | bₙ₋₁|
//! ```
//!
//! is solved by the Thomas algorithm (specialized Gaussian elimination
//! without pivoting): one forward sweep eliminating the sub-diagonal,
//! one backward substitution. Cost is O(n) time and O(n) memory.
//!
//! No pivoting means the algorithm is only safe for matrices that are
//! diagonally dominant or otherwise guaranteed non-singular; the
//! backward-Euler operators built in `crate::models` satisfy this for
//! all valid parameter combinations (α > 0, k ≥ 0, dt > 0). A zero or
//! non-finite pivot is still checked each row and reported as `Err`
//! rather than letting garbage propagate into the state.

use nalgebra::{DMatrix, DVector};

/// Tridiagonal matrix stored as three diagonals
///
/// Band storage for the implicit system matrix: `lower` holds the
/// sub-diagonal (length n−1), `diag` the main diagonal (length n),
/// `upper` the super-diagonal (length n−1). Boundary rows (Dirichlet
/// identity row, one-sided Neumann row) fit this layout because both
/// touch at most one neighbour.
///
/// Built once per parameter combination and reused across every time
/// step of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator {
    lower: Vec<f64>,
    diag: Vec<f64>,
    upper: Vec<f64>,
}

impl TridiagonalOperator {
    /// Create an operator from its three diagonals
    ///
    /// # Arguments
    ///
    /// * `lower` - Sub-diagonal, length n−1 (row i couples to point i−1)
    /// * `diag` - Main diagonal, length n
    /// * `upper` - Super-diagonal, length n−1 (row i couples to point i+1)
    ///
    /// # Errors
    ///
    /// Returns `Err` if the lengths are inconsistent or the system is
    /// smaller than 2×2.
    pub fn new(lower: Vec<f64>, diag: Vec<f64>, upper: Vec<f64>) -> Result<Self, String> {
        let n = diag.len();
        if n < 2 {
            return Err(format!(
                "Tridiagonal system must be at least 2x2, got {}x{}",
                n, n
            ));
        }
        if lower.len() != n - 1 || upper.len() != n - 1 {
            return Err(format!(
                "Diagonal lengths inconsistent: diag={}, lower={} (expected {}), upper={} (expected {})",
                n,
                lower.len(),
                n - 1,
                upper.len(),
                n - 1
            ));
        }
        Ok(Self { lower, diag, upper })
    }

    /// System size n (the operator is n×n)
    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Solve A·x = b with the Thomas algorithm
    ///
    /// Forward sweep eliminates the sub-diagonal, backward substitution
    /// recovers x. O(n) time, allocates two scratch vectors of length n.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `b` has the wrong length or a pivot is zero or
    /// non-finite (singular or ill-conditioned system). Solve failure is
    /// fatal for the run that requested it; callers surface the error
    /// instead of retrying.
    pub fn solve(&self, b: &DVector<f64>) -> Result<DVector<f64>, String> {
        let n = self.size();
        if b.len() != n {
            return Err(format!(
                "Right-hand side length {} does not match system size {}",
                b.len(),
                n
            ));
        }

        let mut c_prime = vec![0.0; n];
        let mut d_prime = vec![0.0; n];

        // Forward sweep
        let mut pivot = self.diag[0];
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(format!("Singular system: pivot {} at row 0", pivot));
        }
        c_prime[0] = self.upper[0] / pivot;
        d_prime[0] = b[0] / pivot;

        for i in 1..n {
            pivot = self.diag[i] - self.lower[i - 1] * c_prime[i - 1];
            if pivot == 0.0 || !pivot.is_finite() {
                return Err(format!("Singular system: pivot {} at row {}", pivot, i));
            }
            if i < n - 1 {
                c_prime[i] = self.upper[i] / pivot;
            }
            d_prime[i] = (b[i] - self.lower[i - 1] * d_prime[i - 1]) / pivot;
        }

        // Backward substitution
        let mut x = DVector::zeros(n);
        x[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }

        Ok(x)
    }

    /// Expand to a dense matrix
    ///
    /// Intended for tests asserting exact row contents (boundary rows in
    /// particular) and for debugging small systems. Never used on the
    /// solve path.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let n = self.size();
        let mut dense = DMatrix::zeros(n, n);
        for i in 0..n {
            dense[(i, i)] = self.diag[i];
            if i > 0 {
                dense[(i, i - 1)] = self.lower[i - 1];
            }
            if i < n - 1 {
                dense[(i, i + 1)] = self.upper[i];
            }
        }
        dense
    }
}

// =================================================================================================
// Tests
// =================================================================================================
