//! Numerical solvers
//!
//! This module provides traits and implementations for numerical solvers.
//! A numerical solver applies a numerical method to solve the equations
//! provided by a physical model within a specific scenario.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The solver architecture separates concerns into three layers:
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (equations)
//!    - Domain boundaries (boundary conditions)
//!    - Problem definition
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Solver type (fixed-step or stability-bounded time evolution)
//!    - Numerical parameters (time steps, safety factor)
//!    - Method selection
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the numerical scheme
//!    - Returns the solution
//!    - Independent of physics
//!
//! This separation allows:
//! - Same solver for different physics
//! - Different solvers for same scenario
//! - Easy benchmarking and method comparison
//! - Flexible configuration without code changes
//!
//! # Module Organization
//!
//! - **`traits`**: Core trait definitions and types
//!   - `Solver` trait: Stable interface for all solvers
//!   - `SolverType`: Enumeration of solver types
//!   - `SolverConfiguration`: Configuration structure
//!   - `SimulationResult`: Result structure
//!
//! - **`boundary`**: Boundary conditions and domain definition
//!   - `BoundaryCondition`: Typed Dirichlet/Neumann conditions
//!   - `DomainBoundaries`: Conditions at both ends + initial state
//!
//! - **`scenario`**: Problem definition
//!   - `Scenario`: Combines model + boundaries
//!   - Validation and introspection methods
//!
//! - **`operator`**: Banded linear algebra for implicit stepping
//!   - `TridiagonalOperator`: Three-diagonal storage + Thomas solve
//!
//! - **Solver implementations** (`methods`):
//!   - `BackwardEulerSolver`: Implicit backward Euler
//!   - `UpwindEulerSolver`: Explicit forward Euler with upwind advection
//!
//! # Quick Start Example
//!
//! ```rust
//! use transport_rs::models::DiffusionReaction;
//! use transport_rs::physics::PhysicalModel;
//! use transport_rs::solver::{
//!     BackwardEulerSolver, DomainBoundaries, Scenario, Solver, SolverConfiguration,
//! };
//!
//! fn main() -> Result<(), String> {
//!     // 1. Create scenario (WHAT to solve)
//!     let model = Box::new(DiffusionReaction::new(0.01, 0.1, 1.0, 50, 1.0)?);
//!     let boundaries = DomainBoundaries::inflow_outflow(1.0, model.setup_initial_state());
//!     let scenario = Scenario::new(model, boundaries);
//!
//!     // 2. Create configuration (HOW to solve)
//!     let config = SolverConfiguration::time_evolution(
//!         1.0,      // total time (seconds)
//!         1000,     // time steps
//!     );
//!
//!     // 3. Create solver and solve
//!     let solver = BackwardEulerSolver::new();
//!     let result = solver.solve(&scenario, &config)?;
//!
//!     // 4. Access results
//!     println!("Simulation completed, {} stored states", result.len());
//!     Ok(())
//! }
//! ```
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │  Physical Model │  (equations)
//! └────────┬────────┘
//!          │
//!          ├──────────────┐
//!          │              │
//! ┌────────▼────────┐ ┌──▼──────────────┐
//! │ Domain          │ │ Scenario        │ ← WHAT to solve
//! │ Boundaries      │ │ (model + bounds)│
//! └─────────────────┘ └────────┬────────┘
//!                              │
//!                     ┌────────▼─────────────┐
//!                     │ Solver Configuration │ ← HOW to solve
//!                     │ (type + parameters)  │
//!                     └────────┬─────────────┘
//!                              │
//!                     ┌────────▼────────┐
//!                     │ Numerical Solver│ ← The method
//!                     │ (implicit/expl.)│
//!                     └────────┬────────┘
//!                              │
//!                     ┌────────▼────────────┐
//!                     │ Simulation Result   │ ← The solution
//!                     │ (trajectory + meta) │
//!                     └─────────────────────┘
//! ```
//!
//! # Solver Types
//!
//! ## Implicit (Backward Euler)
//!
//! One tridiagonal solve per step; unconditionally stable for the
//! diffusion-reaction physics in this crate. Use whenever the grid is
//! fine or the desired dt exceeds the explicit bound.
//!
//! ## Explicit (Upwind Forward Euler)
//!
//! One physics evaluation per step; stable only while
//! dt ≤ 1/(2α/dx² + u/dx). In `StabilityBounded` mode the solver derives
//! dt from the model's bound and a safety factor, so the configuration is
//! either valid or rejected before the first step.
//!
//! # Error Handling
//!
//! All solver methods return `Result<T, String>`:
//!
//! ```rust,ignore
//! match solver.solve(&scenario, &config) {
//!     Ok(result) => {
//!         println!("Success! {} steps computed", result.len());
//!     }
//!     Err(e) => {
//!         eprintln!("Solver failed: {}", e);
//!         // Handle error...
//!     }
//! }
//! ```
//!
//! Common errors:
//! - Invalid configuration (negative time, zero steps, safety factor
//!   outside (0, 1))
//! - Invalid scenario (grid mismatch, missing capability trait)
//! - Singular linear system (zero pivot in the tridiagonal solve)
//! - Numerical instability (NaN/Inf detected mid-run)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod boundary;
mod methods;
pub mod operator;
mod scenario;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand work off to Rayon is a numerical-execution concern,
// not a physics concern.  It therefore lives here (solver) rather than in
// physics/data.rs.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on every
// `apply()` call.  Relaxed ordering is sufficient: the value is a
// performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of elements above which [`PhysicalData::apply()`] switches
/// to parallel iteration.
///
/// The crossover is set at 1 000 elements.  Below that point the overhead of
/// Rayon's thread-pool dispatch outweighs the per-element work for the
/// arithmetic closures that 1D transport simulations typically use.
///
/// [`PhysicalData::apply()`]: crate::physics::PhysicalData::apply
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// `PhysicalData::apply()` uses sequential iteration when the data contains
/// fewer elements than this value, and switches to Rayon when it contains
/// more — but only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use transport_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.  A zero-element threshold would force
/// parallel dispatch on every single-element `apply()`, which is never
/// the intended behaviour.
///
/// # Example
///
/// ```rust
/// use transport_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds.  Prevents one test from leaking a modified
/// threshold value into the next.
///
/// ```rust,ignore
/// let _guard = crate::solver::ThresholdGuard::save(50);
/// // threshold is now 50 …
/// // … and is automatically restored when _guard is dropped.
/// ```
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value (including
        // the original default) never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{SimulationResult, Solver, SolverConfiguration, SolverType};

pub use boundary::{BoundaryCondition, DomainBoundaries};
pub use operator::TridiagonalOperator;
pub use scenario::Scenario;

pub use methods::{BackwardEulerSolver, UpwindEulerSolver};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::physics::PhysicalState;

/// Validate physical state for numerical issues
///
/// Checks that the state does not contain NaN or Inf values, which would
/// indicate numerical instability or errors in the physics computation.
///
/// # Arguments
///
/// * `state` - Physical state to validate
/// * `step` - Current time step (for error reporting)
///
/// # Returns
///
/// `Ok(())` if state is valid, `Err(msg)` with diagnostic information otherwise
///
/// # Example
///
/// ```rust,ignore
/// validate_state(&state, 42)?;  // Validates state at step 42
/// ```
pub(crate) fn validate_state(state: &PhysicalState, step: usize) -> Result<(), String> {
    // Check each quantity in the state
    for (quantity, data) in &state.quantities {
        // Check for NaN values
        // NaN can arise from 0/0, Inf - Inf, or other undefined operations
        let has_nan = match data {
            crate::physics::PhysicalData::Scalar(x) => x.is_nan(),
            crate::physics::PhysicalData::Vector(v) => v.iter().any(|x| x.is_nan()),
            crate::physics::PhysicalData::Matrix(m) => m.iter().any(|x| x.is_nan()),
        };

        if has_nan {
            return Err(format!(
                "NaN detected in {} at step {}. This indicates numerical instability. \
                 Try reducing time step (increase time_steps parameter).",
                quantity, step
            ));
        }

        // Check for Inf values
        // Inf can indicate overflow or division by zero
        let has_inf = match data {
            crate::physics::PhysicalData::Scalar(x) => x.is_infinite(),
            crate::physics::PhysicalData::Vector(v) => v.iter().any(|x| x.is_infinite()),
            crate::physics::PhysicalData::Matrix(m) => m.iter().any(|x| x.is_infinite()),
        };

        if has_inf {
            return Err(format!(
                "Infinity detected in {} at step {}. This indicates numerical overflow. \
                 Try reducing time step or check physics model for division by zero.",
                quantity, step
            ));
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
