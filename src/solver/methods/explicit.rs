//! Forward Euler explicit solver with upwind advection
//!
//! # Mathematical Background
//!
//! The Forward (explicit) Euler method evaluates the right-hand side at
//! the CURRENT time level:
//!
//! ```text
//! y_{n+1} = y_n + dt * f(y_n)
//! ```
//!
//! Cheap per step (no linear solve) but only conditionally stable: for
//! advection-diffusion physics the time step must respect
//!
//! ```text
//! dt_max = 1 / (2α/dx² + u/dx)
//! ```
//!
//! (von-Neumann-style bound combining the diffusion and advection
//! limits). Exceeding it makes the highest spatial modes grow without
//! bound.
//!
//! # Time Step Selection
//!
//! In the usual configuration ([`SolverType::StabilityBounded`]) the
//! solver asks the model for dt_max, scales it by the safety factor,
//! takes nt = ceil(T/dt) and then recomputes dt = T/nt so the trajectory
//! lands exactly on the requested final time without overshoot. The
//! safety factor is validated to lie strictly in (0, 1) before any
//! stepping happens — an unstable configuration is a configuration
//! error, not something discovered mid-run.
//!
//! A fixed-step [`SolverType::TimeEvolution`] configuration is also
//! accepted for grid studies and instability demonstrations; in that
//! mode the caller owns the stability question.
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate in time and in the advection term
//! - **Stability**: Conditional, dt ≤ dt_max
//! - **Complexity**: One physics evaluation (O(nx)) per step
//! - **Memory**: O(nx · nt) with the full trajectory recorded
//!
//! # Example
//!
//! ```rust,ignore
//! use transport_rs::solver::{UpwindEulerSolver, Solver, SolverConfiguration};
//!
//! let solver = UpwindEulerSolver::new();
//! let config = SolverConfiguration::stability_bounded(0.5, 0.9);
//!
//! // scenario's model must implement StabilityBoundedModel
//! let result = solver.solve(&scenario, &config)?;
//! ```

use crate::physics::PhysicalState;
use crate::solver;
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration, SolverType};

// =================================================================================================
// Upwind Euler Solver
// =================================================================================================

/// Explicit forward Euler solver for stability-bounded transport models
///
/// Advances models implementing
/// [`StabilityBoundedModel`](crate::physics::StabilityBoundedModel) with a
/// synchronous update: every derivative is evaluated on the pre-step
/// state, then the whole profile is replaced at once. In-place updates
/// would make point i's new value depend on whether point i−1 was
/// already overwritten.
///
/// # Algorithm
///
/// 1. Determine dt (from the stability bound or from the caller)
/// 2. Start with the initial state, boundary values enforced
/// 3. For each time step n = 0, 1, ..., nt−1:
///    - Compute physics: k = f(y_n) (boundaries already hold on y_n)
///    - Update synchronously: y_{n+1} = y_n + dt * k
///    - Re-enforce boundary values on y_{n+1}
///    - Validate (NaN/Inf) and store
/// 4. Return complete trajectory
///
/// Boundary values are enforced after every update, so the recorded
/// states satisfy the Dirichlet and Neumann conditions exactly at every
/// step, and each update reads a profile on which they already hold.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpwindEulerSolver;

impl UpwindEulerSolver {
    /// Create a new upwind explicit Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use transport_rs::solver::{UpwindEulerSolver, Solver};
    ///
    /// let solver = UpwindEulerSolver::new();
    /// assert_eq!(solver.name(), "Upwind Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for UpwindEulerSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let bounded = scenario.model.as_stability_bounded().ok_or_else(|| {
            format!(
                "Model '{}' does not support explicit stepping (StabilityBoundedModel)",
                scenario.model.name()
            )
        })?;

        // ====== Step 2: Time step selection ======

        let (total_time, time_steps, dt) = match &config.solver_type {
            SolverType::StabilityBounded {
                total_time,
                safety_factor,
            } => {
                let dt_max = bounded.stable_time_step();
                if !(dt_max.is_finite() && dt_max > 0.0) {
                    return Err(format!(
                        "Model '{}' reports invalid stability limit {}",
                        scenario.model.name(),
                        dt_max
                    ));
                }

                // ceil so the last step never overshoots, then recompute
                // dt so that nt * dt lands exactly on total_time.
                let dt = safety_factor * dt_max;
                let time_steps = (total_time / dt).ceil() as usize;
                let dt = total_time / (time_steps as f64);
                (*total_time, time_steps, dt)
            }
            SolverType::TimeEvolution { time_steps, dt } => {
                // Caller-chosen step: the stability question is the
                // caller's to answer in this mode.
                (*time_steps as f64 * *dt, *time_steps, *dt)
            }
        };

        let quantity = scenario.model.primary_quantity();

        // ====== Step 3: Setup ======

        let mut state = scenario.conditions.initial.clone();
        enforce_boundaries(bounded, &mut state, quantity)?;

        let mut time_points = Vec::with_capacity(time_steps + 1);
        let mut state_trajectory = Vec::with_capacity(time_steps + 1);

        time_points.push(0.0);
        state_trajectory.push(state.clone());

        // ====== Step 4: Time Integration ======

        for step in 0..time_steps {
            // Synchronous update: the physics is evaluated entirely on the
            // pre-step state before any point is replaced.
            let physics: PhysicalState = scenario.model.compute_physics(&state);
            state = state + physics * dt;

            enforce_boundaries(bounded, &mut state, quantity)?;

            solver::validate_state(&state, step + 1)?;

            state_trajectory.push(state.clone());

            // Ratio form instead of (step+1)*dt: the final point is
            // total_time * (nt/nt), exactly total_time with no rounding.
            time_points.push(total_time * ((step + 1) as f64 / time_steps as f64));
        }

        // ====== Step 5: Build Result ======

        let final_state: PhysicalState = state;

        let mut result = SimulationResult::new(time_points, state_trajectory, final_state);

        result.add_metadata("solver", "Upwind Euler");
        result.add_metadata("mode", config.solver_type.name());
        result.add_metadata("time steps", &time_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("total time", &total_time.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Upwind Euler"
    }
}

/// Enforce the model's boundary conditions on the tracked quantity
fn enforce_boundaries(
    bounded: &dyn crate::physics::StabilityBoundedModel,
    state: &mut PhysicalState,
    quantity: crate::physics::PhysicalQuantity,
) -> Result<(), String> {
    match state.get_mut(quantity) {
        Some(crate::physics::PhysicalData::Vector(profile)) => {
            bounded.apply_boundaries(profile);
            Ok(())
        }
        _ => Err(format!("State carries no {} vector", quantity)),
    }
}

// =================================================================================================
// Tests
// =================================================================================================
