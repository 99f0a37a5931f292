//! Backward Euler implicit solver
//!
//! # Mathematical Background
//!
//! The Backward (implicit) Euler method evaluates the right-hand side at
//! the NEW time level:
//!
//! ```text
//! (y_{n+1} - y_n) / dt = f(y_{n+1})
//! ```
//!
//! For linear physics f(y) = L·y + g this rearranges into one linear
//! system per step:
//!
//! ```text
//! (I/dt - L) · y_{n+1} = y_n / dt + g
//!  \_______/             \__________/
//!   operator A              rhs b
//! ```
//!
//! A depends only on the model parameters and dt, never on the state, so
//! it is assembled ONCE per run and reused across every time step. The
//! right-hand side is reassembled each step from the current state.
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (error ~ O(dt))
//! - **Stability**: Unconditionally stable for diffusion-reaction physics —
//!   any dt > 0 produces a bounded solution
//! - **Complexity**: One tridiagonal solve (O(nx)) per step
//! - **Memory**: O(nx) - operator bands plus current state
//!
//! # When to Use
//!
//! - Stiff problems (fine grids make diffusion arbitrarily stiff)
//! - Large time steps where explicit methods would diverge
//! - Steady-state seeking runs (few large steps instead of many tiny ones)
//!
//! # When NOT to Use
//!
//! - Models without a linear implicit form (no `LinearImplicitModel`)
//! - Accuracy-critical transients where the O(dt) damping matters more
//!   than stability
//!
//! # Example
//!
//! ```rust,ignore
//! use transport_rs::solver::{BackwardEulerSolver, Solver, SolverConfiguration};
//!
//! let solver = BackwardEulerSolver::new();
//! let config = SolverConfiguration::time_evolution(1.0, 1000);
//!
//! // scenario's model must implement LinearImplicitModel
//! let result = solver.solve(&scenario, &config)?;
//! ```

use crate::physics::{PhysicalData, PhysicalState};
use crate::solver;
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration, SolverType};

// =================================================================================================
// Backward Euler Solver
// =================================================================================================

/// Backward Euler time-stepping solver
///
/// Advances models implementing
/// [`LinearImplicitModel`](crate::physics::LinearImplicitModel) by solving
/// one tridiagonal system per step with an operator assembled once per run.
///
/// # Algorithm
///
/// 1. Assemble the step operator A = A(model parameters, dt) — once
/// 2. Start with the initial state y_0 from the scenario boundaries
/// 3. For each time step n = 0, 1, ..., N-1:
///    - Assemble rhs: b = b(y_n, dt)
///    - Solve A · y_{n+1} = b (Thomas algorithm)
///    - Validate y_{n+1} (NaN/Inf check) and store it
/// 4. Return complete trajectory
///
/// # Error Handling
///
/// A singular or ill-conditioned operator surfaces as `Err` from the
/// tridiagonal solve and aborts the run; the error names the offending
/// pivot row. There is no retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackwardEulerSolver;

impl BackwardEulerSolver {
    /// Create a new Backward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use transport_rs::solver::{BackwardEulerSolver, Solver};
    ///
    /// let solver = BackwardEulerSolver::new();
    /// assert_eq!(solver.name(), "Backward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for BackwardEulerSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        // Implicit stepping has no stability limit to honor, so only the
        // fixed-step configuration is meaningful here.
        let (time_steps, dt) = match &config.solver_type {
            SolverType::TimeEvolution { time_steps, dt } => (*time_steps, *dt),
            other => {
                return Err(format!(
                    "BackwardEulerSolver only supports TimeEvolution configuration, got {}",
                    other.name()
                ));
            }
        };

        let implicit = scenario.model.as_linear_implicit().ok_or_else(|| {
            format!(
                "Model '{}' does not support implicit assembly (LinearImplicitModel)",
                scenario.model.name()
            )
        })?;

        // ====== Step 2: Setup ======

        let quantity = scenario.model.primary_quantity();

        // Assembled once, reused for every step: the operator depends only
        // on (model parameters, dt).
        let operator = implicit.assemble_operator(dt)?;
        if operator.size() != scenario.model.points() {
            return Err(format!(
                "Operator size {} does not match grid size {}",
                operator.size(),
                scenario.model.points()
            ));
        }

        let mut state = scenario.conditions.initial.clone();

        // Preallocate storage for trajectory
        let mut time_points = Vec::with_capacity(time_steps + 1);
        let mut state_trajectory = Vec::with_capacity(time_steps + 1);

        time_points.push(0.0);
        state_trajectory.push(state.clone());

        // ====== Step 3: Time Integration ======

        for step in 0..time_steps {
            // Transient rhs: rebuilt from the current state, discarded
            // after the solve.
            let b = implicit.assemble_rhs(&state, dt)?;

            let profile = operator.solve(&b)?;
            state.set(quantity, PhysicalData::from_vector(profile));

            solver::validate_state(&state, step + 1)?;

            state_trajectory.push(state.clone());

            // Computed directly from the index so rounding never
            // accumulates: the final point is total_time within epsilon.
            time_points.push((step as f64 + 1.0) * dt);
        }

        // ====== Step 4: Build Result ======

        let final_state: PhysicalState = state;

        let mut result = SimulationResult::new(time_points, state_trajectory, final_state);

        result.add_metadata("solver", "Backward Euler");
        result.add_metadata("time steps", &time_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("total time", &(time_steps as f64 * dt).to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Backward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{
        LinearImplicitModel, PhysicalModel, PhysicalQuantity, StabilityBoundedModel,
    };
    use crate::solver::boundary::DomainBoundaries;
    use crate::solver::operator::TridiagonalOperator;
    use nalgebra::DVector;

    // ====== Mock Models for Testing ======

    /// Mock implicit model: exponential decay dy/dt = -k * y at every point
    ///
    /// Backward Euler gives y_{n+1} = y_n / (1 + k*dt), so the operator is
    /// diagonal with entries (1/dt + k) and b = y_n / dt. Analytical
    /// solution y(t) = y_0 * exp(-k*t) lets us check accuracy.
    struct ImplicitDecay {
        points: usize,
        decay_rate: f64,
    }

    impl PhysicalModel for ImplicitDecay {
        fn points(&self) -> usize {
            self.points
        }

        fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
            let mut result = state.clone();
            if let Some(data) = result.get_mut(PhysicalQuantity::Concentration) {
                data.apply(|y| -self.decay_rate * y);
            }
            result
        }

        fn setup_initial_state(&self) -> PhysicalState {
            PhysicalState::new(
                PhysicalQuantity::Concentration,
                PhysicalData::uniform_vector(self.points, 1.0),
            )
        }

        fn name(&self) -> &str {
            "Implicit Decay"
        }

        fn as_linear_implicit(&self) -> Option<&dyn LinearImplicitModel> {
            Some(self)
        }
    }

    impl LinearImplicitModel for ImplicitDecay {
        fn assemble_operator(&self, dt: f64) -> Result<TridiagonalOperator, String> {
            let n = self.points;
            TridiagonalOperator::new(
                vec![0.0; n - 1],
                vec![1.0 / dt + self.decay_rate; n],
                vec![0.0; n - 1],
            )
        }

        fn assemble_rhs(&self, state: &PhysicalState, dt: f64) -> Result<DVector<f64>, String> {
            let profile = state
                .get(PhysicalQuantity::Concentration)
                .and_then(|data| data.try_as_vector())
                .ok_or("State carries no concentration vector")?;
            Ok(profile / dt)
        }
    }

    /// Explicit-only model: no LinearImplicitModel capability
    struct ExplicitOnly {
        points: usize,
    }

    impl PhysicalModel for ExplicitOnly {
        fn points(&self) -> usize {
            self.points
        }

        fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
            state.clone()
        }

        fn setup_initial_state(&self) -> PhysicalState {
            PhysicalState::new(
                PhysicalQuantity::Concentration,
                PhysicalData::uniform_vector(self.points, 0.0),
            )
        }

        fn name(&self) -> &str {
            "Explicit Only"
        }

        fn as_stability_bounded(&self) -> Option<&dyn StabilityBoundedModel> {
            Some(self)
        }
    }

    impl StabilityBoundedModel for ExplicitOnly {
        fn stable_time_step(&self) -> f64 {
            1.0
        }

        fn apply_boundaries(&self, _profile: &mut DVector<f64>) {}
    }

    fn decay_scenario(points: usize, decay_rate: f64) -> Scenario {
        let model = Box::new(ImplicitDecay { points, decay_rate });
        let initial = model.setup_initial_state();
        let boundaries = DomainBoundaries::inflow_outflow(1.0, initial);
        Scenario::new(model, boundaries)
    }

    // ====== Solver Creation Tests ======

    #[test]
    fn test_backward_euler_creation() {
        let solver = BackwardEulerSolver::new();
        assert_eq!(solver.name(), "Backward Euler");
    }

    // ====== Configuration Tests ======

    #[test]
    fn test_backward_euler_rejects_stability_bounded_config() {
        let solver = BackwardEulerSolver::new();
        let config = SolverConfiguration::stability_bounded(1.0, 0.9);
        let scenario = decay_scenario(5, 0.1);

        let result = solver.solve(&scenario, &config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .contains("only supports TimeEvolution"));
    }

    #[test]
    fn test_backward_euler_requires_implicit_capability() {
        let solver = BackwardEulerSolver::new();
        let config = SolverConfiguration::time_evolution(1.0, 10);

        let model = Box::new(ExplicitOnly { points: 5 });
        let initial = model.setup_initial_state();
        let boundaries = DomainBoundaries::inflow_outflow(1.0, initial);
        let scenario = Scenario::new(model, boundaries);

        let result = solver.solve(&scenario, &config);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("implicit assembly"));
    }

    // ====== Numerical Accuracy Tests ======

    #[test]
    fn test_backward_euler_decay_accuracy() {
        // y(t) = exp(-k*t); backward Euler has O(dt) error
        let solver = BackwardEulerSolver::new();
        let decay_rate = 0.5;
        let total_time = 2.0;
        let scenario = decay_scenario(4, decay_rate);

        let config = SolverConfiguration::time_evolution(total_time, 2000);
        let result = solver.solve(&scenario, &config).unwrap();

        let expected = (-decay_rate * total_time).exp();
        let actual = result
            .final_state
            .get(PhysicalQuantity::Concentration)
            .unwrap()
            .as_vector()[0];

        let error = (actual - expected).abs();
        assert!(error < 1e-3, "Error {} too large for dt=0.001", error);
    }

    #[test]
    fn test_backward_euler_stable_for_huge_dt() {
        // Explicit Euler diverges for k*dt > 2; implicit must stay bounded
        // even with k*dt = 50.
        let solver = BackwardEulerSolver::new();
        let scenario = decay_scenario(4, 50.0);

        let config = SolverConfiguration::time_evolution(10.0, 10); // dt = 1
        let result = solver.solve(&scenario, &config).unwrap();

        let actual = result
            .final_state
            .get(PhysicalQuantity::Concentration)
            .unwrap()
            .as_vector()[0];

        assert!(actual.is_finite());
        assert!(actual.abs() <= 1.0, "Decay must not amplify: {}", actual);
    }

    // ====== Trajectory tests ======

    #[test]
    fn test_backward_euler_trajectory_length() {
        let solver = BackwardEulerSolver::new();
        let scenario = decay_scenario(3, 0.1);

        let time_steps = 100;
        let config = SolverConfiguration::time_evolution(1.0, time_steps);
        let result = solver.solve(&scenario, &config).unwrap();

        assert_eq!(result.time_points.len(), time_steps + 1);
        assert_eq!(result.state_trajectory.len(), time_steps + 1);
    }

    #[test]
    fn test_backward_euler_time_precision() {
        // Time points are computed directly from the index, so the final
        // point lands on total_time within machine epsilon.
        let solver = BackwardEulerSolver::new();
        let scenario = decay_scenario(3, 0.1);

        let total_time = 10.0;
        let config = SolverConfiguration::time_evolution(total_time, 100);
        let result = solver.solve(&scenario, &config).unwrap();

        let final_time = *result.time_points.last().unwrap();
        assert!((final_time - total_time).abs() < 1e-14);
    }

    // ====== Metadata Tests ======

    #[test]
    fn test_backward_euler_metadata() {
        let solver = BackwardEulerSolver::new();
        let scenario = decay_scenario(3, 0.1);

        let config = SolverConfiguration::time_evolution(100.0, 500);
        let result = solver.solve(&scenario, &config).unwrap();

        assert_eq!(result.get_metadata("solver"), Some("Backward Euler"));
        assert_eq!(result.get_metadata("time steps"), Some("500"));

        let dt: f64 = result.get_metadata("dt").unwrap().parse().unwrap();
        assert!((dt - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_backward_euler_uses_requested_dt_exactly() {
        // dt = 0.1 with nt = 3 survives a round trip through nt·dt only
        // as 0.10000000000000002; the fixed-step configuration must hand
        // the solver the caller's value unchanged.
        let solver = BackwardEulerSolver::new();
        let scenario = decay_scenario(3, 0.1);

        let dt = 0.1;
        let config = SolverConfiguration::fixed_step(dt, 3);
        let result = solver.solve(&scenario, &config).unwrap();

        assert_eq!(result.time_points[1], dt);
        let stored: f64 = result.get_metadata("dt").unwrap().parse().unwrap();
        assert_eq!(stored, dt);
    }
}
