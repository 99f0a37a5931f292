//! One-call entry points for the two transport problems
//!
//! These functions wrap the model/scenario/solver plumbing for callers
//! who want a profile, not an architecture: build the model, run the
//! appropriate solver, unpack the result into plain vectors. They are
//! pure functions of their arguments — every constant is a parameter,
//! nothing is read from process-wide state — so concurrent calls with
//! different parameters cannot interfere.
//!
//! For trajectory access, custom boundaries or solver metadata, use the
//! [`Scenario`](crate::solver::Scenario)/[`Solver`](crate::solver::Solver)
//! API directly.

use crate::models::{AdvectionDiffusion, DiffusionReaction};
use crate::physics::{PhysicalModel, PhysicalQuantity};
use crate::solver::{
    BackwardEulerSolver, DomainBoundaries, Scenario, SimulationResult, Solver,
    SolverConfiguration, UpwindEulerSolver,
};
use nalgebra::{DMatrix, DVector};

/// Solve the diffusion-reaction equation with implicit backward Euler
///
/// Integrates ∂C/∂t = α·∂²C/∂x² − k·C over `nt` steps of size `dt`,
/// with C(0,t) = `ce` (Dirichlet) and zero gradient at x = `lx`
/// (Neumann). One tridiagonal solve per step; stable for any dt > 0.
///
/// # Arguments
///
/// * `alpha` - Diffusion coefficient α \[m²/s\]
/// * `reaction_rate` - First-order reaction rate k \[1/s\]
/// * `spatial_points` - Number of grid points nx (≥ 3)
/// * `time_steps` - Number of time steps nt
/// * `dt` - Time step size \[s\]
/// * `lx` - Domain length \[m\]
/// * `ce` - Inlet concentration \[mol/L\]
///
/// # Returns
///
/// `(x, profile)`: grid point positions and the concentration profile
/// at t = nt·dt.
///
/// # Example
///
/// ```rust
/// use transport_rs::api::solve_implicit;
///
/// let (x, profile) = solve_implicit(0.01, 0.1, 50, 1000, 0.001, 1.0, 1.0).unwrap();
///
/// assert_eq!(x.len(), 50);
/// assert_eq!(profile[0], 1.0); // Dirichlet inlet holds exactly
/// ```
pub fn solve_implicit(
    alpha: f64,
    reaction_rate: f64,
    spatial_points: usize,
    time_steps: usize,
    dt: f64,
    lx: f64,
    ce: f64,
) -> Result<(DVector<f64>, DVector<f64>), String> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(format!("Time step must be positive, got {}", dt));
    }

    let model = DiffusionReaction::new(alpha, reaction_rate, lx, spatial_points, ce)?;
    let grid = model.grid();

    let boundaries = DomainBoundaries::inflow_outflow(ce, model.setup_initial_state());
    let scenario = Scenario::new(Box::new(model), boundaries);

    // The caller's dt is passed through as-is: nt steps of exactly this
    // size, never reconstructed from a horizon.
    let config = SolverConfiguration::fixed_step(dt, time_steps);

    let result = BackwardEulerSolver::new().solve(&scenario, &config)?;
    let profile = extract_profile(&result.final_state, result.len() - 1)?;

    Ok((grid, profile))
}

/// Solve the advection-diffusion equation with explicit upwind Euler
///
/// Integrates ∂C/∂t = −u·∂C/∂x + α·∂²C/∂x² up to `total_time`, with
/// C(0,t) = `ce` and zero gradient at x = `lx`. The time step is derived
/// from the stability bound: dt = safety_factor · 1/(2α/dx² + u/dx),
/// then adjusted so the last step lands exactly on `total_time`.
///
/// # Arguments
///
/// * `alpha` - Diffusion coefficient α \[m²/s\]
/// * `velocity` - Advection velocity u \[m/s\]
/// * `lx` - Domain length \[m\]
/// * `ce` - Inlet concentration \[mol/L\]
/// * `spatial_points` - Number of grid points nx (≥ 3)
/// * `total_time` - Simulation horizon T \[s\]
/// * `safety_factor` - Fraction of dt_max to use, strictly in (0, 1)
///
/// # Returns
///
/// `(x, t, history)`: grid positions, the time of every stored step
/// (nt+1 entries, 0 first), and the trajectory as an (nt+1) × nx matrix
/// — `history[(n, i)]` is the concentration at time t[n], position x[i].
///
/// # Errors
///
/// A safety factor outside (0, 1) is rejected before any stepping: an
/// unstable configuration is a configuration error, not something to
/// discover mid-run.
///
/// # Example
///
/// ```rust
/// use transport_rs::api::solve_explicit;
///
/// let (x, t, history) = solve_explicit(0.01, 1.0, 1.0, 1.0, 50, 0.5, 0.9).unwrap();
///
/// assert_eq!(history.nrows(), t.len());
/// assert_eq!(history.ncols(), x.len());
/// assert_eq!(*t.last().unwrap(), 0.5); // lands exactly on T
/// ```
pub fn solve_explicit(
    alpha: f64,
    velocity: f64,
    lx: f64,
    ce: f64,
    spatial_points: usize,
    total_time: f64,
    safety_factor: f64,
) -> Result<(DVector<f64>, Vec<f64>, DMatrix<f64>), String> {
    let model = AdvectionDiffusion::new(alpha, velocity, lx, spatial_points, ce)?;
    let grid = model.grid();

    let boundaries = DomainBoundaries::inflow_outflow(ce, model.setup_initial_state());
    let scenario = Scenario::new(Box::new(model), boundaries);

    let config = SolverConfiguration::stability_bounded(total_time, safety_factor);

    let result = UpwindEulerSolver::new().solve(&scenario, &config)?;
    let history = extract_history(&result, spatial_points)?;

    Ok((grid, result.time_points, history))
}

/// Pull the concentration vector out of a state
fn extract_profile(
    state: &crate::physics::PhysicalState,
    step: usize,
) -> Result<DVector<f64>, String> {
    state
        .get(PhysicalQuantity::Concentration)
        .and_then(|data| data.try_as_vector())
        .cloned()
        .ok_or_else(|| format!("State at step {} carries no concentration vector", step))
}

/// Stack a trajectory into a steps × points matrix, one row per state
fn extract_history(result: &SimulationResult, points: usize) -> Result<DMatrix<f64>, String> {
    let mut history = DMatrix::zeros(result.len(), points);

    for (step, state) in result.state_trajectory.iter().enumerate() {
        let profile = extract_profile(state, step)?;
        if profile.len() != points {
            return Err(format!(
                "State at step {} has {} points, expected {}",
                step,
                profile.len(),
                points
            ));
        }
        history.row_mut(step).copy_from(&profile.transpose());
    }

    Ok(history)
}

// =================================================================================================
// Tests
// =================================================================================================
