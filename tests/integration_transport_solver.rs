//! Integration tests: models + solvers
//!
//! These tests verify that the transport models and the two solvers
//! work correctly together, end to end, through the scenario API and
//! the one-call entry points.

use transport_rs::api::{solve_explicit, solve_implicit};
use transport_rs::models::DiffusionReaction;
use transport_rs::physics::PhysicalModel;
use transport_rs::solver::{
    BackwardEulerSolver, DomainBoundaries, Scenario, Solver, SolverConfiguration,
    UpwindEulerSolver,
};
use transport_rs::sweep::{run_sweep, SweepConfig, SweepPoint};

mod common;
use common::{advection_scenario, diffusion_scenario, profile_of};

// =================================================================================================
// Boundary Condition Tests
// =================================================================================================

#[test]
fn test_implicit_boundaries_hold_every_step() {
    let scenario = diffusion_scenario(0.01, 0.1, 1.0, 50, 1.0);
    let config = SolverConfiguration::time_evolution(1.0, 100);

    let result = BackwardEulerSolver::new().solve(&scenario, &config).unwrap();

    for (step, state) in result.state_trajectory.iter().enumerate() {
        let profile = profile_of(state);

        // Dirichlet inlet: held exactly (identity row in the operator)
        assert_eq!(profile[0], 1.0, "inlet drifted at step {}", step);

        // Neumann outlet: enforced by the boundary row up to solver arithmetic
        let gap = (profile[49] - profile[48]).abs();
        assert!(gap < 1e-12, "outlet gradient {} at step {}", gap, step);
    }
}

#[test]
fn test_explicit_boundaries_hold_every_step() {
    let scenario = advection_scenario(0.01, 1.0, 1.0, 50, 1.0);
    let config = SolverConfiguration::stability_bounded(0.5, 0.9);

    let result = UpwindEulerSolver::new().solve(&scenario, &config).unwrap();

    for (step, state) in result.state_trajectory.iter().enumerate() {
        let profile = profile_of(state);

        // Both boundaries are assigned directly after each update, so
        // they hold exactly, including in the recorded initial state.
        assert_eq!(profile[0], 1.0, "inlet drifted at step {}", step);
        assert_eq!(profile[49], profile[48], "outlet gradient at step {}", step);
    }
}

// =================================================================================================
// Stability Tests
// =================================================================================================

#[test]
fn test_implicit_stable_far_above_explicit_bound() {
    // For alpha = 0.01, nx = 50 the explicit diffusion bound is
    // dx^2/(2 alpha) ~ 0.02 s. Step at dt = 1.0 s, 50x above it.
    let scenario = diffusion_scenario(0.01, 0.1, 1.0, 50, 1.0);
    let config = SolverConfiguration::time_evolution(200.0, 200);

    let result = BackwardEulerSolver::new().solve(&scenario, &config).unwrap();

    // With a sink and zero initial condition the solution stays within
    // [0, CE]; any oscillation or blow-up would break these bounds.
    for state in &result.state_trajectory {
        let profile = profile_of(state);
        for (i, &value) in profile.iter().enumerate() {
            assert!(value.is_finite(), "non-finite value at point {}", i);
            assert!(value <= 1.0 + 1e-9, "overshoot {} at point {}", value, i);
            assert!(value >= -1e-9, "undershoot {} at point {}", value, i);
        }
    }
}

#[test]
fn test_explicit_fixed_step_above_bound_diverges() {
    // Pure advection: dt_max = dx/u ~ 0.0204 s for nx = 50. A fixed-step
    // configuration at dt = 0.06 s violates the bound by 3x.
    let scenario = advection_scenario(0.0, 1.0, 1.0, 50, 1.0);
    let config = SolverConfiguration::time_evolution(1.5, 25);

    match UpwindEulerSolver::new().solve(&scenario, &config) {
        Err(message) => {
            assert!(
                message.contains("NaN") || message.contains("Infinity"),
                "unexpected error: {}",
                message
            );
        }
        Ok(result) => {
            // Growth may still be finite after 25 steps; it must at
            // least be far outside the physical range [0, CE].
            let final_profile = profile_of(&result.final_state);
            let max_magnitude = final_profile.iter().fold(0.0f64, |m, v| m.max(v.abs()));
            assert!(
                max_magnitude > 1e3,
                "expected blow-up, got max magnitude {}",
                max_magnitude
            );
        }
    }
}

#[test]
fn test_explicit_derived_step_stays_physical() {
    // The same horizon solved with a derived step stays within [0, CE].
    let (_, _, history) = solve_explicit(0.0, 1.0, 1.0, 1.0, 50, 1.5, 0.9).unwrap();

    for value in history.iter() {
        assert!(*value >= -1e-12 && *value <= 1.0 + 1e-12, "value {}", value);
    }
}

// =================================================================================================
// Physical Consistency Tests
// =================================================================================================

#[test]
fn test_implicit_steady_state_without_reaction() {
    // With k = 0 the only steady state compatible with a fixed inlet
    // and a zero-gradient outlet is the uniform profile C = CE.
    let (_, profile) = solve_implicit(0.01, 0.0, 20, 2000, 1.0, 1.0, 1.0).unwrap();

    for (i, &value) in profile.iter().enumerate() {
        assert!(
            (value - 1.0).abs() < 1e-3,
            "point {}: {} not at steady state",
            i,
            value
        );
    }
}

#[test]
fn test_implicit_profile_decays_monotonically_with_reaction() {
    // A first-order sink makes the steady profile decrease away from
    // the inlet.
    let (_, profile) = solve_implicit(0.01, 0.5, 50, 5000, 0.1, 1.0, 1.0).unwrap();

    for i in 0..profile.len() - 2 {
        assert!(
            profile[i + 1] <= profile[i] + 1e-12,
            "profile rises between points {} and {}",
            i,
            i + 1
        );
    }
}

#[test]
fn test_solvers_agree_on_pure_diffusion() {
    // With u = 0 and k = 0 both models discretize the same diffusion
    // operator, so the two time integrators must land on nearly the
    // same profile when both steps are small.
    let total_time = 0.5;

    let (_, implicit_profile) =
        solve_implicit(0.01, 0.0, 30, 5000, total_time / 5000.0, 1.0, 1.0).unwrap();

    let (_, _, history) = solve_explicit(0.01, 0.0, 1.0, 1.0, 30, total_time, 0.9).unwrap();
    let explicit_profile = history.row(history.nrows() - 1);

    for i in 0..30 {
        let diff = (implicit_profile[i] - explicit_profile[i]).abs();
        assert!(diff < 0.02, "point {}: solvers differ by {}", i, diff);
    }
}

// =================================================================================================
// Time Axis Tests
// =================================================================================================

#[test]
fn test_explicit_lands_exactly_on_total_time() {
    for total_time in [0.3, 0.5, 0.7, 1.0] {
        let (_, t, _) = solve_explicit(0.01, 1.0, 1.0, 1.0, 50, total_time, 0.9).unwrap();
        assert_eq!(t[0], 0.0);
        assert_eq!(*t.last().unwrap(), total_time, "horizon {}", total_time);
    }
}

#[test]
fn test_trajectory_lengths() {
    let scenario = diffusion_scenario(0.01, 0.1, 1.0, 20, 1.0);
    let config = SolverConfiguration::time_evolution(1.0, 250);

    let result = BackwardEulerSolver::new().solve(&scenario, &config).unwrap();

    // Initial state plus one per step
    assert_eq!(result.time_points.len(), 251);
    assert_eq!(result.state_trajectory.len(), 251);
    assert!(result.time_points[0].abs() < 1e-15);
}

// =================================================================================================
// Sweep Integration Tests
// =================================================================================================

#[test]
fn test_sweep_end_to_end() {
    let points = SweepPoint::grid(&[0.01, 0.1], &[0.02, 0.1], &[10, 50]);
    let config = SweepConfig {
        length: 1.0,
        inlet_concentration: 1.0,
        time_steps: 200,
        dt: 0.005,
    };

    let records = run_sweep(&points, &config);

    assert_eq!(records.len(), 8);
    for record in &records {
        let profile = record.outcome.as_ref().unwrap();
        assert_eq!(profile.len(), record.point.spatial_points);
        assert_eq!(profile[0], 1.0);
        // Physical range holds for every combination
        for &value in profile.iter() {
            assert!(value >= -1e-9 && value <= 1.0 + 1e-9);
        }
    }
}

// =================================================================================================
// Error Detection Tests
// =================================================================================================

#[test]
fn test_implicit_rejects_stability_bounded_config() {
    let scenario = diffusion_scenario(0.01, 0.1, 1.0, 20, 1.0);
    let config = SolverConfiguration::stability_bounded(1.0, 0.9);

    let result = BackwardEulerSolver::new().solve(&scenario, &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("only supports TimeEvolution"));
}

#[test]
fn test_declared_inlet_value_must_match_model() {
    // The model bakes CE = 1.0 into its discretization; a scenario
    // declaring a Dirichlet inlet of 5.0 must be rejected up front, not
    // silently solved with 1.0.
    let model = DiffusionReaction::new(0.01, 0.1, 1.0, 20, 1.0).unwrap();
    let initial = model.setup_initial_state();
    let boundaries = DomainBoundaries::inflow_outflow(5.0, initial);
    let scenario = Scenario::new(Box::new(model), boundaries);

    assert!(scenario.validate().is_err());

    let config = SolverConfiguration::time_evolution(1.0, 100);
    let result = BackwardEulerSolver::new().solve(&scenario, &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("inlet"));
}

#[test]
fn test_explicit_rejects_implicit_only_model() {
    // The diffusion-reaction model carries no stability bound, so the
    // explicit solver must refuse it instead of guessing a step.
    let scenario = diffusion_scenario(0.01, 0.1, 1.0, 20, 1.0);
    let config = SolverConfiguration::stability_bounded(1.0, 0.9);

    let result = UpwindEulerSolver::new().solve(&scenario, &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("explicit"));
}
