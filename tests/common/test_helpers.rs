//! Helper functions for integration tests

use nalgebra::DVector;
use transport_rs::models::{AdvectionDiffusion, DiffusionReaction};
use transport_rs::physics::{PhysicalModel, PhysicalQuantity, PhysicalState};
use transport_rs::solver::{DomainBoundaries, Scenario};

/// Build a diffusion-reaction scenario with inflow/outflow boundaries
pub fn diffusion_scenario(
    alpha: f64,
    reaction_rate: f64,
    length: f64,
    spatial_points: usize,
    inlet_concentration: f64,
) -> Scenario {
    let model = DiffusionReaction::new(alpha, reaction_rate, length, spatial_points, inlet_concentration)
        .expect("valid diffusion-reaction parameters");
    let initial = model.setup_initial_state();
    let boundaries = DomainBoundaries::inflow_outflow(inlet_concentration, initial);
    Scenario::new(Box::new(model), boundaries)
}

/// Build an advection-diffusion scenario with inflow/outflow boundaries
pub fn advection_scenario(
    alpha: f64,
    velocity: f64,
    length: f64,
    spatial_points: usize,
    inlet_concentration: f64,
) -> Scenario {
    let model = AdvectionDiffusion::new(alpha, velocity, length, spatial_points, inlet_concentration)
        .expect("valid advection-diffusion parameters");
    let initial = model.setup_initial_state();
    let boundaries = DomainBoundaries::inflow_outflow(inlet_concentration, initial);
    Scenario::new(Box::new(model), boundaries)
}

/// Extract the concentration profile from a state
pub fn profile_of(state: &PhysicalState) -> DVector<f64> {
    state
        .get(PhysicalQuantity::Concentration)
        .and_then(|data| data.try_as_vector())
        .cloned()
        .expect("state carries a concentration vector")
}

/// Linearly interpolate a profile at position x
///
/// Lets profiles on different grids be compared at the same physical
/// positions.
pub fn sample_at(grid: &DVector<f64>, profile: &DVector<f64>, x: f64) -> f64 {
    assert_eq!(grid.len(), profile.len(), "grid/profile length mismatch");
    assert!(grid.len() >= 2, "need at least 2 grid points");

    if x <= grid[0] {
        return profile[0];
    }
    if x >= grid[grid.len() - 1] {
        return profile[profile.len() - 1];
    }

    for i in 0..grid.len() - 1 {
        if x >= grid[i] && x <= grid[i + 1] {
            let weight = (x - grid[i]) / (grid[i + 1] - grid[i]);
            return profile[i] * (1.0 - weight) + profile[i + 1] * weight;
        }
    }

    unreachable!("x inside the grid range must fall in some interval");
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_sample_at_interpolates() {
        let grid = DVector::from_vec(vec![0.0, 1.0, 2.0]);
        let profile = DVector::from_vec(vec![0.0, 10.0, 20.0]);

        assert!((sample_at(&grid, &profile, 0.5) - 5.0).abs() < 1e-12);
        assert!((sample_at(&grid, &profile, 1.5) - 15.0).abs() < 1e-12);
        // Clamped outside the grid
        assert_eq!(sample_at(&grid, &profile, -1.0), 0.0);
        assert_eq!(sample_at(&grid, &profile, 3.0), 20.0);
    }
}
