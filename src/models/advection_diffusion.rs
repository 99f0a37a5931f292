//! Advection-diffusion model with upwind transport
//!
//! Governs the concentration C(x, t) of a species carried along a 1D
//! domain at velocity u while diffusing:
//!
//! ```text
//! ∂C/∂t = −u · ∂C/∂x + α · ∂²C/∂x²
//! ```
//!
//! Boundary conditions:
//! - Dirichlet at the inlet: C(0, t) = CE
//! - Zero-gradient Neumann at the outlet: C[last] = C[second-to-last]
//!
//! Initial condition: C(x, 0) = 0.
//!
//! # Discretization
//!
//! Uniform grid of nx points, dx = Lx/(nx−1). First-order BACKWARD
//! difference for advection (upwind for u > 0 — taking the difference
//! from the side the flow comes from keeps the front monotone), centered
//! second difference for diffusion. At the outlet the missing forward
//! neighbor is replaced by C[i−1], consistent with the enforced
//! zero-gradient condition.
//!
//! # Stability
//!
//! Explicit forward Euler on this discretization is stable only for
//!
//! ```text
//! dt ≤ dt_max = 1 / (2α/dx² + u/dx)
//! ```
//!
//! The model exposes this bound through
//! [`StabilityBoundedModel::stable_time_step`], letting the explicit
//! solver derive dt instead of trusting the caller to know the limit.
//!
//! # Example
//!
//! ```rust
//! use transport_rs::models::AdvectionDiffusion;
//! use transport_rs::physics::PhysicalModel;
//! use transport_rs::solver::{
//!     DomainBoundaries, Scenario, Solver, SolverConfiguration, UpwindEulerSolver,
//! };
//!
//! let model = AdvectionDiffusion::new(0.01, 1.0, 1.0, 50, 1.0).unwrap();
//! let boundaries = DomainBoundaries::inflow_outflow(1.0, model.setup_initial_state());
//! let scenario = Scenario::new(Box::new(model), boundaries);
//!
//! let solver = UpwindEulerSolver::new();
//! let config = SolverConfiguration::stability_bounded(0.5, 0.9);
//! let result = solver.solve(&scenario, &config).unwrap();
//! ```

use crate::physics::{
    PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState, StabilityBoundedModel,
};
use nalgebra::DVector;

/// Advection-diffusion transport model
///
/// Owns its uniform grid, velocity and inlet concentration as explicit
/// fields — no process-wide constants.
#[derive(Clone, Debug)]
pub struct AdvectionDiffusion {
    /// Diffusion coefficient α \[m²/s\]
    alpha: f64,
    /// Advection velocity u \[m/s\]
    velocity: f64,
    /// Domain length Lx \[m\]
    length: f64,
    /// Number of spatial points
    nx: usize,
    /// Spatial step dx = Lx/(nx−1) \[m\]
    dx: f64,
    /// Inlet concentration CE \[mol/L\]
    inlet_concentration: f64,
}

impl AdvectionDiffusion {
    /// Create a new advection-diffusion model
    ///
    /// # Arguments
    ///
    /// * `alpha` - Diffusion coefficient α \[m²/s\], non-negative
    /// * `velocity` - Advection velocity u \[m/s\], non-negative (the
    ///   backward difference is upwind only for flow in +x)
    /// * `length` - Domain length Lx \[m\], must be positive
    /// * `spatial_points` - Number of grid points nx, at least 3
    /// * `inlet_concentration` - Feed concentration CE \[mol/L\]
    ///
    /// # Errors
    ///
    /// Returns `Err` for nx < 3, Lx ≤ 0, negative or non-finite α or u,
    /// α = u = 0 (nothing to transport, dt_max undefined), or non-finite
    /// CE.
    pub fn new(
        alpha: f64,
        velocity: f64,
        length: f64,
        spatial_points: usize,
        inlet_concentration: f64,
    ) -> Result<Self, String> {
        if spatial_points < 3 {
            return Err(format!(
                "Need at least 3 spatial points (two boundaries and one interior), got {}",
                spatial_points
            ));
        }
        if !(length.is_finite() && length > 0.0) {
            return Err(format!("Domain length must be positive, got {}", length));
        }
        if !(alpha.is_finite() && alpha >= 0.0) {
            return Err(format!(
                "Diffusion coefficient must be non-negative, got {}",
                alpha
            ));
        }
        if !(velocity.is_finite() && velocity >= 0.0) {
            return Err(format!(
                "Advection velocity must be non-negative, got {}",
                velocity
            ));
        }
        if alpha == 0.0 && velocity == 0.0 {
            return Err("At least one of alpha and velocity must be positive".to_string());
        }
        if !inlet_concentration.is_finite() {
            return Err(format!(
                "Inlet concentration must be finite, got {}",
                inlet_concentration
            ));
        }

        let dx = length / (spatial_points as f64 - 1.0);

        Ok(Self {
            alpha,
            velocity,
            length,
            nx: spatial_points,
            dx,
            inlet_concentration,
        })
    }

    /// Spatial step dx
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Domain length Lx
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Inlet concentration CE
    pub fn inlet_concentration(&self) -> f64 {
        self.inlet_concentration
    }

    /// Grid point positions: x[i] = i · dx, from 0 to Lx inclusive
    pub fn grid(&self) -> DVector<f64> {
        DVector::from_fn(self.nx, |i, _| i as f64 * self.dx)
    }
}

impl PhysicalModel for AdvectionDiffusion {
    fn points(&self) -> usize {
        self.nx
    }

    /// Semi-discrete right-hand side dC/dt = −u·∂C/∂x + α·∂²C/∂x²
    ///
    /// Backward difference for advection, centered second difference for
    /// diffusion. The inlet derivative is zero (Dirichlet point never
    /// moves); the outlet reuses C[i−1] in place of the missing C[i+1],
    /// consistent with the zero-gradient condition the solver enforces.
    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
        let profile = match state
            .get(PhysicalQuantity::Concentration)
            .and_then(|data| data.try_as_vector())
        {
            Some(profile) => profile,
            None => return state.clone(),
        };

        let n = self.nx;
        let dx2 = self.dx * self.dx;
        let mut derivative = DVector::zeros(n);

        for i in 1..n - 1 {
            let dcdx = (profile[i] - profile[i - 1]) / self.dx;
            let d2cdx2 = (profile[i + 1] - 2.0 * profile[i] + profile[i - 1]) / dx2;
            derivative[i] = -(self.velocity * dcdx - self.alpha * d2cdx2);
        }

        // Outlet point: the Neumann fold replaces C[i+1] with C[i-1]
        let i = n - 1;
        let dcdx = (profile[i] - profile[i - 1]) / self.dx;
        let d2cdx2 = (profile[i - 1] - 2.0 * profile[i] + profile[i - 1]) / dx2;
        derivative[i] = -(self.velocity * dcdx - self.alpha * d2cdx2);

        PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vector(derivative),
        )
    }

    /// Zeros everywhere: the solver enforces the boundary values before
    /// the first update
    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::uniform_vector(self.nx, 0.0),
        )
    }

    fn name(&self) -> &str {
        "Advection-Diffusion"
    }

    fn inlet_value(&self) -> Option<f64> {
        Some(self.inlet_concentration)
    }

    fn as_stability_bounded(&self) -> Option<&dyn StabilityBoundedModel> {
        Some(self)
    }
}

impl StabilityBoundedModel for AdvectionDiffusion {
    /// dt_max = 1 / (2α/dx² + u/dx)
    ///
    /// Von-Neumann-style bound combining the diffusion (dx²/2α) and
    /// advection (dx/u) limits; for α = 0 or u = 0 it degenerates to the
    /// remaining single-term limit.
    fn stable_time_step(&self) -> f64 {
        1.0 / (2.0 * self.alpha / (self.dx * self.dx) + self.velocity / self.dx)
    }

    /// C[0] = CE, C[last] = C[second-to-last]
    fn apply_boundaries(&self, profile: &mut DVector<f64>) {
        let n = profile.len();
        profile[0] = self.inlet_concentration;
        profile[n - 1] = profile[n - 2];
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> AdvectionDiffusion {
        AdvectionDiffusion::new(0.01, 1.0, 1.0, 50, 1.0).unwrap()
    }

    // ====== Construction ======

    #[test]
    fn test_construction_validates_parameters() {
        assert!(AdvectionDiffusion::new(0.01, 1.0, 1.0, 50, 1.0).is_ok());

        assert!(AdvectionDiffusion::new(0.01, 1.0, 1.0, 2, 1.0).is_err());
        assert!(AdvectionDiffusion::new(0.01, 1.0, 0.0, 50, 1.0).is_err());
        assert!(AdvectionDiffusion::new(-0.01, 1.0, 1.0, 50, 1.0).is_err());
        assert!(AdvectionDiffusion::new(0.01, -1.0, 1.0, 50, 1.0).is_err());
        assert!(AdvectionDiffusion::new(0.0, 0.0, 1.0, 50, 1.0).is_err());
    }

    #[test]
    fn test_pure_advection_and_pure_diffusion_are_valid() {
        assert!(AdvectionDiffusion::new(0.0, 1.0, 1.0, 50, 1.0).is_ok());
        assert!(AdvectionDiffusion::new(0.01, 0.0, 1.0, 50, 1.0).is_ok());
    }

    // ====== Stability bound ======

    #[test]
    fn test_stability_bound_formula() {
        let model = model();
        let dx = model.dx();
        let expected = 1.0 / (2.0 * 0.01 / (dx * dx) + 1.0 / dx);

        assert_eq!(model.stable_time_step(), expected);
    }

    #[test]
    fn test_stability_bound_shrinks_with_grid_refinement() {
        let coarse = AdvectionDiffusion::new(0.01, 1.0, 1.0, 50, 1.0).unwrap();
        let fine = AdvectionDiffusion::new(0.01, 1.0, 1.0, 500, 1.0).unwrap();

        assert!(fine.stable_time_step() < coarse.stable_time_step());
    }

    // ====== Boundaries ======

    #[test]
    fn test_apply_boundaries() {
        let model = model();
        let mut profile = DVector::from_fn(50, |i, _| i as f64);

        model.apply_boundaries(&mut profile);

        assert_eq!(profile[0], 1.0);
        assert_eq!(profile[49], profile[48]);
        assert_eq!(profile[49], 48.0);
    }

    // ====== Semi-discrete physics ======

    #[test]
    fn test_uniform_profile_is_steady() {
        // Constant C has zero gradient and zero curvature everywhere,
        // the folded outlet point included.
        let model = model();
        let state = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::uniform_vector(50, 0.7),
        );

        let physics = model.compute_physics(&state);
        let derivative = physics
            .get(PhysicalQuantity::Concentration)
            .unwrap()
            .as_vector();

        for i in 0..50 {
            assert_eq!(derivative[i], 0.0, "point {}", i);
        }
    }

    #[test]
    fn test_upwind_direction() {
        // A front just upstream of point i must raise C[i] (advection
        // carries mass downstream). Pure advection isolates the term.
        let model = AdvectionDiffusion::new(0.0, 1.0, 1.0, 50, 1.0).unwrap();
        let mut profile = DVector::zeros(50);
        for i in 0..10 {
            profile[i] = 1.0;
        }
        let state = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vector(profile),
        );

        let physics = model.compute_physics(&state);
        let derivative = physics
            .get(PhysicalQuantity::Concentration)
            .unwrap()
            .as_vector();

        // Point 10 sees the front arriving from point 9
        assert!(derivative[10] > 0.0);
        // Point 9 is inside the plateau, backward difference is zero
        assert_eq!(derivative[9], 0.0);
        // Downstream of the front nothing happens yet
        assert_eq!(derivative[30], 0.0);
    }

    #[test]
    fn test_outlet_fold_matches_interior_with_mirrored_neighbor() {
        let model = model();
        let profile = DVector::from_fn(50, |i, _| (i as f64 * 0.1).sin());
        let state = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vector(profile.clone()),
        );

        let physics = model.compute_physics(&state);
        let derivative = physics
            .get(PhysicalQuantity::Concentration)
            .unwrap()
            .as_vector();

        let i = 49;
        let dx = model.dx();
        let dcdx = (profile[i] - profile[i - 1]) / dx;
        let d2cdx2 = (profile[i - 1] - 2.0 * profile[i] + profile[i - 1]) / (dx * dx);
        let expected = -(1.0 * dcdx - 0.01 * d2cdx2);

        assert_eq!(derivative[i], expected);
    }
}
