//! Diffusion-reaction model with first-order decay
//!
//! Governs the concentration C(x, t) of a species that diffuses along a
//! 1D domain while being consumed by a first-order reaction:
//!
//! ```text
//! ∂C/∂t = α · ∂²C/∂x² − k · C
//! ```
//!
//! Boundary conditions:
//! - Dirichlet at the inlet: C(0, t) = CE (fixed feed concentration)
//! - Zero-gradient Neumann at the outlet: ∂C/∂x(Lx, t) = 0
//!
//! Initial condition: C(x, 0) = 0 everywhere except the inlet point.
//!
//! # Discretization
//!
//! Uniform grid of nx points, dx = Lx/(nx−1). Centered second differences
//! for diffusion. The backward-Euler form of the update is one linear
//! system per step:
//!
//! ```text
//! row 0:        C_new[0] = CE                                (Dirichlet)
//! interior i:   (1/dt + 2α/dx² + k)·C_new[i]
//!                 − (α/dx²)·(C_new[i−1] + C_new[i+1]) = C[i]/dt
//! row nx−1:     (C_new[nx−1] − C_new[nx−2]) / (2dx) = 0      (Neumann)
//! ```
//!
//! The operator depends only on (α, k, dx, dt), so the implicit solver
//! assembles it once per run. Diffusion makes the problem stiff on fine
//! grids (the explicit bound shrinks like dx²), which is exactly where
//! the implicit treatment pays off.
//!
//! # Example
//!
//! ```rust
//! use transport_rs::models::DiffusionReaction;
//! use transport_rs::physics::PhysicalModel;
//! use transport_rs::solver::{
//!     BackwardEulerSolver, DomainBoundaries, Scenario, Solver, SolverConfiguration,
//! };
//!
//! let model = DiffusionReaction::new(0.01, 0.1, 1.0, 50, 1.0).unwrap();
//! let boundaries = DomainBoundaries::inflow_outflow(1.0, model.setup_initial_state());
//! let scenario = Scenario::new(Box::new(model), boundaries);
//!
//! let solver = BackwardEulerSolver::new();
//! let config = SolverConfiguration::time_evolution(1.0, 1000);
//! let result = solver.solve(&scenario, &config).unwrap();
//! ```

use crate::physics::{
    LinearImplicitModel, PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState,
};
use crate::solver::operator::TridiagonalOperator;
use nalgebra::DVector;

/// Diffusion-reaction transport model
///
/// Owns its uniform grid and the inlet concentration; everything a run
/// needs is an explicit field, never process-wide state, so sweep
/// iterations over different parameters cannot couple through hidden
/// globals.
#[derive(Clone, Debug)]
pub struct DiffusionReaction {
    /// Diffusion coefficient α \[m²/s\]
    alpha: f64,
    /// First-order reaction rate k \[1/s\]
    reaction_rate: f64,
    /// Domain length Lx \[m\]
    length: f64,
    /// Number of spatial points
    nx: usize,
    /// Spatial step dx = Lx/(nx−1) \[m\]
    dx: f64,
    /// Inlet concentration CE \[mol/L\]
    inlet_concentration: f64,
}

impl DiffusionReaction {
    /// Create a new diffusion-reaction model
    ///
    /// # Arguments
    ///
    /// * `alpha` - Diffusion coefficient α \[m²/s\], must be positive
    /// * `reaction_rate` - Reaction rate k \[1/s\], must be non-negative
    /// * `length` - Domain length Lx \[m\], must be positive
    /// * `spatial_points` - Number of grid points nx, at least 3
    /// * `inlet_concentration` - Feed concentration CE \[mol/L\]
    ///
    /// # Errors
    ///
    /// Returns `Err` for nx < 3 (no interior points to update), Lx ≤ 0,
    /// α ≤ 0, k < 0, or non-finite parameters. Rejecting here means no
    /// operator is ever assembled from an invalid discretization.
    pub fn new(
        alpha: f64,
        reaction_rate: f64,
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
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(format!(
                "Diffusion coefficient must be positive, got {}",
                alpha
            ));
        }
        if !(reaction_rate.is_finite() && reaction_rate >= 0.0) {
            return Err(format!(
                "Reaction rate must be non-negative, got {}",
                reaction_rate
            ));
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
            reaction_rate,
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

impl PhysicalModel for DiffusionReaction {
    fn points(&self) -> usize {
        self.nx
    }

    /// Semi-discrete right-hand side dC/dt = α·∂²C/∂x² − k·C
    ///
    /// The backward-Euler solver never calls this — it steps through
    /// [`LinearImplicitModel::assemble_operator`] and
    /// [`LinearImplicitModel::assemble_rhs`] instead. The method-of-lines
    /// form is here for the base trait contract and for inspecting the
    /// instantaneous rate of change of a profile directly.
    ///
    /// The inlet derivative is zero (Dirichlet point never moves); the
    /// outlet second difference folds the Neumann condition by reusing
    /// C[i−1] in place of the missing C[i+1].
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
            let d2cdx2 = (profile[i + 1] - 2.0 * profile[i] + profile[i - 1]) / dx2;
            derivative[i] = self.alpha * d2cdx2 - self.reaction_rate * profile[i];
        }

        let i = n - 1;
        let d2cdx2 = (profile[i - 1] - 2.0 * profile[i] + profile[i - 1]) / dx2;
        derivative[i] = self.alpha * d2cdx2 - self.reaction_rate * profile[i];

        PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vector(derivative),
        )
    }

    /// Zeros everywhere except the inlet point, which starts at CE
    fn setup_initial_state(&self) -> PhysicalState {
        let mut profile = DVector::zeros(self.nx);
        profile[0] = self.inlet_concentration;

        PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vector(profile),
        )
    }

    fn name(&self) -> &str {
        "Diffusion-Reaction"
    }

    fn inlet_value(&self) -> Option<f64> {
        Some(self.inlet_concentration)
    }

    fn as_linear_implicit(&self) -> Option<&dyn LinearImplicitModel> {
        Some(self)
    }
}

impl LinearImplicitModel for DiffusionReaction {
    /// Backward-Euler step operator
    ///
    /// - row 0: identity (Dirichlet, C_new[0] = b[0] = CE)
    /// - interior rows: (1/dt + 2α/dx² + k) on the main diagonal,
    ///   −α/dx² on both off-diagonals
    /// - row nx−1: [−1/(2dx), +1/(2dx)] one-sided Neumann
    fn assemble_operator(&self, dt: f64) -> Result<TridiagonalOperator, String> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(format!("Time step must be positive, got {}", dt));
        }

        let n = self.nx;
        let dx2 = self.dx * self.dx;
        let off = -self.alpha / dx2;
        let main = 1.0 / dt + 2.0 * self.alpha / dx2 + self.reaction_rate;

        let mut lower = vec![off; n - 1];
        let mut diag = vec![main; n];
        let mut upper = vec![off; n - 1];

        // Dirichlet row
        diag[0] = 1.0;
        upper[0] = 0.0;

        // One-sided Neumann row
        lower[n - 2] = -1.0 / (2.0 * self.dx);
        diag[n - 1] = 1.0 / (2.0 * self.dx);

        TridiagonalOperator::new(lower, diag, upper)
    }

    /// Right-hand side b = C/dt with the boundary rows overwritten:
    /// b[0] = CE (Dirichlet value), b[nx−1] = 0 (zero gradient)
    fn assemble_rhs(&self, state: &PhysicalState, dt: f64) -> Result<DVector<f64>, String> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(format!("Time step must be positive, got {}", dt));
        }

        let profile = state
            .get(PhysicalQuantity::Concentration)
            .and_then(|data| data.try_as_vector())
            .ok_or("State carries no concentration vector")?;

        if profile.len() != self.nx {
            return Err(format!(
                "State has {} points but model discretizes {}",
                profile.len(),
                self.nx
            ));
        }

        let mut b = profile / dt;
        b[0] = self.inlet_concentration;
        b[self.nx - 1] = 0.0;

        Ok(b)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
