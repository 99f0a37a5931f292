//! Physical models for 1D transport simulation
//!
//! All models implement the [`PhysicalModel`](crate::physics::PhysicalModel) trait.
//! The solver calls `compute_physics` at each time step — models are responsible
//! for the physics (transport, reaction), the solver for the time integration.
//!
//! # Available Models
//!
//! ## [`DiffusionReaction`] — implicit-friendly stiff transport
//!
//! ∂C/∂t = α·∂²C/∂x² − k·C. Diffusion with a first-order sink. Implements
//! [`LinearImplicitModel`](crate::physics::LinearImplicitModel): the
//! backward-Euler operator is tridiagonal and step-invariant, so
//! [`BackwardEulerSolver`](crate::solver::BackwardEulerSolver) assembles
//! it once and runs one O(nx) Thomas solve per step at any dt.
//!
//! ## [`AdvectionDiffusion`] — explicit upwind transport
//!
//! ∂C/∂t = −u·∂C/∂x + α·∂²C/∂x². Implements
//! [`StabilityBoundedModel`](crate::physics::StabilityBoundedModel): it
//! knows its explicit stability limit dt_max = 1/(2α/dx² + u/dx) and how
//! to enforce its boundary values, so
//! [`UpwindEulerSolver`](crate::solver::UpwindEulerSolver) can derive a
//! safe dt instead of trusting the caller.
//!
//! # Boundary Conditions
//!
//! Both models fix the inlet concentration at CE (Dirichlet at x = 0)
//! and impose zero gradient at the outlet (Neumann at x = Lx). Both own
//! a uniform grid with dx = Lx/(nx−1) and validate their discretization
//! at construction (nx ≥ 3, Lx > 0), so no solver ever sees an invalid
//! grid.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod advection_diffusion;
pub mod diffusion_reaction;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use advection_diffusion::AdvectionDiffusion;
pub use diffusion_reaction::DiffusionReaction;
