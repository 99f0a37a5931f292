//! Numerical methods for solving differential equations
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! The separation between abstract solver interface (`solver::traits`) and concrete
//! implementations (`solver::methods`) follows the Open-Closed Principle:
//! - **Open** for extension: Add new methods without modifying existing code
//! - **Closed** for modification: The `Solver` trait is stable and never changes
//!
//! # Available Methods
//!
//! ## Implicit Time-Stepping Methods
//!
//! - **[`BackwardEulerSolver`]**: Backward Euler with a tridiagonal solve
//!   - Order: First-order O(dt)
//!   - Cost: One O(nx) Thomas solve per step, operator assembled once
//!   - Stability: Unconditional for diffusion-reaction physics
//!   - Use: **Stiff problems**, fine grids, large time steps
//!
//! ## Explicit Time-Stepping Methods
//!
//! - **[`UpwindEulerSolver`]**: Forward Euler with first-order upwind advection
//!   - Order: First-order O(dt), O(dx) in the advection term
//!   - Cost: One physics evaluation per step, no linear solve
//!   - Stability: Conditional, dt ≤ 1/(2α/dx² + u/dx); dt is derived
//!     from the model's bound in `StabilityBounded` mode
//!   - Use: Advection-dominated transport, instability studies
//!
//! # Choosing Between Them
//!
//! The two methods trade cost per step against step count. The implicit
//! solver pays a tridiagonal solve every step but takes as few steps as
//! accuracy allows; the explicit solver is cheaper per step but the
//! stability bound forces dt ~ dx² once diffusion dominates, which on
//! fine grids means orders of magnitude more steps.
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
//! fn main() -> Result<(), String> {
//!     let model = Box::new(DiffusionReaction::new(0.01, 0.1, 1.0, 50, 1.0)?);
//!     let boundaries = DomainBoundaries::inflow_outflow(1.0, model.setup_initial_state());
//!     let scenario = Scenario::new(model, boundaries);
//!
//!     let solver = BackwardEulerSolver::new();
//!     let config = SolverConfiguration::time_evolution(1.0, 1000);
//!     let result = solver.solve(&scenario, &config)?;
//!
//!     assert_eq!(result.len(), 1001);
//!     Ok(())
//! }
//! ```
//!
//! # Design Philosophy
//!
//! Each solver is:
//! - **Self-contained**: No shared mutable state
//! - **Stateless**: Can be reused for multiple simulations
//! - **Documented**: Complete rustdoc with mathematical background

pub mod explicit;
pub mod implicit;

// Re-exports for convenience
pub use explicit::UpwindEulerSolver;
pub use implicit::BackwardEulerSolver;
