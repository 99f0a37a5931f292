//! transport-rs: 1D Transport Simulation Framework
//!
//! A flexible and extensible framework for simulating one-dimensional
//! transport processes (diffusion, advection, first-order reaction)
//! using finite-difference methods. Built with Rust for performance and safety.
//!
//! # Architecture
//!
//! transport-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for easy extension
//!    - Type-safe state management
//!    - Typed boundary conditions (Dirichlet, Neumann)
//!
//! # The Two Problems
//!
//! | Equation | Model | Solver | Time step |
//! |----------|-------|--------|-----------|
//! | ∂C/∂t = α·∂²C/∂x² − k·C | [`DiffusionReaction`](models::DiffusionReaction) | [`BackwardEulerSolver`](solver::BackwardEulerSolver) | any dt > 0 |
//! | ∂C/∂t = −u·∂C/∂x + α·∂²C/∂x² | [`AdvectionDiffusion`](models::AdvectionDiffusion) | [`UpwindEulerSolver`](solver::UpwindEulerSolver) | derived from stability bound |
//!
//! Both problems fix the inlet concentration (Dirichlet at x = 0) and
//! impose zero gradient at the outlet (Neumann at x = Lx).
//!
//! # Quick Start
//!
//! For a profile without the plumbing, use the one-call entry points:
//!
//! ```rust
//! use transport_rs::api::{solve_explicit, solve_implicit};
//!
//! # fn main() -> Result<(), String> {
//! // Implicit diffusion-reaction: final profile after 1000 steps of 0.001 s
//! let (x, profile) = solve_implicit(0.01, 0.1, 50, 1000, 0.001, 1.0, 1.0)?;
//! assert_eq!(profile[0], 1.0); // inlet held exactly
//!
//! // Explicit advection-diffusion: full trajectory up to t = 0.5 s
//! let (x, t, history) = solve_explicit(0.01, 1.0, 1.0, 1.0, 50, 0.5, 0.9)?;
//! assert_eq!(history.nrows(), t.len());
//! # Ok(())
//! # }
//! ```
//!
//! For trajectory access, custom boundaries or solver metadata, use the
//! scenario API:
//!
//! ```rust
//! use transport_rs::models::DiffusionReaction;
//! use transport_rs::physics::PhysicalModel;
//! use transport_rs::solver::{
//!     BackwardEulerSolver, DomainBoundaries, Scenario, Solver, SolverConfiguration,
//! };
//!
//! # fn main() -> Result<(), String> {
//! // 1. Configure physical model and scenario
//! let model = DiffusionReaction::new(0.01, 0.1, 1.0, 50, 1.0)?;
//! let initial_state = model.setup_initial_state();
//! let boundaries = DomainBoundaries::inflow_outflow(1.0, initial_state);
//! let scenario = Scenario::new(Box::new(model), boundaries);
//!
//! // 2. Configure solver
//! let config = SolverConfiguration::time_evolution(
//!     1.0,     // total time [s]
//!     1000,    // time steps
//! );
//!
//! // 3. Run simulation
//! let solver = BackwardEulerSolver::new();
//! let result = solver.solve(&scenario, &config)?;
//!
//! // 4. Access results
//! println!("Simulation completed!");
//! println!("Trajectory length: {}", result.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Physical model traits and state containers (equations)
//! - [`models`]: The two transport models
//! - [`solver`]: Numerical solvers (methods)
//! - [`api`]: One-call entry points for the two problems
//! - [`sweep`]: Parameter sweeps over the implicit solver
//! - [`output`]: Result visualization and export

// Core modules
pub mod physics;

pub mod models;
pub mod solver;

pub mod api;
pub mod output;
pub mod sweep;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use transport_rs::prelude::*;
    //! ```
    pub use crate::models::{AdvectionDiffusion,
                            DiffusionReaction};
    pub use crate::physics::{PhysicalData,
                             PhysicalQuantity,
                             PhysicalState,
                             PhysicalModel};
    pub use crate::solver::{Solver,
                            SolverConfiguration,
                            SolverType,
                            Scenario,
                            DomainBoundaries,
                            SimulationResult,
                            BackwardEulerSolver,
                            UpwindEulerSolver};
}
