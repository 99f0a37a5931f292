//! Physics domain layer: WHAT is being simulated
//!
//! This module answers the question *"what is the physical problem?"*
//! independently of *"how do we march it in time?"* (which belongs to
//! [`crate::solver`]).
//!
//! # Contents
//!
//! - [`PhysicalModel`]: trait every transport model implements
//!   (grid, time derivative, initial state)
//! - [`LinearImplicitModel`]: optional capability for models whose
//!   semi-discrete form is linear, so an implicit solver can assemble
//!   the system matrix once and reuse it
//! - [`StabilityBoundedModel`]: optional capability for models that
//!   know their explicit stability limit and boundary enforcement
//! - [`PhysicalState`]: type-safe container of named quantities
//! - [`PhysicalQuantity`]: enum key preventing stringly-typed lookups
//! - [`PhysicalData`]: scalar/vector/matrix storage
//!
//! # Design Philosophy
//!
//! Models describe physics; solvers integrate it. A model never owns a
//! time step, and a solver never hard-codes a PDE. Capabilities beyond
//! the base trait (implicit assembly, stability bounds) are separate
//! optional traits, discovered at runtime through defaulted accessors
//! on [`PhysicalModel`].

pub mod data;
pub mod traits;

pub use data::PhysicalData;
pub use traits::{
    LinearImplicitModel, PhysicalModel, PhysicalQuantity, PhysicalState, StabilityBoundedModel,
};
