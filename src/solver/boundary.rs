//! Typed boundary conditions for a 1D domain with time convention
//!
//! # Design Philosophy
//!
//! The domain is a segment [0, Lx]. Each end carries a typed boundary
//! condition instead of a raw state:
//!
//! - `Dirichlet { value }`: the quantity is pinned to `value`
//! - `Neumann { gradient }`: the spatial derivative is pinned to `gradient`
//!
//! Typing the conditions lets
//! [`Scenario::validate`](crate::solver::Scenario::validate) check that
//! the discretization the model implements matches what the caller asked
//! for — a mismatched inlet value or an unimplemented condition type is
//! rejected before any stepping, rather than silently reinterpreted.

use crate::physics::PhysicalState;
use std::fmt;

// =================================================================================================
// Boundary Condition
// =================================================================================================

/// Boundary condition at one end of the domain
///
/// # Examples
///
/// ```rust
/// use transport_rs::solver::BoundaryCondition;
///
/// // Fixed inlet concentration
/// let inlet = BoundaryCondition::Dirichlet { value: 1.0 };
///
/// // Free outflow (zero-gradient)
/// let outlet = BoundaryCondition::Neumann { gradient: 0.0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition {
    /// Fixed value: C(boundary, t) = value for all t
    Dirichlet { value: f64 },

    /// Fixed gradient: ∂C/∂x(boundary, t) = gradient for all t
    Neumann { gradient: f64 },
}

impl BoundaryCondition {
    /// Get name identifier
    pub fn name(&self) -> &str {
        match self {
            BoundaryCondition::Dirichlet { .. } => "Dirichlet",
            BoundaryCondition::Neumann { .. } => "Neumann",
        }
    }

    /// The numeric parameter of the condition (value or gradient)
    pub fn parameter(&self) -> f64 {
        match self {
            BoundaryCondition::Dirichlet { value } => *value,
            BoundaryCondition::Neumann { gradient } => *gradient,
        }
    }

    /// Validate that the condition is numerically usable
    pub fn validate(&self) -> Result<(), String> {
        let parameter = self.parameter();
        if !parameter.is_finite() {
            return Err(format!(
                "{} boundary parameter must be finite, got {}",
                self.name(),
                parameter
            ));
        }
        Ok(())
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryCondition::Dirichlet { value } => write!(f, "Dirichlet (value = {})", value),
            BoundaryCondition::Neumann { gradient } => {
                write!(f, "Neumann (gradient = {})", gradient)
            }
        }
    }
}

// =================================================================================================
// Domain Boundaries
// =================================================================================================

/// Boundary conditions and initial condition for a 1D transient problem
///
/// # Design
///
/// - `inlet`: condition at x = 0
/// - `outlet`: condition at x = Lx
/// - `initial`: state of the whole domain at t = 0
///
/// The solver interprets how to enforce these; the struct only carries
/// the problem definition.
///
/// # Examples
///
/// ```rust
/// use transport_rs::physics::{PhysicalData, PhysicalQuantity, PhysicalState};
/// use transport_rs::solver::DomainBoundaries;
///
/// let initial = PhysicalState::new(
///     PhysicalQuantity::Concentration,
///     PhysicalData::uniform_vector(50, 0.0),
/// );
///
/// // Dirichlet inlet at CE = 1.0, zero-gradient outlet
/// let boundaries = DomainBoundaries::inflow_outflow(1.0, initial);
/// boundaries.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DomainBoundaries {
    /// Condition at x = 0
    pub inlet: BoundaryCondition,

    /// Condition at x = Lx
    pub outlet: BoundaryCondition,

    /// State of the domain at t = 0
    pub initial: PhysicalState,
}

impl DomainBoundaries {
    /// Generic constructor
    pub fn new(
        inlet: BoundaryCondition,
        outlet: BoundaryCondition,
        initial: PhysicalState,
    ) -> Self {
        Self {
            inlet,
            outlet,
            initial,
        }
    }

    // ====================================== Factory methods ======================================

    /// Dirichlet inlet at `inlet_value`, zero-gradient Neumann outlet
    ///
    /// The standard configuration for transport out of a reservoir:
    /// concentration held at the feed value on the left, free outflow on
    /// the right.
    pub fn inflow_outflow(inlet_value: f64, initial: PhysicalState) -> Self {
        Self::new(
            BoundaryCondition::Dirichlet { value: inlet_value },
            BoundaryCondition::Neumann { gradient: 0.0 },
            initial,
        )
    }

    // ===================================== Query methods =========================================

    /// Inlet Dirichlet value, if the inlet is Dirichlet
    pub fn inlet_value(&self) -> Option<f64> {
        match self.inlet {
            BoundaryCondition::Dirichlet { value } => Some(value),
            BoundaryCondition::Neumann { .. } => None,
        }
    }

    /// Validate the object contents
    pub fn validate(&self) -> Result<(), String> {
        self.inlet.validate()?;
        self.outlet.validate()?;

        if self.initial.available_quantities().is_empty() {
            return Err("Initial state must carry at least one quantity.".into());
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
