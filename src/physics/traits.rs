//! Physical models traits and types
//!
//! This module defines the core API for physical models:
//! - `PhysicalModel`: trait for all physical models
//! - `PhysicalState`: flexible state container
//! - `PhysicalQuantity`: type-safe quantity identifiers
//! - `LinearImplicitModel` / `StabilityBoundedModel`: optional capability
//!   traits for models that support implicit assembly or stability-bounded
//!   explicit stepping

use crate::physics::PhysicalData;
use crate::solver::operator::TridiagonalOperator;
use nalgebra::DVector;
use std::collections::HashMap;

// =================================================================================================
// Physical Quantities (Type-safe Identifiers)
// =================================================================================================

/// Known physical quantities (type-safe enum)
///
/// # Enum type safety
///
/// If you need to track quantities other than those available in this
/// enumeration, use `Custom` in order to maintain type safety.
///
/// # Example
/// ```
/// use transport_rs::physics::{PhysicalQuantity, PhysicalState, PhysicalData};
///
/// let viscosity = PhysicalQuantity::Custom("Viscosity");
/// let mut state = PhysicalState::empty();
///
/// state.set(viscosity, PhysicalData::uniform_vector(100, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    /// Concentration (mol/L)
    Concentration,

    /// Temperature (K)
    Temperature,

    /// Pressure (Pa)
    Pressure,

    /// Custom quantity (for user extension)
    Custom(&'static str),
}

impl std::fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysicalQuantity::Concentration => write!(f, "Concentration"),
            PhysicalQuantity::Temperature => write!(f, "Temperature"),
            PhysicalQuantity::Pressure => write!(f, "Pressure"),
            PhysicalQuantity::Custom(name) => write!(f, "{}", name),
        }
    }
}

// =================================================================================================
// Physical State (Flexible State Container)
// =================================================================================================

/// Physical state of the system
///
/// This structure contains all physical quantities at a given time or iteration.
/// It is flexible since it can store concentration, temperature, pressure, etc.
///
/// # Type Safety
///
/// This structure uses enum `PhysicalQuantity` for quantities instead of strings.
///
/// # Example
/// ```
/// use transport_rs::physics::{PhysicalQuantity, PhysicalState, PhysicalData};
///
/// let mut state = PhysicalState::new(
///     PhysicalQuantity::Concentration,
///     PhysicalData::uniform_vector(50, 0.0),
/// );
/// state.set(PhysicalQuantity::Temperature, PhysicalData::Scalar(293.15));
/// ```
#[derive(Debug, Clone)]
pub struct PhysicalState {
    /// Physical quantities stored in a dictionary
    pub(crate) quantities: HashMap<PhysicalQuantity, PhysicalData>,

    /// Scalar metadata (optional, e.g. simulated time, mass, etc.)
    metadata: HashMap<String, f64>,
}

impl PhysicalState {
    /// Create a new state with primary quantity
    pub fn new(quantity: PhysicalQuantity, value: PhysicalData) -> Self {
        let mut quantities = HashMap::new();
        quantities.insert(quantity, value);

        Self {
            quantities,
            metadata: HashMap::new(),
        }
    }

    /// Create an empty state
    pub fn empty() -> Self {
        Self {
            quantities: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    /// Get a quantity by type
    pub fn get(&self, quantity: PhysicalQuantity) -> Option<&PhysicalData> {
        self.quantities.get(&quantity)
    }

    /// Get mutable reference to a quantity
    pub fn get_mut(&mut self, quantity: PhysicalQuantity) -> Option<&mut PhysicalData> {
        self.quantities.get_mut(&quantity)
    }

    /// Set a quantity
    pub fn set(&mut self, quantity: PhysicalQuantity, value: PhysicalData) {
        self.quantities.insert(quantity, value);
    }

    /// List of available physical state quantities
    pub fn available_quantities(&self) -> Vec<PhysicalQuantity> {
        self.quantities.keys().cloned().collect()
    }

    /// Get a metadata
    pub fn get_metadata(&self, key: &str) -> Option<f64> {
        self.metadata.get(key).copied()
    }

    /// Set a metadata
    pub fn set_metadata(&mut self, key: String, value: f64) {
        self.metadata.insert(key, value);
    }
}

// Operator overloading for numerical operations

impl std::ops::Add for PhysicalState {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        for (quantity, value) in rhs.quantities {
            if let Some(existing_value) = self.quantities.remove(&quantity) {
                self.quantities.insert(quantity, existing_value + value);
            } else {
                self.quantities.insert(quantity, value);
            }
        }
        self
    }
}

impl std::ops::Mul<f64> for PhysicalState {
    type Output = Self;

    fn mul(mut self, scalar: f64) -> Self::Output {
        for data in self.quantities.values_mut() {
            *data = data.clone() * scalar;
        }
        self
    }
}

// =================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical models
///
/// # Responsibility
/// Computes the physics equations of a system at a given state.
/// Does NOT solve them (that's the Solver's job).
///
/// The model provides the "physics" (equations), the Solver provides
/// the "numerics" (method to solve them).
///
/// # Stability
/// This trait is STABLE since v0.1.0 and will NEVER be modified.
/// Extensions use separate optional traits ([`LinearImplicitModel`],
/// [`StabilityBoundedModel`]) discovered through the defaulted
/// `as_*` accessors below.
///
/// # Mandatory Point
/// All new physical models MUST implement this trait.
pub trait PhysicalModel: Send + Sync {
    /// Number of spatial points
    ///
    /// Used by the solver to allocate vectors
    fn points(&self) -> usize;

    /// Computes the physics at a given state
    ///
    /// # Arguments
    /// * `state` - Current physical state of the system
    ///
    /// # Returns
    /// Result of evaluating the physics (interpretation depends on model type)
    ///
    /// # Physical Interpretation
    ///
    /// For time-dependent models (method of lines):
    ///   - Returns right-hand side f(y) of dy/dt = f(y)
    ///   - Solver will integrate this over time (explicit Euler, etc.)
    ///   - Example: advection-diffusion transport along a 1D domain
    ///
    /// # Note
    /// This method encapsulates ALL the physics:
    /// - Source/sink terms (reaction, decay)
    /// - Spatial derivatives (finite differences)
    /// - Boundary conditions
    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState;

    /// Creates the initial state for this physical model
    ///
    /// Defines what variables the model tracks (concentration, temperature, etc.)
    /// and their initial spatial distribution.
    fn setup_initial_state(&self) -> PhysicalState;

    /// Name of the model (used for display and logging)
    fn name(&self) -> &str;

    /// The quantity this model evolves
    ///
    /// Solvers read and write this quantity in the state. Defaults to
    /// concentration, the quantity every transport model here tracks.
    fn primary_quantity(&self) -> PhysicalQuantity {
        PhysicalQuantity::Concentration
    }

    /// Inlet Dirichlet value the model's discretization fixes, if any
    ///
    /// [`Scenario::validate`](crate::solver::Scenario::validate) compares
    /// this against the declared boundary conditions, so a scenario whose
    /// typed inlet disagrees with the model is rejected before any
    /// stepping instead of silently solving with the model's value.
    fn inlet_value(&self) -> Option<f64> {
        None
    }

    /// Description of the model (optional)
    fn description(&self) -> Option<&String> {
        None
    }

    /// Implicit-assembly capability, if this model supports it
    ///
    /// Models whose discretized operator is linear and step-invariant
    /// override this to return `Some(self)`, making them usable with
    /// [`BackwardEulerSolver`](crate::solver::BackwardEulerSolver).
    fn as_linear_implicit(&self) -> Option<&dyn LinearImplicitModel> {
        None
    }

    /// Stability-bound capability, if this model supports it
    ///
    /// Models with a known explicit stability limit override this to
    /// return `Some(self)`, making them usable with
    /// [`UpwindEulerSolver`](crate::solver::UpwindEulerSolver) in
    /// stability-bounded mode.
    fn as_stability_bounded(&self) -> Option<&dyn StabilityBoundedModel> {
        None
    }
}

// =================================================================================================
// Optional Capability Traits
// =================================================================================================

/// Models whose backward-Euler step reduces to one linear solve
///
/// The operator depends only on the model parameters and dt — never on the
/// state vector — so the solver builds it ONCE per run and reuses it across
/// every time step. The right-hand side is rebuilt each step from the
/// current state and the fixed boundary values.
pub trait LinearImplicitModel: PhysicalModel {
    /// Assemble the step operator A for time step `dt`
    ///
    /// A encodes the discretized spatial operator, source terms and the
    /// boundary rows. Step-invariant: must not depend on any state vector.
    fn assemble_operator(&self, dt: f64) -> Result<TridiagonalOperator, String>;

    /// Assemble the right-hand side b from the current state
    ///
    /// Transient: recomputed every step, discarded after the solve.
    fn assemble_rhs(&self, state: &PhysicalState, dt: f64) -> Result<DVector<f64>, String>;
}

/// Models with a closed-form explicit stability bound
///
/// Used by stability-bounded explicit solvers to pick dt automatically
/// and to enforce boundary values in place before each update.
pub trait StabilityBoundedModel: PhysicalModel {
    /// Largest dt for which the explicit update remains stable
    ///
    /// The solver multiplies this by a safety factor < 1 before use.
    fn stable_time_step(&self) -> f64;

    /// Enforce the boundary conditions directly on a profile
    ///
    /// Called before every explicit update so the boundary values hold at
    /// every step, not merely at initialization.
    fn apply_boundaries(&self, profile: &mut DVector<f64>);
}

// =================================================================================================
// Tests
// =================================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_physical_state() {
        let physics = PhysicalState::empty();

        assert_eq!(physics.quantities.len(), 0);
        assert_eq!(physics.metadata.len(), 0);
    }

    #[test]
    fn test_new_physical_state() {
        let quantity = PhysicalQuantity::Custom("Tesla");
        let physics = PhysicalState::new(quantity, PhysicalData::from_vec(vec![1.0, 2.0]));

        assert_eq!(physics.quantities.len(), 1);
        assert_eq!(physics.metadata.len(), 0);
        assert!(physics.available_quantities().contains(&quantity));

        let values = physics.get(quantity).unwrap();

        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_modify_physical_state() {
        let mut physics = PhysicalState::new(
            PhysicalQuantity::Custom("Tesla"),
            PhysicalData::from_vec(vec![1.0, 2.0]),
        );

        physics.set(
            PhysicalQuantity::Custom("Tesla"),
            PhysicalData::from_vec(vec![1.0, 2.0, 10.0]),
        );

        assert_eq!(physics.available_quantities().len(), 1);
        assert_eq!(
            physics.get(PhysicalQuantity::Custom("Tesla")).unwrap().len(),
            3
        );
    }

    #[test]
    fn test_metadata() {
        let mut physics = PhysicalState::new(
            PhysicalQuantity::Custom("Tesla"),
            PhysicalData::from_vec(vec![1.0, 2.0]),
        );

        physics.set_metadata("molecule".to_string(), 10.0);
        assert_eq!(physics.get_metadata("molecule").unwrap(), 10.0);
    }

    #[test]
    fn test_addition() {
        let state_one = PhysicalState::new(
            PhysicalQuantity::Pressure,
            PhysicalData::from_vec(vec![780.0, 1024.0]),
        );
        let state_two = PhysicalState::new(
            PhysicalQuantity::Pressure,
            PhysicalData::from_vec(vec![230.0, -24.0]),
        );
        let false_one = PhysicalState::new(
            PhysicalQuantity::Temperature,
            PhysicalData::from_vec(vec![0.0, 273.15]),
        );

        let pressure = state_one.clone() + state_two;
        let temperature = false_one + state_one;

        assert_eq!(
            pressure.get(PhysicalQuantity::Pressure).unwrap().as_vector()[0],
            1010.0
        );
        assert_eq!(
            pressure.get(PhysicalQuantity::Pressure).unwrap().as_vector()[1],
            1000.0
        );

        assert_eq!(
            temperature
                .get(PhysicalQuantity::Temperature)
                .unwrap()
                .as_vector()[0],
            0.0
        );
        assert_eq!(
            temperature
                .get(PhysicalQuantity::Pressure)
                .unwrap()
                .as_vector()[0],
            780.0
        );
    }

    #[test]
    fn test_multiplication() {
        let mut state_one = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vec(vec![1.0, 2.0]),
        );

        state_one = state_one * 10.0;

        assert_eq!(
            state_one
                .get(PhysicalQuantity::Concentration)
                .unwrap()
                .as_vector()[0],
            10.0
        );
        assert_eq!(
            state_one
                .get(PhysicalQuantity::Concentration)
                .unwrap()
                .as_vector()[1],
            20.0
        );

        let result = state_one.clone() * 2.0;

        assert_eq!(
            result
                .get(PhysicalQuantity::Concentration)
                .unwrap()
                .as_vector()[0],
            20.0
        );
        assert_eq!(
            result
                .get(PhysicalQuantity::Concentration)
                .unwrap()
                .as_vector()[1],
            40.0
        );
    }
}
