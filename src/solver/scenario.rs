//! Simulation scenario definition
//!
//! A scenario combines a physical model with boundary conditions.
use crate::physics::traits::PhysicalModel;
use crate::solver::boundary::{BoundaryCondition, DomainBoundaries};

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical model (equations)
/// - Boundary conditions (domain boundaries)
///
/// # Design
///
/// The same scenario can be solved with different numerical methods.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust,ignore
/// // Define scenario
/// let scenario = Scenario::new(model, boundaries);
///
/// // Solve with different methods
/// let result1 = implicit_solver.solve(&scenario, &config1)?;
/// let result2 = explicit_solver.solve(&scenario, &config2)?;
/// ```
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// Conditions and boundaries
    pub conditions: DomainBoundaries,
}

impl Scenario {
    /// Create a scenario
    pub fn new(model: Box<dyn PhysicalModel>, conditions: DomainBoundaries) -> Self {
        Self { model, conditions }
    }

    /// Verifying scenario content (boundaries, grid, declared conditions)
    ///
    /// The typed conditions are cross-checked against the model: the
    /// models bake their boundary handling into the discretization, so a
    /// declaration they do not implement must be rejected here rather
    /// than silently solved with the model's own values.
    pub fn validate(&self) -> Result<(), String> {
        self.conditions.validate()?;

        // The initial profile must match the model's grid
        if let Some(quantity) = self.conditions.initial.available_quantities().first() {
            if let Some(data) = self.conditions.initial.get(*quantity) {
                if data.is_vector() && data.len() != self.model.points() {
                    return Err(format!(
                        "Initial state has {} points but model '{}' discretizes {} points",
                        data.len(),
                        self.model.name(),
                        self.model.points()
                    ));
                }
            }
        }

        // Declared inlet: must be Dirichlet, at the value the model fixes
        match self.conditions.inlet {
            BoundaryCondition::Dirichlet { value } => {
                if let Some(model_value) = self.model.inlet_value() {
                    if value != model_value {
                        return Err(format!(
                            "Declared inlet value {} does not match model '{}' inlet concentration {}",
                            value,
                            self.model.name(),
                            model_value
                        ));
                    }
                }
            }
            BoundaryCondition::Neumann { .. } => {
                return Err(format!(
                    "Model '{}' fixes the inlet value (Dirichlet); a Neumann inlet is not implemented",
                    self.model.name()
                ));
            }
        }

        // Declared outlet: only the zero-gradient Neumann condition is
        // implemented by the discretizations
        match self.conditions.outlet {
            BoundaryCondition::Neumann { gradient } => {
                if gradient != 0.0 {
                    return Err(format!(
                        "Only a zero-gradient outlet is implemented, got gradient {}",
                        gradient
                    ));
                }
            }
            BoundaryCondition::Dirichlet { .. } => {
                return Err("Only a zero-gradient Neumann outlet is implemented".to_string());
            }
        }

        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }

    /// Number of spatial points in the model's grid
    pub fn points(&self) -> usize {
        self.model.points()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("points", &self.points())
            .field("inlet", &self.conditions.inlet)
            .field("outlet", &self.conditions.outlet)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::traits::{PhysicalQuantity, PhysicalState};
    use crate::physics::PhysicalData;
    use crate::solver::boundary::DomainBoundaries;

    // Mocking a Physical model
    struct MockModel;

    impl PhysicalModel for MockModel {
        fn points(&self) -> usize {
            10
        }

        fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
            state.clone()
        }

        fn setup_initial_state(&self) -> PhysicalState {
            PhysicalState::new(
                PhysicalQuantity::Concentration,
                PhysicalData::uniform_vector(10, 0.0),
            )
        }

        fn name(&self) -> &str {
            "MockModel"
        }

        fn inlet_value(&self) -> Option<f64> {
            Some(1.0)
        }
    }

    #[test]
    fn test_scenario_creation() {
        let model = Box::new(MockModel);
        assert_eq!(model.points(), 10);

        let boundaries = DomainBoundaries::inflow_outflow(1.0, model.setup_initial_state());
        let scenario = Scenario::new(model, boundaries);
        assert_eq!(scenario.get_model_name(), "MockModel");
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_scenario_rejects_grid_mismatch() {
        let model = Box::new(MockModel);
        let wrong_initial = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::uniform_vector(7, 0.0),
        );

        let boundaries = DomainBoundaries::inflow_outflow(1.0, wrong_initial);
        let scenario = Scenario::new(model, boundaries);

        let result = scenario.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("7 points"));
    }

    #[test]
    fn test_scenario_rejects_mismatched_inlet_value() {
        // The model fixes CE = 1.0; declaring 5.0 must fail validation
        // instead of silently solving with 1.0.
        let model = Box::new(MockModel);
        let boundaries = DomainBoundaries::inflow_outflow(5.0, model.setup_initial_state());
        let scenario = Scenario::new(model, boundaries);

        let result = scenario.validate();
        assert!(result.is_err());
        let message = result.unwrap_err();
        assert!(message.contains("inlet"), "unexpected error: {}", message);
        assert!(message.contains("5"), "unexpected error: {}", message);
    }

    #[test]
    fn test_scenario_rejects_neumann_inlet() {
        use crate::solver::boundary::BoundaryCondition;

        let model = Box::new(MockModel);
        let boundaries = DomainBoundaries::new(
            BoundaryCondition::Neumann { gradient: 0.0 },
            BoundaryCondition::Neumann { gradient: 0.0 },
            model.setup_initial_state(),
        );
        let scenario = Scenario::new(model, boundaries);

        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_scenario_rejects_unimplemented_outlet() {
        use crate::solver::boundary::BoundaryCondition;

        // Dirichlet outlet
        let model = Box::new(MockModel);
        let boundaries = DomainBoundaries::new(
            BoundaryCondition::Dirichlet { value: 1.0 },
            BoundaryCondition::Dirichlet { value: 0.0 },
            model.setup_initial_state(),
        );
        assert!(Scenario::new(model, boundaries).validate().is_err());

        // Non-zero outlet gradient
        let model = Box::new(MockModel);
        let boundaries = DomainBoundaries::new(
            BoundaryCondition::Dirichlet { value: 1.0 },
            BoundaryCondition::Neumann { gradient: 0.5 },
            model.setup_initial_state(),
        );
        assert!(Scenario::new(model, boundaries).validate().is_err());
    }
}
