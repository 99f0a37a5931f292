//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! This module follows the same pattern as `PhysicalQuantity`:
//! - Central enum `SolverType` defines the type of numerical solution
//! - `SolverConfiguration` carries it plus optional metadata
//! - `SimulationResult` holds the trajectory and metadata
//!
//! # Stability Guarantee
//!
//! - `Solver` trait: STABLE since v0.1.0, will NEVER change
//! - `SolverType` enum: EXTENSIBLE (new variants can be added)
//! - Core structures: STABLE (fields won't be removed)

use crate::physics::PhysicalState;
use crate::solver::scenario::Scenario;
use std::collections::HashMap;

// =================================================================================================
// Central Solver Type Enumeration (Like PhysicalQuantity)
// =================================================================================================

/// Type of numerical solution method
///
/// # Design Pattern
///
/// Similar to `PhysicalQuantity`, this enum is the central abstraction
/// that defines what KIND of numerical solution we're computing.
///
/// Each variant carries the data specific to that solution type.
///
/// # Examples
///
/// ```rust
/// use transport_rs::solver::SolverType;
///
/// // Fixed-step time evolution: the caller chooses nt and dt
/// let solver_type = SolverType::TimeEvolution {
///     time_steps: 1000,
///     dt: 0.01,
/// };
///
/// // Stability-bounded time evolution: the solver derives dt from the
/// // model's explicit stability limit, scaled by a safety factor
/// let solver_type = SolverType::StabilityBounded {
///     total_time: 1.0,
///     safety_factor: 0.9,
/// };
/// ```
#[derive(Clone, Debug)]
pub enum SolverType {
    /// Time evolution with a caller-chosen number of steps
    ///
    /// Used by: implicit integrators (any dt is stable) and by explicit
    /// integrators when the caller deliberately fixes dt, e.g. grid
    /// studies or instability demonstrations.
    ///
    /// The step size is stored directly, so a caller-supplied dt is used
    /// bit-for-bit — it is never reconstructed from a total time, which
    /// would round it by an ulp for ratios like 0.3/3.
    ///
    /// # Parameters
    /// - `time_steps`: Number of time steps
    /// - `dt`: Time step size (seconds); total time is time_steps · dt
    TimeEvolution { time_steps: usize, dt: f64 },

    /// Time evolution with dt derived from the model's stability limit
    ///
    /// Used by: explicit integrators on models implementing
    /// `StabilityBoundedModel`. The solver computes
    /// dt = safety_factor · dt_max, takes nt = ceil(total_time / dt),
    /// then recomputes dt = total_time / nt so that nt·dt lands exactly
    /// on total_time.
    ///
    /// # Parameters
    /// - `total_time`: Total simulation time (seconds)
    /// - `safety_factor`: Fraction of dt_max to use, strictly in (0, 1)
    StabilityBounded { total_time: f64, safety_factor: f64 },
}

impl SolverType {
    /// Get name identifier
    pub fn name(&self) -> &str {
        match self {
            SolverType::TimeEvolution { .. } => "TimeEvolution",
            SolverType::StabilityBounded { .. } => "StabilityBounded",
        }
    }

    /// Validate that parameters are physically meaningful
    pub fn validate(&self) -> Result<(), String> {
        match self {
            SolverType::TimeEvolution { time_steps, dt } => {
                if *time_steps == 0 {
                    return Err("TimeSteps must be greater than 0".to_string());
                }
                if !(dt.is_finite() && *dt > 0.0) {
                    return Err(format!("Time step must be positive, got {}", dt));
                }
                Ok(())
            }
            SolverType::StabilityBounded {
                total_time,
                safety_factor,
            } => {
                if *total_time <= 0.0 {
                    return Err("Total time must be positive".to_string());
                }
                if !safety_factor.is_finite() || *safety_factor <= 0.0 || *safety_factor >= 1.0 {
                    return Err(format!(
                        "Safety factor must be strictly between 0 and 1, got {}",
                        safety_factor
                    ));
                }
                Ok(())
            }
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for numerical solver
///
/// # Design
///
/// Contains the `SolverType` which defines what kind of solution we want.
/// Factory methods cover the common cases.
///
/// # Examples
///
/// ```rust
/// use transport_rs::solver::SolverConfiguration;
///
/// // Fixed-step config for an implicit run
/// let config = SolverConfiguration::time_evolution(10.0, 1000);
/// config.validate().unwrap();
///
/// // Stability-bounded config for an explicit run
/// let config = SolverConfiguration::stability_bounded(1.0, 0.9);
/// config.validate().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct SolverConfiguration {
    /// Type of solver and its parameters
    pub solver_type: SolverType,
}

impl SolverConfiguration {
    /// Create a new configuration with a given solver type
    pub fn new(solver_type: SolverType) -> Self {
        Self { solver_type }
    }

    /// Create a time evolution configuration from a horizon and step count
    ///
    /// dt = total_time / time_steps. When the caller's natural input is a
    /// step size rather than a horizon, use [`Self::fixed_step`] — it
    /// keeps that dt bit-for-bit instead of round-tripping it through a
    /// product and a quotient.
    pub fn time_evolution(total_time: f64, time_steps: usize) -> Self {
        Self::new(SolverType::TimeEvolution {
            time_steps,
            dt: total_time / time_steps as f64,
        })
    }

    /// Create a time evolution configuration from a step size directly
    pub fn fixed_step(dt: f64, time_steps: usize) -> Self {
        Self::new(SolverType::TimeEvolution { time_steps, dt })
    }

    /// Create a stability-bounded time evolution configuration
    pub fn stability_bounded(total_time: f64, safety_factor: f64) -> Self {
        Self::new(SolverType::StabilityBounded {
            total_time,
            safety_factor,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        self.solver_type.validate()
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Result of a completed simulation
///
/// Holds the full time history (one state per stored step, including the
/// initial condition), the final state, and string metadata describing
/// how the result was produced (solver name, effective dt, step count).
///
/// # Fields
///
/// - `time_points[i]` is the physical time of `state_trajectory[i]`
/// - `final_state` is a clone of the last trajectory entry, kept
///   separately so that consumers interested only in the end state never
///   touch the trajectory
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Physical time of each stored state (seconds)
    pub time_points: Vec<f64>,

    /// One state per stored step, initial condition first
    pub state_trajectory: Vec<PhysicalState>,

    /// Final state of the simulation
    pub final_state: PhysicalState,

    /// Solver-provided metadata (name, dt, steps, ...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create a new result from trajectory data
    pub fn new(
        time_points: Vec<f64>,
        state_trajectory: Vec<PhysicalState>,
        final_state: PhysicalState,
    ) -> Self {
        Self {
            time_points,
            state_trajectory,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Number of stored states (including the initial condition)
    pub fn len(&self) -> usize {
        self.state_trajectory.len()
    }

    /// Check whether the trajectory is empty
    pub fn is_empty(&self) -> bool {
        self.state_trajectory.is_empty()
    }

    /// Attach a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Look up a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Numerical solver interface
///
/// A solver applies a numerical method to a [`Scenario`] (WHAT to solve)
/// under a [`SolverConfiguration`] (HOW to solve it) and returns the full
/// [`SimulationResult`].
///
/// Implementations are stateless across invocations: calling `solve`
/// twice with the same inputs produces the same output and no state is
/// carried between calls.
pub trait Solver {
    /// Run the simulation
    ///
    /// # Errors
    ///
    /// Returns `Err` for invalid configurations or scenarios, for linear
    /// solve failures, and when NaN/Inf values appear in the state
    /// mid-run.
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String>;

    /// Human-readable solver name
    fn name(&self) -> &str;

    /// Short description of the numerical method
    fn description(&self) -> String {
        format!("Numerical solver: {}", self.name())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{PhysicalData, PhysicalQuantity};

    #[test]
    fn test_time_evolution_validation() {
        let config = SolverConfiguration::time_evolution(10.0, 1000);
        assert!(config.validate().is_ok());

        let config = SolverConfiguration::time_evolution(-1.0, 1000);
        assert!(config.validate().is_err());

        let config = SolverConfiguration::time_evolution(10.0, 0);
        assert!(config.validate().is_err());

        let config = SolverConfiguration::fixed_step(0.0, 100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fixed_step_preserves_dt_exactly() {
        // 0.3 / 3 rounds to 0.09999999999999999, so a dt that survives
        // only as nt·dt / nt would come back off by an ulp. The
        // fixed-step path must carry the caller's value unchanged.
        let dt = 0.1;
        let config = SolverConfiguration::fixed_step(dt, 3);

        match config.solver_type {
            SolverType::TimeEvolution { dt: stored, .. } => assert_eq!(stored, dt),
            _ => unreachable!("fixed_step builds a TimeEvolution"),
        }

        // The horizon-based factory keeps its quotient semantics
        let config = SolverConfiguration::time_evolution(0.3, 3);
        match config.solver_type {
            SolverType::TimeEvolution { dt: stored, .. } => assert_eq!(stored, 0.3 / 3.0),
            _ => unreachable!("time_evolution builds a TimeEvolution"),
        }
    }

    #[test]
    fn test_stability_bounded_validation() {
        let config = SolverConfiguration::stability_bounded(1.0, 0.9);
        assert!(config.validate().is_ok());

        // Boundary values are rejected, not just out-of-range ones
        for bad in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            let config = SolverConfiguration::stability_bounded(1.0, bad);
            assert!(config.validate().is_err(), "safety {} accepted", bad);
        }

        let config = SolverConfiguration::stability_bounded(0.0, 0.9);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_solver_type_names() {
        let t = SolverType::TimeEvolution {
            time_steps: 10,
            dt: 0.1,
        };
        assert_eq!(t.name(), "TimeEvolution");

        let s = SolverType::StabilityBounded {
            total_time: 1.0,
            safety_factor: 0.5,
        };
        assert_eq!(s.name(), "StabilityBounded");
    }

    #[test]
    fn test_simulation_result_metadata() {
        let state = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::uniform_vector(5, 0.0),
        );
        let mut result = SimulationResult::new(vec![0.0], vec![state.clone()], state);
        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());

        result.add_metadata("solver", "Backward Euler");
        assert_eq!(result.get_metadata("solver"), Some("Backward Euler"));
        assert_eq!(result.get_metadata("missing"), None);
    }
}
