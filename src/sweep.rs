//! Parameter sweeps over the implicit diffusion-reaction solver
//!
//! The typical study solves the same equation for every combination of
//! diffusion coefficient, reaction rate and grid size, then compares the
//! profiles against a high-resolution reference. Each combination is a
//! pure function of its parameters — no combination reads another's
//! output or any shared mutable state — so the sweep is embarrassingly
//! parallel by construction.
//!
//! # Design
//!
//! - [`SweepPoint`]: one parameter combination (α, k, nx)
//! - [`SweepConfig`]: the values shared by every combination (Lx, CE,
//!   time stepping), passed explicitly instead of living in globals
//! - [`SweepRecord`]: immutable result of one combination — the point it
//!   came from plus either the solved profile or the error message
//!
//! Failures stay local: one singular system or invalid grid produces one
//! `Err` record and the remaining combinations still run. Nothing is
//! retried — the solvers are deterministic, so identical inputs would
//! fail identically.
//!
//! With the `parallel` feature enabled the combinations are dispatched
//! to Rayon's thread pool; otherwise they run sequentially in the same
//! order. The output order matches the input order in both cases.
//!
//! # Example
//!
//! ```rust
//! use transport_rs::sweep::{run_sweep, SweepConfig, SweepPoint};
//!
//! let points = SweepPoint::grid(&[0.01, 0.1, 0.5], &[0.02, 0.1, 0.5], &[50, 100]);
//! let config = SweepConfig {
//!     length: 1.0,
//!     inlet_concentration: 1.0,
//!     time_steps: 1000,
//!     dt: 0.001,
//! };
//!
//! let records = run_sweep(&points, &config);
//! assert_eq!(records.len(), 18);
//!
//! for record in &records {
//!     match &record.outcome {
//!         Ok(profile) => assert_eq!(profile.len(), record.point.spatial_points),
//!         Err(e) => eprintln!("{} failed: {}", record.point, e),
//!     }
//! }
//! ```

use crate::api::solve_implicit;
use nalgebra::DVector;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Sweep Point
// =================================================================================================

/// One parameter combination of a diffusion-reaction sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Diffusion coefficient α \[m²/s\]
    pub alpha: f64,

    /// First-order reaction rate k \[1/s\]
    pub reaction_rate: f64,

    /// Number of grid points nx
    pub spatial_points: usize,
}

impl SweepPoint {
    /// Create a single combination
    pub fn new(alpha: f64, reaction_rate: f64, spatial_points: usize) -> Self {
        Self {
            alpha,
            reaction_rate,
            spatial_points,
        }
    }

    /// Cartesian product of parameter values, α outermost
    ///
    /// Mirrors the nested loops of a by-hand study but produces a flat
    /// task list that a work pool can chew through independently.
    pub fn grid(alphas: &[f64], reaction_rates: &[f64], spatial_points: &[usize]) -> Vec<Self> {
        let mut points = Vec::with_capacity(alphas.len() * reaction_rates.len() * spatial_points.len());
        for &alpha in alphas {
            for &reaction_rate in reaction_rates {
                for &nx in spatial_points {
                    points.push(Self::new(alpha, reaction_rate, nx));
                }
            }
        }
        points
    }
}

impl fmt::Display for SweepPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alpha = {}, k = {}, nx = {}",
            self.alpha, self.reaction_rate, self.spatial_points
        )
    }
}

// =================================================================================================
// Sweep Configuration
// =================================================================================================

/// Values shared by every combination of a sweep
///
/// Passed explicitly into [`run_sweep`] — there is deliberately no
/// process-wide default. Hidden shared constants are how sweep
/// iterations end up coupled.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Domain length Lx \[m\]
    pub length: f64,

    /// Inlet concentration CE \[mol/L\]
    pub inlet_concentration: f64,

    /// Number of implicit time steps nt
    pub time_steps: usize,

    /// Time step size \[s\]
    pub dt: f64,
}

// =================================================================================================
// Sweep Record
// =================================================================================================

/// Immutable result of one sweep combination
#[derive(Debug, Clone)]
pub struct SweepRecord {
    /// The combination this record belongs to
    pub point: SweepPoint,

    /// Final concentration profile, or the error that stopped this run
    pub outcome: Result<DVector<f64>, String>,
}

impl SweepRecord {
    /// Whether this combination solved successfully
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

// =================================================================================================
// Sweep Execution
// =================================================================================================

/// Solve every combination, collecting one record per point
///
/// Records come back in input order. A failed combination yields an
/// `Err` record and never aborts the others.
pub fn run_sweep(points: &[SweepPoint], config: &SweepConfig) -> Vec<SweepRecord> {
    #[cfg(feature = "parallel")]
    {
        points
            .par_iter()
            .map(|point| solve_point(point, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        points
            .iter()
            .map(|point| solve_point(point, config))
            .collect()
    }
}

/// One independent task: solve a single combination
fn solve_point(point: &SweepPoint, config: &SweepConfig) -> SweepRecord {
    let outcome = solve_implicit(
        point.alpha,
        point.reaction_rate,
        point.spatial_points,
        config.time_steps,
        config.dt,
        config.length,
        config.inlet_concentration,
    )
    .map(|(_, profile)| profile);

    SweepRecord {
        point: *point,
        outcome,
    }
}

// =================================================================================================
// Tests
// =================================================================================================
