//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    advection_scenario,
    diffusion_scenario,
    profile_of,
    relative_error,
    sample_at,
};
