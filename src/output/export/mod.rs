//! Export module for simulation results
//!
//! Each format lives in its own sub-module; adding a format means
//! adding a file, without modifying existing code.
//!
//! # Available formats
//!
//! | Format  | Module  |
//! |---------|---------|
//! | CSV     | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use transport_rs::output::export::{export_profile_csv, export_history_csv};
//!
//! // Final spatial profile
//! export_profile_csv(x.as_slice(), profile.as_slice(), "profile.csv", None)?;
//!
//! // Full trajectory (time rows, position columns)
//! export_history_csv(&t, x.as_slice(), &history, "history.csv", None)?;
//! ```

pub mod csv;

// Re-export the most commonly used items at the module level so users can write:
//   use transport_rs::output::export::{export_profile_csv, CsvConfig};
// instead of the full sub-module path.
pub use csv::{
    export_history_csv, export_profile_csv, export_profiles_csv, CsvConfig, CsvMetadata,
};
