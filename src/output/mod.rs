//! Output module for simulation results
//!
//! This module provides tools to output simulation results in various formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use transport_rs::output::visualization::plot_profile;
//!
//! // Generate PNG plot of the final profile
//! plot_profile(&result, 1.0, "profile.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use transport_rs::output::export::export_profile_csv;
//!
//! // Export to CSV
//! export_profile_csv(x.as_slice(), profile.as_slice(), "profile.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: For human interpretation (plots, graphs)
//! - **Export**: For programmatic analysis (CSV)
//!
//! Both sub-modules accept simple `&[f64]` slices for maximum flexibility.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    plot_profile,
    plot_profile_comparison,
    plot_profile_evolution,
    PlotConfig,
};

pub use export::{
    export_history_csv,
    export_profile_csv,
    export_profiles_csv,
    CsvConfig,
};
