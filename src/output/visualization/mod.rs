//! Visualization module for transport simulation results
//!
//! This module provides tools to visualize simulation results using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profile**: Spatial plots (concentration profile vs position)
//!
//! # Quick Start
//!
//! ## Final Profile
//!
//! ```rust,ignore
//! use transport_rs::output::visualization::{plot_profile, PlotConfig};
//!
//! let result = solver.solve(&scenario, &config)?;
//!
//! // Plot with default config
//! plot_profile(&result, 1.0, "profile.png", None)?;
//!
//! // Or with custom config
//! let config = PlotConfig::spatial_profile("Diffusion-Reaction, k = 0.1");
//! plot_profile(&result, 1.0, "study.png", Some(&config))?;
//! ```
//!
//! ## Time Snapshots of a Transient
//!
//! ```rust,ignore
//! use transport_rs::output::visualization::plot_profile_evolution;
//!
//! plot_profile_evolution(&result, 1.0, 6, "evolution.png", None)?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Final spatial profile | `plot_profile` |
//! | Compare profiles (grid study, parameter sweep) | `plot_profile_comparison` |
//! | Profile evolution over time | `plot_profile_evolution` |

pub mod config;
pub mod profile;

pub use config::PlotConfig;

pub use profile::{plot_profile, plot_profile_comparison, plot_profile_evolution};
