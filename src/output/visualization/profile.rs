//! Spatial concentration profile plotting
//!
//! This module provides plotting functions for spatial profiles: the
//! final C(x) distribution of a run, overlaid profiles from different
//! runs, and time-snapshot views of a transient.
//!
//! # Usage
//!
//! ```rust,ignore
//! use transport_rs::output::visualization::plot_profile;
//!
//! let result = solver.solve(&scenario, &config)?;
//! plot_profile(&result, 1.0, "profile.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::physics::PhysicalQuantity;
use crate::solver::SimulationResult;

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot the final spatial profile of a simulation
///
/// Plots the concentration profile C(x) at the final time step, which
/// is the quantity of interest for the implicit diffusion-reaction runs
/// and the end state of the explicit advection-diffusion runs.
///
/// # Arguments
///
/// * `result` - Simulation result containing state trajectory
/// * `domain_length` - Physical length of the domain \[m\]
/// * `output_path` - Path to save the plot (PNG or SVG)
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// plot_profile(&result, 1.0, "profile.png", None)?;
/// ```
pub fn plot_profile(
    result: &SimulationResult,
    domain_length: f64,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let final_state = result
        .state_trajectory
        .last()
        .ok_or("Empty trajectory")?;

    let concentration = final_state
        .get(PhysicalQuantity::Concentration)
        .and_then(|data| data.try_as_vector())
        .ok_or("Concentration not found")?;

    let n_points = concentration.len();

    // Reconstruct the uniform grid the models discretize on
    let x_values: Vec<f64> = (0..n_points)
        .map(|i| (i as f64 / (n_points - 1) as f64) * domain_length)
        .collect();

    let conc_vec: Vec<f64> = concentration.iter().cloned().collect();

    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::spatial_profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // Determine plot range
    let max_conc = conc_vec
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);

    // Determine backend and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, &x_values, &conc_vec, config, domain_length, max_conc)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, &x_values, &conc_vec, config, domain_length, max_conc)
        }
    }
}

/// Implementation for single-profile plotting with concrete backend
fn plot_profile_impl<DB: DrawingBackend>(
    backend: DB,
    x_values: &[f64],
    concentration: &[f64],
    config: &PlotConfig,
    max_x: f64,
    max_conc: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_x, 0.0..(max_conc * 1.1))?;

    if config.show_grid {
        chart.configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.3}", x))
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;
    }

    chart.draw_series(LineSeries::new(
        x_values.iter().zip(concentration.iter()).map(|(x, c)| (*x, *c)),
        ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
    ))?
        .label("Concentration Profile")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color)
        });

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Plot multiple spatial profiles for comparison
///
/// Overlays multiple concentration profiles on the same axes. Useful
/// for grid refinement studies (coarse grids versus a high-resolution
/// reference) or for comparing different parameter combinations.
///
/// # Arguments
///
/// * `profiles` - Vec of (label, x_values, concentration)
/// * `output_path` - Path to save the plot
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// let profiles = vec![
///     ("nx = 50", x_coarse.as_slice(), c_coarse.as_slice()),
///     ("nx = 1000", x_fine.as_slice(), c_fine.as_slice()),
/// ];
/// plot_profile_comparison(profiles, "refinement.png", None)?;
/// ```
pub fn plot_profile_comparison(
    profiles: Vec<(&str, &[f64], &[f64])>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }

    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::spatial_profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // Determine plot range
    let max_x = profiles
        .iter()
        .map(|(_, x, _)| x.last().copied().unwrap_or(0.0))
        .fold(0.0, f64::max);

    let max_conc = profiles
        .iter()
        .flat_map(|(_, _, c)| c.iter())
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);

    // Determine backend and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &profiles, config, max_x, max_conc)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &profiles, config, max_x, max_conc)
        }
    }
}

/// Implementation for comparison plotting with concrete backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    profiles: &[(&str, &[f64], &[f64])],
    config: &PlotConfig,
    max_x: f64,
    max_conc: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_x, 0.0..(max_conc * 1.1))?;

    if config.show_grid {
        chart.configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.3}", x))
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;
    }

    // Draw each profile with its palette color
    for (idx, (label, x_values, concentration)) in profiles.iter().enumerate() {
        let color = config.get_series_color(idx);

        chart
            .draw_series(LineSeries::new(
                x_values.iter().zip(concentration.iter()).map(|(x, c)| (*x, *c)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Plot spatial profile evolution (multiple time snapshots)
///
/// Shows how the spatial profile evolves over time by plotting
/// snapshots at evenly spaced indices, always including the first
/// and last recorded states.
///
/// # Arguments
///
/// * `result` - Simulation result
/// * `domain_length` - Domain length \[m\]
/// * `n_snapshots` - Number of time snapshots to show (≥ 2)
/// * `output_path` - Path to save the plot
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// // Show 6 profiles at different times
/// plot_profile_evolution(&result, 1.0, 6, "evolution.png", None)?;
/// ```
pub fn plot_profile_evolution(
    result: &SimulationResult,
    domain_length: f64,
    n_snapshots: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if result.state_trajectory.is_empty() {
        return Err("Empty trajectory".into());
    }
    if n_snapshots < 2 {
        return Err("Need at least 2 snapshots".into());
    }

    let total_steps = result.state_trajectory.len();
    let n_snapshots = n_snapshots.min(total_steps);

    // Evenly spaced indices including the first and last state
    let mut profiles = Vec::new();
    for i in 0..n_snapshots {
        let idx = if n_snapshots == 1 {
            total_steps - 1
        } else {
            (i * (total_steps - 1)) / (n_snapshots - 1)
        };
        let state = &result.state_trajectory[idx];
        let time = result.time_points[idx];

        let concentration = state
            .get(PhysicalQuantity::Concentration)
            .and_then(|data| data.try_as_vector())
            .ok_or("Concentration not found")?;

        let n_points = concentration.len();
        let x_values: Vec<f64> = (0..n_points)
            .map(|j| (j as f64 / (n_points - 1) as f64) * domain_length)
            .collect();

        let c_vec: Vec<f64> = concentration.iter().cloned().collect();

        profiles.push((format!("t = {:.2} s", time), x_values, c_vec));
    }

    // Plot using the comparison function
    let profile_refs: Vec<(&str, &[f64], &[f64])> = profiles
        .iter()
        .map(|(label, x, c)| (label.as_str(), x.as_slice(), c.as_slice()))
        .collect();

    let default_config = PlotConfig::evolution(NO_TITLE);
    let config = config.or(Some(&default_config));

    plot_profile_comparison(profile_refs, output_path, config)
}

// =================================================================================================
// Tests
// =================================================================================================
