//! Advection-Diffusion Front Propagation
//!
//! ∂C/∂t = −u·∂C/∂x + α·∂²C/∂x²
//!
//! Feeds a clean domain from a fixed inlet and watches the front
//! propagate with the explicit upwind solver. The time step is derived
//! from the stability bound, not chosen by hand.
//!
//! Run with:
//! ```bash
//! cargo run --example advection_snapshots
//! ```

use std::error::Error;

use transport_rs::models::AdvectionDiffusion;
use transport_rs::output::export::export_history_csv;
use transport_rs::output::visualization::{plot_profile_evolution, PlotConfig};
use transport_rs::physics::{PhysicalModel, PhysicalQuantity};
use transport_rs::solver::{
    DomainBoundaries, Scenario, Solver, SolverConfiguration, UpwindEulerSolver,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Advection-Diffusion: Upwind Front Propagation ===\n");

    // Physical parameters
    let alpha = 0.01;
    let velocity = 1.0;
    let length = 1.0;
    let n_points = 50;
    let inlet = 1.0;

    // Simulation parameters
    let total_time = 0.5;
    let safety_factor = 0.9;

    println!("Physical Parameters:");
    println!("  Domain length: {} m", length);
    println!("  Spatial points: {}", n_points);
    println!("  Diffusion alpha: {} m²/s", alpha);
    println!("  Velocity u: {} m/s", velocity);
    println!("  Inlet concentration: {} mol/L", inlet);

    let model = AdvectionDiffusion::new(alpha, velocity, length, n_points, inlet)?;

    let dx = model.dx();
    let dt_max = 1.0 / (2.0 * alpha / (dx * dx) + velocity / dx);
    println!("\nStability:");
    println!("  dx = {:.5} m", dx);
    println!("  dt_max = {:.6} s (bound)", dt_max);
    println!("  safety factor = {}", safety_factor);

    println!("\nSimulation:");
    println!("  Horizon: {} s\n", total_time);

    let grid = model.grid();
    let initial = model.setup_initial_state();
    let scenario = Scenario::new(
        Box::new(model),
        DomainBoundaries::inflow_outflow(inlet, initial),
    );

    let config = SolverConfiguration::stability_bounded(total_time, safety_factor);

    println!("Solving with Upwind Euler...");
    let start = std::time::Instant::now();
    let result = UpwindEulerSolver::new().solve(&scenario, &config)?;
    println!("✓ Completed in {:.3}s", start.elapsed().as_secs_f64());

    let steps = result.len() - 1;
    println!("  {} steps of dt = {:.6} s", steps, total_time / steps as f64);

    // Boundary check on the final state
    let final_profile = result
        .final_state
        .get(PhysicalQuantity::Concentration)
        .and_then(|data| data.try_as_vector())
        .ok_or("Concentration not found")?;

    println!("\nFinal state:");
    println!("  C(x=0) = {:.10} (inlet)", final_profile[0]);
    println!(
        "  C(x=L) = {:.10}, C(x=L-dx) = {:.10} (zero gradient)",
        final_profile[n_points - 1],
        final_profile[n_points - 2]
    );

    // Front position (C = 0.5)
    let mut front = None;
    for i in 0..n_points - 1 {
        if final_profile[i] >= 0.5 && final_profile[i + 1] < 0.5 {
            let weight = (final_profile[i] - 0.5) / (final_profile[i] - final_profile[i + 1]);
            front = Some((i as f64 + weight) * dx);
            break;
        }
    }
    if let Some(position) = front {
        println!(
            "  Front position (C=0.5): {:.4} m (u·t = {:.4} m)",
            position,
            velocity * total_time
        );
    }

    // Outputs
    println!("\nGenerating outputs...");
    let tmp_dir = std::env::temp_dir();

    let plot_path = tmp_dir.join("advection_snapshots.png");
    let plot_config = PlotConfig::evolution(format!(
        "Advection-Diffusion: u = {}, alpha = {}",
        velocity, alpha
    ));
    plot_profile_evolution(&result, length, 6, plot_path.to_str().unwrap(), Some(&plot_config))?;
    println!("✓ {}", plot_path.display());

    // Full trajectory for external analysis
    let positions: Vec<f64> = grid.iter().cloned().collect();
    let mut history = nalgebra::DMatrix::zeros(result.len(), n_points);
    for (step, state) in result.state_trajectory.iter().enumerate() {
        let profile = state
            .get(PhysicalQuantity::Concentration)
            .and_then(|data| data.try_as_vector())
            .ok_or("Concentration not found")?;
        history.row_mut(step).copy_from(&profile.transpose());
    }

    let csv_path = tmp_dir.join("advection_history.csv");
    export_history_csv(
        &result.time_points,
        &positions,
        &history,
        csv_path.to_str().unwrap(),
        None,
    )?;
    println!("✓ {}", csv_path.display());

    println!("\n=== Simulation Complete ===");
    println!("Expected: a front advected at u, smoothed by diffusion,");
    println!("held at C = {} on the inlet side.", inlet);

    Ok(())
}
