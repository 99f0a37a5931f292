//! CSV export functionality for transport simulation results
//!
//! This module provides tools to export simulation data to CSV (Comma-Separated Values)
//! format, which is compatible with Excel, Python pandas, MATLAB, and most data analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: Export with `&[f64]` slices
//! - **Metadata support**: Optional headers with simulation parameters
//! - **Customizable**: Delimiter, precision, format options
//! - **Multi-profile**: Export several profiles side by side for comparison
//! - **Trajectory export**: Full time × position history matrix
//! - **Validation**: Checks for NaN, empty data, mismatched lengths
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use transport_rs::output::export::export_profile_csv;
//!
//! let x = vec![0.0, 0.25, 0.5, 0.75, 1.0];
//! let conc = vec![1.0, 0.7, 0.5, 0.35, 0.3];
//!
//! export_profile_csv(&x, &conc, "profile.csv", None)?;
//! ```
//!
//! **Output** (`profile.csv`):
//! ```csv
//! Position (m),Concentration (mol/L)
//! 0.0,1.0
//! 0.25,0.7
//! 0.5,0.5
//! 0.75,0.35
//! 1.0,0.3
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use transport_rs::output::export::{export_profile_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata {
//!     model_name: Some("Diffusion-Reaction".to_string()),
//!     solver_name: Some("Backward Euler".to_string()),
//!     total_time: Some(1.0),
//!     time_steps: Some(1000),
//!     ..Default::default()
//! };
//!
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_profile_csv(&x, &conc, "profile.csv", Some(&config))?;
//! ```
//!
//! **Output** (`profile.csv`):
//! ```csv
//! # Transport Simulation Data
//! # Generated: 2026-08-23T15:30:00Z
//! # Model: Diffusion-Reaction
//! # Solver: Backward Euler
//! # Total Time: 1 s
//! # Time Steps: 1000
//! #
//! Position (m),Concentration (mol/L)
//! 0.0,1.0
//! ...
//! ```
//!
//! ## Multi-Profile Comparison
//!
//! ```rust,ignore
//! use transport_rs::output::export::export_profiles_csv;
//!
//! export_profiles_csv(
//!     &x,
//!     &[coarse, fine],
//!     &["nx = 50", "nx = 1000"],
//!     "refinement.csv",
//!     None,
//! )?;
//! ```

use nalgebra::DMatrix;
use std::error::Error;
use std::fs::File;
use std::io::Write;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `decimal_separator`: Decimal point character (default: '.')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add header comments with simulation info
/// - `metadata`: Simulation metadata to include
/// - `position_header`: Custom header for position column
/// - `concentration_header`: Custom header for concentration column
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     include_metadata: true,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Custom header for position column (default: "Position (m)")
    pub position_header: String,

    /// Custom header for concentration column (default: "Concentration (mol/L)")
    pub concentration_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            position_header: "Position (m)".to_string(),
            concentration_header: "Concentration (mol/L)".to_string(),
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = CsvConfig::european();
    /// // delimiter: ';'
    /// // decimal_separator: ','
    /// ```
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields will be included in the CSV header.
///
/// # Example
///
/// ```rust,ignore
/// let metadata = CsvMetadata {
///     model_name: Some("Diffusion-Reaction".to_string()),
///     solver_name: Some("Backward Euler".to_string()),
///     total_time: Some(1.0),
///     time_steps: Some(1000),
///     alpha: Some(0.01),
///     reaction_rate: Some(0.1),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Model name (e.g., "Diffusion-Reaction")
    pub model_name: Option<String>,

    /// Solver name (e.g., "Backward Euler", "Upwind Euler")
    pub solver_name: Option<String>,

    /// Total simulation time (seconds)
    pub total_time: Option<f64>,

    /// Number of time steps
    pub time_steps: Option<usize>,

    /// Diffusion coefficient α (m²/s)
    pub alpha: Option<f64>,

    /// First-order reaction rate k (1/s)
    pub reaction_rate: Option<f64>,

    /// Advection velocity u (m/s)
    pub velocity: Option<f64>,

    /// Inlet concentration CE (mol/L)
    pub inlet_concentration: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from simulation result
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let metadata = CsvMetadata::from_simulation(
    ///     "Diffusion-Reaction",
    ///     "Backward Euler",
    ///     1.0,
    ///     1000,
    /// );
    /// ```
    pub fn from_simulation(
        model: &str,
        solver: &str,
        total_time: f64,
        time_steps: usize,
    ) -> Self {
        Self {
            model_name: Some(model.to_string()),
            solver_name: Some(solver.to_string()),
            total_time: Some(total_time),
            time_steps: Some(time_steps),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(
    file: &mut File,
    metadata: &CsvMetadata,
) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Transport Simulation Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    // Model and solver
    if let Some(model) = &metadata.model_name {
        writeln!(file, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(file, "# Solver: {}", solver)?;
    }

    // Simulation parameters
    if let Some(total_time) = metadata.total_time {
        writeln!(file, "# Total Time: {} s", total_time)?;
    }
    if let Some(time_steps) = metadata.time_steps {
        writeln!(file, "# Time Steps: {}", time_steps)?;
    }

    // Model parameters
    if let Some(alpha) = metadata.alpha {
        writeln!(file, "# Alpha: {} m^2/s", alpha)?;
    }
    if let Some(k) = metadata.reaction_rate {
        writeln!(file, "# Reaction Rate: {} 1/s", k)?;
    }
    if let Some(u) = metadata.velocity {
        writeln!(file, "# Velocity: {} m/s", u)?;
    }
    if let Some(ce) = metadata.inlet_concentration {
        writeln!(file, "# Inlet Concentration: {} mol/L", ce)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    // Replace decimal separator if needed
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a single spatial profile to CSV
///
/// Writes position and concentration data to a CSV file with optional metadata header.
///
/// # Arguments
///
/// * `positions` - Grid point positions (meters)
/// * `concentrations` - Concentration values (mol/L)
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration (uses default if None)
///
/// # Returns
///
/// `Ok(())` if successful, `Err` with detailed message otherwise
///
/// # Errors
///
/// - Empty data
/// - Mismatched lengths
/// - NaN or Inf values
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_profile_csv(&x, &conc, "profile.csv", None)?;
/// ```
pub fn export_profile_csv(
    positions: &[f64],
    concentrations: &[f64],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {

    // ============================= Validation =============================

    if positions.is_empty() || concentrations.is_empty() {
        return Err("Empty data: position and concentration series must not be empty".into());
    }

    if positions.len() != concentrations.len() {
        return Err(format!(
            "Data length mismatch: {} positions versus {} concentrations",
            positions.len(),
            concentrations.len()).into()
        )
    }

    if positions.iter().any(|x| !x.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in position series".into());
    }

    if concentrations.iter().any(|c| !c.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in concentration series".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "{}{}{}",
        configuration.position_header,
        configuration.delimiter,
        configuration.concentration_header
    )?;

    // ============================= Write Data =============================

    for (position, concentration) in positions.iter().zip(concentrations.iter()) {
        let position_str = format_number(*position, configuration);
        let concentration_str = format_number(*concentration, configuration);

        writeln!(
            file,
            "{}{}{}",
            position_str,
            configuration.delimiter,
            concentration_str
        )?;
    }

    Ok(())
}

/// Export multiple spatial profiles to CSV
///
/// Writes position and multiple concentration columns to CSV. All
/// profiles must share the same grid. Typical use: grid refinement
/// studies with one column per run next to a reference column.
///
/// # Arguments
///
/// * `positions` - Grid point positions (meters)
/// * `profiles` - Vector of concentration vectors (one per run)
/// * `labels` - Names for each run (for column headers)
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration
///
/// # Returns
///
/// `Ok(())` if successful, `Err` otherwise
///
/// # Example
///
/// ```rust,ignore
/// export_profiles_csv(
///     &x,
///     &[coarse, fine],
///     &["nx = 50", "nx = 1000"],
///     "refinement.csv",
///     None,
/// )?;
/// ```
pub fn export_profiles_csv(
    positions: &[f64],
    profiles: &[Vec<f64>],
    labels: &[&str],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {

    // ============================= Validation =============================

    if positions.is_empty() || profiles.is_empty() {
        return Err("Empty data: position series and profiles must not be empty".into());
    }

    if positions.iter().any(|x| !x.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in position series".into());
    }

    if profiles.len() != labels.len() {
        return Err(format!(
           "Data length mismatch: {} profiles versus {} labels",
            profiles.len(),
            labels.len()
        ).into());
    }

    for (i, profile) in profiles.iter().enumerate() {
        if profile.len() != positions.len() {
            return Err(format!(
                "Profile [{}] length mismatch: {} concentrations vs {} positions",
                labels[i],
                profile.len(),
                positions.len()
            ).into());
        }

        if profile.iter().any(|c| !c.is_finite()) {
            return Err(format!(
                "Invalid data: NaN or Inf detected in profile {}",
                labels[i]
            ).into())
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    write!(file, "{}", configuration.position_header)?;
    for label in labels {
        write!(file, "{}{}", configuration.delimiter, label)?;
    }
    writeln!(file)?;

    // ============================= Write Data =============================

    for i in 0..positions.len() {
        // Position
        write!(file, "{}", format_number(positions[i], configuration))?;

        // Each profile value
        for profile in profiles {
            write!(
                file,
                "{}{}",
                configuration.delimiter,
                format_number(profile[i], configuration)
            )?;
        }
        writeln!(file)?;
    }

    Ok(())
}

/// Export a full trajectory to CSV
///
/// Writes the time × position history as one row per recorded step:
/// a time column followed by one column per grid point. This matches
/// the history matrix returned by
/// [`solve_explicit`](crate::api::solve_explicit).
///
/// # Arguments
///
/// * `time_points` - Recorded times (one per row of `history`)
/// * `positions` - Grid point positions (one per column of `history`)
/// * `history` - Trajectory matrix, `history[(n, i)]` is C at time n, point i
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration
///
/// # Example
///
/// ```rust,ignore
/// let (x, t, history) = solve_explicit(0.01, 1.0, 1.0, 1.0, 50, 0.5, 0.9)?;
/// export_history_csv(&t, x.as_slice(), &history, "history.csv", None)?;
/// ```
pub fn export_history_csv(
    time_points: &[f64],
    positions: &[f64],
    history: &DMatrix<f64>,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {

    // ============================= Validation =============================

    if time_points.is_empty() || positions.is_empty() {
        return Err("Empty data: time and position series must not be empty".into());
    }

    if history.nrows() != time_points.len() {
        return Err(format!(
            "Data length mismatch: {} history rows versus {} time points",
            history.nrows(),
            time_points.len()
        ).into());
    }

    if history.ncols() != positions.len() {
        return Err(format!(
            "Data length mismatch: {} history columns versus {} positions",
            history.ncols(),
            positions.len()
        ).into());
    }

    if time_points.iter().any(|t| !t.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in time series".into());
    }

    if history.iter().any(|c| !c.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in history".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    write!(file, "Time (s)")?;
    for position in positions {
        write!(
            file,
            "{}x={}",
            configuration.delimiter,
            format_number(*position, configuration)
        )?;
    }
    writeln!(file)?;

    // ============================= Write Data =============================

    for (step, time) in time_points.iter().enumerate() {
        write!(file, "{}", format_number(*time, configuration))?;

        for i in 0..positions.len() {
            write!(
                file,
                "{}{}",
                configuration.delimiter,
                format_number(history[(step, i)], configuration)
            )?;
        }
        writeln!(file)?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
