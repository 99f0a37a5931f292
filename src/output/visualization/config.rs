//! Plot configuration shared across visualization modules
//!
//! This module defines the common configuration structure used by the
//! profile plotting functions.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// Used by single-profile, comparison and snapshot plots.
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-profile plots
/// - `series_colors`: Optional colors for multi-profile plots (one per series)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example: Single Profile
///
/// ```rust,ignore
/// use transport_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.title = "Steady Diffusion-Reaction Profile".to_string();
/// config.line_color = BLUE;
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
///
/// # Example: Comparison with Custom Colors
///
/// ```rust,ignore
/// let mut config = PlotConfig::default();
/// config.title = "Grid Refinement Study".to_string();
/// config.series_colors = Some(vec![
///     RED,
///     BLUE,
///     GREEN,
///     RGBColor(255, 165, 0),  // Orange
///     MAGENTA,
/// ]);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "Concentration (mol/L)")
    pub ylabel: String,

    /// Line color for single-profile plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for multi-profile plots (one per series)
    ///
    /// If None, uses default palette: [RED, BLUE, GREEN, MAGENTA, CYAN, ...]
    /// If Some, must have at least as many colors as series
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),  // Set by specific plot type
            ylabel: "Concentration (mol/L)".to_string(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::spatial_profile(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for spatial concentration profiles with optional custom title
    ///
    /// Sets xlabel to "Position (m)" and title to custom value or "Concentration Profile"
    ///
    /// # Arguments
    ///
    /// * `title` - Custom title (String, &str) or None for default
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With custom title (no Some() needed!)
    /// let config = PlotConfig::spatial_profile("Diffusion-Reaction, k = 0.1");
    /// let config = PlotConfig::spatial_profile(format!("Profile at t = {}", time));
    ///
    /// // With default title
    /// let config = PlotConfig::spatial_profile(None::<&str>);
    /// ```
    pub fn spatial_profile(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Position (m)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Concentration Profile".to_string());
        config
    }

    /// Create config for profile evolution plots (time snapshots)
    ///
    /// Sets xlabel to "Position (m)" and title to custom value or "Profile Evolution"
    pub fn evolution(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Position (m)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Profile Evolution".to_string());
        config
    }

    /// Create config for comparison plots with custom colors
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use plotters::prelude::*;
    ///
    /// let config = PlotConfig::comparison_colors(vec![RED, BLUE, GREEN]);
    /// ```
    pub fn comparison_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.xlabel = "Position (m)".to_string();
        config.series_colors = Some(colors);
        config
    }

    /// Get color for series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if series_index < colors.len() {
                return colors[series_index];
            }
        }

        // Default palette
        let default_colors = vec![
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),  // Orange
            RGBColor(128, 0, 128),   // Purple
            RGBColor(255, 192, 203), // Pink
            RGBColor(165, 42, 42),   // Brown
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
    }

    #[test]
    fn test_spatial_profile_config_default() {
        let config = PlotConfig::spatial_profile(NO_TITLE);
        assert_eq!(config.xlabel, "Position (m)");
        assert_eq!(config.title, "Concentration Profile");
    }

    #[test]
    fn test_spatial_profile_config_with_str() {
        let config = PlotConfig::spatial_profile("Diffusion-Reaction Study");
        assert_eq!(config.xlabel, "Position (m)");
        assert_eq!(config.title, "Diffusion-Reaction Study");
    }

    #[test]
    fn test_spatial_profile_config_with_string() {
        let title = format!("Profile at t = {}", 0.5);
        let config = PlotConfig::spatial_profile(title);
        assert_eq!(config.xlabel, "Position (m)");
        assert_eq!(config.title, "Profile at t = 0.5");
    }

    #[test]
    fn test_evolution_config_default() {
        let config = PlotConfig::evolution(NO_TITLE);
        assert_eq!(config.xlabel, "Position (m)");
        assert_eq!(config.title, "Profile Evolution");
    }

    #[test]
    fn test_get_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), RED);
        assert_eq!(config.get_series_color(1), BLUE);
        assert_eq!(config.get_series_color(10), RED); // Wraparound
    }

    #[test]
    fn test_get_series_color_custom() {
        use plotters::style::full_palette::{LIGHTBLUE, LIGHTGREEN, ORANGE};
        let config = PlotConfig::comparison_colors(vec![ORANGE, LIGHTGREEN, LIGHTBLUE]);
        assert_eq!(config.get_series_color(0), ORANGE);
        assert_eq!(config.get_series_color(1), LIGHTGREEN);
        assert_eq!(config.get_series_color(2), LIGHTBLUE);
    }
}
