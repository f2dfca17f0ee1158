//! Plot configuration shared across visualization modules

use plotters::prelude::*;

/// Title of the decay chart
pub const DECAY_TITLE: &str = "Photolysis Decay Curve";

/// X-axis label of the decay chart
pub const DECAY_XLABEL: &str = "Time";

/// Y-axis label of the decay chart
pub const DECAY_YLABEL: &str = "Toluene Concentration";

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-curve plots
/// - `series_colors`: Optional colors for overlays (one per curve)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to draw the mesh
/// - `y_from_zero`: Start the y axis at zero instead of at the data minimum
/// - `y_precision`: Decimal places of the y tick labels
///
/// # Example
///
/// ```rust
/// use photolysis_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::decay_curve("Toluene under UV");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// assert_eq!(config.ylabel, "Toluene Concentration");
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: auto-set by plot type)
    pub ylabel: String,

    /// Line color for single-curve plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for overlays
    ///
    /// If None, uses default palette: [RED, BLUE, GREEN, MAGENTA, CYAN, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Y axis starts at zero (default: true)
    pub y_from_zero: bool,

    /// Decimal places of y tick labels (default: 3)
    pub y_precision: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: String::new(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
            y_from_zero: true,
            y_precision: 3,
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
/// ```rust
/// use photolysis_rs::output::visualization::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::decay_curve(NO_TITLE);
/// assert_eq!(config.title, "Photolysis Decay Curve");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config of the decay chart
    ///
    /// x label "Time", y label "Toluene Concentration", title custom or
    /// "Photolysis Decay Curve".
    pub fn decay_curve(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| DECAY_TITLE.to_string()),
            xlabel: DECAY_XLABEL.to_string(),
            ylabel: DECAY_YLABEL.to_string(),
            ..Self::default()
        }
    }

    /// Config of the refractive-index chart of the lab
    pub fn refractive_index(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Refractive Index Evolution".to_string()),
            xlabel: "Time (min)".to_string(),
            ylabel: "Refractive Index".to_string(),
            line_color: BLUE,
            y_from_zero: false,
            y_precision: 5,
            ..Self::default()
        }
    }

    /// Config of the photolysis-rate chart of the lab
    pub fn photolysis_rate(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Photolysis Rate".to_string()),
            xlabel: "Time (min)".to_string(),
            ylabel: "Photolysis Rate (1/min)".to_string(),
            line_color: MAGENTA,
            y_from_zero: false,
            y_precision: 7,
            ..Self::default()
        }
    }

    /// Builder pattern: set image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: set overlay colors
    pub fn with_series_colors(mut self, colors: Vec<RGBColor>) -> Self {
        self.series_colors = Some(colors);
        self
    }

    /// Color of overlay curve `index`
    ///
    /// Uses custom colors if provided, otherwise falls back to the default palette
    pub(crate) fn get_series_color(&self, index: usize) -> RGBColor {
        if let Some(color) = self
            .series_colors
            .as_ref()
            .and_then(|colors| colors.get(index))
        {
            return *color;
        }

        const DEFAULT_COLORS: [RGBColor; 8] = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        DEFAULT_COLORS[index % DEFAULT_COLORS.len()]
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
        assert!(config.y_from_zero);
    }

    #[test]
    fn test_decay_config_labels() {
        let config = PlotConfig::decay_curve(NO_TITLE);
        assert_eq!(config.title, "Photolysis Decay Curve");
        assert_eq!(config.xlabel, "Time");
        assert_eq!(config.ylabel, "Toluene Concentration");
    }

    #[test]
    fn test_decay_config_with_title() {
        let config = PlotConfig::decay_curve(format!("k = {}", 0.05));
        assert_eq!(config.title, "k = 0.05");
        assert_eq!(config.xlabel, "Time");
    }

    #[test]
    fn test_lab_configs() {
        let index = PlotConfig::refractive_index(NO_TITLE);
        assert_eq!(index.ylabel, "Refractive Index");
        assert!(!index.y_from_zero);

        let rate = PlotConfig::photolysis_rate("Rate");
        assert_eq!(rate.title, "Rate");
        assert_eq!(rate.xlabel, "Time (min)");
    }

    #[test]
    fn test_size_builder() {
        let config = PlotConfig::decay_curve(NO_TITLE).size(640, 480);
        assert_eq!((config.width, config.height), (640, 480));
    }

    #[test]
    fn test_series_colors() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), RED);
        assert_eq!(config.get_series_color(1), BLUE);
        assert_eq!(config.get_series_color(8), RED);

        let custom = PlotConfig::default().with_series_colors(vec![GREEN]);
        assert_eq!(custom.get_series_color(0), GREEN);
        assert_eq!(custom.get_series_color(1), BLUE);
    }
}
