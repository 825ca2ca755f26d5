//! Declarative formatting options supplied by the host on every render pass.

mod formatting_model;

pub use formatting_model::{FormattingCard, FormattingModel, FormattingSlice};

use serde::{Deserialize, Serialize};

use crate::core::DisplayUnits;
use crate::error::{ChartError, ChartResult};

/// Flat snapshot of the user-facing formatting options for one render pass.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Colors are optional hex
/// strings; absent, empty, and unparsable values fall back to the documented
/// defaults at render time. `min_range`/`max_range` of `None` mean "auto:
/// use the data bounds".
///
/// Part of the option surface is accepted without a rendering effect yet
/// (`show_all_data_points`, `font_size`, `show_markers`, `marker_size`, the
/// per-axis font sizes); those fields round-trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub default_color: Option<String>,
    #[serde(default = "default_show_all_data_points")]
    pub show_all_data_points: bool,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default)]
    pub smooth_line: bool,
    #[serde(default = "default_show_markers")]
    pub show_markers: bool,
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
    #[serde(default)]
    pub gradient_start_color: Option<String>,
    #[serde(default)]
    pub gradient_end_color: Option<String>,
    #[serde(default)]
    pub min_range: Option<f64>,
    #[serde(default)]
    pub max_range: Option<f64>,
    #[serde(default)]
    pub y_axis_display_units: DisplayUnits,
    #[serde(default = "default_y_axis_decimal_places")]
    pub y_axis_decimal_places: u8,
    #[serde(default = "default_show_axis")]
    pub show_y_axis: bool,
    #[serde(default = "default_show_axis")]
    pub show_x_axis: bool,
    #[serde(default = "default_axis_font_size")]
    pub y_axis_font_size: u32,
    #[serde(default = "default_axis_font_size")]
    pub x_axis_font_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_color: None,
            show_all_data_points: default_show_all_data_points(),
            font_size: default_font_size(),
            smooth_line: false,
            show_markers: default_show_markers(),
            marker_size: default_marker_size(),
            gradient_start_color: None,
            gradient_end_color: None,
            min_range: None,
            max_range: None,
            y_axis_display_units: DisplayUnits::default(),
            y_axis_decimal_places: default_y_axis_decimal_places(),
            show_y_axis: default_show_axis(),
            show_x_axis: default_show_axis(),
            y_axis_font_size: default_axis_font_size(),
            x_axis_font_size: default_axis_font_size(),
        }
    }
}

impl RenderConfig {
    /// Sets the series stroke color as a hex string.
    #[must_use]
    pub fn with_series_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = Some(color.into());
        self
    }

    /// Sets both gradient stops as hex strings.
    #[must_use]
    pub fn with_gradient_colors(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.gradient_start_color = Some(start.into());
        self.gradient_end_color = Some(end.into());
        self
    }

    /// Sets explicit vertical bounds; `None` keeps the auto data bound.
    #[must_use]
    pub fn with_value_range(mut self, min_range: Option<f64>, max_range: Option<f64>) -> Self {
        self.min_range = min_range;
        self.max_range = max_range;
        self
    }

    /// Switches the series top edge between straight and monotone-smoothed.
    #[must_use]
    pub fn with_smooth_line(mut self, smooth_line: bool) -> Self {
        self.smooth_line = smooth_line;
        self
    }

    /// Sets the vertical tick label unit scaling.
    #[must_use]
    pub fn with_display_units(mut self, units: DisplayUnits) -> Self {
        self.y_axis_display_units = units;
        self
    }

    /// Sets the fractional digits used by raw (unscaled) tick labels.
    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u8) -> Self {
        self.y_axis_decimal_places = decimal_places;
        self
    }

    /// Toggles axis rendering.
    #[must_use]
    pub fn with_axis_visibility(mut self, show_x_axis: bool, show_y_axis: bool) -> Self {
        self.show_x_axis = show_x_axis;
        self.show_y_axis = show_y_axis;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; absent fields take documented defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_show_all_data_points() -> bool {
    true
}

fn default_font_size() -> u32 {
    12
}

fn default_show_markers() -> bool {
    true
}

fn default_marker_size() -> u32 {
    4
}

fn default_y_axis_decimal_places() -> u8 {
    2
}

fn default_show_axis() -> bool {
    true
}

fn default_axis_font_size() -> u32 {
    12
}
