use serde::{Deserialize, Serialize};

use super::RenderConfig;
use crate::core::DisplayUnits;

/// Serializable description of the option surface for the host's
/// property-editing UI.
///
/// Pure pass-through data: building it never touches rendering state. Cards
/// and slices keep the wire names the host's property pane already binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingModel {
    pub cards: Vec<FormattingCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingCard {
    pub name: String,
    pub display_name: String,
    pub slices: Vec<FormattingSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FormattingSlice {
    ColorPicker {
        name: String,
        display_name: String,
        value: Option<String>,
    },
    ToggleSwitch {
        name: String,
        display_name: String,
        value: bool,
    },
    NumUpDown {
        name: String,
        display_name: String,
        value: Option<f64>,
    },
    ItemDropdown {
        name: String,
        display_name: String,
        items: Vec<String>,
        value: String,
    },
}

impl FormattingModel {
    /// Describes a config snapshot as the three property cards the host
    /// shows: data point and gradient settings, Y axis, X axis.
    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            cards: vec![
                general_card(config),
                y_axis_card(config),
                x_axis_card(config),
            ],
        }
    }
}

fn general_card(config: &RenderConfig) -> FormattingCard {
    FormattingCard {
        name: "generalSettings".to_owned(),
        display_name: "Data Point and Gradient Settings".to_owned(),
        slices: vec![
            FormattingSlice::ColorPicker {
                name: "defaultColor".to_owned(),
                display_name: "Default Color".to_owned(),
                value: config.default_color.clone(),
            },
            FormattingSlice::ToggleSwitch {
                name: "showAllDataPoints".to_owned(),
                display_name: "Show All Data Points".to_owned(),
                value: config.show_all_data_points,
            },
            FormattingSlice::NumUpDown {
                name: "fontSize".to_owned(),
                display_name: "Text Size".to_owned(),
                value: Some(f64::from(config.font_size)),
            },
            FormattingSlice::ToggleSwitch {
                name: "smoothLine".to_owned(),
                display_name: "Smooth Line".to_owned(),
                value: config.smooth_line,
            },
            FormattingSlice::ToggleSwitch {
                name: "showMarkers".to_owned(),
                display_name: "Show Markers".to_owned(),
                value: config.show_markers,
            },
            FormattingSlice::NumUpDown {
                name: "markerSize".to_owned(),
                display_name: "Marker Size".to_owned(),
                value: Some(f64::from(config.marker_size)),
            },
            FormattingSlice::ColorPicker {
                name: "gradientStartColor".to_owned(),
                display_name: "Gradient Start Color".to_owned(),
                value: config.gradient_start_color.clone(),
            },
            FormattingSlice::ColorPicker {
                name: "gradientEndColor".to_owned(),
                display_name: "Gradient End Color".to_owned(),
                value: config.gradient_end_color.clone(),
            },
        ],
    }
}

fn y_axis_card(config: &RenderConfig) -> FormattingCard {
    FormattingCard {
        name: "yAxisSettings".to_owned(),
        display_name: "Y Axis".to_owned(),
        slices: vec![
            FormattingSlice::NumUpDown {
                name: "minRange".to_owned(),
                display_name: "Minimum Range".to_owned(),
                value: config.min_range,
            },
            FormattingSlice::NumUpDown {
                name: "maxRange".to_owned(),
                display_name: "Maximum Range".to_owned(),
                value: config.max_range,
            },
            FormattingSlice::ItemDropdown {
                name: "yAxisDisplayUnits".to_owned(),
                display_name: "Display Units".to_owned(),
                items: DisplayUnits::ALL
                    .iter()
                    .map(|units| units.label().to_owned())
                    .collect(),
                value: config.y_axis_display_units.label().to_owned(),
            },
            FormattingSlice::NumUpDown {
                name: "yAxisDecimalPlaces".to_owned(),
                display_name: "Decimal Places".to_owned(),
                value: Some(f64::from(config.y_axis_decimal_places)),
            },
            FormattingSlice::ToggleSwitch {
                name: "showYAxis".to_owned(),
                display_name: "Show Y Axis".to_owned(),
                value: config.show_y_axis,
            },
            FormattingSlice::NumUpDown {
                name: "yAxisFontSize".to_owned(),
                display_name: "Font Size".to_owned(),
                value: Some(f64::from(config.y_axis_font_size)),
            },
        ],
    }
}

fn x_axis_card(config: &RenderConfig) -> FormattingCard {
    FormattingCard {
        name: "xAxisSettings".to_owned(),
        display_name: "X Axis".to_owned(),
        slices: vec![
            FormattingSlice::ToggleSwitch {
                name: "showXAxis".to_owned(),
                display_name: "Show X Axis".to_owned(),
                value: config.show_x_axis,
            },
            FormattingSlice::NumUpDown {
                name: "xAxisFontSize".to_owned(),
                display_name: "X Axis Font Size".to_owned(),
                value: Some(f64::from(config.x_axis_font_size)),
            },
        ],
    }
}
