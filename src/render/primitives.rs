use smallvec::{SmallVec, smallvec};
use tracing::warn;

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// Documented fallback for the series stroke and gradient start.
pub const DEFAULT_SERIES_COLOR: Color = Color::rgb(0.0, 120.0 / 255.0, 215.0 / 255.0);
pub const DEFAULT_GRADIENT_START_COLOR: Color = DEFAULT_SERIES_COLOR;
/// Documented fallback for the gradient end.
pub const DEFAULT_GRADIENT_END_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Parses `#rgb` or `#rrggbb`, case-insensitive.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            3 => {
                let mut channels = [0.0; 3];
                for (slot, digit) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = digit.to_digit(16)?;
                    *slot = f64::from(nibble * 17) / 255.0;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => {
                let mut channels = [0.0; 3];
                for (index, slot) in channels.iter_mut().enumerate() {
                    let byte = u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16).ok()?;
                    *slot = f64::from(byte) / 255.0;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            _ => None,
        }
    }

    /// Resolves a user-supplied color string.
    ///
    /// Missing, empty, and unparsable input all fall back to `fallback`;
    /// the unparsable case is logged since it points at a host-side bug.
    #[must_use]
    pub fn resolve(requested: Option<&str>, fallback: Color) -> Color {
        match requested {
            None => fallback,
            Some(hex) if hex.is_empty() => fallback,
            Some(hex) => Self::from_hex(hex).unwrap_or_else(|| {
                warn!(hex, "ignoring unparsable color string, using fallback");
                fallback
            }),
        }
    }

    /// Lowercase `#rrggbb` form; alpha is carried separately by backends.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_byte(self.red),
            channel_byte(self.green),
            channel_byte(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn channel_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    /// `(dash, gap)` lengths for dashed strokes; `None` draws solid.
    pub dash: Option<(f64, f64)>,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            dash: None,
        }
    }

    #[must_use]
    pub const fn with_dash(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some((dash, gap)) = self.dash {
            if !dash.is_finite() || dash <= 0.0 || !gap.is_finite() || gap <= 0.0 {
                return Err(ChartError::InvalidData(
                    "line dash lengths must be finite and > 0".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One stop of a vertical linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Normalized offset along the gradient axis, 0 at the top.
    pub offset: f64,
    pub color: Color,
}

/// Vertical linear gradient running top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub stops: SmallVec<[GradientStop; 2]>,
}

impl LinearGradient {
    /// Standard area fill: one stop at each end.
    #[must_use]
    pub fn two_stop(start: Color, end: Color) -> Self {
        Self {
            stops: smallvec![
                GradientStop {
                    offset: 0.0,
                    color: start,
                },
                GradientStop {
                    offset: 1.0,
                    color: end,
                },
            ],
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.stops.len() < 2 {
            return Err(ChartError::InvalidData(
                "gradient needs at least two stops".to_owned(),
            ));
        }
        let mut previous = f64::NEG_INFINITY;
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
                return Err(ChartError::InvalidData(
                    "gradient stop offset must be finite and in [0, 1]".to_owned(),
                ));
            }
            if stop.offset < previous {
                return Err(ChartError::InvalidData(
                    "gradient stop offsets must be non-decreasing".to_owned(),
                ));
            }
            previous = stop.offset;
            stop.color.validate()?;
        }
        Ok(())
    }
}

/// Filled-and-stroked area path.
///
/// `fill_gradient` indexes into the owning frame's gradient table.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPathPrimitive {
    pub outline: Vec<PathCommand>,
    pub fill_gradient: usize,
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl AreaPathPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.outline.is_empty() {
            return Err(ChartError::InvalidData(
                "area path outline must not be empty".to_owned(),
            ));
        }
        if !matches!(self.outline[0], PathCommand::MoveTo { .. }) {
            return Err(ChartError::InvalidData(
                "area path outline must start with a move".to_owned(),
            ));
        }
        for command in &self.outline {
            let finite = match *command {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                    x.is_finite() && y.is_finite()
                }
                PathCommand::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    x1.is_finite()
                        && y1.is_finite()
                        && x2.is_finite()
                        && y2.is_finite()
                        && x.is_finite()
                        && y.is_finite()
                }
                PathCommand::Close => true,
            };
            if !finite {
                return Err(ChartError::InvalidData(
                    "area path coordinates must be finite".to_owned(),
                ));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "area path stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke_color.validate()
    }
}

/// Hover tooltip positioned near the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPrimitive {
    pub x: f64,
    pub y: f64,
    /// Hovered category label.
    pub title: String,
    /// Measure line, e.g. `Revenue: 1,234.50`.
    pub detail: String,
    pub marker_color: Color,
}

impl TooltipPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip coordinates must be finite".to_owned(),
            ));
        }
        if self.detail.is_empty() {
            return Err(ChartError::InvalidData(
                "tooltip detail must not be empty".to_owned(),
            ));
        }
        self.marker_color.validate()
    }
}
