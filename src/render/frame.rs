use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    AreaPathPrimitive, LinePrimitive, LinearGradient, TextPrimitive, TooltipPrimitive,
};

/// Gridlines and labels for one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisGroup {
    pub grid_lines: Vec<LinePrimitive>,
    pub labels: Vec<TextPrimitive>,
}

impl AxisGroup {
    pub fn validate(&self) -> ChartResult<()> {
        for line in &self.grid_lines {
            line.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// A full redraw produces exactly one area path when data is present, at
/// most one group per axis (per visibility flags), and at most one hover
/// crosshair/tooltip overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub gradients: Vec<LinearGradient>,
    pub area_paths: Vec<AreaPathPrimitive>,
    pub x_axis: Option<AxisGroup>,
    pub y_axis: Option<AxisGroup>,
    pub crosshair: Option<LinePrimitive>,
    pub tooltip: Option<TooltipPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            gradients: Vec::new(),
            area_paths: Vec::new(),
            x_axis: None,
            y_axis: None,
            crosshair: None,
            tooltip: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
            && self.area_paths.is_empty()
            && self.x_axis.is_none()
            && self.y_axis.is_none()
            && self.crosshair.is_none()
            && self.tooltip.is_none()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for gradient in &self.gradients {
            gradient.validate()?;
        }
        for path in &self.area_paths {
            path.validate()?;
            if path.fill_gradient >= self.gradients.len() {
                return Err(ChartError::InvalidData(format!(
                    "area path references missing gradient {}",
                    path.fill_gradient
                )));
            }
        }
        if let Some(x_axis) = &self.x_axis {
            x_axis.validate()?;
        }
        if let Some(y_axis) = &self.y_axis {
            y_axis.validate()?;
        }
        if let Some(crosshair) = &self.crosshair {
            crosshair.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            tooltip.validate()?;
        }

        Ok(())
    }
}
