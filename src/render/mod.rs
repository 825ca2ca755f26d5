mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{AxisGroup, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    AreaPathPrimitive, Color, DEFAULT_GRADIENT_END_COLOR, DEFAULT_GRADIENT_START_COLOR,
    DEFAULT_SERIES_COLOR, GradientStop, LinePrimitive, LinearGradient, TextHAlign, TextPrimitive,
    TooltipPrimitive,
};
pub use svg_backend::{SvgRenderer, render_svg};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
