use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content, and keeps the last frame so tests can
/// assert on scene structure without a drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
