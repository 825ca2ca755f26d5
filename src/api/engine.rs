use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::core::{DataSet, LinearScale, PointScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{PluginEvent, VisualPlugin};
use crate::interaction::{HoverSnap, HoverState, nearest_category_index};
use crate::render::{RenderFrame, Renderer};

use super::engine_snapshot::SceneSnapshot;
use super::scene_builder::{PLOT_PADDING_PX, build_scene};
use super::value_domain::resolve_value_domain;

/// Gradient area chart engine driven by host update and input events.
///
/// `render` is a full clear-and-redraw; there is no incremental diffing.
/// Pointer handlers replay the last completed snapshot and never outlive
/// it — the next render supersedes both the scene and the hover state.
pub struct AreaChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) scene: Option<SceneSnapshot>,
    pub(super) hover: HoverState,
    pub(super) plugins: Vec<Box<dyn VisualPlugin>>,
}

impl<R: Renderer> AreaChartEngine<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            scene: None,
            hover: HoverState::default(),
            plugins: Vec::new(),
        }
    }

    /// Full redraw for one host update cycle.
    ///
    /// An empty dataset clears the previous scene and draws nothing; the
    /// call still succeeds. Rendering is deterministic for identical
    /// `(viewport, config, data)` inputs.
    pub fn render(
        &mut self,
        viewport: Viewport,
        config: RenderConfig,
        data: DataSet,
    ) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        self.hover = HoverState::default();

        if data.is_empty() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "clearing scene for empty dataset"
            );
            self.scene = None;
            self.renderer.render(&RenderFrame::new(viewport))?;
            self.emit_plugin_event(PluginEvent::DataUpdated { category_count: 0 });
            self.emit_plugin_event(PluginEvent::Rendered);
            return Ok(());
        }

        let value_domain = resolve_value_domain(&config, &data)?;
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let point_scale = PointScale::new(
            data.categories(),
            (PLOT_PADDING_PX, width - PLOT_PADDING_PX),
        )?;
        let value_scale = LinearScale::new(
            (value_domain.min, value_domain.max),
            (height - PLOT_PADDING_PX, PLOT_PADDING_PX),
        )?;

        debug!(
            width = viewport.width,
            height = viewport.height,
            categories = data.len(),
            smooth = config.smooth_line,
            "full render pass"
        );

        let snapshot = SceneSnapshot {
            viewport,
            config,
            data,
            point_scale,
            value_scale,
            value_domain,
        };
        let frame = build_scene(&snapshot, self.hover)?;
        self.renderer.render(&frame)?;

        let category_count = snapshot.data.len();
        self.scene = Some(snapshot);
        self.emit_plugin_event(PluginEvent::DataUpdated { category_count });
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Moves the hover crosshair and tooltip to the category nearest `x`.
    ///
    /// A no-op before the first non-empty render: there is no scene to
    /// overlay yet.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let Some(snapshot) = &self.scene else {
            return Ok(());
        };

        let positions = snapshot.point_scale.positions();
        let Some(category_index) = nearest_category_index(&positions, x) else {
            return Ok(());
        };
        let Some(&value) = snapshot.data.values().get(category_index) else {
            return Ok(());
        };
        let snap_x = positions[category_index];
        let snap_y = snapshot.value_scale.value_to_pixel(value)?;

        trace!(x, y, category_index, "pointer move");
        self.hover.on_pointer_move(x, y);
        self.hover.set_snap(Some(HoverSnap {
            category_index,
            x: snap_x,
            y: snap_y,
            value,
        }));

        let frame = build_scene(snapshot, self.hover)?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::PointerMoved { x, y });
        Ok(())
    }

    /// Hides the crosshair and tooltip.
    pub fn on_pointer_leave(&mut self) -> ChartResult<()> {
        self.hover.on_pointer_leave();

        let Some(snapshot) = &self.scene else {
            return Ok(());
        };

        trace!("pointer leave");
        let frame = build_scene(snapshot, self.hover)?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::PointerLeft);
        Ok(())
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Snapshot of the last completed non-empty render, if any.
    #[must_use]
    pub fn scene(&self) -> Option<&SceneSnapshot> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
