use crate::core::{format_axis_value, format_tooltip_value, project_area_geometry};
use crate::error::ChartResult;
use crate::interaction::{HoverSnap, HoverState};
use crate::render::{
    AreaPathPrimitive, AxisGroup, Color, DEFAULT_GRADIENT_END_COLOR,
    DEFAULT_GRADIENT_START_COLOR, DEFAULT_SERIES_COLOR, LinePrimitive, LinearGradient,
    RenderFrame, TextHAlign, TextPrimitive, TooltipPrimitive,
};

use super::axis_ticks::{axis_tick_count, axis_tick_values};
use super::engine_snapshot::SceneSnapshot;

/// Fixed margin between the plot area and every viewport edge.
pub const PLOT_PADDING_PX: f64 = 40.0;

const AREA_STROKE_WIDTH_PX: f64 = 2.0;
const GRADIENT_START_OPACITY: f64 = 0.7;
const GRADIENT_END_OPACITY: f64 = 0.3;
const GRID_LINE_COLOR: Color = Color::rgb(0.8, 0.8, 0.8); // #cccccc
const GRID_LINE_WIDTH_PX: f64 = 0.8;
const GRID_LINE_DASH_PX: (f64, f64) = (3.0, 3.0);
const AXIS_LABEL_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const AXIS_LABEL_FONT_SIZE_PX: f64 = 12.0;
const Y_AXIS_LABEL_GAP_PX: f64 = 10.0;
const X_AXIS_LABEL_GAP_PX: f64 = 10.0;
const CROSSHAIR_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const CROSSHAIR_WIDTH_PX: f64 = 1.0;
const TOOLTIP_OFFSET_X_PX: f64 = 10.0;
const TOOLTIP_OFFSET_Y_PX: f64 = -30.0;
const DEFAULT_MEASURE_LABEL: &str = "Value";

/// Assembles the full scene for one render pass.
///
/// The hover overlay rides on the same frame: when `hover` carries a snap,
/// the crosshair and tooltip are appended on top of the base scene.
pub(super) fn build_scene(snapshot: &SceneSnapshot, hover: HoverState) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(snapshot.viewport);
    let config = &snapshot.config;
    let width = f64::from(snapshot.viewport.width);
    let height = f64::from(snapshot.viewport.height);

    let series_color = Color::resolve(config.default_color.as_deref(), DEFAULT_SERIES_COLOR);
    let gradient_start = Color::resolve(
        config.gradient_start_color.as_deref(),
        DEFAULT_GRADIENT_START_COLOR,
    )
    .with_alpha(GRADIENT_START_OPACITY);
    let gradient_end = Color::resolve(
        config.gradient_end_color.as_deref(),
        DEFAULT_GRADIENT_END_COLOR,
    )
    .with_alpha(GRADIENT_END_OPACITY);
    frame
        .gradients
        .push(LinearGradient::two_stop(gradient_start, gradient_end));

    if config.show_y_axis {
        frame.y_axis = Some(build_y_axis(snapshot, width)?);
    }
    if config.show_x_axis {
        frame.x_axis = Some(build_x_axis(snapshot, height));
    }

    let geometry = project_area_geometry(
        &snapshot.data,
        &snapshot.point_scale,
        snapshot.value_scale,
        snapshot.value_domain.min,
        config.smooth_line,
    )?;
    frame.area_paths.push(AreaPathPrimitive {
        outline: geometry.outline,
        fill_gradient: 0,
        stroke_color: series_color,
        stroke_width: AREA_STROKE_WIDTH_PX,
    });

    if hover.visible {
        if let Some(snap) = hover.snap {
            frame.crosshair = Some(build_crosshair(snap.x, height));
            frame.tooltip = Some(build_tooltip(snapshot, hover, snap, series_color));
        }
    }

    Ok(frame)
}

fn build_y_axis(snapshot: &SceneSnapshot, width: f64) -> ChartResult<AxisGroup> {
    let config = &snapshot.config;
    let mut group = AxisGroup::default();
    let domain = (snapshot.value_domain.min, snapshot.value_domain.max);
    let tick_values = axis_tick_values(domain, axis_tick_count(snapshot.viewport.height));

    for tick in tick_values {
        let y = snapshot.value_scale.value_to_pixel(tick)?;
        group.grid_lines.push(
            LinePrimitive::new(
                PLOT_PADDING_PX,
                y,
                width - PLOT_PADDING_PX,
                y,
                GRID_LINE_WIDTH_PX,
                GRID_LINE_COLOR,
            )
            .with_dash(GRID_LINE_DASH_PX.0, GRID_LINE_DASH_PX.1),
        );
        group.labels.push(TextPrimitive::new(
            format_axis_value(tick, config.y_axis_display_units, config.y_axis_decimal_places),
            PLOT_PADDING_PX - Y_AXIS_LABEL_GAP_PX,
            y,
            AXIS_LABEL_FONT_SIZE_PX,
            AXIS_LABEL_COLOR,
            TextHAlign::Right,
        ));
    }

    Ok(group)
}

/// Category labels only: X ticks have zero length and the axis baseline is
/// suppressed, so the group carries no lines.
fn build_x_axis(snapshot: &SceneSnapshot, height: f64) -> AxisGroup {
    let mut group = AxisGroup::default();
    let label_y = height - PLOT_PADDING_PX + X_AXIS_LABEL_GAP_PX + AXIS_LABEL_FONT_SIZE_PX;

    for (category, position) in snapshot.point_scale.iter() {
        if category.is_empty() {
            continue;
        }
        group.labels.push(TextPrimitive::new(
            category,
            position,
            label_y,
            AXIS_LABEL_FONT_SIZE_PX,
            AXIS_LABEL_COLOR,
            TextHAlign::Center,
        ));
    }

    group
}

fn build_crosshair(x: f64, height: f64) -> LinePrimitive {
    LinePrimitive::new(
        x,
        PLOT_PADDING_PX,
        x,
        height - PLOT_PADDING_PX,
        CROSSHAIR_WIDTH_PX,
        CROSSHAIR_COLOR,
    )
}

fn build_tooltip(
    snapshot: &SceneSnapshot,
    hover: HoverState,
    snap: HoverSnap,
    series_color: Color,
) -> TooltipPrimitive {
    let category = snapshot
        .data
        .categories()
        .get(snap.category_index)
        .cloned()
        .unwrap_or_default();
    let measure_label = snapshot
        .data
        .measure_label()
        .unwrap_or(DEFAULT_MEASURE_LABEL);

    TooltipPrimitive {
        x: hover.pointer_x + TOOLTIP_OFFSET_X_PX,
        y: hover.pointer_y + TOOLTIP_OFFSET_Y_PX,
        title: category,
        detail: format!("{measure_label}: {}", format_tooltip_value(snap.value)),
        marker_color: series_color,
    }
}
