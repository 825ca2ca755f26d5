//! SVG backend - materializes a `RenderFrame` into an SVG document string.
//!
//! Pure string building, no DOM manipulation.
//! Renders back-to-front: defs → y axis → x axis → area path → crosshair →
//! tooltip.

use crate::core::PathCommand;
use crate::error::ChartResult;
use crate::render::{
    AreaPathPrimitive, AxisGroup, LinePrimitive, LinearGradient, RenderFrame, Renderer,
    TextHAlign, TextPrimitive, TooltipPrimitive,
};

const TOOLTIP_PADDING_PX: f64 = 5.0;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 5.0;
const TOOLTIP_LINE_HEIGHT_PX: f64 = 16.0;
const TOOLTIP_FONT_SIZE_PX: f64 = 12.0;
// Coarse glyph width estimate; the tooltip box only needs to roughly hug its
// text, the host styles the rest.
const TOOLTIP_CHAR_WIDTH_PX: f64 = 6.5;
const TOOLTIP_MARKER_RADIUS_PX: f64 = 3.0;

/// Renderer that keeps the SVG document for the most recent frame.
///
/// Hosts attach the returned markup to their container element; every render
/// pass replaces the whole document, mirroring the engine's full-redraw
/// contract.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_svg: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn last_svg(&self) -> &str {
        &self.last_svg
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_svg = render_svg(frame);
        Ok(())
    }
}

/// Renders a frame as a standalone SVG document.
#[must_use]
pub fn render_svg(frame: &RenderFrame) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.viewport.width,
        h = frame.viewport.height
    ));

    if !frame.gradients.is_empty() {
        parts.push("<defs>".to_owned());
        for (index, gradient) in frame.gradients.iter().enumerate() {
            parts.push(render_gradient(index, gradient));
        }
        parts.push("</defs>".to_owned());
    }

    if let Some(y_axis) = &frame.y_axis {
        parts.push(render_axis_group("y-axis", y_axis));
    }
    if let Some(x_axis) = &frame.x_axis {
        parts.push(render_axis_group("x-axis", x_axis));
    }
    for path in &frame.area_paths {
        parts.push(render_area_path(path));
    }
    if let Some(crosshair) = &frame.crosshair {
        parts.push(render_line(Some("hover-line"), crosshair));
    }
    if let Some(tooltip) = &frame.tooltip {
        parts.push(render_tooltip(tooltip));
    }

    parts.push("</svg>".to_owned());
    parts.join("\n")
}

fn gradient_id(index: usize) -> String {
    format!("area-gradient-{index}")
}

fn render_gradient(index: usize, gradient: &LinearGradient) -> String {
    let mut parts = vec![format!(
        r#"  <linearGradient id="{}" x1="0%" y1="0%" x2="0%" y2="100%">"#,
        gradient_id(index)
    )];
    for stop in &gradient.stops {
        parts.push(format!(
            r#"    <stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
            fmt_num(stop.offset * 100.0),
            stop.color.to_hex(),
            fmt_num(stop.color.alpha)
        ));
    }
    parts.push("  </linearGradient>".to_owned());
    parts.join("\n")
}

fn render_axis_group(class: &str, group: &AxisGroup) -> String {
    let mut parts = vec![format!(r#"<g class="{class}">"#)];
    for line in &group.grid_lines {
        parts.push(format!("  {}", render_line(None, line)));
    }
    for label in &group.labels {
        parts.push(format!("  {}", render_text(label)));
    }
    parts.push("</g>".to_owned());
    parts.join("\n")
}

fn render_line(class: Option<&str>, line: &LinePrimitive) -> String {
    let mut attrs = String::new();
    if let Some(class) = class {
        attrs.push_str(&format!(r#" class="{class}""#));
    }
    if let Some((dash, gap)) = line.dash {
        attrs.push_str(&format!(
            r#" stroke-dasharray="{}, {}""#,
            fmt_num(dash),
            fmt_num(gap)
        ));
    }
    if line.color.alpha < 1.0 {
        attrs.push_str(&format!(r#" stroke-opacity="{}""#, fmt_num(line.color.alpha)));
    }
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{attrs}/>"#,
        fmt_num(line.x1),
        fmt_num(line.y1),
        fmt_num(line.x2),
        fmt_num(line.y2),
        line.color.to_hex(),
        fmt_num(line.stroke_width)
    )
}

fn render_text(text: &TextPrimitive) -> String {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    format!(
        r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" fill="{}">{}</text>"#,
        fmt_num(text.x),
        fmt_num(text.y),
        fmt_num(text.font_size_px),
        text.color.to_hex(),
        escape_xml(&text.text)
    )
}

fn render_area_path(path: &AreaPathPrimitive) -> String {
    format!(
        r#"<path d="{}" fill="url(#{})" stroke="{}" stroke-width="{}"/>"#,
        path_data(&path.outline),
        gradient_id(path.fill_gradient),
        path.stroke_color.to_hex(),
        fmt_num(path.stroke_width)
    )
}

fn path_data(commands: &[PathCommand]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(commands.len());
    for command in commands {
        parts.push(match *command {
            PathCommand::MoveTo { x, y } => format!("M {} {}", fmt_num(x), fmt_num(y)),
            PathCommand::LineTo { x, y } => format!("L {} {}", fmt_num(x), fmt_num(y)),
            PathCommand::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => format!(
                "C {} {}, {} {}, {} {}",
                fmt_num(x1),
                fmt_num(y1),
                fmt_num(x2),
                fmt_num(y2),
                fmt_num(x),
                fmt_num(y)
            ),
            PathCommand::Close => "Z".to_owned(),
        });
    }
    parts.join(" ")
}

fn render_tooltip(tooltip: &TooltipPrimitive) -> String {
    let widest_line = tooltip
        .title
        .chars()
        .count()
        .max(tooltip.detail.chars().count() + 2);
    let box_width = TOOLTIP_PADDING_PX * 2.0 + widest_line as f64 * TOOLTIP_CHAR_WIDTH_PX;
    let box_height = TOOLTIP_PADDING_PX * 2.0 + TOOLTIP_LINE_HEIGHT_PX * 2.0;
    let title_y = tooltip.y + TOOLTIP_PADDING_PX + TOOLTIP_FONT_SIZE_PX;
    let detail_y = title_y + TOOLTIP_LINE_HEIGHT_PX;
    let text_x = tooltip.x + TOOLTIP_PADDING_PX;

    let mut parts = vec![r#"<g class="tooltip">"#.to_owned()];
    parts.push(format!(
        r##"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="#ffffff" stroke="#cccccc"/>"##,
        fmt_num(tooltip.x),
        fmt_num(tooltip.y),
        fmt_num(box_width),
        fmt_num(box_height),
        fmt_num(TOOLTIP_CORNER_RADIUS_PX)
    ));
    if !tooltip.title.is_empty() {
        parts.push(format!(
            r#"  <text x="{}" y="{}" font-size="{}" font-weight="bold">{}</text>"#,
            fmt_num(text_x),
            fmt_num(title_y),
            fmt_num(TOOLTIP_FONT_SIZE_PX),
            escape_xml(&tooltip.title)
        ));
    }
    parts.push(format!(
        r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        fmt_num(text_x + TOOLTIP_MARKER_RADIUS_PX),
        fmt_num(detail_y - TOOLTIP_MARKER_RADIUS_PX),
        fmt_num(TOOLTIP_MARKER_RADIUS_PX),
        tooltip.marker_color.to_hex()
    ));
    parts.push(format!(
        r#"  <text x="{}" y="{}" font-size="{}">{}</text>"#,
        fmt_num(text_x + TOOLTIP_MARKER_RADIUS_PX * 2.0 + TOOLTIP_PADDING_PX),
        fmt_num(detail_y),
        fmt_num(TOOLTIP_FONT_SIZE_PX),
        escape_xml(&tooltip.detail)
    ));
    parts.push("</g>".to_owned());
    parts.join("\n")
}

/// Numbers rounded to two decimals with trailing zeros trimmed, so the
/// emitted markup stays stable and diffable.
fn fmt_num(value: f64) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
