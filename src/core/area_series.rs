#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::curve::{PathCommand, monotone_path, polyline_path};
use crate::core::point_scale::PointScale;
use crate::core::scale::LinearScale;
use crate::core::types::DataSet;
use crate::error::{ChartError, ChartResult};

/// Vertex in pixel coordinates used by deterministic area geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y: f64,
}

/// Deterministic geometry for the area series.
///
/// `line_points` follows the mapped samples. `outline` is the closed fill
/// perimeter whose bottom edge sits at `baseline_y` — the pixel position of
/// the resolved domain minimum, not the axis origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<AreaVertex>,
    pub outline: Vec<PathCommand>,
    pub baseline_y: f64,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            outline: Vec::new(),
            baseline_y: 0.0,
        }
    }
}

/// Projects a dataset through both scales into area geometry.
///
/// `baseline_value` anchors the fill bottom; callers pass the resolved
/// domain minimum so the filled region spans from the series line down to
/// the minimum range. `smooth` switches the top edge between straight
/// segments and monotone cubic interpolation.
pub fn project_area_geometry(
    data: &DataSet,
    point_scale: &PointScale,
    value_scale: LinearScale,
    baseline_value: f64,
    smooth: bool,
) -> ChartResult<AreaGeometry> {
    if data.is_empty() {
        return Ok(AreaGeometry::empty());
    }

    let baseline_y = value_scale.value_to_pixel(baseline_value)?;
    let line_points = project_line_points(data, point_scale, value_scale)?;
    let outline = area_outline(&line_points, baseline_y, smooth);

    Ok(AreaGeometry {
        line_points,
        outline,
        baseline_y,
    })
}

fn project_line_points(
    data: &DataSet,
    point_scale: &PointScale,
    value_scale: LinearScale,
) -> ChartResult<Vec<AreaVertex>> {
    // For large series, optional parallel projection keeps API behavior
    // stable while reducing wall-clock projection time.
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<ChartResult<AreaVertex>> = data
            .values()
            .par_iter()
            .enumerate()
            .map(|(index, &value)| project_single_point(index, value, point_scale, value_scale))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(data.len());
        for (index, &value) in data.values().iter().enumerate() {
            out.push(project_single_point(index, value, point_scale, value_scale)?);
        }
        Ok(out)
    }
}

fn project_single_point(
    index: usize,
    value: f64,
    point_scale: &PointScale,
    value_scale: LinearScale,
) -> ChartResult<AreaVertex> {
    let x = point_scale.position_at(index).ok_or_else(|| {
        ChartError::InvalidData(format!("no scale position for category index {index}"))
    })?;
    let y = value_scale.value_to_pixel(value)?;
    Ok(AreaVertex { x, y })
}

/// Builds the closed fill outline: interpolated top edge, then straight
/// drops to the baseline on both ends.
fn area_outline(points: &[AreaVertex], baseline_y: f64, smooth: bool) -> Vec<PathCommand> {
    let top: Vec<(f64, f64)> = points.iter().map(|point| (point.x, point.y)).collect();
    let mut outline = if smooth {
        monotone_path(&top)
    } else {
        polyline_path(&top)
    };

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        outline.push(PathCommand::LineTo {
            x: last.x,
            y: baseline_y,
        });
        outline.push(PathCommand::LineTo {
            x: first.x,
            y: baseline_y,
        });
        outline.push(PathCommand::Close);
    }

    outline
}
