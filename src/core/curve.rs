use serde::{Deserialize, Serialize};

/// One command of a pixel-space path outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    /// End point of the command, when it has one.
    #[must_use]
    pub fn end_point(self) -> Option<(f64, f64)> {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } | Self::CurveTo { x, y, .. } => {
                Some((x, y))
            }
            Self::Close => None,
        }
    }
}

/// Straight-segment interpolation through `points`.
#[must_use]
pub fn polyline_path(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len());
    for (index, &(x, y)) in points.iter().enumerate() {
        if index == 0 {
            commands.push(PathCommand::MoveTo { x, y });
        } else {
            commands.push(PathCommand::LineTo { x, y });
        }
    }
    commands
}

/// Monotone cubic interpolation (Fritsch-Carlson tangents) through points
/// ordered by x.
///
/// Overshoot-free: on monotone input data the interpolant stays within the
/// y-range of each segment's endpoints, so a smoothed series line never dips
/// below its own samples.
#[must_use]
pub fn monotone_path(points: &[(f64, f64)]) -> Vec<PathCommand> {
    match points.len() {
        0 => Vec::new(),
        1 => vec![PathCommand::MoveTo {
            x: points[0].0,
            y: points[0].1,
        }],
        2 => polyline_path(points),
        _ => {
            let tangents = monotone_tangents(points);
            let mut commands = Vec::with_capacity(points.len());
            commands.push(PathCommand::MoveTo {
                x: points[0].0,
                y: points[0].1,
            });
            for index in 1..points.len() {
                commands.push(cubic_segment(
                    points[index - 1],
                    points[index],
                    tangents[index - 1],
                    tangents[index],
                ));
            }
            commands
        }
    }
}

/// One tangent per point: three-point slopes for interior points, adjusted
/// endpoint slopes at both ends.
fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let count = points.len();
    let mut tangents = vec![0.0; count];
    for index in 1..count - 1 {
        tangents[index] = interior_slope(points[index - 1], points[index], points[index + 1]);
    }
    tangents[0] = endpoint_slope(points[0], points[1], tangents[1]);
    tangents[count - 1] = endpoint_slope(points[count - 2], points[count - 1], tangents[count - 2]);
    tangents
}

fn interior_slope(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 + h1 == 0.0 {
        return 0.0;
    }

    let s0 = if h0 != 0.0 { (p1.1 - p0.1) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.1 - p1.1) / h1 } else { 0.0 };
    let weighted = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent =
        (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * weighted.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

fn endpoint_slope(p0: (f64, f64), p1: (f64, f64), neighbor_tangent: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h != 0.0 {
        (3.0 * (p1.1 - p0.1) / h - neighbor_tangent) / 2.0
    } else {
        neighbor_tangent
    }
}

fn cubic_segment(p0: (f64, f64), p1: (f64, f64), t0: f64, t1: f64) -> PathCommand {
    let dx = (p1.0 - p0.0) / 3.0;
    PathCommand::CurveTo {
        x1: p0.0 + dx,
        y1: p0.1 + dx * t0,
        x2: p1.0 - dx,
        y2: p1.1 - dx * t1,
        x: p1.0,
        y: p1.1,
    }
}

fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
