use crate::config::RenderConfig;
use crate::core::DataSet;
use crate::error::{ChartError, ChartResult};

/// Resolved vertical domain for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
    /// Set when the ±1 widening was applied because the requested or
    /// measured bounds collapsed onto a single value.
    pub expanded_degenerate: bool,
}

/// Resolves the vertical domain: configured bounds win, data bounds fill
/// the gaps.
///
/// A degenerate domain (min equals max, e.g. a constant series) is widened
/// by one unit on each side so the downstream scale never divides by zero.
pub fn resolve_value_domain(config: &RenderConfig, data: &DataSet) -> ChartResult<ValueDomain> {
    let data_bounds = data.value_bounds();

    let min = match config.min_range {
        Some(min) => min,
        None => {
            data_bounds
                .map(|(min, _)| min)
                .ok_or_else(auto_resolution_error)?
        }
    };
    let max = match config.max_range {
        Some(max) => max,
        None => {
            data_bounds
                .map(|(_, max)| max)
                .ok_or_else(auto_resolution_error)?
        }
    };

    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidData(
            "value domain bounds must be finite".to_owned(),
        ));
    }

    if min == max {
        return Ok(ValueDomain {
            min: min - 1.0,
            max: max + 1.0,
            expanded_degenerate: true,
        });
    }

    Ok(ValueDomain {
        min,
        max,
        expanded_degenerate: false,
    })
}

fn auto_resolution_error() -> ChartError {
    ChartError::InvalidData("cannot auto-resolve value domain without finite values".to_owned())
}
