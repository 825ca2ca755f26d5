use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One bound data view: a categorical column and a numeric measure column,
/// index-aligned.
///
/// Construction fails fast on mismatched column lengths so rendering code
/// never reads out of bounds. The optional measure label titles the tooltip
/// row; hosts that bind a named measure pass its display name through here.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    categories: Vec<String>,
    values: Vec<f64>,
    measure_label: Option<String>,
}

impl DataSet {
    pub fn from_columns(categories: Vec<String>, values: Vec<f64>) -> ChartResult<Self> {
        if categories.len() != values.len() {
            return Err(ChartError::MismatchedDataset {
                categories: categories.len(),
                values: values.len(),
            });
        }

        Ok(Self {
            categories,
            values,
            measure_label: None,
        })
    }

    #[must_use]
    pub fn with_measure_label(mut self, label: impl Into<String>) -> Self {
        self.measure_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn measure_label(&self) -> Option<&str> {
        self.measure_label.as_deref()
    }

    /// Smallest and largest finite value, in that order.
    ///
    /// Non-finite samples are skipped the way the auto-domain resolution
    /// skips them; returns `None` when no finite value exists.
    #[must_use]
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for &value in &self.values {
            if !value.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
        bounds
    }
}
