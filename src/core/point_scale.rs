use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};

/// Ordinal scale mapping each unique category to an evenly spaced X position.
///
/// Categories keep their input order. The first category sits at the range
/// start and the last at the range end; a single category collapses onto the
/// range start, which is what the even-spacing step formula degenerates to.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale {
    positions: IndexMap<String, f64>,
    step: f64,
}

impl PointScale {
    pub fn new(categories: &[String], range: (f64, f64)) -> ChartResult<Self> {
        if categories.is_empty() {
            return Err(ChartError::InvalidData(
                "point scale domain must not be empty".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        let denominator = categories.len().saturating_sub(1).max(1) as f64;
        let step = (range.1 - range.0) / denominator;

        let mut positions = IndexMap::with_capacity(categories.len());
        for (index, category) in categories.iter().enumerate() {
            let position = range.0 + step * index as f64;
            if positions.insert(category.clone(), position).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "duplicate category `{category}` in scale domain"
                )));
            }
        }

        Ok(Self { positions, step })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Distance between neighboring category positions.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        self.positions.get(category).copied()
    }

    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<f64> {
        self.positions
            .get_index(index)
            .map(|(_, position)| *position)
    }

    /// Positions in category order.
    #[must_use]
    pub fn positions(&self) -> Vec<f64> {
        self.positions.values().copied().collect()
    }

    /// Iterates `(category, position)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.positions
            .iter()
            .map(|(category, position)| (category.as_str(), *position))
    }
}
