use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Snapped hover target resolved against the last completed render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverSnap {
    pub category_index: usize,
    /// Crosshair pixel X: the snapped category's scale position.
    pub x: f64,
    /// Sample pixel Y for the snapped value.
    pub y: f64,
    /// Measure value at the snapped category.
    pub value: f64,
}

/// Public hover state exposed to host applications.
///
/// Pointer handlers mutate this between renders; a new render pass resets it
/// wholesale so stale hover output never survives a scene rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub snap: Option<HoverSnap>,
}

impl HoverState {
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.visible = true;
        self.pointer_x = x;
        self.pointer_y = y;
    }

    pub fn on_pointer_leave(&mut self) {
        *self = Self::default();
    }

    pub fn set_snap(&mut self, snap: Option<HoverSnap>) {
        self.snap = snap;
    }
}

/// Index of the category whose X position is nearest `pointer_x`.
///
/// True nearest over a linear scan with no snap threshold; the first of
/// equally distant candidates wins. Returns `None` only for an empty
/// position list.
#[must_use]
pub fn nearest_category_index(positions: &[f64], pointer_x: f64) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .min_by_key(|&(_, &position)| OrderedFloat((position - pointer_x).abs()))
        .map(|(index, _)| index)
}
