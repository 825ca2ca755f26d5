/// Vertical spacing budget per horizontal gridline.
const AXIS_TICK_SPACING_PX: u32 = 80;

/// Tick count scales with viewport height: taller charts get more gridlines,
/// squat charts degrade to a single tick.
#[must_use]
pub(super) fn axis_tick_count(viewport_height: u32) -> usize {
    ((viewport_height / AXIS_TICK_SPACING_PX) as usize).max(1)
}

/// Evenly spaced tick values across `domain`, both ends inclusive.
#[must_use]
pub(super) fn axis_tick_values(domain: (f64, f64), tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    if tick_count == 1 {
        return vec![domain.0];
    }

    let span = domain.1 - domain.0;
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            domain.0 + span * ratio
        })
        .collect()
}
