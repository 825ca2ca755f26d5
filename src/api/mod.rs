//! Engine API assembling scenes from host update and input events.

mod axis_ticks;
mod engine;
mod engine_snapshot;
mod plugin_registry;
mod scene_builder;
mod value_domain;

pub use engine::AreaChartEngine;
pub use engine_snapshot::SceneSnapshot;
pub use scene_builder::PLOT_PADDING_PX;
pub use value_domain::{ValueDomain, resolve_value_domain};
