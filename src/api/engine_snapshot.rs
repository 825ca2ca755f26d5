use crate::config::RenderConfig;
use crate::core::{DataSet, LinearScale, PointScale, Viewport};

use super::value_domain::ValueDomain;

/// Everything pointer handlers need from the last completed render pass.
///
/// A new `render` call replaces the snapshot wholesale; that replacement is
/// what detaches hover handling from a superseded scene, so handlers never
/// mix scales from one pass with data from another.
#[derive(Debug, Clone)]
pub struct SceneSnapshot {
    pub viewport: Viewport,
    pub config: RenderConfig,
    pub data: DataSet,
    pub point_scale: PointScale,
    pub value_scale: LinearScale,
    pub value_domain: ValueDomain,
}
