pub mod area_series;
pub mod curve;
pub mod format;
pub mod point_scale;
pub mod scale;
pub mod types;

pub use area_series::{AreaGeometry, AreaVertex, project_area_geometry};
pub use curve::{PathCommand, monotone_path, polyline_path};
pub use format::{DisplayUnits, format_axis_value, format_tooltip_value};
pub use point_scale::PointScale;
pub use scale::LinearScale;
pub use types::{DataSet, Viewport};
