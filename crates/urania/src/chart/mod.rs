pub mod cusps;
pub mod positions;
pub mod types;

pub use cusps::compute_angles;
pub use positions::{compute_chart, Chart};
pub use types::{ChartAngle, ChartAngles, PointId, Position};
