mod bar;
mod dot_map;
mod geo;
mod pie;
mod proportion;
mod scale;
mod tooltip;
mod types;

pub use bar::BarChart;
pub use dot_map::{DotMap, Location};
pub use pie::PieChart;
pub use proportion::ProportionalBar;
pub use types::Datum;
