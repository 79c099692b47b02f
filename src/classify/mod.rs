pub mod legend;
pub mod palette;
pub mod quantile;

pub use legend::{LegendEntry, legend_entries, legend_ticks};
pub use palette::ColorBucket;
pub use quantile::{Distribution, QuantileBreakSet, compute_breaks};
