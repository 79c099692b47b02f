use super::palette::{ColorBucket, shades};
use super::quantile::QuantileBreakSet;
use crate::constants::classification::LEGEND_TICK_FRACTIONS;

/// Tick labels under the legend gradient: a quarter, half, three quarters and
/// all of `max`, rounded to the nearest integer.
pub fn legend_ticks(max: i64) -> [i64; 4] {
    LEGEND_TICK_FRACTIONS.map(|fraction| (max as f64 * fraction).round() as i64)
}

/// One legend row: the bucket and the inclusive range of totals it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub bucket: ColorBucket,
    pub lower: i64,
    /// `None` for the open-ended darkest bucket.
    pub upper: Option<i64>,
}

/// Describes which totals land in each used bucket. Buckets collapsed by
/// breakpoint deduplication are not listed, except the darkest, which always
/// catches totals above the last breakpoint.
pub fn legend_entries(breaks: &QuantileBreakSet) -> Vec<LegendEntry> {
    if breaks.is_empty() {
        return Vec::new();
    }

    let mut entries = Vec::with_capacity(breaks.len() + 1);
    let mut lower = 1;
    for (bucket, upper) in shades().zip(breaks.breaks()) {
        entries.push(LegendEntry {
            bucket,
            lower,
            upper: Some(*upper),
        });
        lower = upper.saturating_add(1);
    }
    entries.push(LegendEntry {
        bucket: ColorBucket::DARKEST,
        lower,
        upper: None,
    });
    entries
}
