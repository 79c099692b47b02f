use super::palette::ColorBucket;
use crate::constants::classification::RANK_FRACTIONS;
use crate::data::models::UnifiedYearTable;
use tracing::debug;

/// Every positive country-year total in a table, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distribution {
    values: Vec<i64>,
}

impl Distribution {
    pub fn from_table(table: &UnifiedYearTable) -> Self {
        let values = table
            .values()
            .flat_map(|countries| countries.values().map(|entry| entry.total()))
            .collect();
        Self::from_totals(values)
    }

    /// Keeps only positive totals; zero-medal entries never get a shade.
    pub fn from_totals(mut values: Vec<i64>) -> Self {
        values.retain(|total| *total > 0);
        values.sort_unstable();
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max(&self) -> Option<i64> {
        self.values.last().copied()
    }

    /// Value at `floor(fraction * N)`, clamped to the last element.
    pub fn at_rank(&self, fraction: f64) -> Option<i64> {
        if self.values.is_empty() {
            return None;
        }
        let index = (fraction * self.values.len() as f64).floor() as usize;
        self.values.get(index.min(self.values.len() - 1)).copied()
    }
}

/// Ascending, duplicate-free thresholds separating adjacent color buckets.
///
/// Holds up to eight entries; fewer when several rank fractions land on the
/// same value, in which case the collapsed buckets are simply unused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuantileBreakSet {
    breaks: Vec<i64>,
}

impl QuantileBreakSet {
    pub fn from_distribution(distribution: &Distribution) -> Self {
        let mut breaks: Vec<i64> = RANK_FRACTIONS
            .iter()
            .filter_map(|fraction| distribution.at_rank(*fraction))
            .collect();
        breaks.dedup();

        debug!(
            "Computed {} breakpoints from {} totals: {breaks:?}",
            breaks.len(),
            distribution.len()
        );
        Self { breaks }
    }

    pub fn breaks(&self) -> &[i64] {
        &self.breaks
    }

    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// Bucket for a medal total.
    ///
    /// Totals at or below zero are no data. Otherwise the first breakpoint
    /// that is `>= total` picks the shade, so a total equal to a breakpoint
    /// stays in the lower bucket. Totals above every breakpoint get the
    /// darkest shade. An empty break set classifies everything as no data.
    pub fn color_for(&self, total: i64) -> ColorBucket {
        if total <= 0 || self.breaks.is_empty() {
            return ColorBucket::NoData;
        }
        match self.breaks.iter().position(|b| *b >= total) {
            Some(index) => ColorBucket::shade(index),
            None => ColorBucket::DARKEST,
        }
    }

    /// Like [`color_for`](Self::color_for) but for possibly absent totals.
    pub fn color_for_opt(&self, total: Option<i64>) -> ColorBucket {
        total.map_or(ColorBucket::NoData, |t| self.color_for(t))
    }
}

/// Derives the global break set from every positive total in `table`.
pub fn compute_breaks(table: &UnifiedYearTable) -> QuantileBreakSet {
    QuantileBreakSet::from_distribution(&Distribution::from_table(table))
}
