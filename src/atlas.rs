use crate::classify::{
    ColorBucket, Distribution, LegendEntry, QuantileBreakSet, legend_entries, legend_ticks,
};
use crate::constants::CANCELLED_YEARS;
use crate::data::models::{CountryCode, SeasonYearTable, UnifiedCountryEntry, UnifiedYearTable, Year};
use crate::data::{OlympicYearIndex, unify};
use crate::error::AppError;
use crate::resolve::{GamesHeld, resolve};
use std::collections::BTreeMap;
use tracing::info;

/// The derived, read-only structures the presentation layer queries.
///
/// Built once from the two season tables; nothing here is mutated after
/// [`MedalAtlas::build`] returns.
#[derive(Debug, Clone)]
pub struct MedalAtlas {
    unified: UnifiedYearTable,
    distribution: Distribution,
    breaks: QuantileBreakSet,
    year_index: OlympicYearIndex,
    cancelled: Vec<Year>,
}

impl MedalAtlas {
    pub fn build(summer: &SeasonYearTable, winter: &SeasonYearTable) -> Self {
        Self::build_with_cancelled(summer, winter, &CANCELLED_YEARS)
    }

    pub fn build_with_cancelled(
        summer: &SeasonYearTable,
        winter: &SeasonYearTable,
        cancelled: &[Year],
    ) -> Self {
        let unified = unify(summer, winter);
        let distribution = Distribution::from_table(&unified);
        let breaks = QuantileBreakSet::from_distribution(&distribution);
        let year_index = OlympicYearIndex::new(&unified, cancelled);

        info!(
            "Built medal atlas: {} years, {} positive totals, {} breakpoints",
            year_index.len(),
            distribution.len(),
            breaks.len()
        );

        Self {
            unified,
            distribution,
            breaks,
            year_index,
            cancelled: cancelled.to_vec(),
        }
    }

    pub fn unified(&self) -> &UnifiedYearTable {
        &self.unified
    }

    pub fn breaks(&self) -> &QuantileBreakSet {
        &self.breaks
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn year_index(&self) -> &OlympicYearIndex {
        &self.year_index
    }

    pub fn cancelled_years(&self) -> &[Year] {
        &self.cancelled
    }

    /// All country entries for `year`, if the year has data.
    pub fn year(&self, year: Year) -> Option<&BTreeMap<CountryCode, UnifiedCountryEntry>> {
        self.unified.get(&year)
    }

    pub fn entry(&self, year: Year, code: &str) -> Option<&UnifiedCountryEntry> {
        self.year(year).and_then(|countries| countries.get(code))
    }

    /// Fill color for a country in a year; absent entries are no data.
    pub fn color_for(&self, year: Year, code: &str) -> ColorBucket {
        self.breaks
            .color_for_opt(self.entry(year, code).map(UnifiedCountryEntry::total))
    }

    pub fn resolve(&self, year: Year) -> GamesHeld {
        resolve(year, &self.unified, &self.cancelled)
    }

    /// Ticks for the legend, `None` when no country ever won a medal.
    pub fn legend_ticks(&self) -> Option<[i64; 4]> {
        self.distribution.max().map(legend_ticks)
    }

    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        legend_entries(&self.breaks)
    }

    /// Checks that `year` is something the navigation can show: a year with
    /// data or a cancelled year.
    pub fn require_year(&self, year: Year) -> Result<Year, AppError> {
        if self.year_index.contains(year) {
            Ok(year)
        } else {
            Err(AppError::unknown_year(year))
        }
    }

    /// One year's unified entries as JSON, in the `season` / `seasons` shape.
    pub fn year_json(&self, year: Year) -> Result<String, AppError> {
        let empty = BTreeMap::new();
        let countries = self.year(year).unwrap_or(&empty);
        Ok(serde_json::to_string_pretty(countries)?)
    }
}
