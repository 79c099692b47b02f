use super::models::{
    CountryCode, Season, SeasonMedalEntry, SeasonProvenance, SeasonYearTable,
    UnifiedCountryEntry, UnifiedYearTable,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Merges the Summer and Winter tables into one per-year table.
///
/// Years and country codes are the union of both inputs. A country present in
/// both seasons gets elementwise-summed counts, OR-ed `historical`, the Summer
/// display name (falling back to Winter), and a per-season breakdown. A
/// country present in one season is copied verbatim and tagged with that
/// season. Counts are not validated.
pub fn unify(summer: &SeasonYearTable, winter: &SeasonYearTable) -> UnifiedYearTable {
    let empty = BTreeMap::new();
    let years: BTreeSet<_> = summer.keys().chain(winter.keys()).copied().collect();

    let mut unified = UnifiedYearTable::new();
    for year in years {
        let summer_year = summer.get(&year).unwrap_or(&empty);
        let winter_year = winter.get(&year).unwrap_or(&empty);

        let codes: BTreeSet<&CountryCode> = summer_year.keys().chain(winter_year.keys()).collect();

        let countries: BTreeMap<_, _> = codes
            .into_iter()
            .filter_map(|code| {
                merge_entry(summer_year.get(code), winter_year.get(code))
                    .map(|entry| (code.clone(), entry))
            })
            .collect();

        debug!(
            "Unified {year}: {} countries ({} summer, {} winter)",
            countries.len(),
            summer_year.len(),
            winter_year.len()
        );
        unified.insert(year, countries);
    }

    unified
}

/// Merges one country's season entries for a single year.
///
/// Returns `None` only when neither season has an entry.
pub fn merge_entry(
    summer: Option<&SeasonMedalEntry>,
    winter: Option<&SeasonMedalEntry>,
) -> Option<UnifiedCountryEntry> {
    match (summer, winter) {
        (Some(s), Some(w)) => Some(UnifiedCountryEntry {
            counts: s.counts() + w.counts(),
            historical: s.historical || w.historical,
            display_name: s.display_name.clone().or_else(|| w.display_name.clone()),
            provenance: SeasonProvenance::BothSeasons {
                summer: s.counts(),
                winter: w.counts(),
            },
        }),
        (Some(s), None) => Some(single_season(s, Season::Summer)),
        (None, Some(w)) => Some(single_season(w, Season::Winter)),
        (None, None) => None,
    }
}

fn single_season(entry: &SeasonMedalEntry, season: Season) -> UnifiedCountryEntry {
    UnifiedCountryEntry {
        counts: entry.counts(),
        historical: entry.historical,
        display_name: entry.display_name.clone(),
        provenance: SeasonProvenance::SingleSeason(season),
    }
}
