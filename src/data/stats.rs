use super::models::{CountryCode, SeasonYearTable, UnifiedYearTable, Year};
use std::collections::{BTreeMap, BTreeSet};

/// Summary of a medal table: coverage, volume and leading countries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetStats {
    pub years_covered: usize,
    pub unique_countries: usize,
    pub total_medals: i64,
    pub year_range: Option<(Year, Year)>,
    /// Countries by cumulative medals, highest first; ties ordered by code.
    pub top_countries: Vec<(CountryCode, i64)>,
}

/// Anything that can be viewed as `year -> country -> total`.
pub trait MedalTotals {
    fn year_totals(&self) -> Vec<(Year, Vec<(&CountryCode, i64)>)>;
}

impl MedalTotals for SeasonYearTable {
    fn year_totals(&self) -> Vec<(Year, Vec<(&CountryCode, i64)>)> {
        self.iter()
            .map(|(year, countries)| {
                let totals = countries
                    .iter()
                    .map(|(code, entry)| (code, entry.counts().total()))
                    .collect();
                (*year, totals)
            })
            .collect()
    }
}

impl MedalTotals for UnifiedYearTable {
    fn year_totals(&self) -> Vec<(Year, Vec<(&CountryCode, i64)>)> {
        self.iter()
            .map(|(year, countries)| {
                let totals = countries
                    .iter()
                    .map(|(code, entry)| (code, entry.total()))
                    .collect();
                (*year, totals)
            })
            .collect()
    }
}

impl DatasetStats {
    pub fn compute<T: MedalTotals + ?Sized>(table: &T, top_n: usize) -> Self {
        let per_year = table.year_totals();

        let mut countries = BTreeSet::new();
        let mut cumulative: BTreeMap<&CountryCode, i64> = BTreeMap::new();
        let mut total_medals: i64 = 0;

        for (_, totals) in &per_year {
            for (code, total) in totals {
                countries.insert(*code);
                let running = cumulative.entry(*code).or_default();
                *running = running.wrapping_add(*total);
                total_medals = total_medals.wrapping_add(*total);
            }
        }

        let mut top_countries: Vec<(CountryCode, i64)> = cumulative
            .into_iter()
            .map(|(code, total)| (code.clone(), total))
            .collect();
        top_countries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_countries.truncate(top_n);

        let year_range = match (per_year.first(), per_year.last()) {
            (Some((first, _)), Some((last, _))) => Some((*first, *last)),
            _ => None,
        };

        Self {
            years_covered: per_year.len(),
            unique_countries: countries.len(),
            total_medals,
            year_range,
            top_countries,
        }
    }
}
