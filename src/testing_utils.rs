use crate::data::models::{SeasonMedalEntry, SeasonYearTable, Year};

/// Test utilities for creating season tables and medal entries
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a modern-country entry with no display name
    pub fn entry(gold: i64, silver: i64, bronze: i64) -> SeasonMedalEntry {
        SeasonMedalEntry {
            gold,
            silver,
            bronze,
            historical: false,
            display_name: None,
        }
    }

    /// Creates an entry carrying a display name
    pub fn named_entry(gold: i64, silver: i64, bronze: i64, name: &str) -> SeasonMedalEntry {
        SeasonMedalEntry {
            display_name: Some(name.to_string()),
            ..Self::entry(gold, silver, bronze)
        }
    }

    /// Creates an entry that includes medals from a historical team
    pub fn historical_entry(gold: i64, silver: i64, bronze: i64) -> SeasonMedalEntry {
        SeasonMedalEntry {
            historical: true,
            ..Self::entry(gold, silver, bronze)
        }
    }

    /// Builds a season table from `(year, country, entry)` rows
    pub fn table(rows: &[(Year, &str, SeasonMedalEntry)]) -> SeasonYearTable {
        let mut table = SeasonYearTable::new();
        for (year, code, entry) in rows {
            table
                .entry(*year)
                .or_default()
                .insert(code.to_string(), entry.clone());
        }
        table
    }

    /// Builds a table with one gold-only entry per total, all in `year`, using
    /// synthetic country codes. Handy for shaping a total distribution.
    pub fn distribution_table(year: Year, totals: &[i64]) -> SeasonYearTable {
        let mut table = SeasonYearTable::new();
        let countries = table.entry(year).or_default();
        for (i, total) in totals.iter().enumerate() {
            countries.insert(format!("C{i:03}"), Self::entry(*total, 0, 0));
        }
        table
    }

    /// A small but realistic Summer table
    pub fn sample_summer() -> SeasonYearTable {
        Self::table(&[
            (1936, "US", Self::entry(24, 21, 12)),
            (1936, "DE", Self::named_entry(33, 26, 30, "Germany")),
            (1988, "RU", Self::historical_entry(55, 31, 46)),
            (1988, "DE", Self::historical_entry(48, 49, 45)),
            (1988, "US", Self::entry(36, 31, 27)),
            (1992, "DE", Self::named_entry(33, 21, 28, "Germany")),
            (1992, "US", Self::entry(37, 34, 37)),
            (1992, "KE", Self::entry(2, 4, 2)),
            (2016, "US", Self::entry(46, 37, 38)),
            (2016, "FI", Self::entry(0, 0, 1)),
        ])
    }

    /// A small but realistic Winter table
    pub fn sample_winter() -> SeasonYearTable {
        Self::table(&[
            (1936, "NO", Self::entry(7, 5, 3)),
            (1988, "RU", Self::historical_entry(11, 9, 9)),
            (1988, "FI", Self::entry(4, 1, 2)),
            (1992, "DE", Self::entry(10, 10, 6)),
            (1992, "NO", Self::entry(9, 6, 5)),
            (1994, "NO", Self::entry(10, 11, 5)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_groups_rows_by_year() {
        let table = TestDataBuilder::table(&[
            (2000, "US", TestDataBuilder::entry(1, 2, 3)),
            (2000, "AU", TestDataBuilder::entry(4, 5, 6)),
            (2004, "US", TestDataBuilder::entry(7, 8, 9)),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table[&2000].len(), 2);
        assert_eq!(table[&2004]["US"].gold, 7);
    }

    #[test]
    fn test_distribution_table_totals() {
        let table = TestDataBuilder::distribution_table(2000, &[1, 2, 3]);
        let totals: Vec<_> = table[&2000].values().map(|e| e.counts().total()).collect();
        assert_eq!(totals, vec![1, 2, 3]);
    }
}
