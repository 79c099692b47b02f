use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Olympic year, e.g. `1992`.
pub type Year = i32;

/// Two-letter country key (ISO 3166-1 alpha-2 style), e.g. `"DE"`.
pub type CountryCode = String;

/// One season's per-year, per-country medal tallies as supplied by the loader.
pub type SeasonYearTable = BTreeMap<Year, BTreeMap<CountryCode, SeasonMedalEntry>>;

/// Per-year, per-country merged tallies across both seasons.
pub type UnifiedYearTable = BTreeMap<Year, BTreeMap<CountryCode, UnifiedCountryEntry>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Winter,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => write!(f, "summer"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

/// Gold/silver/bronze counts. Signed, and summed with wrapping arithmetic so
/// bad input flows through unchanged instead of panicking or saturating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedalCounts {
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
}

impl MedalCounts {
    pub fn new(gold: i64, silver: i64, bronze: i64) -> Self {
        Self {
            gold,
            silver,
            bronze,
        }
    }

    pub fn total(&self) -> i64 {
        self.gold.wrapping_add(self.silver).wrapping_add(self.bronze)
    }
}

impl std::ops::Add for MedalCounts {
    type Output = MedalCounts;

    fn add(self, other: MedalCounts) -> MedalCounts {
        MedalCounts {
            gold: self.gold.wrapping_add(other.gold),
            silver: self.silver.wrapping_add(other.silver),
            bronze: self.bronze.wrapping_add(other.bronze),
        }
    }
}

/// One country's tally for one season in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonMedalEntry {
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub historical: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl SeasonMedalEntry {
    pub fn counts(&self) -> MedalCounts {
        MedalCounts::new(self.gold, self.silver, self.bronze)
    }
}

/// Which season(s) contributed to a unified entry.
///
/// Serialized flattened into the entry, so the JSON carries either a
/// `"season": "summer"` tag or a `"seasons": {summer, winter}` breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonProvenance {
    #[serde(rename = "season")]
    SingleSeason(Season),
    #[serde(rename = "seasons")]
    BothSeasons {
        summer: MedalCounts,
        winter: MedalCounts,
    },
}

impl SeasonProvenance {
    pub fn includes(&self, season: Season) -> bool {
        match self {
            SeasonProvenance::SingleSeason(only) => *only == season,
            SeasonProvenance::BothSeasons { .. } => true,
        }
    }

    /// Individual counts for one season, when it is known separately.
    pub fn season_counts(&self, season: Season) -> Option<MedalCounts> {
        match (self, season) {
            (SeasonProvenance::BothSeasons { summer, .. }, Season::Summer) => Some(*summer),
            (SeasonProvenance::BothSeasons { winter, .. }, Season::Winter) => Some(*winter),
            (SeasonProvenance::SingleSeason(_), _) => None,
        }
    }
}

/// A country's merged medal record for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedCountryEntry {
    #[serde(flatten)]
    pub counts: MedalCounts,
    pub historical: bool,
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub provenance: SeasonProvenance,
}

impl UnifiedCountryEntry {
    pub fn total(&self) -> i64 {
        self.counts.total()
    }

    /// Counts for `season`: the individual breakdown when both seasons
    /// contributed, the combined counts when it was the only season, and
    /// `None` when the season did not contribute.
    pub fn counts_for(&self, season: Season) -> Option<MedalCounts> {
        match &self.provenance {
            SeasonProvenance::SingleSeason(only) if *only == season => Some(self.counts),
            SeasonProvenance::SingleSeason(_) => None,
            both => both.season_counts(season),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(provenance: SeasonProvenance) -> UnifiedCountryEntry {
        UnifiedCountryEntry {
            counts: MedalCounts::new(43, 31, 34),
            historical: false,
            display_name: Some("Germany".to_string()),
            provenance,
        }
    }

    #[test]
    fn test_medal_counts_total_and_add() {
        let summer = MedalCounts::new(33, 21, 28);
        let winter = MedalCounts::new(10, 10, 6);
        assert_eq!(summer.total(), 82);
        assert_eq!(summer + winter, MedalCounts::new(43, 31, 34));
    }

    #[test]
    fn test_negative_counts_pass_through() {
        let counts = MedalCounts::new(-1, 0, 2);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_season_entry_deserializes_without_display_name() {
        let entry: SeasonMedalEntry = serde_json::from_value(json!({
            "gold": 46, "silver": 37, "bronze": 38, "historical": false
        }))
        .unwrap();
        assert_eq!(entry.display_name, None);
        assert_eq!(entry.counts().total(), 121);
    }

    #[test]
    fn test_season_entry_null_display_name_is_absent() {
        let entry: SeasonMedalEntry = serde_json::from_value(json!({
            "gold": 1, "silver": 0, "bronze": 0, "historical": true, "display_name": null
        }))
        .unwrap();
        assert_eq!(entry.display_name, None);
        assert!(entry.historical);
    }

    #[test]
    fn test_single_season_serializes_with_season_tag() {
        let value = serde_json::to_value(entry(SeasonProvenance::SingleSeason(Season::Summer)))
            .unwrap();
        assert_eq!(value["season"], "summer");
        assert_eq!(value["gold"], 43);
        assert!(value.get("seasons").is_none());
    }

    #[test]
    fn test_both_seasons_serializes_with_breakdown() {
        let value = serde_json::to_value(entry(SeasonProvenance::BothSeasons {
            summer: MedalCounts::new(33, 21, 28),
            winter: MedalCounts::new(10, 10, 6),
        }))
        .unwrap();
        assert_eq!(value["seasons"]["summer"]["gold"], 33);
        assert_eq!(value["seasons"]["winter"]["gold"], 10);
        assert!(value.get("season").is_none());
    }

    #[test]
    fn test_counts_for_season() {
        let single = entry(SeasonProvenance::SingleSeason(Season::Winter));
        assert_eq!(single.counts_for(Season::Winter), Some(single.counts));
        assert_eq!(single.counts_for(Season::Summer), None);

        let both = entry(SeasonProvenance::BothSeasons {
            summer: MedalCounts::new(33, 21, 28),
            winter: MedalCounts::new(10, 10, 6),
        });
        assert_eq!(
            both.counts_for(Season::Summer),
            Some(MedalCounts::new(33, 21, 28))
        );
        assert_eq!(
            both.counts_for(Season::Winter),
            Some(MedalCounts::new(10, 10, 6))
        );
        assert!(both.provenance.includes(Season::Summer));
        assert!(both.provenance.includes(Season::Winter));
    }

    #[test]
    fn test_season_display() {
        assert_eq!(Season::Summer.to_string(), "summer");
        assert_eq!(Season::Winter.to_string(), "winter");
    }
}
