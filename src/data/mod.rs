pub mod lineage;
pub mod loader;
pub mod models;
pub mod stats;
pub mod unify;
pub mod year_index;

pub use loader::{load_both, load_season_table, parse_season_table};
pub use models::{
    CountryCode, MedalCounts, Season, SeasonMedalEntry, SeasonProvenance, SeasonYearTable,
    UnifiedCountryEntry, UnifiedYearTable, Year,
};
pub use stats::DatasetStats;
pub use unify::unify;
pub use year_index::OlympicYearIndex;
