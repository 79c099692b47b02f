//! Olympic Medal Atlas Library
//!
//! Merges per-year, per-country Summer and Winter medal tables into one
//! unified table, derives a global quantile color scale over every medal
//! total, and reports which games were held in any year.
//!
//! # Examples
//!
//! ```rust
//! use olympic_medals::atlas::MedalAtlas;
//! use olympic_medals::classify::ColorBucket;
//! use olympic_medals::data::parse_season_table;
//! use olympic_medals::resolve::GamesKind;
//!
//! let summer = parse_season_table(
//!     r#"{"1992": {"DE": {"gold": 33, "silver": 21, "bronze": 28, "historical": false}}}"#,
//!     "summer",
//! )?;
//! let winter = parse_season_table(
//!     r#"{"1992": {"DE": {"gold": 10, "silver": 10, "bronze": 6, "historical": false}}}"#,
//!     "winter",
//! )?;
//!
//! let atlas = MedalAtlas::build(&summer, &winter);
//!
//! assert_eq!(atlas.entry(1992, "DE").map(|e| e.counts.gold), Some(43));
//! assert_eq!(atlas.resolve(1992).kind(), GamesKind::Both);
//! assert_eq!(atlas.resolve(1940).kind(), GamesKind::Cancelled);
//! assert_eq!(atlas.color_for(1992, "FI"), ColorBucket::NoData);
//! # Ok::<(), olympic_medals::AppError>(())
//! ```

pub mod atlas;
pub mod classify;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod report;
pub mod resolve;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use atlas::MedalAtlas;
pub use classify::{ColorBucket, QuantileBreakSet, compute_breaks};
pub use config::Config;
pub use data::{
    OlympicYearIndex, SeasonMedalEntry, SeasonYearTable, UnifiedCountryEntry, UnifiedYearTable,
    unify,
};
pub use error::AppError;
pub use resolve::{GamesHeld, GamesKind, resolve};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
