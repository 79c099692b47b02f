//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed calendar facts, classification fractions
//! and default paths used across the crate.

/// Olympic years in which no games were held (World War I and II).
pub const CANCELLED_YEARS: [i32; 3] = [1916, 1940, 1944];

/// Classification scale constants
pub mod classification {
    /// Rank fractions at which breakpoints are sampled from the sorted
    /// distribution of positive medal totals. Denser at the low end where most
    /// country-year totals cluster.
    pub const RANK_FRACTIONS: [f64; 8] = [0.15, 0.35, 0.55, 0.70, 0.82, 0.91, 0.96, 0.99];

    /// Number of shaded colors in the palette (one more than the breakpoints).
    pub const SHADE_COUNT: usize = 9;

    /// Fractions of the maximum total shown as legend ticks.
    pub const LEGEND_TICK_FRACTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
}

/// Default locations of the season datasets, relative to the working directory
pub mod data_files {
    pub const SUMMER_DEFAULT: &str = "data/summer_medals.json";

    pub const WINTER_DEFAULT: &str = "data/winter_medals.json";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for Summer dataset path override
    pub const SUMMER_DATA: &str = "OLYMPIC_MEDALS_SUMMER_DATA";

    /// Environment variable for Winter dataset path override
    pub const WINTER_DATA: &str = "OLYMPIC_MEDALS_WINTER_DATA";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "OLYMPIC_MEDALS_LOG_FILE";
}

/// Default number of countries listed in dataset statistics
pub const DEFAULT_TOP_COUNTRIES: usize = 5;

/// Log file name used when no custom path is configured
pub const LOG_FILE_NAME: &str = "olympic_medals.log";
