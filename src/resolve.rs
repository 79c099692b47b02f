//! Which games took place in a given year.

use crate::data::models::{Season, SeasonProvenance, UnifiedYearTable, Year};
use serde::Serialize;
use tracing::warn;

/// Outcome of resolving a year against the unified table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GamesHeld {
    pub cancelled: bool,
    pub has_summer: bool,
    pub has_winter: bool,
}

/// Coarse classification used to pick icons and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamesKind {
    Cancelled,
    SummerOnly,
    WinterOnly,
    Both,
    NoGames,
}

impl GamesHeld {
    pub const CANCELLED: GamesHeld = GamesHeld {
        cancelled: true,
        has_summer: false,
        has_winter: false,
    };

    pub fn kind(&self) -> GamesKind {
        match (self.cancelled, self.has_summer, self.has_winter) {
            (true, _, _) => GamesKind::Cancelled,
            (false, true, true) => GamesKind::Both,
            (false, true, false) => GamesKind::SummerOnly,
            (false, false, true) => GamesKind::WinterOnly,
            (false, false, false) => GamesKind::NoGames,
        }
    }

    pub fn held(&self, season: Season) -> bool {
        match season {
            Season::Summer => self.has_summer,
            Season::Winter => self.has_winter,
        }
    }

    /// Number of season panels a country popup should show for this year.
    pub fn panel_count(&self) -> usize {
        usize::from(self.has_summer) + usize::from(self.has_winter)
    }
}

impl GamesKind {
    pub fn label(&self) -> &'static str {
        match self {
            GamesKind::Cancelled => "Games cancelled",
            GamesKind::SummerOnly => "Summer Games",
            GamesKind::WinterOnly => "Winter Games",
            GamesKind::Both => "Summer and Winter Games",
            GamesKind::NoGames => "No Games",
        }
    }
}

/// Reports which games occurred in `year`.
///
/// Cancelled years win over any data in the table. Otherwise the year's
/// countries are scanned until both seasons have been seen: a country with a
/// two-season breakdown settles it immediately, single-season tags set one
/// flag each. An absent year yields all flags false.
///
/// `cancelled` is a membership set: its order and any duplicates are
/// irrelevant.
pub fn resolve(year: Year, table: &UnifiedYearTable, cancelled: &[Year]) -> GamesHeld {
    if cancelled.contains(&year) {
        if table.get(&year).is_some_and(|countries| !countries.is_empty()) {
            warn!("Ignoring medal entries recorded for cancelled year {year}");
        }
        return GamesHeld::CANCELLED;
    }

    let Some(countries) = table.get(&year) else {
        return GamesHeld::default();
    };

    let mut held = GamesHeld::default();
    for entry in countries.values() {
        match entry.provenance {
            SeasonProvenance::BothSeasons { .. } => {
                held.has_summer = true;
                held.has_winter = true;
            }
            SeasonProvenance::SingleSeason(Season::Summer) => held.has_summer = true,
            SeasonProvenance::SingleSeason(Season::Winter) => held.has_winter = true,
        }
        if held.has_summer && held.has_winter {
            break;
        }
    }
    held
}
