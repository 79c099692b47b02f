use super::models::{UnifiedYearTable, Year};
use std::collections::BTreeSet;

/// Ascending, duplicate-free list of every year with data plus every
/// cancelled year. Drives year navigation: one step is one index position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OlympicYearIndex {
    years: Vec<Year>,
}

impl OlympicYearIndex {
    pub fn new(table: &UnifiedYearTable, cancelled: &[Year]) -> Self {
        let years: BTreeSet<Year> = table.keys().chain(cancelled.iter()).copied().collect();
        Self {
            years: years.into_iter().collect(),
        }
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn first(&self) -> Option<Year> {
        self.years.first().copied()
    }

    pub fn last(&self) -> Option<Year> {
        self.years.last().copied()
    }

    pub fn contains(&self, year: Year) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    pub fn position(&self, year: Year) -> Option<usize> {
        self.years.binary_search(&year).ok()
    }

    pub fn get(&self, position: usize) -> Option<Year> {
        self.years.get(position).copied()
    }

    /// Moves `delta` index positions from `year`, clamped to the ends.
    ///
    /// A year that is not in the index starts from the nearest position at or
    /// after it, so stepping from a gap still lands on a real Olympic year.
    pub fn step(&self, year: Year, delta: isize) -> Option<Year> {
        if self.years.is_empty() {
            return None;
        }
        let start = match self.years.binary_search(&year) {
            Ok(pos) => pos as isize,
            Err(insert) if delta > 0 => insert as isize - 1,
            Err(insert) => insert as isize,
        };
        let last = self.years.len() as isize - 1;
        let target = start.saturating_add(delta).clamp(0, last);
        self.get(target as usize)
    }
}
