//! Plain-terminal rendering of atlas queries.
//!
//! Everything here writes to a caller-supplied writer so the same code serves
//! stdout and tests. Color output uses crossterm escape sequences and can be
//! turned off for plain text.

use crate::atlas::MedalAtlas;
use crate::classify::ColorBucket;
use crate::data::lineage::{country_name, lineage_note, starred_display_name};
use crate::data::models::{MedalCounts, Season, UnifiedCountryEntry, Year};
use crate::data::stats::DatasetStats;
use crate::error::AppError;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::Write;

const SWATCH: &str = "██";

fn heading_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan

/// One line of the per-year country table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub code: String,
    pub name: String,
    pub counts: MedalCounts,
    pub summer: Option<MedalCounts>,
    pub winter: Option<MedalCounts>,
    pub historical: bool,
    pub bucket: ColorBucket,
}

impl CountryRow {
    fn from_entry(code: &str, entry: &UnifiedCountryEntry, bucket: ColorBucket) -> Self {
        let name = entry
            .display_name
            .clone()
            .or_else(|| entry.historical.then(|| starred_display_name(code)).flatten())
            .unwrap_or_else(|| country_name(code).to_string());
        Self {
            code: code.to_string(),
            name,
            counts: entry.counts,
            summer: entry.counts_for(Season::Summer),
            winter: entry.counts_for(Season::Winter),
            historical: entry.historical,
            bucket,
        }
    }
}

/// Countries of `year` ordered by total (then gold, then code).
pub fn year_rows(atlas: &MedalAtlas, year: Year) -> Vec<CountryRow> {
    let Some(countries) = atlas.year(year) else {
        return Vec::new();
    };

    let mut rows: Vec<CountryRow> = countries
        .iter()
        .map(|(code, entry)| {
            CountryRow::from_entry(code, entry, atlas.breaks().color_for(entry.total()))
        })
        .collect();
    rows.sort_by(|a, b| {
        b.counts
            .total()
            .cmp(&a.counts.total())
            .then_with(|| b.counts.gold.cmp(&a.counts.gold))
            .then_with(|| a.code.cmp(&b.code))
    });
    rows
}

fn swatch<W: Write>(out: &mut W, bucket: ColorBucket, color: bool) -> Result<(), AppError> {
    if color {
        queue!(
            out,
            SetForegroundColor(bucket.terminal_color()),
            Print(SWATCH),
            ResetColor
        )?;
    } else {
        let label = bucket
            .index()
            .map_or_else(|| "--".to_string(), |i| format!("{i:>2}"));
        queue!(out, Print(label))?;
    }
    Ok(())
}

fn heading<W: Write>(out: &mut W, text: &str, color: bool) -> Result<(), AppError> {
    if color {
        queue!(
            out,
            SetForegroundColor(heading_fg()),
            Print(text),
            ResetColor,
            Print("\n")
        )?;
    } else {
        queue!(out, Print(text), Print("\n"))?;
    }
    Ok(())
}

fn format_split(counts: Option<MedalCounts>) -> String {
    counts.map_or_else(
        || "-".to_string(),
        |c| format!("{}/{}/{}", c.gold, c.silver, c.bronze),
    )
}

/// Renders the games label and country table for one year.
pub fn render_year<W: Write>(
    out: &mut W,
    atlas: &MedalAtlas,
    year: Year,
    color: bool,
) -> Result<(), AppError> {
    let held = atlas.resolve(year);
    heading(out, &format!("{year} - {}", held.kind().label()), color)?;

    if held.cancelled {
        queue!(out, Print("No medals were awarded this year.\n"))?;
        out.flush()?;
        return Ok(());
    }

    let rows = year_rows(atlas, year);
    if rows.is_empty() {
        queue!(out, Print("No medal data for this year.\n"))?;
        out.flush()?;
        return Ok(());
    }

    let two_panels = held.panel_count() == 2;
    for row in &rows {
        swatch(out, row.bucket, color)?;
        let marker = if row.historical { "*" } else { " " };
        let mut line = format!(
            " {:<3}{marker} {:<22} {:>4} {:>4} {:>4} {:>5}",
            row.code,
            row.name,
            row.counts.gold,
            row.counts.silver,
            row.counts.bronze,
            row.counts.total()
        );
        if two_panels {
            line.push_str(&format!(
                "   S {:<11} W {}",
                format_split(row.summer),
                format_split(row.winter)
            ));
        }
        queue!(out, Print(line), Print("\n"))?;
    }

    let notes: Vec<String> = rows
        .iter()
        .filter(|row| row.historical)
        .filter_map(|row| lineage_note(&row.code).map(|note| format!("* {}: {note}", row.code)))
        .collect();
    if !notes.is_empty() {
        queue!(out, Print("\n"))?;
        for note in notes {
            queue!(out, Print(note), Print("\n"))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Renders the navigable year list with a games label per year.
pub fn render_years<W: Write>(out: &mut W, atlas: &MedalAtlas, color: bool) -> Result<(), AppError> {
    heading(out, "Olympic years", color)?;
    for year in atlas.year_index().years() {
        let held = atlas.resolve(*year);
        let countries = atlas.year(*year).map_or(0, |c| c.len());
        let line = if held.cancelled {
            format!("{year}  {}\n", held.kind().label())
        } else {
            format!("{year}  {:<24} {countries} countries\n", held.kind().label())
        };
        queue!(out, Print(line))?;
    }
    out.flush()?;
    Ok(())
}

/// Renders the color legend: one row per used bucket plus the tick values.
pub fn render_legend<W: Write>(out: &mut W, atlas: &MedalAtlas, color: bool) -> Result<(), AppError> {
    heading(out, "Legend (medals per country-year)", color)?;

    let entries = atlas.legend_entries();
    if entries.is_empty() {
        swatch(out, ColorBucket::NoData, color)?;
        queue!(out, Print(" no data\n"))?;
        out.flush()?;
        return Ok(());
    }

    for entry in entries {
        swatch(out, entry.bucket, color)?;
        let range = match entry.upper {
            Some(upper) if upper == entry.lower => format!(" {upper}\n"),
            Some(upper) => format!(" {}-{upper}\n", entry.lower),
            None => format!(" {}+\n", entry.lower),
        };
        queue!(out, Print(range))?;
    }
    swatch(out, ColorBucket::NoData, color)?;
    queue!(out, Print(" no medals\n"))?;

    if let Some(ticks) = atlas.legend_ticks() {
        let ticks: Vec<String> = ticks.iter().map(|t| t.to_string()).collect();
        queue!(out, Print(format!("Ticks: {}\n", ticks.join(" | "))))?;
    }

    out.flush()?;
    Ok(())
}

/// Renders dataset statistics under a title.
pub fn render_stats<W: Write>(
    out: &mut W,
    title: &str,
    stats: &DatasetStats,
    color: bool,
) -> Result<(), AppError> {
    heading(out, title, color)?;
    queue!(
        out,
        Print(format!("Years covered: {}\n", stats.years_covered)),
        Print(format!("Unique countries: {}\n", stats.unique_countries)),
        Print(format!("Total medals: {}\n", stats.total_medals))
    )?;
    if let Some((first, last)) = stats.year_range {
        queue!(out, Print(format!("Year range: {first} - {last}\n")))?;
    }
    if !stats.top_countries.is_empty() {
        queue!(
            out,
            Print(format!(
                "Top {} countries by total medals:\n",
                stats.top_countries.len()
            ))
        )?;
        for (code, total) in &stats.top_countries {
            queue!(out, Print(format!("  {code}: {total}\n")))?;
        }
    }
    out.flush()?;
    Ok(())
}
