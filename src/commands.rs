use crate::cli::Args;
use olympic_medals::atlas::MedalAtlas;
use olympic_medals::config::Config;
use olympic_medals::data::{DatasetStats, SeasonYearTable, load_both};
use olympic_medals::error::AppError;
use olympic_medals::report::{render_legend, render_stats, render_year, render_years};
use std::io::{Write, stdout};
use tracing::info;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-summer-data, --set-winter-data,
/// --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args, mut config: Config) -> Result<(), AppError> {
    if let Some(path) = &args.new_summer_data {
        config.summer_data_path = path.clone();
    }

    if let Some(path) = &args.new_winter_data {
        config.winter_data_path = path.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Follow-up hint printed after a failed run, for errors the user can fix by
/// pointing at different datasets.
pub fn failure_hint(error: &AppError) -> Option<&'static str> {
    error.is_data_error().then_some(
        "Check the dataset paths with --list-config, or pass --summer/--winter for this run.",
    )
}

/// Dataset paths for this run: command line first, then config.
pub fn data_paths<'a>(args: &'a Args, config: &'a Config) -> (&'a str, &'a str) {
    (
        args.summer.as_deref().unwrap_or(&config.summer_data_path),
        args.winter.as_deref().unwrap_or(&config.winter_data_path),
    )
}

/// Loads both seasons and derives the atlas. The season tables are returned
/// too so statistics can be reported per season.
pub async fn load_atlas(
    args: &Args,
    config: &Config,
) -> Result<(SeasonYearTable, SeasonYearTable, MedalAtlas), AppError> {
    let (summer_path, winter_path) = data_paths(args, config);
    if summer_path == winter_path {
        return Err(AppError::config_error(
            "Summer and Winter data paths must point to different files",
        ));
    }

    let (summer, winter) = load_both(summer_path, winter_path).await?;
    let atlas = MedalAtlas::build(&summer, &winter);
    Ok((summer, winter, atlas))
}

/// Renders the requested views. Without any view flag the latest year is shown.
pub async fn handle_view_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let (summer, winter, atlas) = load_atlas(args, config).await?;
    let color = config.color_output && !args.plain;
    let mut out = stdout();

    if args.list_years {
        render_years(&mut out, &atlas, color)?;
    }

    if args.legend {
        render_legend(&mut out, &atlas, color)?;
    }

    if args.stats {
        render_stats(
            &mut out,
            "Summer Olympics",
            &DatasetStats::compute(&summer, args.top),
            color,
        )?;
        render_stats(
            &mut out,
            "Winter Olympics",
            &DatasetStats::compute(&winter, args.top),
            color,
        )?;
        render_stats(
            &mut out,
            "All Olympics",
            &DatasetStats::compute(atlas.unified(), args.top),
            color,
        )?;
    }

    let any_view = args.list_years || args.legend || args.stats;
    let year = match args.year {
        Some(year) => Some(atlas.require_year(year)?),
        None if !any_view || args.json => atlas.year_index().last(),
        None => None,
    };

    if let Some(year) = year {
        info!("Showing year {year}");
        if args.json {
            writeln!(out, "{}", atlas.year_json(year)?)?;
        } else {
            render_year(&mut out, &atlas, year, color)?;
        }
    } else if !any_view {
        println!("No Olympic years available in the loaded data.");
    }

    Ok(())
}
