use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only touch configuration and no medal data
/// needs to be loaded.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_summer_data.is_some()
        || args.new_winter_data.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Olympic medal atlas
///
/// Merges the Summer and Winter medal datasets into one per-year table and
/// classifies every country's medal total onto a nine-step color scale.
///
/// Without a view option the latest Olympic year is shown.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show one Olympic year: games held, countries, totals and color buckets.
    #[arg(short = 'y', long = "year", help_heading = "Views")]
    pub year: Option<i32>,

    /// List every navigable Olympic year, including cancelled ones.
    #[arg(long = "list-years", help_heading = "Views")]
    pub list_years: bool,

    /// Show the color scale with the total range of each bucket.
    #[arg(long = "legend", help_heading = "Views")]
    pub legend: bool,

    /// Show dataset statistics for Summer, Winter and the combined table.
    #[arg(long = "stats", help_heading = "Views")]
    pub stats: bool,

    /// Number of countries in the statistics leaderboard.
    #[arg(long = "top", default_value_t = olympic_medals::constants::DEFAULT_TOP_COUNTRIES, help_heading = "Views")]
    pub top: usize,

    /// Print the selected year's unified entries as JSON instead of a table.
    #[arg(long = "json", help_heading = "Views")]
    pub json: bool,

    /// Disable color swatches in the output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Summer dataset to read for this run (overrides config).
    #[arg(long = "summer", value_name = "PATH", help_heading = "Data")]
    pub summer: Option<String>,

    /// Winter dataset to read for this run (overrides config).
    #[arg(long = "winter", value_name = "PATH", help_heading = "Data")]
    pub winter: Option<String>,

    /// Persist a new Summer dataset path in config.
    #[arg(long = "set-summer-data", value_name = "PATH", help_heading = "Configuration")]
    pub new_summer_data: Option<String>,

    /// Persist a new Winter dataset path in config.
    #[arg(long = "set-winter-data", value_name = "PATH", help_heading = "Configuration")]
    pub new_winter_data: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write log output to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
