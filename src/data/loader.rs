use super::models::{CountryCode, SeasonMedalEntry, SeasonYearTable, Year};
use crate::error::AppError;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// Wire shape of a season document: year keys are strings in JSON.
type RawSeasonDocument = BTreeMap<String, BTreeMap<CountryCode, SeasonMedalEntry>>;

/// Reads and validates one season dataset from disk.
///
/// # Errors
/// * `AppError::DataNotFound` - the file does not exist
/// * `AppError::DataParse` - the document is not valid JSON or an entry is
///   missing a required field or has a non-integer count
/// * `AppError::InvalidYearKey` - a top-level key is not an integer year
pub async fn load_season_table(path: &str) -> Result<SeasonYearTable, AppError> {
    if !Path::new(path).exists() {
        return Err(AppError::data_not_found(path));
    }

    let content = fs::read_to_string(path).await?;
    let table = parse_season_table(&content, path)?;

    let entries: usize = table.values().map(BTreeMap::len).sum();
    info!(
        "Loaded {} years ({entries} country entries) from {path}",
        table.len()
    );

    Ok(table)
}

/// Loads the Summer and Winter datasets concurrently.
pub async fn load_both(
    summer_path: &str,
    winter_path: &str,
) -> Result<(SeasonYearTable, SeasonYearTable), AppError> {
    tokio::try_join!(load_season_table(summer_path), load_season_table(winter_path))
}

/// Parses a season document. `source` is only used for error context.
pub fn parse_season_table(json: &str, source: &str) -> Result<SeasonYearTable, AppError> {
    let raw: RawSeasonDocument =
        serde_json::from_str(json).map_err(|e| AppError::data_parse(source, e.to_string()))?;

    let mut table = SeasonYearTable::new();
    for (key, countries) in raw {
        let year = parse_year_key(&key).ok_or_else(|| AppError::invalid_year_key(&key, source))?;
        if table.insert(year, countries).is_some() {
            // "1992" and "01992" both parse to the same year
            warn!("Duplicate year {year} in {source}; keeping the last occurrence");
        }
    }

    Ok(table)
}

fn parse_year_key(key: &str) -> Option<Year> {
    key.trim().parse::<Year>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_valid_document() {
        let json = r#"{
            "2016": {"US": {"gold": 46, "silver": 37, "bronze": 38, "historical": false}},
            "1992": {"DE": {"gold": 33, "silver": 21, "bronze": 28, "historical": false, "display_name": "Germany"}}
        }"#;
        let table = parse_season_table(json, "summer.json").unwrap();

        assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![1992, 2016]);
        assert_eq!(table[&2016]["US"].gold, 46);
        assert_eq!(table[&1992]["DE"].display_name.as_deref(), Some("Germany"));
    }

    #[test]
    fn test_parse_empty_document() {
        let table = parse_season_table("{}", "winter.json").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_integer_year() {
        let json = r#"{"19x2": {}}"#;
        let err = parse_season_table(json, "summer.json").unwrap_err();
        assert!(matches!(err, AppError::InvalidYearKey { ref key, .. } if key == "19x2"));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let json = r#"{"2016": {"US": {"gold": 46, "silver": 37, "historical": false}}}"#;
        let err = parse_season_table(json, "summer.json").unwrap_err();
        assert!(matches!(err, AppError::DataParse { .. }));
        assert!(err.to_string().contains("bronze"));
    }

    #[test]
    fn test_parse_rejects_fractional_counts() {
        let json = r#"{"2016": {"US": {"gold": 4.5, "silver": 0, "bronze": 0, "historical": false}}}"#;
        let err = parse_season_table(json, "summer.json").unwrap_err();
        assert!(matches!(err, AppError::DataParse { .. }));
    }

    #[test]
    fn test_parse_passes_negative_counts_through() {
        let json = r#"{"2016": {"XX": {"gold": -3, "silver": 0, "bronze": 0, "historical": false}}}"#;
        let table = parse_season_table(json, "summer.json").unwrap();
        assert_eq!(table[&2016]["XX"].gold, -3);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.json");
        let err = load_season_table(&path.to_string_lossy()).await.unwrap_err();
        assert!(matches!(err, AppError::DataNotFound { .. }));
    }

    #[tokio::test]
    async fn test_load_both_from_disk() {
        let temp_dir = tempdir().unwrap();
        let summer_path = temp_dir.path().join("summer.json");
        let winter_path = temp_dir.path().join("winter.json");
        tokio::fs::write(
            &summer_path,
            r#"{"1992": {"DE": {"gold": 33, "silver": 21, "bronze": 28, "historical": false}}}"#,
        )
        .await
        .unwrap();
        tokio::fs::write(
            &winter_path,
            r#"{"1992": {"DE": {"gold": 10, "silver": 10, "bronze": 6, "historical": false}}}"#,
        )
        .await
        .unwrap();

        let (summer, winter) = load_both(
            &summer_path.to_string_lossy(),
            &winter_path.to_string_lossy(),
        )
        .await
        .unwrap();

        assert_eq!(summer[&1992]["DE"].gold, 33);
        assert_eq!(winter[&1992]["DE"].gold, 10);
    }
}
