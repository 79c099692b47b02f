//! Historical country lineage and fallback country names.
//!
//! Medals won by defunct or reorganized nations are attributed to a present-day
//! successor code. The registry here only feeds annotation text; it never
//! changes how entries are merged or classified.

/// A team code that no longer competes, and the modern code its medals are
/// attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyTeam {
    pub code: &'static str,
    pub successor: &'static str,
    pub label: &'static str,
    /// False for neutral teams that stood in for a nation which still exists.
    pub historical: bool,
}

const fn team(
    code: &'static str,
    successor: &'static str,
    label: &'static str,
    historical: bool,
) -> LegacyTeam {
    LegacyTeam {
        code,
        successor,
        label,
        historical,
    }
}

const LEGACY_TEAMS: &[LegacyTeam] = &[
    team("URS", "RU", "USSR (1952-1988)", true),
    team("GDR", "DE", "East Germany (1968-1988)", true),
    team("FRG", "DE", "West Germany (1968-1988)", true),
    team("TCH", "CZ", "Czechoslovakia (1920-1992)", true),
    team("YUG", "RS", "Yugoslavia (1920-1992)", true),
    team("SCG", "RS", "Serbia and Montenegro (1996-2006)", true),
    team("EUN", "RU", "Unified Team (1992)", true),
    team("ROC", "RU", "Russian Olympic Committee", false),
    team("OAR", "RU", "Olympic Athletes from Russia", false),
];

const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AU", "Australia"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CN", "China"),
    ("CZ", "Czech Republic"),
    ("DE", "Germany"),
    ("ES", "Spain"),
    ("FR", "France"),
    ("GB", "Great Britain"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("RS", "Serbia"),
    ("RU", "Russia"),
    ("SE", "Sweden"),
    ("US", "United States"),
];

/// Looks up a legacy team by its own code, e.g. `"GDR"`.
pub fn legacy_team(code: &str) -> Option<&'static LegacyTeam> {
    LEGACY_TEAMS.iter().find(|team| team.code == code)
}

/// Every legacy team whose medals are attributed to `modern`.
pub fn predecessors(modern: &str) -> impl Iterator<Item = &'static LegacyTeam> {
    LEGACY_TEAMS.iter().filter(move |team| team.successor == modern)
}

/// Names of the defunct nations folded into `modern`, oldest registry entry
/// first. Neutral stand-in teams are not included.
pub fn legacy_names(modern: &str) -> Vec<&'static str> {
    predecessors(modern)
        .filter(|team| team.historical)
        .map(|team| team.label)
        .collect()
}

/// Whether `modern` absorbs medals from a defunct nation.
pub fn historical_for(modern: &str) -> bool {
    predecessors(modern).any(|team| team.historical)
}

/// `"<Name>*"` for codes that absorb a defunct nation's medals.
pub fn starred_display_name(modern: &str) -> Option<String> {
    historical_for(modern).then(|| format!("{}*", country_name(modern)))
}

/// Human-readable name for a country code. Legacy team codes resolve to their
/// label; other unknown codes are returned as-is.
pub fn country_name(code: &str) -> &str {
    COUNTRY_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .or_else(|| legacy_team(code).map(|team| team.label))
        .unwrap_or(code)
}

/// Annotation such as `"includes USSR (1952-1988), Unified Team (1992); also
/// competed as ROC, OAR"`.
pub fn lineage_note(modern: &str) -> Option<String> {
    let names = legacy_names(modern);
    let stand_ins: Vec<&str> = predecessors(modern)
        .filter(|team| !team.historical)
        .map(|team| team.code)
        .collect();

    let mut parts = Vec::new();
    if !names.is_empty() {
        parts.push(format!("includes {}", names.join(", ")));
    }
    if !stand_ins.is_empty() {
        parts.push(format!("also competed as {}", stand_ins.join(", ")));
    }
    (!parts.is_empty()).then(|| parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predecessor_codes(modern: &str) -> Vec<&'static str> {
        predecessors(modern).map(|team| team.code).collect()
    }

    #[test]
    fn test_legacy_names_for_germany() {
        assert_eq!(
            legacy_names("DE"),
            vec!["East Germany (1968-1988)", "West Germany (1968-1988)"]
        );
    }

    #[test]
    fn test_legacy_names_unknown_code_is_empty() {
        assert!(legacy_names("US").is_empty());
        assert!(legacy_names("").is_empty());
    }

    #[test]
    fn test_legacy_codes_map_to_successors() {
        assert_eq!(legacy_team("GDR").map(|t| t.successor), Some("DE"));
        assert_eq!(legacy_team("FRG").map(|t| t.successor), Some("DE"));
        assert_eq!(legacy_team("SCG").map(|t| t.successor), Some("RS"));
        assert_eq!(legacy_team("USA"), None);

        assert_eq!(predecessor_codes("DE"), vec!["GDR", "FRG"]);
        assert_eq!(predecessor_codes("RU"), vec!["URS", "EUN", "ROC", "OAR"]);
        assert_eq!(predecessor_codes("CZ"), vec!["TCH"]);
        assert!(predecessor_codes("FI").is_empty());
    }

    #[test]
    fn test_historical_flag_and_starred_name() {
        assert!(historical_for("RU"));
        assert!(historical_for("RS"));
        assert!(!historical_for("US"));

        assert_eq!(starred_display_name("RU").as_deref(), Some("Russia*"));
        assert_eq!(starred_display_name("DE").as_deref(), Some("Germany*"));
        assert_eq!(starred_display_name("NO"), None);
    }

    #[test]
    fn test_stand_in_teams_are_not_historical() {
        let roc = legacy_team("ROC").unwrap();
        assert_eq!(roc.successor, "RU");
        assert!(!roc.historical);
        assert!(!legacy_names("RU").contains(&roc.label));
    }

    #[test]
    fn test_country_name_fallback() {
        assert_eq!(country_name("US"), "United States");
        assert_eq!(country_name("KE"), "KE");
        assert_eq!(country_name("GDR"), "East Germany (1968-1988)");
    }

    #[test]
    fn test_lineage_note() {
        assert_eq!(
            lineage_note("RU").as_deref(),
            Some("includes USSR (1952-1988), Unified Team (1992); also competed as ROC, OAR")
        );
        assert_eq!(
            lineage_note("CZ").as_deref(),
            Some("includes Czechoslovakia (1920-1992)")
        );
        assert_eq!(lineage_note("FI"), None);
    }
}
