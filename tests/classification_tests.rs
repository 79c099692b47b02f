//! Classification scale behavior through the public API

use olympic_medals::classify::{
    ColorBucket, Distribution, QuantileBreakSet, legend_entries, legend_ticks,
};
use olympic_medals::constants::classification::RANK_FRACTIONS;
use olympic_medals::data::SeasonYearTable;
use olympic_medals::testing_utils::TestDataBuilder;
use olympic_medals::{compute_breaks, unify};

#[test]
fn test_documented_fibonacci_example() {
    let distribution = Distribution::from_totals(vec![1, 2, 2, 3, 5, 8, 13, 21, 34, 55]);

    // floor(0.15 * 10) = 1 -> 2
    assert_eq!(distribution.at_rank(0.15), Some(2));

    let expected_indices = [1usize, 3, 5, 7, 8, 9, 9, 9];
    for (fraction, index) in RANK_FRACTIONS.iter().zip(expected_indices) {
        assert_eq!(
            distribution.at_rank(*fraction),
            Some(distribution.values()[index]),
            "fraction {fraction}"
        );
    }

    let breaks = QuantileBreakSet::from_distribution(&distribution);
    assert_eq!(breaks.breaks(), &[2, 3, 8, 21, 34, 55]);
}

#[test]
fn test_breaks_from_unified_table_ignore_zero_totals() {
    let summer = TestDataBuilder::distribution_table(2000, &[0, 0, 0, 0, 5, 10]);
    let breaks = compute_breaks(&unify(&summer, &SeasonYearTable::new()));
    assert_eq!(breaks.breaks(), &[5, 10]);
}

#[test]
fn test_no_data_for_non_positive_totals() {
    let breaks = QuantileBreakSet::from_distribution(&Distribution::from_totals(vec![1, 5, 9]));
    for total in [0, -1, -100, i64::MIN] {
        assert_eq!(breaks.color_for(total), ColorBucket::NoData);
    }
    assert_eq!(breaks.color_for_opt(None), ColorBucket::NoData);
}

#[test]
fn test_monotonic_over_skewed_distribution() {
    let mut totals: Vec<i64> = (1..=40).collect();
    totals.extend([80, 120, 200, 250, 400]);
    let breaks = QuantileBreakSet::from_distribution(&Distribution::from_totals(totals));

    let mut previous = ColorBucket::NoData;
    for total in 0..=500 {
        let bucket = breaks.color_for(total);
        assert!(bucket >= previous, "bucket dropped at total {total}");
        previous = bucket;
    }
    assert_eq!(previous, ColorBucket::DARKEST);
}

#[test]
fn test_legend_matches_classification() {
    let breaks = QuantileBreakSet::from_distribution(&Distribution::from_totals(
        (1..=300).collect(),
    ));
    for entry in legend_entries(&breaks) {
        assert_eq!(breaks.color_for(entry.lower), entry.bucket);
    }
    assert_eq!(legend_ticks(300), [75, 150, 225, 300]);
}
