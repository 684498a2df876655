//! Pure ratio evaluation. Every function here is total and side-effect free;
//! a non-positive denominator is a defined result state, never an error.

use crate::domain::models::{
    RatioLabel, ScreeningStatus, Tier1FailCause, Tier1Report, Tier1Status, Tier2Report,
};
use std::collections::BTreeMap;

pub fn total_non_permissible(items: &BTreeMap<String, f64>) -> f64 {
    items.values().sum()
}

/// Tier 1: non-permissible contribution against the selected denominator.
///
/// A denominator at or below zero yields no ratio and a fail with the
/// `invalid_denominator` cause, regardless of the declared total. Equality
/// with the benchmark counts as a pass.
pub fn evaluate_tier1(
    items: &BTreeMap<String, f64>,
    basis: &str,
    denominator: f64,
    benchmark: f64,
) -> Tier1Report {
    let total = total_non_permissible(items);

    if denominator <= 0.0 {
        return Tier1Report {
            basis: basis.to_string(),
            denominator,
            total_non_permissible: total,
            benchmark_pct: benchmark,
            contribution_pct: None,
            status: Tier1Status::Fail,
            fail_cause: Some(Tier1FailCause::InvalidDenominator),
        };
    }

    let contribution = total / denominator * 100.0;
    let (status, fail_cause) = if contribution <= benchmark {
        (Tier1Status::Pass, None)
    } else {
        (Tier1Status::Fail, Some(Tier1FailCause::AboveBenchmark))
    };

    Tier1Report {
        basis: basis.to_string(),
        denominator,
        total_non_permissible: total,
        benchmark_pct: benchmark,
        contribution_pct: Some(contribution),
        status,
        fail_cause,
    }
}

/// Tier 2: cash and debt ratios against total assets.
///
/// Both ratios share the assets denominator, so they are either both computed
/// or both absent; the absent case reports `not_ready` rather than failing.
pub fn evaluate_tier2(cash: f64, debt: f64, total_assets: f64, threshold: f64) -> Tier2Report {
    let cash_ratio = percent_of(cash, total_assets);
    let debt_ratio = percent_of(debt, total_assets);
    let cash_label = label_ratio(cash_ratio, threshold);
    let debt_label = label_ratio(debt_ratio, threshold);

    let status = match (cash_ratio, debt_ratio) {
        (Some(_), Some(_)) => {
            if cash_label == RatioLabel::Within && debt_label == RatioLabel::Within {
                ScreeningStatus::Pass
            } else {
                ScreeningStatus::Fail
            }
        }
        _ => ScreeningStatus::NotReady,
    };

    Tier2Report {
        threshold_pct: threshold,
        cash_ratio_pct: cash_ratio,
        debt_ratio_pct: debt_ratio,
        cash_label,
        debt_label,
        status,
    }
}

fn percent_of(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator * 100.0)
    } else {
        None
    }
}

fn label_ratio(ratio: Option<f64>, threshold: f64) -> RatioLabel {
    match ratio {
        None => RatioLabel::NotComputed,
        Some(r) if r <= threshold => RatioLabel::Within,
        Some(_) => RatioLabel::Exceeds,
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate_tier1, evaluate_tier2, total_non_permissible};
    use crate::domain::models::{RatioLabel, ScreeningStatus, Tier1FailCause, Tier1Status};
    use std::collections::BTreeMap;

    fn items(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn tier1_sums_items_and_fails_above_benchmark() {
        let report = evaluate_tier1(&items(&[("A", 1000.0), ("B", 500.0)]), "pbt", 20000.0, 5.0);
        assert_eq!(report.total_non_permissible, 1500.0);
        assert_eq!(report.contribution_pct, Some(7.5));
        assert_eq!(report.status, Tier1Status::Fail);
        assert_eq!(report.fail_cause, Some(Tier1FailCause::AboveBenchmark));
    }

    #[test]
    fn tier1_empty_items_pass_at_zero_contribution() {
        let report = evaluate_tier1(&BTreeMap::new(), "pbt", 10000.0, 5.0);
        assert_eq!(report.total_non_permissible, 0.0);
        assert_eq!(report.contribution_pct, Some(0.0));
        assert_eq!(report.status, Tier1Status::Pass);
        assert!(report.fail_cause.is_none());
    }

    #[test]
    fn tier1_contribution_at_benchmark_passes() {
        // 125 / 1000 = 12.5%, exactly at a 12.5 benchmark
        let report = evaluate_tier1(&items(&[("A", 125.0)]), "pbt", 1000.0, 12.5);
        assert_eq!(report.contribution_pct, Some(12.5));
        assert_eq!(report.status, Tier1Status::Pass);
    }

    #[test]
    fn tier1_nonpositive_denominator_fails_with_cause() {
        for pbt in [0.0, -5000.0] {
            let report = evaluate_tier1(&items(&[("A", 1.0)]), "pbt", pbt, 5.0);
            assert_eq!(report.contribution_pct, None);
            assert_eq!(report.status, Tier1Status::Fail);
            assert_eq!(report.fail_cause, Some(Tier1FailCause::InvalidDenominator));
        }
    }

    #[test]
    fn tier1_invalid_denominator_ignores_total() {
        let report = evaluate_tier1(&BTreeMap::new(), "income", 0.0, 5.0);
        assert_eq!(report.fail_cause, Some(Tier1FailCause::InvalidDenominator));
    }

    #[test]
    fn tier2_labels_each_ratio_independently() {
        let report = evaluate_tier2(3000.0, 4000.0, 10000.0, 33.0);
        assert_eq!(report.cash_ratio_pct, Some(30.0));
        assert_eq!(report.debt_ratio_pct, Some(40.0));
        assert_eq!(report.cash_label, RatioLabel::Within);
        assert_eq!(report.debt_label, RatioLabel::Exceeds);
        assert_eq!(report.status, ScreeningStatus::Fail);
    }

    #[test]
    fn tier2_ratio_at_threshold_is_within() {
        // cash 2500/10000 = 25%, exactly at threshold; debt well below
        let report = evaluate_tier2(2500.0, 1250.0, 10000.0, 25.0);
        assert_eq!(report.cash_ratio_pct, Some(25.0));
        assert_eq!(report.cash_label, RatioLabel::Within);
        assert_eq!(report.status, ScreeningStatus::Pass);
    }

    #[test]
    fn tier2_zero_assets_is_not_ready() {
        let report = evaluate_tier2(3000.0, 4000.0, 0.0, 33.0);
        assert_eq!(report.cash_ratio_pct, None);
        assert_eq!(report.debt_ratio_pct, None);
        assert_eq!(report.cash_label, RatioLabel::NotComputed);
        assert_eq!(report.debt_label, RatioLabel::NotComputed);
        assert_eq!(report.status, ScreeningStatus::NotReady);
    }

    #[test]
    fn totals_sum_all_amounts() {
        assert_eq!(total_non_permissible(&BTreeMap::new()), 0.0);
        assert_eq!(
            total_non_permissible(&items(&[("a", 1.5), ("b", 2.5)])),
            4.0
        );
    }
}
