use crate::cli::Basis;
use crate::domain::models::{
    Declaration, RatioLabel, ScreeningReport, ScreeningStatus, Thresholds, Tier1FailCause,
    Tier1Report, Tier1Status,
};
use crate::services::evaluator::{evaluate_tier1, evaluate_tier2};

pub fn income_denominator(decl: &Declaration) -> f64 {
    decl.revenue + decl.other_income + decl.share_of_profit
}

/// One Tier 1 report per requested basis, in a stable pbt-then-income order.
pub fn run_tier1(decl: &Declaration, basis: Basis, benchmark: f64) -> Vec<Tier1Report> {
    let mut reports = Vec::new();
    if matches!(basis, Basis::Pbt | Basis::Both) {
        reports.push(evaluate_tier1(&decl.items, "pbt", decl.pbt, benchmark));
    }
    if matches!(basis, Basis::Income | Basis::Both) {
        reports.push(evaluate_tier1(
            &decl.items,
            "income",
            income_denominator(decl),
            benchmark,
        ));
    }
    reports
}

/// Full gated run: Tier 2 is evaluated only when every requested Tier 1
/// basis passes, otherwise it is reported as not evaluated.
pub fn build_screening_report(
    decl: &Declaration,
    basis: Basis,
    thresholds: &Thresholds,
) -> ScreeningReport {
    let tier1 = run_tier1(decl, basis, thresholds.tier1_benchmark);
    let tier1_passed = tier1.iter().all(|r| r.status == Tier1Status::Pass);

    let tier2 = if tier1_passed {
        Some(evaluate_tier2(
            decl.cash_conventional,
            decl.interest_bearing_debt,
            decl.total_assets,
            thresholds.tier2_threshold,
        ))
    } else {
        None
    };

    let overall = match &tier2 {
        None => ScreeningStatus::Fail,
        Some(t2) => t2.status,
    };

    let mut recommendations = Vec::new();
    for r in &tier1 {
        match r.fail_cause {
            Some(Tier1FailCause::InvalidDenominator) => recommendations.push(format!(
                "Enter a positive {} figure; Tier 1 cannot be evaluated against a non-positive denominator.",
                basis_label(&r.basis)
            )),
            Some(Tier1FailCause::AboveBenchmark) => recommendations.push(format!(
                "Non-permissible contribution vs {} exceeds the {:.1}% benchmark; Tier 2 was not evaluated.",
                basis_label(&r.basis),
                r.benchmark_pct
            )),
            None => {}
        }
    }
    if let Some(t2) = &tier2 {
        if t2.status == ScreeningStatus::NotReady {
            recommendations.push(
                "Enter total assets greater than zero to compute the Tier 2 ratios.".to_string(),
            );
        }
        if t2.cash_label == RatioLabel::Exceeds {
            recommendations.push(format!(
                "Cash in conventional accounts exceeds the {:.1}% threshold; review conventional account placements.",
                t2.threshold_pct
            ));
        }
        if t2.debt_label == RatioLabel::Exceeds {
            recommendations.push(format!(
                "Interest-bearing debt exceeds the {:.1}% threshold; review the financing structure.",
                t2.threshold_pct
            ));
        }
    }

    ScreeningReport {
        tier1,
        tier1_passed,
        tier2,
        overall,
        recommendations,
    }
}

fn basis_label(basis: &str) -> &str {
    match basis {
        "pbt" => "profit before tax",
        "income" => "total income",
        other => other,
    }
}
