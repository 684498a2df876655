use crate::domain::models::{JsonOut, Tier1FailCause, Tier1Report};
use serde::Serialize;

pub fn print_list<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Monetary amounts display at two decimals.
pub fn fmt_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Ratios display at three decimals; an uncomputed ratio shows as n/a.
pub fn fmt_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.3}%", r),
        None => "n/a".to_string(),
    }
}

pub fn tier1_status_line(report: &Tier1Report) -> String {
    match report.fail_cause {
        Some(Tier1FailCause::InvalidDenominator) => "fail (invalid denominator)".to_string(),
        _ => report.status.as_str().to_string(),
    }
}
