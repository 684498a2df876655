use crate::domain::constants::{DEFAULT_TIER1_BENCHMARK, DEFAULT_TIER2_THRESHOLD};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Declared financial figures for one screening run.
///
/// Mirrors the fields an analyst enters: non-permissible line items, the
/// Tier 1 denominators, and the Tier 2 balance-sheet figures. All monetary
/// fields default to 0.0 when absent; `pbt` is the only signed field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Declaration {
    #[serde(default, deserialize_with = "lenient_amount_map")]
    pub items: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub pbt: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub other_income: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub share_of_profit: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub cash_conventional: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub interest_bearing_debt: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_assets: f64,
}

/// Accepts a number or a numeric string; anything unparsable coerces to 0.0.
fn lenient_amount<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }
    Ok(match Raw::deserialize(de)? {
        Raw::Num(v) => v,
        Raw::Text(s) => s.trim().parse().unwrap_or(0.0),
    })
}

fn lenient_amount_map<'de, D>(de: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Amount(#[serde(deserialize_with = "lenient_amount")] f64);
    let raw = BTreeMap::<String, Amount>::deserialize(de)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.0)).collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier1Status {
    Pass,
    Fail,
}

impl Tier1Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier1Status::Pass => "pass",
            Tier1Status::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier1FailCause {
    AboveBenchmark,
    InvalidDenominator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioLabel {
    Within,
    Exceeds,
    NotComputed,
}

impl RatioLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            RatioLabel::Within => "within",
            RatioLabel::Exceeds => "exceeds",
            RatioLabel::NotComputed => "not_computed",
        }
    }
}

/// Shared by the Tier 2 verdict and the overall screening verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningStatus {
    Pass,
    Fail,
    NotReady,
}

impl ScreeningStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ScreeningStatus::Pass => "pass",
            ScreeningStatus::Fail => "fail",
            ScreeningStatus::NotReady => "not_ready",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Tier1Report {
    pub basis: String,
    pub denominator: f64,
    pub total_non_permissible: f64,
    pub benchmark_pct: f64,
    pub contribution_pct: Option<f64>,
    pub status: Tier1Status,
    pub fail_cause: Option<Tier1FailCause>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tier2Report {
    pub threshold_pct: f64,
    pub cash_ratio_pct: Option<f64>,
    pub debt_ratio_pct: Option<f64>,
    pub cash_label: RatioLabel,
    pub debt_label: RatioLabel,
    pub status: ScreeningStatus,
}

#[derive(Debug, Serialize)]
pub struct ScreeningReport {
    pub tier1: Vec<Tier1Report>,
    pub tier1_passed: bool,
    /// `None` means "not evaluated": Tier 2 is gated behind a Tier 1 pass.
    pub tier2: Option<Tier2Report>,
    pub overall: ScreeningStatus,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}

#[derive(Debug, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub thresholds: ThresholdsTable,
}

#[derive(Debug, Deserialize)]
pub struct ThresholdsTable {
    #[serde(default = "default_tier1_benchmark")]
    pub tier1_benchmark: f64,
    #[serde(default = "default_tier2_threshold")]
    pub tier2_threshold: f64,
}

impl Default for ThresholdsTable {
    fn default() -> Self {
        Self {
            tier1_benchmark: DEFAULT_TIER1_BENCHMARK,
            tier2_threshold: DEFAULT_TIER2_THRESHOLD,
        }
    }
}

fn default_tier1_benchmark() -> f64 {
    DEFAULT_TIER1_BENCHMARK
}

fn default_tier2_threshold() -> f64 {
    DEFAULT_TIER2_THRESHOLD
}

/// Effective thresholds for one evaluation: settings file plus CLI overrides,
/// immutable once resolved.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Thresholds {
    pub tier1_benchmark: f64,
    pub tier2_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            tier1_benchmark: DEFAULT_TIER1_BENCHMARK,
            tier2_threshold: DEFAULT_TIER2_THRESHOLD,
        }
    }
}
