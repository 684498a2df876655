use crate::domain::constants::{PERCENT_MAX, PERCENT_MIN};
use crate::domain::models::{SettingsFile, Thresholds};
use std::path::PathBuf;

const DEFAULT_SETTINGS_TOML: &str = "\
# ghirbal screening thresholds (percent, 0-100)
[thresholds]
tier1_benchmark = 5.0
tier2_threshold = 33.0
";

fn settings_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/ghirbal/settings.toml"))
}

pub fn load_settings() -> anyhow::Result<Thresholds> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(Thresholds::default());
    }
    let raw = std::fs::read_to_string(path)?;
    thresholds_from_file(toml::from_str(&raw)?)
}

fn thresholds_from_file(file: SettingsFile) -> anyhow::Result<Thresholds> {
    let thresholds = Thresholds {
        tier1_benchmark: file.thresholds.tier1_benchmark,
        tier2_threshold: file.thresholds.tier2_threshold,
    };
    ensure_percent("tier1_benchmark", thresholds.tier1_benchmark)?;
    ensure_percent("tier2_threshold", thresholds.tier2_threshold)?;
    Ok(thresholds)
}

pub fn ensure_percent(name: &str, value: f64) -> anyhow::Result<()> {
    if !(PERCENT_MIN..=PERCENT_MAX).contains(&value) {
        anyhow::bail!(
            "{} must be between {} and {}, got {}",
            name,
            PERCENT_MIN,
            PERCENT_MAX,
            value
        );
    }
    Ok(())
}

/// Settings file values with CLI overrides applied on top.
pub fn effective_thresholds(
    benchmark: Option<f64>,
    threshold: Option<f64>,
) -> anyhow::Result<Thresholds> {
    let mut thresholds = load_settings()?;
    if let Some(b) = benchmark {
        ensure_percent("benchmark", b)?;
        thresholds.tier1_benchmark = b;
    }
    if let Some(t) = threshold {
        ensure_percent("threshold", t)?;
        thresholds.tier2_threshold = t;
    }
    Ok(thresholds)
}

/// Writes a commented default settings file; an existing file is left as is.
pub fn settings_init() -> anyhow::Result<PathBuf> {
    let path = settings_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        std::fs::write(&path, DEFAULT_SETTINGS_TOML)?;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{ensure_percent, thresholds_from_file, DEFAULT_SETTINGS_TOML};
    use crate::domain::models::SettingsFile;

    #[test]
    fn empty_settings_file_yields_defaults() {
        let file: SettingsFile = toml::from_str("").expect("parse empty settings");
        let thresholds = thresholds_from_file(file).expect("defaults in range");
        assert_eq!(thresholds.tier1_benchmark, 5.0);
        assert_eq!(thresholds.tier2_threshold, 33.0);
    }

    #[test]
    fn shipped_default_file_round_trips() {
        let file: SettingsFile = toml::from_str(DEFAULT_SETTINGS_TOML).expect("parse defaults");
        let thresholds = thresholds_from_file(file).expect("defaults in range");
        assert_eq!(thresholds.tier1_benchmark, 5.0);
        assert_eq!(thresholds.tier2_threshold, 33.0);
    }

    #[test]
    fn out_of_range_thresholds_are_rejected() {
        let file: SettingsFile =
            toml::from_str("[thresholds]\ntier1_benchmark = 150.0").expect("parse");
        assert!(thresholds_from_file(file).is_err());

        assert!(ensure_percent("benchmark", -0.1).is_err());
        assert!(ensure_percent("benchmark", 0.0).is_ok());
        assert!(ensure_percent("threshold", 100.0).is_ok());
    }

    #[test]
    fn partial_settings_keep_other_defaults() {
        let file: SettingsFile =
            toml::from_str("[thresholds]\ntier2_threshold = 30.0").expect("parse");
        let thresholds = thresholds_from_file(file).expect("in range");
        assert_eq!(thresholds.tier1_benchmark, 5.0);
        assert_eq!(thresholds.tier2_threshold, 30.0);
    }
}
