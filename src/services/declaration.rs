use crate::domain::models::{CheckItem, Declaration, ValidationReport};
use std::collections::BTreeMap;
use std::path::Path;

/// Unparsable amounts coerce to 0.0 rather than erroring; this is the one
/// recovery fallback, applied identically to flags and declaration files.
pub fn parse_amount_lenient(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

pub fn parse_item_pair(raw: &str) -> anyhow::Result<(String, f64)> {
    let Some((name, amount)) = raw.split_once('=') else {
        anyhow::bail!("expected NAME=AMOUNT, got: {}", raw);
    };
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("item name is empty in: {}", raw);
    }
    Ok((name.to_string(), parse_amount_lenient(amount)))
}

/// Later pairs with the same name replace earlier ones.
pub fn items_from_pairs(pairs: &[String]) -> anyhow::Result<BTreeMap<String, f64>> {
    let mut items = BTreeMap::new();
    for raw in pairs {
        let (name, amount) = parse_item_pair(raw)?;
        items.insert(name, amount);
    }
    Ok(items)
}

/// Names of amount fields holding a negative value. `pbt` is exempt: it is
/// the one signed input.
pub fn negative_amount_fields(decl: &Declaration) -> Vec<String> {
    let mut bad = Vec::new();
    for (name, amount) in &decl.items {
        if *amount < 0.0 {
            bad.push(format!("items.{}", name));
        }
    }
    for (field, value) in [
        ("revenue", decl.revenue),
        ("other_income", decl.other_income),
        ("share_of_profit", decl.share_of_profit),
        ("cash_conventional", decl.cash_conventional),
        ("interest_bearing_debt", decl.interest_bearing_debt),
        ("total_assets", decl.total_assets),
    ] {
        if value < 0.0 {
            bad.push(field.to_string());
        }
    }
    bad
}

pub fn ensure_non_negative(decl: &Declaration) -> anyhow::Result<()> {
    let bad = negative_amount_fields(decl);
    if !bad.is_empty() {
        anyhow::bail!("negative amounts: {}", bad.join(", "));
    }
    Ok(())
}

pub fn load_declaration(path: &Path) -> anyhow::Result<Declaration> {
    let raw = std::fs::read_to_string(path)?;
    let decl: Declaration = serde_json::from_str(&raw)?;
    ensure_non_negative(&decl)?;
    Ok(decl)
}

/// Non-failing inspection of a declaration file, check by check.
pub fn validate_declaration(path: &Path) -> ValidationReport {
    let mut checks = Vec::new();

    let decl = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str::<Declaration>(&raw).map_err(|e| e.to_string()));

    let decl = match decl {
        Ok(d) => {
            checks.push(CheckItem {
                name: "parse".to_string(),
                status: "ok".to_string(),
            });
            d
        }
        Err(e) => {
            checks.push(CheckItem {
                name: "parse".to_string(),
                status: format!("error: {}", e),
            });
            return ValidationReport {
                overall: "invalid".to_string(),
                checks,
            };
        }
    };

    checks.push(CheckItem {
        name: "line_items".to_string(),
        status: format!("{} declared", decl.items.len()),
    });

    let bad = negative_amount_fields(&decl);
    checks.push(CheckItem {
        name: "amounts_non_negative".to_string(),
        status: if bad.is_empty() {
            "ok".to_string()
        } else {
            format!("failed: {}", bad.join(", "))
        },
    });

    let overall = if bad.is_empty() { "ok" } else { "invalid" };
    ValidationReport {
        overall: overall.to_string(),
        checks,
    }
}
