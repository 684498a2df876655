use crate::*;
use std::path::Path;

pub fn handle_runtime_commands(cli: &Cli, thresholds: &Thresholds) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Tier1 {
            items,
            pbt,
            revenue,
            other_income,
            share_of_profit,
            basis,
            file,
        } => {
            let decl = match file {
                Some(path) => load_declaration(Path::new(path))?,
                None => {
                    let decl = Declaration {
                        items: items_from_pairs(items)?,
                        pbt: *pbt,
                        revenue: *revenue,
                        other_income: *other_income,
                        share_of_profit: *share_of_profit,
                        ..Declaration::default()
                    };
                    ensure_non_negative(&decl)?;
                    decl
                }
            };
            let reports = run_tier1(&decl, *basis, thresholds.tier1_benchmark);
            print_list(cli.json, &reports, |r| {
                format!(
                    "{}\t{}\t{}",
                    r.basis,
                    fmt_ratio(r.contribution_pct),
                    tier1_status_line(r)
                )
            })?;
        }
        Commands::Tier2 {
            cash,
            debt,
            total_assets,
            file,
        } => {
            let (cash, debt, total_assets) = match file {
                Some(path) => {
                    let decl = load_declaration(Path::new(path))?;
                    (
                        decl.cash_conventional,
                        decl.interest_bearing_debt,
                        decl.total_assets,
                    )
                }
                None => (*cash, *debt, *total_assets),
            };
            let report = evaluate_tier2(cash, debt, total_assets, thresholds.tier2_threshold);
            print_one(cli.json, report, |t2| {
                format!(
                    "cash {} ({})\tdebt {} ({})\t{}",
                    fmt_ratio(t2.cash_ratio_pct),
                    t2.cash_label.as_str(),
                    fmt_ratio(t2.debt_ratio_pct),
                    t2.debt_label.as_str(),
                    t2.status.as_str()
                )
            })?;
        }
        Commands::Screen {
            items,
            pbt,
            revenue,
            other_income,
            share_of_profit,
            cash,
            debt,
            total_assets,
            basis,
            file,
        } => {
            let decl = match file {
                Some(path) => load_declaration(Path::new(path))?,
                None => {
                    let decl = Declaration {
                        items: items_from_pairs(items)?,
                        pbt: *pbt,
                        revenue: *revenue,
                        other_income: *other_income,
                        share_of_profit: *share_of_profit,
                        cash_conventional: *cash,
                        interest_bearing_debt: *debt,
                        total_assets: *total_assets,
                    };
                    ensure_non_negative(&decl)?;
                    decl
                }
            };
            let report = build_screening_report(&decl, *basis, thresholds);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                if let Some(first) = report.tier1.first() {
                    println!(
                        "total non-permissible: {}",
                        fmt_amount(first.total_non_permissible)
                    );
                }
                for r in &report.tier1 {
                    println!(
                        "contribution vs {}: {} ({})",
                        r.basis,
                        fmt_ratio(r.contribution_pct),
                        tier1_status_line(r)
                    );
                }
                println!("tier 1: {}", if report.tier1_passed { "pass" } else { "fail" });
                match &report.tier2 {
                    Some(t2) => {
                        println!(
                            "cash ratio: {} ({})",
                            fmt_ratio(t2.cash_ratio_pct),
                            t2.cash_label.as_str()
                        );
                        println!(
                            "debt ratio: {} ({})",
                            fmt_ratio(t2.debt_ratio_pct),
                            t2.debt_label.as_str()
                        );
                        println!("tier 2: {}", t2.status.as_str());
                    }
                    None => println!("tier 2: not evaluated (requires tier 1 pass)"),
                }
                println!("overall: {}", report.overall.as_str());
                for rec in &report.recommendations {
                    println!("note: {}", rec);
                }
            }
        }
        _ => anyhow::bail!("command not handled"),
    }

    Ok(())
}
