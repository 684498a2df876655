use crate::*;
use std::path::Path;

pub fn handle_admin_commands(cli: &Cli, thresholds: &Thresholds) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Catalog { slug } => match slug {
            Some(slug) => {
                let Some(activity) = catalog::find(slug) else {
                    anyhow::bail!("unknown activity: {}", slug);
                };
                print_one(cli.json, activity, |a| format!("{}\t{}", a.slug, a.label))?;
            }
            None => {
                print_list(cli.json, catalog::NON_PERMISSIBLE_ACTIVITIES, |a| {
                    format!("{}\t{}", a.slug, a.label)
                })?;
            }
        },
        Commands::Validate { file } => {
            let report = validate_declaration(Path::new(file));
            let ok = report.overall == "ok";
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut { ok, data: &report })?
                );
            } else {
                println!("declaration: {}", report.overall);
                for c in &report.checks {
                    println!("{}\t{}", c.name, c.status);
                }
            }
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Settings { command } => match command {
            SettingsCommands::Show => {
                print_one(cli.json, *thresholds, |t| {
                    format!(
                        "tier1_benchmark={} tier2_threshold={}",
                        t.tier1_benchmark, t.tier2_threshold
                    )
                })?;
            }
            SettingsCommands::Init => {
                let path = settings_init()?;
                print_one(cli.json, path.to_string_lossy().to_string(), |p| {
                    format!("settings at {}", p)
                })?;
            }
        },
        _ => return Ok(false),
    }

    Ok(true)
}
