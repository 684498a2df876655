use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use domain::catalog;
pub use domain::models::*;
pub use services::declaration::*;
pub use services::evaluator::*;
pub use services::output::*;
pub use services::report::*;
pub use services::settings::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let thresholds = effective_thresholds(cli.benchmark, cli.threshold)?;

    if commands::handle_admin_commands(&cli, &thresholds)? {
        return Ok(());
    }
    commands::handle_runtime_commands(&cli, &thresholds)
}
