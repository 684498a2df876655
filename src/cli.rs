use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "ghirbal", version, about = "Two-tier rule-based Shariah screening CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Override the Tier 1 benchmark percentage (0-100)"
    )]
    pub benchmark: Option<f64>,
    #[arg(
        long,
        global = true,
        help = "Override the Tier 2 threshold percentage (0-100)"
    )]
    pub threshold: Option<f64>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Tier1 {
        #[arg(long = "item", value_name = "NAME=AMOUNT")]
        items: Vec<String>,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        pbt: f64,
        #[arg(long, default_value_t = 0.0)]
        revenue: f64,
        #[arg(long, default_value_t = 0.0)]
        other_income: f64,
        #[arg(long, default_value_t = 0.0)]
        share_of_profit: f64,
        #[arg(long, value_enum, default_value_t = Basis::Pbt)]
        basis: Basis,
        #[arg(long, help = "Read inputs from a declaration file instead of flags")]
        file: Option<String>,
    },
    Tier2 {
        #[arg(long, default_value_t = 0.0)]
        cash: f64,
        #[arg(long, default_value_t = 0.0)]
        debt: f64,
        #[arg(long, default_value_t = 0.0)]
        total_assets: f64,
        #[arg(long, help = "Read inputs from a declaration file instead of flags")]
        file: Option<String>,
    },
    Screen {
        #[arg(long = "item", value_name = "NAME=AMOUNT")]
        items: Vec<String>,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        pbt: f64,
        #[arg(long, default_value_t = 0.0)]
        revenue: f64,
        #[arg(long, default_value_t = 0.0)]
        other_income: f64,
        #[arg(long, default_value_t = 0.0)]
        share_of_profit: f64,
        #[arg(long, default_value_t = 0.0)]
        cash: f64,
        #[arg(long, default_value_t = 0.0)]
        debt: f64,
        #[arg(long, default_value_t = 0.0)]
        total_assets: f64,
        #[arg(long, value_enum, default_value_t = Basis::Pbt)]
        basis: Basis,
        #[arg(long, help = "Read inputs from a declaration file instead of flags")]
        file: Option<String>,
    },
    Catalog {
        slug: Option<String>,
    },
    Validate {
        file: String,
    },
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    Show,
    Init,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Basis {
    Pbt,
    Income,
    Both,
}
