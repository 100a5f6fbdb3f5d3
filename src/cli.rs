use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};

use crate::domain::constants::{CONTRACT_TYPES, LOCATIONS};

#[derive(Parser, Debug)]
#[command(name = "devcareer", version, about = "DevCareer anonymous salary submission CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "DEVCAREER_API_BASE",
        help = "Collection API base URL (defaults to the hosted API)"
    )]
    pub api_base: Option<String>,
    #[arg(
        long,
        global = true,
        env = "DEVCAREER_SUBMIT_URL",
        help = "Override the submit endpoint URL only"
    )]
    pub submit_url: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Message language for this run (en, hy, ru); overrides the stored choice"
    )]
    pub lang: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and deliver one salary data point
    Submit(SubmitArgs),
    /// Manage submissions parked after failed deliveries
    Queue {
        #[command(subcommand)]
        command: QueueCommands,
    },
    /// Show the remaining submit cooldown in milliseconds
    Cooldown,
    /// List known company names
    Companies,
    /// List known role names
    Roles,
    /// List the allowed tech tags for a role
    Tags { role: Option<String> },
    /// Show or change the stored message language
    Lang {
        #[command(subcommand)]
        command: LangCommands,
    },
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    #[arg(long, help = "Role, or \"Other\" with --custom-role")]
    pub role: Option<String>,
    #[arg(long)]
    pub custom_role: Option<String>,
    #[arg(long, help = "Junior, Mid, Senior, Lead, or Manager")]
    pub level: Option<String>,
    #[arg(long, help = "Years of experience, 0 to 40")]
    pub experience: Option<String>,
    #[arg(long, help = "Salary amount, in the chosen currency")]
    pub salary: Option<String>,
    #[arg(long, default_value = "AMD", help = "AMD, USD, or EUR")]
    pub currency: String,
    #[arg(long, default_value = "Monthly", help = "Monthly or Yearly")]
    pub period: String,
    #[arg(long, default_value = "Net", help = "Net or Gross")]
    pub net_or_gross: String,
    #[arg(
        long,
        value_parser = PossibleValuesParser::new(LOCATIONS),
        help = "Location; \"Other\" goes with --custom-location"
    )]
    pub location: Option<String>,
    #[arg(long)]
    pub custom_location: Option<String>,
    #[arg(long, value_parser = PossibleValuesParser::new(CONTRACT_TYPES))]
    pub contract_type: Option<String>,
    #[arg(long, help = "Company name, or \"Other\" with --custom-company")]
    pub company: Option<String>,
    #[arg(long)]
    pub custom_company: Option<String>,
    #[arg(long = "tag", help = "Tech tag; repeatable, bounded by the role's vocabulary")]
    pub tags: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum QueueCommands {
    /// Show queued submissions in insertion order
    List,
    /// Re-attempt delivery of every queued submission once
    Retry,
    /// Write the queue to a timestamped JSON file
    Export {
        #[arg(long, help = "Destination directory (defaults to the current one)")]
        out: Option<std::path::PathBuf>,
    },
    /// Drop every queued submission
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum LangCommands {
    Show,
    Set { code: String },
}
