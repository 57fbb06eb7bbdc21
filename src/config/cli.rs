use crate::core::report::OutputFormat;
use crate::domain::model::Period;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "ticket-stats")]
#[command(about = "Aggregate statistics over a CSV file of airline tickets")]
pub struct CliConfig {
    /// Ticket CSV file [default: tickets.csv]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Destination to count and compute the share for [default: Brazil]
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Time-of-day bucket to count [default: early-morning]
    #[arg(short, long, value_enum)]
    pub period: Option<Period>,

    /// Report format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Optional TOML file providing the same settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
