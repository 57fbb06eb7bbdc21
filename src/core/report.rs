use crate::domain::model::Period;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketReport {
    pub total_tickets: usize,
    pub destination: String,
    pub destination_count: usize,
    pub period: Period,
    pub period_count: usize,
    pub destination_percentage: f64,
    pub period_breakdown: BTreeMap<Period, usize>,
}

impl TicketReport {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(out, "total tickets: {}", self.total_tickets);
        let _ = writeln!(out, "tickets to {}: {}", self.destination, self.destination_count);
        let _ = writeln!(out, "tickets in {}: {}", self.period, self.period_count);
        let _ = writeln!(
            out,
            "share of tickets to {}: {:.3}",
            self.destination, self.destination_percentage
        );
        let _ = writeln!(out, "by period:");
        for (period, count) in &self.period_breakdown {
            let _ = writeln!(out, "  {}: {}", period, count);
        }
        out
    }
}
