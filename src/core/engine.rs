use crate::core::aggregator::{
    count_by_destination, count_by_period, destination_percentage, period_breakdown,
};
use crate::core::report::TicketReport;
use crate::domain::model::{Period, Ticket};
use crate::domain::ports::TicketSource;
use crate::utils::error::Result;

pub struct StatsEngine<S: TicketSource> {
    source: S,
}

impl<S: TicketSource> StatsEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self, destination: &str, period: Period) -> Result<TicketReport> {
        tracing::info!("Loading tickets...");
        let tickets = self.source.load()?;
        tracing::info!("Loaded {} tickets", tickets.len());

        build_report(&tickets, destination, period)
    }
}

/// Runs every query against an already loaded collection.
pub fn build_report(tickets: &[Ticket], destination: &str, period: Period) -> Result<TicketReport> {
    let tickets = Some(tickets);

    let destination_count = count_by_destination(tickets, destination)?;
    tracing::debug!("{} tickets to {}", destination_count, destination);

    let period_count = count_by_period(tickets, period)?;
    tracing::debug!("{} tickets in {}", period_count, period);

    let destination_percentage = destination_percentage(tickets, destination)?;
    let period_breakdown = period_breakdown(tickets)?;

    Ok(TicketReport {
        total_tickets: tickets.map_or(0, <[Ticket]>::len),
        destination: destination.to_string(),
        destination_count,
        period,
        period_count,
        destination_percentage,
        period_breakdown,
    })
}
