//! Pure queries over a ticket collection.
//!
//! `None` stands for "no collection was provided" and is reported as
//! `NullTickets`; `Some(&[])` is a valid, empty collection.

use crate::domain::model::{Period, Ticket};
use crate::utils::error::{Result, TicketError};
use chrono::{NaiveTime, Timelike};
use std::collections::BTreeMap;

/// Bucket a departure time. Always succeeds since `NaiveTime::hour` is 0..=23.
pub fn classify_period(time: NaiveTime) -> Period {
    match time.hour() {
        0..=6 => Period::EarlyMorning,
        7..=12 => Period::Morning,
        13..=19 => Period::Afternoon,
        _ => Period::Evening,
    }
}

/// Number of tickets whose destination matches exactly (case-sensitive).
pub fn count_by_destination(tickets: Option<&[Ticket]>, destination: &str) -> Result<usize> {
    // destination is checked before the collection
    if destination.is_empty() {
        return Err(TicketError::CountryNotFound);
    }
    let tickets = tickets.ok_or(TicketError::NullTickets)?;

    Ok(tickets
        .iter()
        .filter(|ticket| ticket.destination == destination)
        .count())
}

pub fn count_by_period(tickets: Option<&[Ticket]>, period: Period) -> Result<usize> {
    let tickets = tickets.ok_or(TicketError::NullTickets)?;

    Ok(tickets
        .iter()
        .filter(|ticket| classify_period(ticket.time) == period)
        .count())
}

/// Share of tickets going to `destination`, in `[0, 1]`.
///
/// An empty collection yields `0.0` rather than a NaN.
pub fn destination_percentage(tickets: Option<&[Ticket]>, destination: &str) -> Result<f64> {
    let matching = count_by_destination(tickets, destination)?;
    let total = tickets.map_or(0, <[Ticket]>::len);

    if total == 0 {
        return Ok(0.0);
    }

    Ok(matching as f64 / total as f64)
}

/// Counts for every period, including the ones with no tickets.
pub fn period_breakdown(tickets: Option<&[Ticket]>) -> Result<BTreeMap<Period, usize>> {
    let tickets = tickets.ok_or(TicketError::NullTickets)?;

    let mut counts: BTreeMap<Period, usize> = Period::ALL.into_iter().map(|p| (p, 0)).collect();
    for ticket in tickets {
        *counts.entry(classify_period(ticket.time)).or_insert(0) += 1;
    }

    Ok(counts)
}
