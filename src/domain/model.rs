use crate::utils::error::{Result, TicketError};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One passenger booking as read from the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub destination: String,
    pub time: NaiveTime,
    pub price: f64,
}

/// Time-of-day bucket for a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::EarlyMorning,
        Period::Morning,
        Period::Afternoon,
        Period::Evening,
    ];

    /// Buckets an hour of day. Hours past 23 are rejected with `InvalidHour`.
    pub fn from_hour(hour: u32) -> Result<Period> {
        match hour {
            0..=6 => Ok(Period::EarlyMorning),
            7..=12 => Ok(Period::Morning),
            13..=19 => Ok(Period::Afternoon),
            20..=23 => Ok(Period::Evening),
            _ => Err(TicketError::InvalidHour),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::EarlyMorning => "early-morning",
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Evening => "evening",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TicketError::InvalidConfigValueError {
                field: "period".to_string(),
                value: s.to_string(),
                reason: "expected one of early-morning, morning, afternoon, evening".to_string(),
            })
    }
}
