pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::csv_source::CsvTicketSource;
pub use config::Settings;
pub use crate::core::{engine::StatsEngine, report::TicketReport};
pub use domain::model::{Period, Ticket};
pub use utils::error::{Result, TicketError};
