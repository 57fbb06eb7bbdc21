use crate::domain::model::Ticket;
use crate::domain::ports::TicketSource;
use crate::utils::error::{Result, TicketError};
use chrono::NaiveTime;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

const TIME_FORMAT: &str = "%H:%M";
const FIELD_COUNT: usize = 6;

/// Capacity hint only, the collection grows as needed.
const INITIAL_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows_read: usize,
    pub rows_skipped: usize,
}

/// Headerless `id,name,email,destination,HH:MM,price` file on disk.
#[derive(Debug, Clone)]
pub struct CsvTicketSource {
    path: PathBuf,
}

impl CsvTicketSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TicketSource for CsvTicketSource {
    fn load(&self) -> Result<Vec<Ticket>> {
        tracing::debug!("Opening ticket file: {}", self.path.display());
        let file = File::open(&self.path)?;

        let (tickets, summary) = read_tickets(BufReader::new(file))?;
        tracing::info!(
            "Loaded {} tickets from {} ({} rows read, {} skipped)",
            tickets.len(),
            self.path.display(),
            summary.rows_read,
            summary.rows_skipped
        );

        Ok(tickets)
    }
}

/// Reads every well-formed row. Malformed rows are logged and skipped.
pub fn read_tickets<R: Read>(reader: R) -> Result<(Vec<Ticket>, LoadSummary)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut tickets = Vec::with_capacity(INITIAL_CAPACITY);
    let mut summary = LoadSummary::default();

    for result in rdr.records() {
        summary.rows_read += 1;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("line could not be read: {}", e);
                summary.rows_skipped += 1;
                continue;
            }
        };

        let line = record
            .position()
            .map_or(summary.rows_read as u64, |pos| pos.line());

        match parse_record(&record, line) {
            Ok(ticket) => tickets.push(ticket),
            Err(e) => {
                tracing::warn!("{}, skipping", e);
                summary.rows_skipped += 1;
            }
        }
    }

    Ok((tickets, summary))
}

fn parse_record(record: &csv::StringRecord, line: u64) -> Result<Ticket> {
    if record.len() != FIELD_COUNT {
        return Err(TicketError::InvalidRecord {
            line,
            field: "record",
            value: format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        });
    }

    let invalid = |field: &'static str, value: &str| TicketError::InvalidRecord {
        line,
        field,
        value: value.to_string(),
    };

    let id = record[0]
        .parse::<i64>()
        .map_err(|_| invalid("id", &record[0]))?;
    let time = NaiveTime::parse_from_str(&record[4], TIME_FORMAT)
        .map_err(|_| invalid("time", &record[4]))?;
    let price = record[5]
        .parse::<f64>()
        .map_err(|_| invalid("price", &record[5]))?;

    Ok(Ticket {
        id,
        name: record[1].to_string(),
        email: record[2].to_string(),
        destination: record[3].to_string(),
        time,
        price,
    })
}
