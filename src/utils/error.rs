use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("no ticket data was given")]
    NullTickets,

    #[error("no country of destination was given")]
    CountryNotFound,

    #[error("invalid hour")]
    InvalidHour,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("could not read field {field}: {value} (line {line})")]
    InvalidRecord {
        line: u64,
        field: &'static str,
        value: String,
    },
}

impl TicketError {
    /// True for the errors raised by the aggregation queries themselves.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            TicketError::NullTickets | TicketError::CountryNotFound | TicketError::InvalidHour
        )
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;
