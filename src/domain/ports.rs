use crate::domain::model::Ticket;
use crate::utils::error::Result;

/// Anything able to hand over the full ticket collection in one go.
pub trait TicketSource {
    fn load(&self) -> Result<Vec<Ticket>>;
}
