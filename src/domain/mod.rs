// Domain layer: ticket model and the ingestion port.

pub mod model;
pub mod ports;
