// Adapters layer: concrete ticket sources.

pub mod csv_source;
