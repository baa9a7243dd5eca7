//! Adapters between the engine and the outside world: CSV rows in, text out.

pub mod csv;
pub mod report;
