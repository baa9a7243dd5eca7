//! Application layer: orchestrates one recalculation of an invoice.
//!
//! [`engine::InvoiceEngine`] takes an explicit `InvoiceState`, runs the
//! aggregator and the tax and words steps in order, and returns a summary
//! that the report and JSON outputs render.

pub mod engine;
