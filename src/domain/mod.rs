//! Invoice domain: raw rows, the fixed GST levies, rounding and amounts in words.
//!
//! Nothing here performs I/O; persistence is reached only through [`ports`].

pub mod invoice;
pub mod line_item;
pub mod ports;
pub mod rounding;
pub mod tax;
pub mod words;
