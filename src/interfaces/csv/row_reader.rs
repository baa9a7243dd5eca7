use crate::domain::line_item::RowInput;
use crate::error::{InvoiceError, Result};
use std::io::Read;

/// Position of each field in a record, taken from the header row.
///
/// A header without a known name falls back to the usual column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    description: usize,
    quantity: usize,
    rate: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let position = |name: &str, fallback: usize| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
                .unwrap_or(fallback)
        };
        Self {
            description: position("description", 0),
            quantity: position("quantity", 1),
            rate: position("rate", 2),
        }
    }

    fn row(&self, record: &csv::StringRecord) -> RowInput {
        let field = |index: usize| record.get(index).unwrap_or_default();
        RowInput::new(
            field(self.description),
            field(self.quantity),
            field(self.rate),
        )
    }
}

/// Reads invoice rows from a CSV source with a `description,quantity,rate` header.
///
/// Every column is read as text, so a rate of `abc` still yields a row (which
/// the engine then counts as zero). Missing trailing columns read as empty.
pub struct RowReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RowReader<R> {
    /// Creates a new `RowReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads the header, then returns an iterator that lazily reads rows in
    /// file order. A record that cannot be read yields an error and the
    /// iterator moves on to the next one.
    pub fn rows(mut self) -> Result<impl Iterator<Item = Result<RowInput>>> {
        let columns = Columns::from_headers(self.reader.headers()?);
        let rows = self.reader.into_records().map(move |result| {
            result
                .map(|record| columns.row(&record))
                .map_err(InvoiceError::from)
        });
        Ok(rows)
    }
}
