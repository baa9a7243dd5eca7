use super::line_item::RowInput;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rows a new or reset invoice starts with.
pub const DEFAULT_ROW_COUNT: usize = 5;

/// Buyer details printed above the item table. Never computed, only carried.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub buyer_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub address: Option<String>,
    pub gstin: Option<String>,
    pub state: Option<String>,
}

impl InvoiceHeader {
    pub fn is_empty(&self) -> bool {
        self.buyer_name.is_none()
            && self.date.is_none()
            && self.address.is_none()
            && self.gstin.is_none()
            && self.state.is_none()
    }
}

/// Everything the user has entered for one invoice.
///
/// Rows keep their display order; a row's serial number is its position plus
/// one, so removing a row renumbers the ones after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceState {
    header: Option<InvoiceHeader>,
    rows: Vec<RowInput>,
}

impl Default for InvoiceState {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceState {
    /// A fresh invoice with the default number of blank rows.
    pub fn new() -> Self {
        Self {
            header: None,
            rows: vec![RowInput::blank(); DEFAULT_ROW_COUNT],
        }
    }

    pub fn with_rows(rows: Vec<RowInput>) -> Self {
        Self { header: None, rows }
    }

    /// Sets the header; an all-empty header is dropped.
    pub fn set_header(&mut self, header: InvoiceHeader) {
        self.header = (!header.is_empty()).then_some(header);
    }

    pub fn header(&self) -> Option<&InvoiceHeader> {
        self.header.as_ref()
    }

    pub fn rows(&self) -> &[RowInput] {
        &self.rows
    }

    pub fn push_row(&mut self, row: RowInput) {
        self.rows.push(row);
    }

    pub fn push_blank_row(&mut self) {
        self.rows.push(RowInput::blank());
    }

    /// Removes the row with the given 1-based serial number.
    pub fn remove_row(&mut self, serial: usize) -> Option<RowInput> {
        if serial == 0 || serial > self.rows.len() {
            return None;
        }
        Some(self.rows.remove(serial - 1))
    }

    /// Clears every row back to the default blank rows. The header is kept.
    pub fn reset(&mut self) {
        self.rows = vec![RowInput::blank(); DEFAULT_ROW_COUNT];
    }
}
