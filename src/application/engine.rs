use crate::domain::invoice::InvoiceState;
use crate::domain::line_item::{LineItem, RowInput, compute_subtotal};
use crate::domain::rounding::RoundingPolicy;
use crate::domain::tax::InvoiceTotals;
use crate::domain::words::{IndianNumbering, NumberingSystemBox, amount_to_words};
use crate::error::{InvoiceError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// A row together with the amount it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputedRow {
    pub serial: usize,
    #[serde(flatten)]
    pub input: RowInput,
    pub amount: Decimal,
}

/// Outcome of one recalculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceSummary {
    pub rows: Vec<ComputedRow>,
    pub totals: InvoiceTotals,
    pub rounded_total: u64,
    pub words: String,
}

/// Turns the rows of an invoice into totals and an amount in words.
///
/// The engine holds configuration only. Every call to [`recalculate`] starts
/// from the rows it is given, so calling it twice on the same state yields the
/// same summary.
///
/// [`recalculate`]: InvoiceEngine::recalculate
pub struct InvoiceEngine {
    numbering: NumberingSystemBox,
    rounding: RoundingPolicy,
}

impl Default for InvoiceEngine {
    fn default() -> Self {
        Self::new(Box::new(IndianNumbering), RoundingPolicy::default())
    }
}

impl InvoiceEngine {
    /// Creates a new `InvoiceEngine`.
    ///
    /// # Arguments
    ///
    /// * `numbering` - The grouping used when the grand total is written in words.
    /// * `rounding` - The midpoint policy applied to amounts and the grand total.
    pub fn new(numbering: NumberingSystemBox, rounding: RoundingPolicy) -> Self {
        Self {
            numbering,
            rounding,
        }
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    /// Amount for one row; malformed rows contribute zero.
    pub fn compute_row(&self, row: &RowInput) -> Decimal {
        LineItem::parse(row)
            .and_then(|item| item.amount(self.rounding))
            .unwrap_or(Decimal::ZERO)
    }

    /// Recomputes every row, the totals and the words from scratch.
    pub fn recalculate(&self, state: &InvoiceState) -> Result<InvoiceSummary> {
        let rows: Vec<ComputedRow> = state
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let serial = index + 1;
                let amount = self.compute_row(row);
                if amount.is_zero() && row.is_filled() {
                    debug!(serial, quantity = %row.quantity, rate = %row.rate, "Row counted as zero");
                }
                ComputedRow {
                    serial,
                    input: row.clone(),
                    amount,
                }
            })
            .collect();

        let max = self.numbering.max_amount();
        let totals = compute_subtotal(rows.iter().map(|row| row.amount))
            .and_then(InvoiceTotals::compute)
            .ok_or(InvoiceError::TotalOverflow { max })?;
        let rounded_total = totals.rounded_grand_total(self.rounding, max)?;
        let words = amount_to_words(rounded_total, self.numbering.as_ref())?;

        debug!(
            rows = rows.len(),
            subtotal = %totals.subtotal,
            grand_total = %totals.grand_total,
            rounded_total,
            numbering = self.numbering.name(),
            "Invoice recalculated"
        );

        Ok(InvoiceSummary {
            rows,
            totals,
            rounded_total,
            words,
        })
    }
}
