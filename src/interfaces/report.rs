//! Flat text rendering of an invoice.
//!
//! The layout is fixed and read back by people and scripts alike, so every
//! label, width and separator here is part of the format:
//!
//! ```text
//! Buyer Name : Asha Traders          (header lines, only those supplied)
//!
//! S.No  Description of Goods      Quantity   Rate       Amount
//! ------------------------------------------------------------
//! 1     T-shirt                   2          50.00      100.00
//!
//! Total Amount (Before Tax) : 150.00
//! CGST @ 2.5%                 : 3.75
//! SGST @ 2.5%                 : 3.75
//! IGST @ 0%                     : 0.00
//! Grand Total  : 157.50
//! Invoice Amount in Words: One Hundred Fifty Eight Only
//! ```

use crate::application::engine::{ComputedRow, InvoiceSummary};
use crate::domain::invoice::InvoiceHeader;
use crate::domain::rounding::RoundingPolicy;
use crate::domain::tax::TaxComponent;
use rust_decimal::Decimal;
use std::fmt;

const DATE_FORMAT: &str = "%d-%m-%Y";
const RULE_WIDTH: usize = 60;

const SUBTOTAL_LABEL: &str = "Total Amount (Before Tax) ";
const GRAND_TOTAL_LABEL: &str = "Grand Total  ";
const WORDS_LABEL: &str = "Invoice Amount in Words";

fn table_line(serial: &str, description: &str, quantity: &str, rate: &str, amount: &str) -> String {
    format!("{serial:<5} {description:<25} {quantity:<10} {rate:<10} {amount:<10}")
}

/// A rendered view over one recalculated invoice.
pub struct InvoiceReport<'a> {
    header: Option<&'a InvoiceHeader>,
    summary: &'a InvoiceSummary,
    rounding: RoundingPolicy,
}

impl<'a> InvoiceReport<'a> {
    pub fn new(
        header: Option<&'a InvoiceHeader>,
        summary: &'a InvoiceSummary,
        rounding: RoundingPolicy,
    ) -> Self {
        Self {
            header,
            summary,
            rounding,
        }
    }

    fn amount(&self, value: Decimal) -> String {
        self.rounding.format_amount(value)
    }

    /// Buyer details, one line per supplied field, followed by a blank line.
    pub fn header_lines(&self) -> Vec<String> {
        let Some(header) = self.header else {
            return Vec::new();
        };

        let mut lines = Vec::new();
        let mut field = |label: &str, value: Option<String>| {
            if let Some(value) = value {
                lines.push(format!("{label:<10} : {value}"));
            }
        };
        field("Buyer Name", header.buyer_name.clone());
        field("Date", header.date.map(|d| d.format(DATE_FORMAT).to_string()));
        field("Address", header.address.clone());
        field("GSTIN", header.gstin.clone());
        field("State", header.state.clone());

        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    pub fn column_header_line(&self) -> String {
        table_line("S.No", "Description of Goods", "Quantity", "Rate", "Amount")
    }

    pub fn rule_line(&self) -> String {
        "-".repeat(RULE_WIDTH)
    }

    /// Rows worth saving: those with description, quantity and rate all filled.
    pub fn filled_rows(&self) -> impl Iterator<Item = &'a ComputedRow> + use<'a> {
        let summary: &'a InvoiceSummary = self.summary;
        summary.rows.iter().filter(|row| row.input.is_filled())
    }

    /// Item lines, renumbered from 1 over the filled rows only.
    pub fn row_lines(&self) -> Vec<String> {
        self.filled_rows()
            .enumerate()
            .map(|(index, row)| {
                table_line(
                    &(index + 1).to_string(),
                    row.input.description.trim(),
                    row.input.quantity.trim(),
                    row.input.rate.trim(),
                    &self.amount(row.amount),
                )
            })
            .collect()
    }

    pub fn subtotal_line(&self) -> String {
        format!("{SUBTOTAL_LABEL}: {}", self.amount(self.summary.totals.subtotal))
    }

    pub fn tax_line(&self, component: TaxComponent) -> String {
        format!(
            "{}: {}",
            component.label(),
            self.amount(self.summary.totals.tax(component))
        )
    }

    pub fn grand_total_line(&self) -> String {
        format!(
            "{GRAND_TOTAL_LABEL}: {}",
            self.amount(self.summary.totals.grand_total)
        )
    }

    pub fn words_line(&self) -> String {
        format!("{WORDS_LABEL}: {}", self.summary.words)
    }

    pub fn totals_lines(&self) -> Vec<String> {
        let mut lines = vec![self.subtotal_line()];
        lines.extend(TaxComponent::ALL.map(|component| self.tax_line(component)));
        lines.push(self.grand_total_line());
        lines.push(self.words_line());
        lines
    }

    /// Every line of the saved invoice, in order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.header_lines();
        lines.push(self.column_header_line());
        lines.push(self.rule_line());
        lines.extend(self.row_lines());
        lines.push(String::new());
        lines.extend(self.totals_lines());
        lines
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InvoiceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::InvoiceEngine;
    use crate::domain::invoice::InvoiceState;
    use crate::domain::line_item::RowInput;
    use chrono::NaiveDate;

    fn summary(state: &InvoiceState) -> InvoiceSummary {
        InvoiceEngine::default().recalculate(state).unwrap()
    }

    fn scenario() -> InvoiceState {
        InvoiceState::with_rows(vec![
            RowInput::new("T-shirt", "2", "50.00"),
            RowInput::new("Tracksuit", "1", "abc"),
            RowInput::new("", "1", ""),
            RowInput::new("Sweater", "5", "10.00"),
        ])
    }

    #[test]
    fn test_full_report_without_header() {
        let state = scenario();
        let summary = summary(&state);
        let report = InvoiceReport::new(state.header(), &summary, RoundingPolicy::default());

        // Columns are padded, so compare without the trailing spaces.
        let expected = "\
S.No  Description of Goods      Quantity   Rate       Amount
------------------------------------------------------------
1     T-shirt                   2          50.00      100.00
2     Tracksuit                 1          abc        0.00
3     Sweater                   5          10.00      50.00

Total Amount (Before Tax) : 150.00
CGST @ 2.5%                 : 3.75
SGST @ 2.5%                 : 3.75
IGST @ 0%                     : 0.00
Grand Total  : 157.50
Invoice Amount in Words: One Hundred Fifty Eight Only";
        let rendered = report.render();
        let trimmed: Vec<&str> = rendered.lines().map(str::trim_end).collect();
        assert_eq!(trimmed, expected.lines().collect::<Vec<_>>());
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_table_columns_are_padded() {
        let state = scenario();
        let summary = summary(&state);
        let report = InvoiceReport::new(None, &summary, RoundingPolicy::default());

        assert_eq!(
            report.column_header_line(),
            "S.No  Description of Goods      Quantity   Rate       Amount    "
        );
        assert_eq!(report.row_lines()[0].len(), report.column_header_line().len());
        assert_eq!(report.rule_line().len(), 60);
    }

    #[test]
    fn test_header_lines_only_for_supplied_fields() {
        let mut state = scenario();
        state.set_header(InvoiceHeader {
            buyer_name: Some("Asha Traders".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 9),
            gstin: Some("29ABCDE1234F1Z5".to_string()),
            ..InvoiceHeader::default()
        });
        let summary = summary(&state);
        let report = InvoiceReport::new(state.header(), &summary, RoundingPolicy::default());

        assert_eq!(
            report.header_lines(),
            vec![
                "Buyer Name : Asha Traders",
                "Date       : 09-03-2024",
                "GSTIN      : 29ABCDE1234F1Z5",
                "",
            ]
        );
        assert_eq!(report.lines()[4], report.column_header_line());
    }

    #[test]
    fn test_individual_lines() {
        let state = scenario();
        let summary = summary(&state);
        let report = InvoiceReport::new(None, &summary, RoundingPolicy::default());

        assert_eq!(report.subtotal_line(), "Total Amount (Before Tax) : 150.00");
        assert_eq!(report.tax_line(TaxComponent::Cgst), "CGST @ 2.5%                 : 3.75");
        assert_eq!(report.tax_line(TaxComponent::Igst), "IGST @ 0%                     : 0.00");
        assert_eq!(report.grand_total_line(), "Grand Total  : 157.50");
        assert_eq!(
            report.words_line(),
            "Invoice Amount in Words: One Hundred Fifty Eight Only"
        );
    }

    #[test]
    fn test_empty_invoice_has_no_item_lines() {
        let state = InvoiceState::new();
        let summary = summary(&state);
        let report = InvoiceReport::new(None, &summary, RoundingPolicy::default());

        assert!(report.row_lines().is_empty());
        assert_eq!(report.grand_total_line(), "Grand Total  : 0.00");
        assert_eq!(report.words_line(), "Invoice Amount in Words: Zero Only");
    }

    #[test]
    fn test_tax_display_rounds_half_cents() {
        // 0.20 * 2.5% = 0.005
        let state = InvoiceState::with_rows(vec![RowInput::new("Sweater", "1", "0.20")]);
        let summary = summary(&state);

        let even = InvoiceReport::new(None, &summary, RoundingPolicy::HalfEven);
        let up = InvoiceReport::new(None, &summary, RoundingPolicy::HalfUp);
        assert_eq!(even.tax_line(TaxComponent::Cgst), "CGST @ 2.5%                 : 0.00");
        assert_eq!(up.tax_line(TaxComponent::Cgst), "CGST @ 2.5%                 : 0.01");
    }
}
