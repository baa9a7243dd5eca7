use super::rounding::RoundingPolicy;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// Largest quantity a single row accepts.
pub const MAX_QUANTITY: u64 = 10_000_000;

/// Quantity a freshly added row starts with.
pub const DEFAULT_QUANTITY: &str = "1";

/// A row exactly as it was entered.
///
/// Every column is kept as text so that malformed numbers survive reading and
/// can be neutralised by the aggregator instead of rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RowInput {
    pub description: String,
    pub quantity: String,
    pub rate: String,
}

impl RowInput {
    pub fn new(
        description: impl Into<String>,
        quantity: impl Into<String>,
        rate: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            quantity: quantity.into(),
            rate: rate.into(),
        }
    }

    /// An untouched row: no product, quantity 1, no rate.
    pub fn blank() -> Self {
        Self::new("", DEFAULT_QUANTITY, "")
    }

    /// Whether description, quantity and rate all carry something.
    ///
    /// Only filled rows are written to a saved invoice.
    pub fn is_filled(&self) -> bool {
        !self.description.trim().is_empty()
            && !self.quantity.trim().is_empty()
            && !self.rate.trim().is_empty()
    }
}

/// A row whose quantity and rate both parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub description: String,
    pub quantity: u64,
    pub rate: Decimal,
}

impl LineItem {
    /// Parses a raw row, returning `None` when quantity or rate is malformed.
    pub fn parse(row: &RowInput) -> Option<Self> {
        Some(Self {
            description: row.description.trim().to_string(),
            quantity: parse_quantity(&row.quantity)?,
            rate: parse_rate(&row.rate)?,
        })
    }

    /// `quantity * rate` at paise precision, or `None` on decimal overflow.
    pub fn amount(&self, policy: RoundingPolicy) -> Option<Decimal> {
        Decimal::from(self.quantity)
            .checked_mul(self.rate)
            .map(|amount| policy.to_paise(amount))
    }
}

pub fn parse_quantity(text: &str) -> Option<u64> {
    text.trim()
        .parse::<u64>()
        .ok()
        .filter(|qty| *qty <= MAX_QUANTITY)
}

/// Accepts plain decimals as well as scientific notation (`1e2`).
pub fn parse_rate(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .filter(|rate| !rate.is_sign_negative())
}

/// Amount for one row. Malformed input yields `0.00`, never an error.
pub fn compute_row_amount(quantity: &str, rate: &str, policy: RoundingPolicy) -> Decimal {
    let row = RowInput::new("", quantity, rate);
    LineItem::parse(&row)
        .and_then(|item| item.amount(policy))
        .unwrap_or(Decimal::ZERO)
}

/// Exact sum of row amounts, or `None` if it leaves the decimal range.
pub fn compute_subtotal<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}
