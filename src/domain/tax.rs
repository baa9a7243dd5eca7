use super::rounding::RoundingPolicy;
use crate::error::{InvoiceError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const CGST_RATE: Decimal = dec!(0.025);
pub const SGST_RATE: Decimal = dec!(0.025);
pub const IGST_RATE: Decimal = dec!(0.00);

/// The three GST levies charged on every invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxComponent {
    Cgst,
    Sgst,
    Igst,
}

impl TaxComponent {
    pub const ALL: [TaxComponent; 3] = [TaxComponent::Cgst, TaxComponent::Sgst, TaxComponent::Igst];

    pub fn rate(self) -> Decimal {
        match self {
            TaxComponent::Cgst => CGST_RATE,
            TaxComponent::Sgst => SGST_RATE,
            TaxComponent::Igst => IGST_RATE,
        }
    }

    /// Printed label, padded so the colons line up on saved invoices.
    pub fn label(self) -> &'static str {
        match self {
            TaxComponent::Cgst => "CGST @ 2.5%                 ",
            TaxComponent::Sgst => "SGST @ 2.5%                 ",
            TaxComponent::Igst => "IGST @ 0%                     ",
        }
    }
}

/// Subtotal, the levies on it, and the tax-inclusive grand total.
///
/// All fields are exact; nothing is rounded until the totals are displayed or
/// the grand total is written in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub grand_total: Decimal,
}

impl InvoiceTotals {
    /// `None` when a levy or the grand total leaves the decimal range.
    pub fn compute(subtotal: Decimal) -> Option<Self> {
        let cgst = subtotal.checked_mul(CGST_RATE)?;
        let sgst = subtotal.checked_mul(SGST_RATE)?;
        let igst = subtotal.checked_mul(IGST_RATE)?;
        let grand_total = subtotal
            .checked_add(cgst)?
            .checked_add(sgst)?
            .checked_add(igst)?;

        Some(Self {
            subtotal,
            cgst,
            sgst,
            igst,
            grand_total,
        })
    }

    pub fn tax(&self, component: TaxComponent) -> Decimal {
        match component {
            TaxComponent::Cgst => self.cgst,
            TaxComponent::Sgst => self.sgst,
            TaxComponent::Igst => self.igst,
        }
    }

    /// Grand total rounded to whole rupees, ready to be written in words.
    ///
    /// `max` is the largest amount the caller can spell.
    pub fn rounded_grand_total(&self, policy: RoundingPolicy, max: u64) -> Result<u64> {
        let rounded = policy.round_dp(self.grand_total, 0);
        if rounded.is_zero() {
            return Ok(0);
        }
        if rounded.is_sign_negative() {
            return Err(InvoiceError::NegativeAmount(self.grand_total));
        }
        rounded
            .to_u64()
            .filter(|amount| *amount <= max)
            .ok_or(InvoiceError::AmountOutOfRange {
                amount: self.grand_total,
                max,
            })
    }
}

/// Applies the fixed GST rates to a subtotal.
pub fn compute_totals(subtotal: Decimal) -> Option<InvoiceTotals> {
    InvoiceTotals::compute(subtotal)
}
