use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How midpoints are resolved whenever an amount loses precision.
///
/// A single policy is applied to every rounding step of an invoice: row
/// amounts, the two-decimal display of totals, and the whole-rupee grand total
/// that gets written in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// Round half to even (banker's rounding): 156.5 -> 156, 157.5 -> 158.
    #[default]
    HalfEven,
    /// Round half away from zero: 156.5 -> 157, 157.5 -> 158.
    HalfUp,
}

impl RoundingPolicy {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingPolicy::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingPolicy::HalfUp => RoundingStrategy::MidpointAwayFromZero,
        }
    }

    /// Rounds to the given number of fractional digits.
    pub fn round_dp(self, value: Decimal, dp: u32) -> Decimal {
        value.round_dp_with_strategy(dp, self.strategy())
    }

    /// Rounds to paise precision (two fractional digits).
    pub fn to_paise(self, value: Decimal) -> Decimal {
        self.round_dp(value, 2)
    }

    /// Formats with exactly two fractional digits, e.g. `150` -> `"150.00"`.
    pub fn format_amount(self, value: Decimal) -> String {
        format!("{:.2}", self.to_paise(value))
    }
}
