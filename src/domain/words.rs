//! Spelling whole-rupee amounts in words.
//!
//! Values below one thousand are spelled the same way in every system. Above
//! that, a [`NumberingSystem`] decides where the groups fall: the Indian system
//! groups by thousand, lakh and crore, the international one by thousand,
//! million and billion.

use crate::error::{InvoiceError, Result};
use rust_decimal::Decimal;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const ZERO_WORDS: &str = "Zero";
const SUFFIX: &str = "Only";

/// A named grouping unit, e.g. one lakh = 100,000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub value: u64,
    pub name: &'static str,
}

/// Grouping strategy used to spell amounts of one thousand and above.
///
/// `scales` must be ordered from largest to smallest and end with one
/// thousand, so whatever is left after the last scale is below one thousand.
pub trait NumberingSystem: Send + Sync {
    fn name(&self) -> &'static str;
    fn scales(&self) -> &[Scale];
    /// Largest amount this system spells without repeating its top unit.
    fn max_amount(&self) -> u64;
}

pub type NumberingSystemBox = Box<dyn NumberingSystem>;

/// Thousand, lakh (10^5) and crore (10^7).
#[derive(Debug, Clone, Copy, Default)]
pub struct IndianNumbering;

const INDIAN_SCALES: [Scale; 3] = [
    Scale {
        value: 10_000_000,
        name: "Crore",
    },
    Scale {
        value: 100_000,
        name: "Lakh",
    },
    Scale {
        value: 1_000,
        name: "Thousand",
    },
];

impl NumberingSystem for IndianNumbering {
    fn name(&self) -> &'static str {
        "indian"
    }

    fn scales(&self) -> &[Scale] {
        &INDIAN_SCALES
    }

    /// Up to 99,99,999 crore and change; a crore of crores is out of range.
    fn max_amount(&self) -> u64 {
        99_999_999_999_999
    }
}

/// Thousand, million (10^6) and billion (10^9).
#[derive(Debug, Clone, Copy, Default)]
pub struct InternationalNumbering;

const INTERNATIONAL_SCALES: [Scale; 3] = [
    Scale {
        value: 1_000_000_000,
        name: "Billion",
    },
    Scale {
        value: 1_000_000,
        name: "Million",
    },
    Scale {
        value: 1_000,
        name: "Thousand",
    },
];

impl NumberingSystem for InternationalNumbering {
    fn name(&self) -> &'static str {
        "international"
    }

    fn scales(&self) -> &[Scale] {
        &INTERNATIONAL_SCALES
    }

    fn max_amount(&self) -> u64 {
        999_999_999_999
    }
}

fn below_thousand(n: u64) -> String {
    debug_assert!(n < 1000);
    let n = n as usize;
    match n {
        0..=19 => ONES[n].to_string(),
        20..=99 => {
            let mut words = TENS[n / 10].to_string();
            if n % 10 != 0 {
                words.push(' ');
                words.push_str(ONES[n % 10]);
            }
            words
        }
        _ => {
            let mut words = format!("{} Hundred", ONES[n / 100]);
            if n % 100 != 0 {
                words.push(' ');
                words.push_str(&below_thousand((n % 100) as u64));
            }
            words
        }
    }
}

fn spell(n: u64, system: &dyn NumberingSystem) -> Vec<String> {
    let mut segments = Vec::new();
    let mut rest = n;
    for scale in system.scales() {
        if rest >= scale.value {
            segments.push(group_to_words(rest / scale.value, scale.name, system));
            rest %= scale.value;
        }
    }
    if rest > 0 {
        segments.push(below_thousand(rest));
    }
    segments
}

/// Spells `value` followed by `unit`, e.g. `(34, "Lakh")` -> `"Thirty Four Lakh"`.
///
/// `value` may itself span several groups (`(150, "Crore")` ->
/// `"One Hundred Fifty Crore"`). An empty unit spells the bare value; zero
/// spells nothing.
pub fn group_to_words(value: u64, unit: &str, system: &dyn NumberingSystem) -> String {
    let mut words = spell(value, system).join(" ");
    if !words.is_empty() && !unit.is_empty() {
        words.push(' ');
        words.push_str(unit);
    }
    words
}

/// Spells a whole-rupee amount, e.g. `158` -> `"One Hundred Fifty Eight Only"`.
///
/// Paise are never spelled: callers round to whole rupees first.
pub fn amount_to_words(amount: u64, system: &dyn NumberingSystem) -> Result<String> {
    let max = system.max_amount();
    if amount > max {
        return Err(InvoiceError::AmountOutOfRange {
            amount: Decimal::from(amount),
            max,
        });
    }
    if amount == 0 {
        return Ok(format!("{ZERO_WORDS} {SUFFIX}"));
    }

    let words = group_to_words(amount, "", system);
    Ok(format!("{} {SUFFIX}", words.trim()))
}
