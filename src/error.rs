use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Amount {0} is negative and cannot be written in words")]
    NegativeAmount(Decimal),
    #[error("Amount {amount} exceeds the largest amount that can be written in words ({max})")]
    AmountOutOfRange { amount: Decimal, max: u64 },
    #[error("Invoice total overflows and exceeds the largest amount that can be written in words ({max})")]
    TotalOverflow { max: u64 },
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
