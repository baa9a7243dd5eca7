use crate::error::Result;
use async_trait::async_trait;

/// Destination for rendered invoices.
#[async_trait]
pub trait InvoiceSink: Send + Sync {
    async fn save(&self, document: &str) -> Result<()>;
}

pub type InvoiceSinkBox = Box<dyn InvoiceSink>;
