use crate::domain::ports::InvoiceSink;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// File an invoice is saved to when no path is given.
pub const DEFAULT_INVOICE_FILE: &str = "invoice.txt";

/// Saves invoices as flat text, overwriting whatever the file held before.
#[derive(Debug, Clone)]
pub struct TextFileSink {
    path: PathBuf,
}

impl TextFileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TextFileSink {
    fn default() -> Self {
        Self::new(DEFAULT_INVOICE_FILE)
    }
}

#[async_trait]
impl InvoiceSink for TextFileSink {
    async fn save(&self, document: &str) -> Result<()> {
        tokio::fs::write(&self.path, document).await?;
        info!(path = %self.path.display(), "Invoice saved");
        Ok(())
    }
}
