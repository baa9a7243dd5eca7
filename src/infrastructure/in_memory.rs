use crate::domain::ports::InvoiceSink;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory sink that keeps every saved invoice.
///
/// Clones share the same documents, so a test can hand one clone to the code
/// under test and inspect the other.
#[derive(Default, Clone)]
pub struct InMemoryInvoiceSink {
    documents: Arc<RwLock<Vec<String>>>,
}

impl InMemoryInvoiceSink {
    /// Creates a new, empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved documents, oldest first.
    pub async fn documents(&self) -> Vec<String> {
        self.documents.read().await.clone()
    }
}

#[async_trait]
impl InvoiceSink for InMemoryInvoiceSink {
    async fn save(&self, document: &str) -> Result<()> {
        let mut documents = self.documents.write().await;
        documents.push(document.to_string());
        Ok(())
    }
}
