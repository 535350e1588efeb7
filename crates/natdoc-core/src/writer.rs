//! Output seam between the generator and whatever stores declarations.

use std::io::Error as IoError;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{Error, Result};

/// Receives finished namespace blobs in catalog order.
#[async_trait]
pub trait NamespaceWriter: Send + Sync {
    /// Called once before any namespace is written, with every namespace name.
    ///
    /// # Errors
    /// Returns an error if the destination cannot be prepared; the run aborts.
    async fn prepare(&self, namespaces: &[String]) -> Result<()>;

    /// Stores the concatenated declarations of one namespace.
    ///
    /// # Errors
    /// Returns an error if the blob cannot be stored; other namespaces still run.
    async fn write_namespace(&self, namespace: &str, declarations: &str) -> Result<()>;
}

/// Writer that keeps every namespace blob in memory.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    prepared: Mutex<Vec<String>>,
    written: Mutex<Vec<(String, String)>>,
}

impl MemoryWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespaces announced through [`NamespaceWriter::prepare`].
    pub fn prepared(&self) -> Vec<String> {
        self.prepared
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Written `(namespace, declarations)` pairs in write order.
    pub fn written(&self) -> Vec<(String, String)> {
        self.written
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Declarations written for `namespace`, if any.
    pub fn namespace(&self, namespace: &str) -> Option<String> {
        self.written()
            .into_iter()
            .find(|(name, _)| name == namespace)
            .map(|(_, text)| text)
    }
}

#[async_trait]
impl NamespaceWriter for MemoryWriter {
    async fn prepare(&self, namespaces: &[String]) -> Result<()> {
        let mut prepared = self.prepared.lock().map_err(|_| poisoned())?;
        prepared.extend_from_slice(namespaces);
        Ok(())
    }

    async fn write_namespace(&self, namespace: &str, declarations: &str) -> Result<()> {
        let mut written = self.written.lock().map_err(|_| poisoned())?;
        written.push((namespace.to_owned(), declarations.to_owned()));
        Ok(())
    }
}

fn poisoned() -> Error {
    Error::Io(IoError::other("memory writer lock poisoned"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_writer_records_in_order() {
        let writer = MemoryWriter::new();
        writer
            .prepare(&["B".to_owned(), "A".to_owned()])
            .await
            .expect("prepare should succeed");
        writer.write_namespace("B", "second").await.expect("write B");
        writer.write_namespace("A", "first").await.expect("write A");

        assert_eq!(writer.prepared(), vec!["B", "A"]);
        assert_eq!(writer.written()[0].0, "B");
        assert_eq!(writer.namespace("A").as_deref(), Some("first"));
        assert!(writer.namespace("C").is_none());
    }
}
