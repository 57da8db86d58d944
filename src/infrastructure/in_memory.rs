use crate::domain::entry::Entry;
use crate::domain::ports::LedgerStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory ledger.
///
/// Uses `Arc<RwLock<Vec<Entry>>>` so clones share the same entries. Appends
/// take the write lock, so a snapshot always sees whole entries in
/// insertion order. Contents live as long as the process.
#[derive(Default, Clone)]
pub struct InMemoryLedger {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl InMemoryLedger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn append(&self, entry: Entry) {
        let mut entries = self.entries.write().await;
        entries.push(entry);
    }

    async fn snapshot(&self) -> Vec<Entry> {
        let entries = self.entries.read().await;
        entries.clone()
    }

    async fn is_empty(&self) -> bool {
        let entries = self.entries.read().await;
        entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_preserves_order() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.is_empty().await);

        ledger.append(Entry::new("Nasi Goreng", 15000).unwrap()).await;
        ledger.append(Entry::new("Es Teh", 5000).unwrap()).await;

        let snapshot = ledger.snapshot().await;
        assert!(!ledger.is_empty().await);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].label(), "Nasi Goreng");
        assert_eq!(snapshot[1].label(), "Es Teh");
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_copy() {
        let ledger = InMemoryLedger::new();
        ledger.append(Entry::new("Kopi", 10000).unwrap()).await;

        let before = ledger.snapshot().await;
        ledger.append(Entry::new("Teh", 4000).unwrap()).await;

        assert_eq!(before.len(), 1);
        assert_eq!(ledger.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let ledger = InMemoryLedger::new();
        let handle = ledger.clone();
        handle.append(Entry::new("Kopi", 10000).unwrap()).await;

        assert_eq!(ledger.snapshot().await.len(), 1);
    }
}
