use super::entry::Entry;
use super::report::Report;
use crate::error::Result;
use async_trait::async_trait;

/// Append-only, insertion-ordered storage for recorded entries.
///
/// Implementations must never expose a partially applied append to
/// `snapshot`.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn append(&self, entry: Entry);
    async fn snapshot(&self) -> Vec<Entry>;
    async fn is_empty(&self) -> bool;
}

pub type LedgerStoreBox = Box<dyn LedgerStore>;

/// Turns a report table into the bytes of a downloadable document.
pub trait ReportSerializer: Send + Sync {
    fn serialize(&self, report: &Report) -> Result<Vec<u8>>;
}

pub type ReportSerializerBox = Box<dyn ReportSerializer>;
