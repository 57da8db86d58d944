//! Domain layer: entries, the ledger port and report folding.

pub mod entry;
pub mod ports;
pub mod report;
