//! Storage adapters for the ledger port.

pub mod in_memory;
