//! Application layer: routes inbound messages and orchestrates the domain.
//!
//! `TallyService` is the single entry point every transport calls. It owns
//! the ledger handle, so there is no process-global state.

pub mod command;
pub mod service;
