//! In-memory personal ledger: currency-tagged accounts with exact decimal
//! balances, a date-indexed journal of transactions that mutate them, and a
//! narrow storage gateway for rebuilding the whole thing from disk.

pub mod common;
pub mod domain;
pub mod io;
pub mod store;
