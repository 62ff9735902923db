//! Overtime (time-bank) ledger and aggregation

pub mod aggregation;
pub mod ledger;
pub mod ports;
pub mod service;

pub use ledger::OvertimeLedger;
pub use ports::OvertimeRepository;
pub use service::{LedgerUpdate, OvertimeService};
