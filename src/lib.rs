//! Circdesk - Library Circulation Tracker
//!
//! An in-memory circulation ledger (books, members, loans, overdue fines)
//! driven by a line-oriented text menu, plus a few standalone numeric
//! routines.

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod numeric;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use ledger::Ledger;
