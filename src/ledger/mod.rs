//! In-memory circulation ledger
//!
//! Owns the three collections (books, members, borrow records) and exposes
//! every circulation operation. Constructed once in `main` and passed by
//! mutable reference to the interface layer; there are no globals.

mod catalog;
mod fines;
mod loans;
mod members;

use indexmap::IndexMap;

use crate::models::{Book, BorrowRecord, Member};

/// Maximum unreturned records a member may hold
pub const MAX_LOANS: usize = 5;

/// Loan period added to the borrow date, in days
pub const DEFAULT_LOAN_DAYS: i64 = 7;

/// Fine accrued per overdue day, in currency units
pub const FINE_PER_DAY: i64 = 100;

/// The circulation ledger: the whole state of the tracker
///
/// Books and members are keyed by id and keep insertion order; borrow
/// records are an append-only log.
#[derive(Debug, Default)]
pub struct Ledger {
    books: IndexMap<String, Book>,
    members: IndexMap<String, Member>,
    records: Vec<BorrowRecord>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }
}
