//! Borrow record model and resolved views

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single borrow event
///
/// Records are appended on borrow and never removed; `returned` flips to
/// true when the loan is settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub book_id: String,
    pub member_id: String,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned: bool,
}

/// Active loan with resolved book title and member name for display
#[derive(Debug, Clone, Serialize)]
pub struct LoanDetails {
    pub book_id: String,
    pub title: Option<String>,
    pub member_id: String,
    pub member_name: Option<String>,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// One overdue active loan with the fine accrued so far
#[derive(Debug, Clone, Serialize)]
pub struct OverdueRecord {
    pub book_id: String,
    pub title: Option<String>,
    pub member_id: String,
    pub member_name: Option<String>,
    pub due_date: NaiveDate,
    pub overdue_days: i64,
    pub fine: Decimal,
}
