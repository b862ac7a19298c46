//! Overdue detection and fine computation

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::OverdueRecord;

use super::{Ledger, FINE_PER_DAY};

impl Ledger {
    /// Unreturned records whose due date is strictly before `as_of`
    ///
    /// A record due exactly on `as_of` is not overdue. The fine is the
    /// number of overdue calendar days times the per-day rate.
    pub fn overdue_as_of(&self, as_of: NaiveDate) -> Vec<OverdueRecord> {
        self.records
            .iter()
            .filter(|r| !r.returned)
            .filter_map(|r| {
                let overdue_days = (as_of - r.due_date).num_days();
                if overdue_days <= 0 {
                    return None;
                }
                Some(OverdueRecord {
                    book_id: r.book_id.clone(),
                    title: self.books.get(&r.book_id).map(|b| b.title.clone()),
                    member_id: r.member_id.clone(),
                    member_name: self.members.get(&r.member_id).map(|m| m.name.clone()),
                    due_date: r.due_date,
                    overdue_days,
                    fine: Decimal::from(overdue_days * FINE_PER_DAY),
                })
            })
            .collect()
    }
}
