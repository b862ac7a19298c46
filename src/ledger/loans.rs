//! Loan lifecycle operations

use chrono::{Duration, NaiveDate};

use crate::{
    error::{AppError, AppResult},
    models::{BorrowRecord, LoanDetails},
};

use super::{Ledger, DEFAULT_LOAN_DAYS, MAX_LOANS};

impl Ledger {
    /// Count unreturned records held by a member
    pub fn active_loan_count(&self, member_id: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.member_id == member_id && !r.returned)
            .count()
    }

    /// Borrow a book for a member; returns the due date
    ///
    /// The due date is `on` plus the loan period. Available copies are
    /// decremented, floored at zero.
    pub fn borrow(&mut self, book_id: &str, member_id: &str, on: NaiveDate) -> AppResult<NaiveDate> {
        let book = self
            .books
            .get(book_id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;
        if !self.members.contains_key(member_id) {
            return Err(AppError::NotFound(format!(
                "Member with id {} not found",
                member_id
            )));
        }
        if book.available_copies == 0 {
            return Err(AppError::BusinessRule(format!(
                "No available copies of \"{}\"",
                book.title
            )));
        }
        if self.active_loan_count(member_id) >= MAX_LOANS {
            return Err(AppError::BusinessRule(format!(
                "Maximum loans reached ({})",
                MAX_LOANS
            )));
        }

        let due_date = on + Duration::days(DEFAULT_LOAN_DAYS);
        self.records.push(BorrowRecord {
            book_id: book_id.to_string(),
            member_id: member_id.to_string(),
            borrow_date: on,
            due_date,
            returned: false,
        });
        if let Some(book) = self.books.get_mut(book_id) {
            book.available_copies = book.available_copies.saturating_sub(1);
        }

        tracing::info!("Loan created: book={} member={} due={}", book_id, member_id, due_date);

        Ok(due_date)
    }

    /// Settle the first unreturned record matching both ids
    pub fn return_loan(&mut self, book_id: &str, member_id: &str) -> AppResult<LoanDetails> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.book_id == book_id && r.member_id == member_id && !r.returned)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No active loan of book {} by member {}",
                    book_id, member_id
                ))
            })?;
        record.returned = true;
        let (borrow_date, due_date) = (record.borrow_date, record.due_date);

        if let Some(book) = self.books.get_mut(book_id) {
            book.available_copies += 1;
        }

        tracing::info!("Loan returned: book={} member={}", book_id, member_id);

        Ok(LoanDetails {
            book_id: book_id.to_string(),
            title: self.books.get(book_id).map(|b| b.title.clone()),
            member_id: member_id.to_string(),
            member_name: self.members.get(member_id).map(|m| m.name.clone()),
            borrow_date,
            due_date,
        })
    }

    /// All unreturned records, oldest first, with resolved titles and names
    pub fn borrowed(&self) -> Vec<LoanDetails> {
        self.records
            .iter()
            .filter(|r| !r.returned)
            .map(|r| LoanDetails {
                book_id: r.book_id.clone(),
                title: self.books.get(&r.book_id).map(|b| b.title.clone()),
                member_id: r.member_id.clone(),
                member_name: self.members.get(&r.member_id).map(|m| m.name.clone()),
                borrow_date: r.borrow_date,
                due_date: r.due_date,
            })
            .collect()
    }
}
