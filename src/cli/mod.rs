//! Interactive menu session
//!
//! Line-oriented text menu over any reader/writer pair, so the whole
//! session can be driven from tests without a terminal. All failures are
//! reported as status lines and the loop continues; only I/O errors on the
//! streams themselves abort the session.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::{
    clock::Clock,
    error::AppResult,
    ledger::Ledger,
    models::{CreateBook, CreateMember},
};

const UNKNOWN: &str = "(unknown)";

/// Menu session driving a ledger over line-oriented text I/O
pub struct Session<R, W, C> {
    input: R,
    output: W,
    clock: C,
}

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    pub fn new(input: R, output: W, clock: C) -> Self {
        Self {
            input,
            output,
            clock,
        }
    }

    /// Run the menu loop until quit or end of input
    pub fn run(&mut self, ledger: &mut Ledger) -> AppResult<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Select an option (1-10): ")? else {
                break;
            };
            match line.parse::<u32>() {
                Ok(choice) => {
                    if !self.dispatch(choice, ledger)? {
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "Input error: {}", e)?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> AppResult<()> {
        writeln!(self.output, "Library circulation menu:")?;
        writeln!(self.output, " 1: Add a book")?;
        writeln!(self.output, " 2: List books")?;
        writeln!(self.output, " 3: Search for a book")?;
        writeln!(self.output, " 4: Add a member")?;
        writeln!(self.output, " 5: List members")?;
        writeln!(self.output, " 6: Borrow a book")?;
        writeln!(self.output, " 7: List borrowed books")?;
        writeln!(self.output, " 8: Return a book")?;
        writeln!(self.output, " 9: Overdue fines")?;
        writeln!(self.output, "10: Quit")?;
        Ok(())
    }

    /// Returns false when the session should end
    fn dispatch(&mut self, choice: u32, ledger: &mut Ledger) -> AppResult<bool> {
        match choice {
            1 => self.add_book(ledger)?,
            2 => self.list_books(ledger)?,
            3 => self.search_book(ledger)?,
            4 => self.add_member(ledger)?,
            5 => self.list_members(ledger)?,
            6 => self.borrow_book(ledger)?,
            7 => self.list_borrowed(ledger)?,
            8 => self.return_book(ledger)?,
            9 => self.overdue_fines(ledger)?,
            10 => {
                writeln!(self.output, "Goodbye.")?;
                return Ok(false);
            }
            _ => writeln!(
                self.output,
                "Invalid choice. Enter a number between 1 and 10."
            )?,
        }
        Ok(true)
    }

    fn add_book(&mut self, ledger: &mut Ledger) -> AppResult<()> {
        let Some(id) = self.prompt("Book id: ")? else {
            return Ok(());
        };
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(());
        };
        let Some(raw_copies) = self.prompt("Copies: ")? else {
            return Ok(());
        };
        let copies: u32 = match raw_copies.parse() {
            Ok(n) => n,
            Err(e) => {
                writeln!(self.output, "Input error: {}", e)?;
                return Ok(());
            }
        };

        match ledger.add_book(CreateBook {
            id,
            title,
            author,
            copies,
        }) {
            Ok(book) => writeln!(
                self.output,
                "Added \"{}\" by {} (id: {}, copies: {}).",
                book.title, book.author, book.id, book.copies
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn list_books(&mut self, ledger: &Ledger) -> AppResult<()> {
        if ledger.book_count() == 0 {
            writeln!(self.output, "No books registered.")?;
            return Ok(());
        }
        writeln!(self.output, "--- Books ---")?;
        for book in ledger.books() {
            writeln!(
                self.output,
                "id: {}, title: {}, author: {}, copies: {}, available: {}",
                book.id, book.title, book.author, book.copies, book.available_copies
            )?;
        }
        Ok(())
    }

    fn search_book(&mut self, ledger: &Ledger) -> AppResult<()> {
        let Some(id) = self.prompt("Book id to search for: ")? else {
            return Ok(());
        };
        match ledger.book(&id) {
            Some(book) => writeln!(
                self.output,
                "id: {}, title: {}, author: {}, copies: {}, available: {}",
                book.id, book.title, book.author, book.copies, book.available_copies
            )?,
            None => writeln!(self.output, "Book with id {} not found.", id)?,
        }
        Ok(())
    }

    fn add_member(&mut self, ledger: &mut Ledger) -> AppResult<()> {
        let Some(id) = self.prompt("Member id: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        match ledger.add_member(CreateMember { id, name }) {
            Ok(member) => writeln!(
                self.output,
                "Added member {} (id: {}).",
                member.name, member.id
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn list_members(&mut self, ledger: &Ledger) -> AppResult<()> {
        if ledger.member_count() == 0 {
            writeln!(self.output, "No members registered.")?;
            return Ok(());
        }
        writeln!(self.output, "--- Members ---")?;
        for member in ledger.members() {
            writeln!(self.output, "id: {}, name: {}", member.id, member.name)?;
        }
        Ok(())
    }

    fn borrow_book(&mut self, ledger: &mut Ledger) -> AppResult<()> {
        let Some(book_id) = self.prompt("Book id to borrow: ")? else {
            return Ok(());
        };
        let Some(member_id) = self.prompt("Member id: ")? else {
            return Ok(());
        };
        match ledger.borrow(&book_id, &member_id, self.clock.today()) {
            Ok(due_date) => {
                let title = ledger
                    .book(&book_id)
                    .map(|b| b.title.as_str())
                    .unwrap_or(UNKNOWN);
                let name = ledger
                    .member(&member_id)
                    .map(|m| m.name.as_str())
                    .unwrap_or(UNKNOWN);
                writeln!(
                    self.output,
                    "Borrowed \"{}\" for {}. Due date: {}",
                    title, name, due_date
                )?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn list_borrowed(&mut self, ledger: &Ledger) -> AppResult<()> {
        writeln!(self.output, "--- Borrowed books ---")?;
        let loans = ledger.borrowed();
        if loans.is_empty() {
            writeln!(self.output, "No books currently borrowed.")?;
            return Ok(());
        }
        for loan in loans {
            writeln!(
                self.output,
                "book: {} (id: {}), member: {} (id: {}), borrowed: {}, due: {}",
                loan.title.as_deref().unwrap_or(UNKNOWN),
                loan.book_id,
                loan.member_name.as_deref().unwrap_or(UNKNOWN),
                loan.member_id,
                loan.borrow_date,
                loan.due_date
            )?;
        }
        Ok(())
    }

    fn return_book(&mut self, ledger: &mut Ledger) -> AppResult<()> {
        let Some(book_id) = self.prompt("Book id to return: ")? else {
            return Ok(());
        };
        let Some(member_id) = self.prompt("Member id: ")? else {
            return Ok(());
        };
        match ledger.return_loan(&book_id, &member_id) {
            Ok(loan) => writeln!(
                self.output,
                "Returned \"{}\".",
                loan.title.as_deref().unwrap_or(UNKNOWN)
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn overdue_fines(&mut self, ledger: &Ledger) -> AppResult<()> {
        let Some(raw) = self.prompt("As-of date (YYYY-MM-DD, blank for today): ")? else {
            return Ok(());
        };
        writeln!(self.output, "--- Overdue fines ---")?;
        let as_of = if raw.is_empty() {
            Some(self.clock.today())
        } else {
            match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    // an unparseable date reads as an empty report
                    tracing::debug!("Unparseable as-of date {:?}: {}", raw, e);
                    None
                }
            }
        };
        let overdue = as_of
            .map(|date| ledger.overdue_as_of(date))
            .unwrap_or_default();
        if overdue.is_empty() {
            writeln!(self.output, "No overdue loans.")?;
            return Ok(());
        }
        for record in overdue {
            writeln!(
                self.output,
                "book: {} (id: {}), member: {} (id: {}), due: {}, days overdue: {}, fine: {}",
                record.title.as_deref().unwrap_or(UNKNOWN),
                record.book_id,
                record.member_name.as_deref().unwrap_or(UNKNOWN),
                record.member_id,
                record.due_date,
                record.overdue_days,
                record.fine
            )?;
        }
        Ok(())
    }

    /// Write a prompt and read one trimmed line; None on end of input
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
