//! Menu session integration tests
//!
//! Drives the whole session through an in-memory reader/writer with a
//! fixed clock, so dates in the output are deterministic.

use std::io::Cursor;

use chrono::NaiveDate;

use circdesk::{cli::Session, clock::Clock, ledger::Ledger};

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn run_menu(input: &str, today: NaiveDate, ledger: &mut Ledger) -> String {
    let mut output = Vec::new();
    let mut session = Session::new(Cursor::new(input.to_string()), &mut output, FixedClock(today));
    session.run(ledger).expect("menu session");
    String::from_utf8(output).expect("utf8 output")
}

#[test]
fn quit_option_ends_session() {
    let mut ledger = Ledger::new();
    let output = run_menu("10\n", date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Library circulation menu:"));
    assert!(output.contains("Goodbye."));
}

#[test]
fn end_of_input_ends_session() {
    let mut ledger = Ledger::new();
    let output = run_menu("", date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Library circulation menu:"));
}

#[test]
fn out_of_range_choice_reported_and_loop_continues() {
    let mut ledger = Ledger::new();
    let output = run_menu("42\n10\n", date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Invalid choice. Enter a number between 1 and 10."));
    assert!(output.contains("Goodbye."));
}

#[test]
fn non_numeric_choice_reported_and_loop_continues() {
    let mut ledger = Ledger::new();
    let output = run_menu("borrow\n10\n", date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Input error:"));
    assert!(output.contains("Goodbye."));
}

#[test]
fn add_and_list_books() {
    let mut ledger = Ledger::new();
    let input = "1\nB1\nDune\nFrank Herbert\n2\n2\n10\n";
    let output = run_menu(input, date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Added \"Dune\" by Frank Herbert (id: B1, copies: 2)."));
    assert!(output.contains("id: B1, title: Dune, author: Frank Herbert, copies: 2, available: 2"));
}

#[test]
fn non_numeric_copy_count_reported() {
    let mut ledger = Ledger::new();
    let input = "1\nB1\nDune\nFrank Herbert\nmany\n10\n";
    let output = run_menu(input, date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Input error:"));
    assert_eq!(ledger.book_count(), 0);
}

#[test]
fn duplicate_book_reported() {
    let mut ledger = Ledger::new();
    let input = "1\nB1\nDune\nFrank Herbert\n1\n1\nB1\nDune\nFrank Herbert\n1\n10\n";
    let output = run_menu(input, date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Duplicate: Book with id B1 already exists"));
    assert_eq!(ledger.book_count(), 1);
}

#[test]
fn search_reports_missing_book() {
    let mut ledger = Ledger::new();
    let output = run_menu("3\nZZ\n10\n", date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Book with id ZZ not found."));
}

#[test]
fn empty_listings_reported() {
    let mut ledger = Ledger::new();
    let output = run_menu("2\n5\n7\n10\n", date(2024, 3, 1), &mut ledger);
    assert!(output.contains("No books registered."));
    assert!(output.contains("No members registered."));
    assert!(output.contains("No books currently borrowed."));
}

#[test]
fn borrow_flow_uses_clock_for_due_date() {
    let mut ledger = Ledger::new();
    let input = "1\nB1\nDune\nFrank Herbert\n1\n4\nM1\nPaul\n6\nB1\nM1\n7\n10\n";
    let output = run_menu(input, date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Added member Paul (id: M1)."));
    assert!(output.contains("Borrowed \"Dune\" for Paul. Due date: 2024-03-08"));
    assert!(output
        .contains("book: Dune (id: B1), member: Paul (id: M1), borrowed: 2024-03-01, due: 2024-03-08"));
}

#[test]
fn borrow_with_unknown_member_reported() {
    let mut ledger = Ledger::new();
    let input = "1\nB1\nDune\nFrank Herbert\n1\n6\nB1\nM1\n10\n";
    let output = run_menu(input, date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Not found: Member with id M1 not found"));
    assert_eq!(ledger.book("B1").expect("book present").available_copies, 1);
}

#[test]
fn return_flow_reports_title() {
    let mut ledger = Ledger::new();
    let input = "1\nB1\nDune\nFrank Herbert\n1\n4\nM1\nPaul\n6\nB1\nM1\n8\nB1\nM1\n10\n";
    let output = run_menu(input, date(2024, 3, 1), &mut ledger);
    assert!(output.contains("Returned \"Dune\"."));
    assert_eq!(ledger.book("B1").expect("book present").available_copies, 1);
}

#[test]
fn overdue_fines_with_explicit_as_of_date() {
    let mut ledger = Ledger::new();
    let input = "1\nB1\nDune\nFrank Herbert\n1\n4\nM1\nPaul\n6\nB1\nM1\n9\n2024-03-11\n10\n";
    let output = run_menu(input, date(2024, 3, 1), &mut ledger);
    assert!(output.contains("--- Overdue fines ---"));
    assert!(output.contains(
        "book: Dune (id: B1), member: Paul (id: M1), due: 2024-03-08, days overdue: 3, fine: 300"
    ));
}

#[test]
fn overdue_fines_default_to_today() {
    let mut ledger = Ledger::new();
    // loan created on 2024-03-01 is 7 days overdue by 2024-03-15
    let seed = "1\nB1\nDune\nFrank Herbert\n1\n4\nM1\nPaul\n6\nB1\nM1\n10\n";
    run_menu(seed, date(2024, 3, 1), &mut ledger);

    let output = run_menu("9\n\n10\n", date(2024, 3, 15), &mut ledger);
    assert!(output.contains("days overdue: 7, fine: 700"));
}

#[test]
fn malformed_as_of_date_yields_empty_report() {
    let mut ledger = Ledger::new();
    let seed = "1\nB1\nDune\nFrank Herbert\n1\n4\nM1\nPaul\n6\nB1\nM1\n10\n";
    run_menu(seed, date(2024, 3, 1), &mut ledger);

    let output = run_menu("9\nnot-a-date\n10\n", date(2024, 3, 15), &mut ledger);
    assert!(output.contains("--- Overdue fines ---"));
    assert!(output.contains("No overdue loans."));
}

#[test]
fn loan_due_today_not_reported_overdue() {
    let mut ledger = Ledger::new();
    let seed = "1\nB1\nDune\nFrank Herbert\n1\n4\nM1\nPaul\n6\nB1\nM1\n10\n";
    run_menu(seed, date(2024, 3, 1), &mut ledger);

    // due date is exactly 2024-03-08
    let output = run_menu("9\n2024-03-08\n10\n", date(2024, 3, 8), &mut ledger);
    assert!(output.contains("No overdue loans."));
}
