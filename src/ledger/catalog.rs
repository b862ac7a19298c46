//! Catalog operations

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook},
};

use super::Ledger;

impl Ledger {
    /// Register a new book; available copies start equal to total copies
    pub fn add_book(&mut self, new: CreateBook) -> AppResult<&Book> {
        new.validate()?;
        if self.books.contains_key(&new.id) {
            return Err(AppError::Duplicate(format!(
                "Book with id {} already exists",
                new.id
            )));
        }

        tracing::info!("Catalog add: {} ({} copies)", new.id, new.copies);

        let CreateBook {
            id,
            title,
            author,
            copies,
        } = new;
        let book = Book {
            id: id.clone(),
            title,
            author,
            copies,
            available_copies: copies,
        };
        Ok(self.books.entry(id).or_insert(book))
    }

    /// Look up a book by id
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    /// All books in insertion order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Number of registered titles
    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}
