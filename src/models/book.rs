//! Book catalog model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalogued book with copy counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Total copies owned by the library
    pub copies: u32,
    /// Copies currently on the shelf
    pub available_copies: u32,
}

/// Add-book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Book id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    #[validate(range(min = 1, message = "Copies must be at least 1"))]
    pub copies: u32,
}
