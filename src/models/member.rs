//! Member model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered library member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
}

/// Add-member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMember {
    #[validate(length(min = 1, message = "Member id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}
