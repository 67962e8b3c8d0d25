use serde::{Deserialize, Serialize};

/// User entity - represents an author in the system.
///
/// The id is assigned by the store on insert; usernames are unique
/// (case-sensitive) across all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
}
