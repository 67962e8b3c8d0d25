use serde::{Deserialize, Serialize};

/// Comment entity - always attached to exactly one post, author optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub body: String,
    pub post_id: i32,
    pub user_id: Option<i32>,
}

/// A comment about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub body: String,
    pub post_id: i32,
    pub user_id: Option<i32>,
}
