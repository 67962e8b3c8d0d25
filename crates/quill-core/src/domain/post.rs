use serde::{Deserialize, Serialize};

/// Post entity - a blog post, optionally tied to an authoring user.
///
/// `user_id` is nullable: a post with no author is "unauthored" and
/// survives independently of any user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: Option<i32>,
}

/// A post about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: Option<i32>,
}
