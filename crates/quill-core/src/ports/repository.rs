use async_trait::async_trait;

use crate::domain::{Comment, NewComment, NewPost, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// Inserts are not part of this trait because the store assigns ids;
/// each entity repository exposes a typed `create` instead.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an existing entity (update by primary key).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// Insert a new user; the store assigns the id.
    async fn create(&self, username: &str) -> Result<User, RepoError>;

    /// Find a user by exact (case-sensitive) username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// All users ordered by username ascending.
    async fn list(&self) -> Result<Vec<User>, RepoError>;

    /// Total number of users.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Insert a new post; the store assigns the id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// All posts ordered by id descending (newest first).
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Bulk-delete every post authored by the given user.
    async fn delete_by_user(&self, user_id: i32) -> Result<u64, RepoError>;

    /// Total number of posts.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i32> {
    /// Insert a new comment; the store assigns the id.
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// Comments on a post, oldest first.
    async fn find_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;

    /// Bulk-delete every comment on the given post.
    async fn delete_by_post(&self, post_id: i32) -> Result<u64, RepoError>;

    /// Bulk-delete every comment authored by the given user.
    async fn delete_by_user(&self, user_id: i32) -> Result<u64, RepoError>;

    /// Total number of comments.
    async fn count(&self) -> Result<u64, RepoError>;
}
