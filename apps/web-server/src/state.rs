//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{CommentRepository, PostRepository, UserRepository};
use quill_infra::database::{
    DatabaseConfig, DatabaseHandle, SqliteCommentRepository, SqlitePostRepository,
    SqliteUserRepository,
};
use quill_infra::{DbConn, DbErr};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl AppState {
    /// Connect to the database (creating schema if absent) and wire the
    /// repositories.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = DatabaseHandle::init(config).await?;
        Ok(Self::with_connection(db.conn))
    }

    /// Wire repositories over an existing connection.
    pub fn with_connection(conn: DbConn) -> Self {
        Self {
            users: Arc::new(SqliteUserRepository::new(conn.clone())),
            posts: Arc::new(SqlitePostRepository::new(conn.clone())),
            comments: Arc::new(SqliteCommentRepository::new(conn)),
        }
    }
}
