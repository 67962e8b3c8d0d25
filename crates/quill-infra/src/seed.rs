//! Demo-data bootstrap.

use quill_core::domain::{NewComment, NewPost};
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository, UserRepository};

/// What the seeder did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Sample rows were inserted.
    Seeded,
    /// The database already held users; nothing was touched.
    Skipped,
}

/// Insert sample data (2 users, 2 posts, 1 comment) into an empty database.
///
/// Guarded: if any user exists the whole run is skipped. Inserts happen in
/// three phases (users, then posts, then the comment) because later rows
/// reference ids assigned in earlier phases. There is no rollback; a failure
/// mid-way leaves the earlier phases persisted.
pub async fn seed_sample_data(
    users: &dyn UserRepository,
    posts: &dyn PostRepository,
    comments: &dyn CommentRepository,
) -> Result<SeedOutcome, RepoError> {
    if users.count().await? > 0 {
        tracing::info!("Database already has data, skipping seed");
        return Ok(SeedOutcome::Skipped);
    }

    let kaden = users.create("Kaden").await?;
    let ben = users.create("Ben").await?;

    let first = posts
        .create(NewPost {
            title: "Welcome to Ben's blog site".to_string(),
            content: "This is the first post.".to_string(),
            user_id: Some(ben.id),
        })
        .await?;
    posts
        .create(NewPost {
            title: "About the project".to_string(),
            content: "This project is built with Quill.".to_string(),
            user_id: Some(kaden.id),
        })
        .await?;

    comments
        .create(NewComment {
            body: "Nice work!".to_string(),
            post_id: first.id,
            user_id: Some(kaden.id),
        })
        .await?;

    tracing::info!("Sample data created");
    Ok(SeedOutcome::Seeded)
}
