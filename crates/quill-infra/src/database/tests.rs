use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseBackend, DbConn, MockDatabase};

use quill_core::domain::{NewComment, NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, CommentRepository, PostRepository, UserRepository};

use crate::database::DatabaseHandle;
use crate::database::entity::post;
use crate::database::sqlite_repo::{
    SqliteCommentRepository, SqlitePostRepository, SqliteUserRepository,
};
use crate::seed::{SeedOutcome, seed_sample_data};

/// Fresh in-memory database with the schema applied.
///
/// A single pooled connection, otherwise each checkout would see its own
/// empty :memory: database.
async fn setup() -> DbConn {
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .to_owned();
    let conn = Database::connect(opts).await.expect("connect in-memory db");
    DatabaseHandle::create_schema(&conn)
        .await
        .expect("create schema");
    conn
}

/// Trait-object repositories, wired the way the application state wires them.
fn repos(
    conn: &DbConn,
) -> (
    Arc<dyn UserRepository>,
    Arc<dyn PostRepository>,
    Arc<dyn CommentRepository>,
) {
    (
        Arc::new(SqliteUserRepository::new(conn.clone())),
        Arc::new(SqlitePostRepository::new(conn.clone())),
        Arc::new(SqliteCommentRepository::new(conn.clone())),
    )
}

#[tokio::test]
async fn test_find_post_by_id_mocked() {
    // Mock the query expectation
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![post::Model {
            id: 7,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            user_id: None,
        }]])
        .into_connection();

    let repo = SqlitePostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(7).await.unwrap();

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.title, "Test Post");
    assert_eq!(found.id, 7);
    assert_eq!(found.user_id, None);
}

#[tokio::test]
async fn test_create_user_and_find_by_username() {
    let conn = setup().await;
    let (users, _, _) = repos(&conn);

    let created = users.create("alice").await.unwrap();
    assert!(created.id > 0);

    let found = users.find_by_username("alice").await.unwrap();
    assert_eq!(found, Some(created));

    // Exact match is case-sensitive
    assert!(users.find_by_username("Alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected_without_mutation() {
    let conn = setup().await;
    let (users, _, _) = repos(&conn);

    users.create("alice").await.unwrap();
    let err = users.create("alice").await.unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)));
    assert_eq!(users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_users_listed_by_username_ascending() {
    let conn = setup().await;
    let (users, _, _) = repos(&conn);

    users.create("zoe").await.unwrap();
    users.create("anna").await.unwrap();
    users.create("milo").await.unwrap();

    let names: Vec<String> = users
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, vec!["anna", "milo", "zoe"]);
}

#[tokio::test]
async fn test_posts_listed_newest_first() {
    let conn = setup().await;
    let (_, posts, _) = repos(&conn);

    for title in ["first", "second", "third"] {
        posts
            .create(NewPost {
                title: title.to_string(),
                content: "body".to_string(),
                user_id: None,
            })
            .await
            .unwrap();
    }

    let titles: Vec<String> = posts
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_save_updates_post_in_place() {
    let conn = setup().await;
    let (_, posts, _) = repos(&conn);

    let mut created = posts
        .create(NewPost {
            title: "draft".to_string(),
            content: "wip".to_string(),
            user_id: None,
        })
        .await
        .unwrap();

    created.title = "final".to_string();
    posts.save(created.clone()).await.unwrap();

    let reloaded = posts.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(reloaded.title, "final");
    assert_eq!(posts.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_post_removes_its_comments() {
    let conn = setup().await;
    let (users, posts, comments) = repos(&conn);

    let author = users.create("alice").await.unwrap();
    let target = posts
        .create(NewPost {
            title: "t".to_string(),
            content: "c".to_string(),
            user_id: Some(author.id),
        })
        .await
        .unwrap();
    let other = posts
        .create(NewPost {
            title: "other".to_string(),
            content: "c".to_string(),
            user_id: None,
        })
        .await
        .unwrap();

    for post_id in [target.id, target.id, other.id] {
        comments
            .create(NewComment {
                body: "hi".to_string(),
                post_id,
                user_id: None,
            })
            .await
            .unwrap();
    }

    // The explicit path the delete handler takes
    assert_eq!(comments.delete_by_post(target.id).await.unwrap(), 2);
    posts.delete(target.id).await.unwrap();

    assert!(posts.find_by_id(target.id).await.unwrap().is_none());
    assert_eq!(posts.count().await.unwrap(), 1);
    assert_eq!(comments.count().await.unwrap(), 1);
    assert_eq!(comments.find_by_post(other.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_foreign_key_cascade_on_post_delete() {
    let conn = setup().await;
    let (_, posts, comments) = repos(&conn);

    let target = posts
        .create(NewPost {
            title: "t".to_string(),
            content: "c".to_string(),
            user_id: None,
        })
        .await
        .unwrap();
    comments
        .create(NewComment {
            body: "hi".to_string(),
            post_id: target.id,
            user_id: None,
        })
        .await
        .unwrap();

    // No explicit comment cleanup: the schema-level cascade does it.
    posts.delete(target.id).await.unwrap();
    assert_eq!(comments.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_user_removes_authored_rows() {
    let conn = setup().await;
    let (users, posts, comments) = repos(&conn);

    let doomed = users.create("doomed").await.unwrap();
    let bystander = users.create("bystander").await.unwrap();

    let authored = posts
        .create(NewPost {
            title: "mine".to_string(),
            content: "c".to_string(),
            user_id: Some(doomed.id),
        })
        .await
        .unwrap();
    let unrelated = posts
        .create(NewPost {
            title: "theirs".to_string(),
            content: "c".to_string(),
            user_id: Some(bystander.id),
        })
        .await
        .unwrap();

    // A comment the doomed user wrote on the unrelated post, and a
    // bystander comment on the doomed user's post.
    comments
        .create(NewComment {
            body: "by doomed".to_string(),
            post_id: unrelated.id,
            user_id: Some(doomed.id),
        })
        .await
        .unwrap();
    comments
        .create(NewComment {
            body: "by bystander".to_string(),
            post_id: authored.id,
            user_id: Some(bystander.id),
        })
        .await
        .unwrap();

    // The explicit path the delete handler takes: posts by author,
    // comments by author, then the user row.
    assert_eq!(posts.delete_by_user(doomed.id).await.unwrap(), 1);
    comments.delete_by_user(doomed.id).await.unwrap();
    users.delete(doomed.id).await.unwrap();

    assert!(users.find_by_id(doomed.id).await.unwrap().is_none());
    assert_eq!(posts.count().await.unwrap(), 1);
    // The bystander's comment sat on a deleted post, so the schema-level
    // cascade took it; no row references the deleted user anymore.
    assert_eq!(comments.count().await.unwrap(), 0);
    assert_eq!(users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_missing_post_reports_not_found() {
    let conn = setup().await;
    let (_, posts, _) = repos(&conn);

    assert!(posts.find_by_id(999).await.unwrap().is_none());
    let err = posts.delete(999).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let conn = setup().await;
    let (users, posts, comments) = repos(&conn);

    let first = seed_sample_data(users.as_ref(), posts.as_ref(), comments.as_ref())
        .await
        .unwrap();
    assert_eq!(first, SeedOutcome::Seeded);

    let second = seed_sample_data(users.as_ref(), posts.as_ref(), comments.as_ref())
        .await
        .unwrap();
    assert_eq!(second, SeedOutcome::Skipped);

    assert_eq!(users.count().await.unwrap(), 2);
    assert_eq!(posts.count().await.unwrap(), 2);
    assert_eq!(comments.count().await.unwrap(), 1);
}
