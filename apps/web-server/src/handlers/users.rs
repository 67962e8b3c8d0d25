//! User handlers: listing, creation, deletion.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use quill_core::error::DomainError;
use quill_core::ports::{BaseRepository, CommentRepository, PostRepository, UserRepository};

use crate::error::AppResult;
use crate::flash::{self, Notice};
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct NewUserForm {
    #[serde(default)]
    pub username: String,
}

/// GET /users
pub async fn list(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    Ok(flash::render_page(&req, |notice| {
        views::users::list_page(notice, &users)
    }))
}

/// GET /users/new
pub async fn new_form(req: HttpRequest) -> HttpResponse {
    flash::render_page(&req, views::users::new_page)
}

/// POST /users/new
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<NewUserForm>,
) -> AppResult<HttpResponse> {
    let username = form.username.trim();

    if username.is_empty() {
        return Ok(flash::see_other(
            "/users/new",
            DomainError::Validation("Username is required".to_string()),
        ));
    }
    if state.users.find_by_username(username).await?.is_some() {
        return Ok(flash::see_other(
            "/users/new",
            DomainError::Duplicate("Username already exists".to_string()),
        ));
    }

    let user = state.users.create(username).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok(flash::see_other(
        "/users",
        Notice::success(format!("Created user {}", user.username)),
    ))
}

/// POST /users/{id}/delete
///
/// Explicit cascade: posts authored by the user, comments authored by the
/// user, then the user row. Comments written by *other* users on this
/// user's posts are not touched here; the schema-level cascade on the post
/// delete is what removes them.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "user",
            id,
        })?;

    let posts_removed = state.posts.delete_by_user(user.id).await?;
    let comments_removed = state.comments.delete_by_user(user.id).await?;
    state.users.delete(user.id).await?;

    tracing::info!(
        user_id = user.id,
        posts_removed,
        comments_removed,
        "User deleted"
    );

    Ok(flash::see_other("/users", Notice::success("User deleted")))
}
