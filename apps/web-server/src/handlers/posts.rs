//! Post handlers: listing, forms, detail view, deletion.

use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::{NewPost, Post, User};
use quill_core::error::DomainError;
use quill_core::ports::{BaseRepository, CommentRepository, PostRepository, UserRepository};

use crate::error::AppResult;
use crate::flash::{self, Notice};
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Optional author from a form value. Empty and non-numeric values mean
/// "unauthored"; numeric ids pass through without an existence check.
pub(super) fn parse_author(raw: Option<&str>) -> Option<i32> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

/// id -> username lookup for author display.
pub(super) fn author_names(users: &[User]) -> HashMap<i32, String> {
    users
        .iter()
        .map(|u| (u.id, u.username.clone()))
        .collect()
}

/// Fetch a post or fail with the not-found page.
async fn fetch_post(state: &AppState, id: i32) -> AppResult<Post> {
    Ok(state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "post",
            id,
        })?)
}

/// GET /posts
pub async fn list(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let users = state.users.list().await?;
    let authors = author_names(&users);

    Ok(flash::render_page(&req, |notice| {
        views::posts::list_page(notice, &posts, &authors)
    }))
}

/// GET /posts/new
pub async fn new_form(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    Ok(flash::render_page(&req, |notice| {
        views::posts::new_page(notice, &users)
    }))
}

/// POST /posts/new
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let title = form.title.trim();
    let content = form.content.trim();

    if title.is_empty() || content.is_empty() {
        return Ok(flash::see_other(
            "/posts/new",
            DomainError::Validation("Title and content are required".to_string()),
        ));
    }

    let post = state
        .posts
        .create(NewPost {
            title: title.to_string(),
            content: content.to_string(),
            user_id: parse_author(form.user_id.as_deref()),
        })
        .await?;
    tracing::info!(post_id = post.id, "Post created");

    Ok(flash::see_other("/posts", Notice::success("Post created")))
}

/// GET /posts/{id}
pub async fn details(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = fetch_post(&state, path.into_inner()).await?;
    let comments = state.comments.find_by_post(post.id).await?;
    let users = state.users.list().await?;
    let authors = author_names(&users);

    Ok(flash::render_page(&req, |notice| {
        views::posts::detail_page(notice, &post, &comments, &users, &authors)
    }))
}

/// GET /posts/{id}/edit
pub async fn edit_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = fetch_post(&state, path.into_inner()).await?;
    let users = state.users.list().await?;

    Ok(flash::render_page(&req, |notice| {
        views::posts::edit_page(notice, &post, &users)
    }))
}

/// POST /posts/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let mut post = fetch_post(&state, path.into_inner()).await?;

    let title = form.title.trim();
    let content = form.content.trim();
    if title.is_empty() || content.is_empty() {
        return Ok(flash::see_other(
            &format!("/posts/{}/edit", post.id),
            DomainError::Validation("Title and content are required".to_string()),
        ));
    }

    post.title = title.to_string();
    post.content = content.to_string();
    post.user_id = parse_author(form.user_id.as_deref());
    let post = state.posts.save(post).await?;

    Ok(flash::see_other(
        &format!("/posts/{}", post.id),
        Notice::success("Post updated"),
    ))
}

/// POST /posts/{id}/delete
///
/// Explicit cascade: the post's comments, then the post.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = fetch_post(&state, path.into_inner()).await?;

    let comments_removed = state.comments.delete_by_post(post.id).await?;
    state.posts.delete(post.id).await?;
    tracing::info!(post_id = post.id, comments_removed, "Post deleted");

    Ok(flash::see_other("/posts", Notice::success("Post deleted")))
}
