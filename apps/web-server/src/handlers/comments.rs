//! Comment handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::NewComment;
use quill_core::error::DomainError;
use quill_core::ports::{BaseRepository, CommentRepository};

use crate::error::AppResult;
use crate::flash::{self, Notice};
use crate::state::AppState;

use super::posts::parse_author;

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// POST /posts/{id}/comment
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<CommentForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "post",
            id,
        })?;
    let detail = format!("/posts/{}", post.id);

    let body = form.body.trim();
    if body.is_empty() {
        return Ok(flash::see_other(
            &detail,
            DomainError::Validation("Comment cannot be empty".to_string()),
        ));
    }

    state
        .comments
        .create(NewComment {
            body: body.to_string(),
            post_id: post.id,
            user_id: parse_author(form.user_id.as_deref()),
        })
        .await?;

    Ok(flash::see_other(&detail, Notice::success("Comment added")))
}
