//! Summary pages: home and analytics.

use actix_web::{HttpRequest, HttpResponse, web};

use quill_core::ports::{CommentRepository, PostRepository, UserRepository};

use crate::error::AppResult;
use crate::flash;
use crate::state::AppState;
use crate::views::home::{self, Counts};

async fn counts(state: &AppState) -> AppResult<Counts> {
    Ok(Counts {
        posts: state.posts.count().await?,
        users: state.users.count().await?,
        comments: state.comments.count().await?,
    })
}

/// GET /
pub async fn index(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let counts = counts(&state).await?;
    Ok(flash::render_page(&req, |notice| {
        home::index_page(notice, counts)
    }))
}

/// GET /analytics - same counts, different page.
pub async fn analytics(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let counts = counts(&state).await?;
    Ok(flash::render_page(&req, |notice| {
        home::analytics_page(notice, counts)
    }))
}
