//! HTTP handlers and route configuration.

mod comments;
mod home;
mod posts;
mod seed;
mod users;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

use crate::views;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::index))
        .route("/analytics", web::get().to(home::analytics))
        .route("/_seed_sample_data", web::get().to(seed::seed_sample_data))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list))
                .route("/new", web::get().to(users::new_form))
                .route("/new", web::post().to(users::create))
                .route("/{id}/delete", web::post().to(users::delete)),
        )
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list))
                .route("/new", web::get().to(posts::new_form))
                .route("/new", web::post().to(posts::create))
                .route("/{id}", web::get().to(posts::details))
                .route("/{id}/edit", web::get().to(posts::edit_form))
                .route("/{id}/edit", web::post().to(posts::update))
                .route("/{id}/delete", web::post().to(posts::delete))
                .route("/{id}/comment", web::post().to(comments::create)),
        );
}

/// Fallback for unmatched routes: the rendered not-found page.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(views::not_found_page().into_string())
}
