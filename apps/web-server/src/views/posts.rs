//! Post pages: list, forms, and the detail view with comments.

use std::collections::HashMap;

use maud::{Markup, html};

use quill_core::domain::{Comment, Post, User};

use super::layout;
use crate::flash::Notice;

/// Author display name, or a placeholder for unauthored entities.
fn author_name<'a>(authors: &'a HashMap<i32, String>, user_id: Option<i32>) -> &'a str {
    user_id
        .and_then(|id| authors.get(&id))
        .map(String::as_str)
        .unwrap_or("anonymous")
}

/// Author dropdown shared by the post and comment forms. Empty value means
/// unauthored.
fn author_select(users: &[User], selected: Option<i32>) -> Markup {
    html! {
        select name="user_id" {
            option value="" { "(no author)" }
            @for user in users {
                option value=(user.id) selected[selected == Some(user.id)] {
                    (user.username)
                }
            }
        }
    }
}

pub fn list_page(
    notice: Option<Notice>,
    posts: &[Post],
    authors: &HashMap<i32, String>,
) -> Markup {
    layout(
        "Posts",
        notice,
        html! {
            h1 { "Posts" }
            @if posts.is_empty() {
                p class="empty" { "No posts yet." }
            } @else {
                @for post in posts {
                    div class="card" {
                        div class="card-title" {
                            a href={ "/posts/" (post.id) } { (post.title) }
                        }
                        div class="card-meta" {
                            "by " (author_name(authors, post.user_id))
                        }
                    }
                }
            }
            div class="actions" {
                a href="/posts/new" { "New post" }
            }
        },
    )
}

pub fn new_page(notice: Option<Notice>, users: &[User]) -> Markup {
    layout(
        "New post",
        notice,
        html! {
            h1 { "New post" }
            form class="stacked" method="post" action="/posts/new" {
                label for="title" { "Title" }
                input type="text" id="title" name="title" autofocus;
                label for="content" { "Content" }
                textarea id="content" name="content" {}
                label { "Author" }
                (author_select(users, None))
                button type="submit" { "Create post" }
            }
        },
    )
}

pub fn detail_page(
    notice: Option<Notice>,
    post: &Post,
    comments: &[Comment],
    users: &[User],
    authors: &HashMap<i32, String>,
) -> Markup {
    layout(
        &post.title,
        notice,
        html! {
            h1 { (post.title) }
            div class="card-meta" { "by " (author_name(authors, post.user_id)) }
            div class="card-body" { (post.content) }
            div class="actions" {
                a href={ "/posts/" (post.id) "/edit" } { "Edit" }
                form class="inline" method="post" action={ "/posts/" (post.id) "/delete" } {
                    button class="danger" type="submit" { "Delete" }
                }
            }

            h2 { "Comments" }
            @if comments.is_empty() {
                p class="empty" { "No comments yet." }
            } @else {
                @for comment in comments {
                    div class="card" {
                        div class="card-meta" {
                            (author_name(authors, comment.user_id))
                        }
                        div class="card-body" { (comment.body) }
                    }
                }
            }

            h2 { "Add a comment" }
            form class="stacked" method="post" action={ "/posts/" (post.id) "/comment" } {
                label for="body" { "Comment" }
                textarea id="body" name="body" {}
                label { "Author" }
                (author_select(users, None))
                button type="submit" { "Add comment" }
            }
        },
    )
}

pub fn edit_page(notice: Option<Notice>, post: &Post, users: &[User]) -> Markup {
    layout(
        "Edit post",
        notice,
        html! {
            h1 { "Edit post" }
            form class="stacked" method="post" action={ "/posts/" (post.id) "/edit" } {
                label for="title" { "Title" }
                input type="text" id="title" name="title" value=(post.title);
                label for="content" { "Content" }
                textarea id="content" name="content" { (post.content) }
                label { "Author" }
                (author_select(users, post.user_id))
                button type="submit" { "Save changes" }
            }
            div class="actions" {
                a href={ "/posts/" (post.id) } { "Back to post" }
            }
        },
    )
}
