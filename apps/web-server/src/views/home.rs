//! Home and analytics pages - both render the same counts.

use maud::{Markup, html};

use super::layout;
use crate::flash::Notice;

/// Row counts shown on the home and analytics pages.
#[derive(Debug, Clone, Copy)]
pub struct Counts {
    pub posts: u64,
    pub users: u64,
    pub comments: u64,
}

fn stats(counts: Counts) -> Markup {
    html! {
        div class="stats" {
            div class="stat" {
                div class="stat-value" { (counts.posts) }
                div class="stat-label" { "Posts" }
            }
            div class="stat" {
                div class="stat-value" { (counts.users) }
                div class="stat-label" { "Users" }
            }
            div class="stat" {
                div class="stat-value" { (counts.comments) }
                div class="stat-label" { "Comments" }
            }
        }
    }
}

pub fn index_page(notice: Option<Notice>, counts: Counts) -> Markup {
    layout(
        "Home",
        notice,
        html! {
            h1 { "Quill" }
            p { "A minimal blog. Browse the " a href="/posts" { "posts" }
                " or the " a href="/users" { "users" } "." }
            h2 { "At a glance" }
            (stats(counts))
        },
    )
}

pub fn analytics_page(notice: Option<Notice>, counts: Counts) -> Markup {
    layout(
        "Analytics",
        notice,
        html! {
            h1 { "Analytics" }
            (stats(counts))
            p class="empty" { "Counts refresh on every page load." }
        },
    )
}
