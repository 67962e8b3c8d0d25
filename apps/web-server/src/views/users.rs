//! User pages: list and creation form.

use maud::{Markup, html};

use quill_core::domain::User;

use super::layout;
use crate::flash::Notice;

pub fn list_page(notice: Option<Notice>, users: &[User]) -> Markup {
    layout(
        "Users",
        notice,
        html! {
            h1 { "Users" }
            @if users.is_empty() {
                p class="empty" { "No users yet." }
            } @else {
                ul class="plain" {
                    @for user in users {
                        li {
                            span { (user.username) }
                            form class="inline" method="post"
                                action={ "/users/" (user.id) "/delete" } {
                                button class="danger" type="submit" { "Delete" }
                            }
                        }
                    }
                }
            }
            div class="actions" {
                a href="/users/new" { "New user" }
            }
        },
    )
}

pub fn new_page(notice: Option<Notice>) -> Markup {
    layout(
        "New user",
        notice,
        html! {
            h1 { "New user" }
            form class="stacked" method="post" action="/users/new" {
                label for="username" { "Username" }
                input type="text" id="username" name="username" autofocus;
                button type="submit" { "Create user" }
            }
        },
    )
}
