//! Domain entities - the core business objects.

mod comment;
mod post;
mod user;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post};
pub use user::User;
