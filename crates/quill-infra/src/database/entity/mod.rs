//! SeaORM entity definitions for the blog schema.

pub mod comment;
pub mod post;
pub mod user;
