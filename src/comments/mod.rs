//! Comments Module
//!
//! Comments with ratings attached to recipes. Reading is public; posting
//! requires authentication, and the author is always the token subject.

pub mod handlers;

pub use handlers::{list_comments, post_comment, Comment, NewCommentRequest};
