pub mod comment_view;
pub mod post_view;
pub mod structs;
pub mod user_view;
