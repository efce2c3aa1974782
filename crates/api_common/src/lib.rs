pub mod cache;
pub mod comment;
pub mod context;
pub mod group;
pub mod post;
pub mod user;
pub mod utils;

pub use zhurnal_db_views;
