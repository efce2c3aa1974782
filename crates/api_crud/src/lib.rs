pub mod comment;
pub mod group;
pub mod post;
pub mod user;

#[cfg(test)]
pub(crate) mod test_utils;
