pub mod cache;
pub mod feed;
pub mod follow;

#[cfg(test)]
pub(crate) mod test_utils;
