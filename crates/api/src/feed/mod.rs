pub mod follow;
pub mod group;
pub mod home;
pub mod profile;
