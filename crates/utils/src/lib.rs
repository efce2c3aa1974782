#[macro_use]
extern crate smart_default;

pub mod claims;
pub mod error;
pub mod settings;
pub mod validation;

use std::time::Duration;

/// How long a cached page of the home feed stays valid.
pub const CACHE_DURATION_FEED: Duration = Duration::from_secs(20);
