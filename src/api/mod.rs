//! Remote Data
//!
//! Bindings to the site's HTTP endpoints, organized by domain.

mod posts;

pub use posts::*;
