//! [`crate::UrlMatcher`] implementations that ship with the crate.

mod pattern;

pub use pattern::{PatternMatcher, UrlRule};
