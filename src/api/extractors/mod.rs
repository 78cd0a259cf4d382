//! Custom request extractors.

mod json;

pub use json::AppJson;
