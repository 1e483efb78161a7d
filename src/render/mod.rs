//! Rendering module for schema output and statistics.

mod json;
mod preview;
mod stats;

pub use json::{to_json, JsonFormat};
pub use preview::Preview;
pub use stats::FieldStatistics;
