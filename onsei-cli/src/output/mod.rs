//! Output formatting module

pub mod json;

pub use json::{JsonFormatter, StatsReport};
