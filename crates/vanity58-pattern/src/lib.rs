//! vanity58 Pattern Matching
//!
//! Regex patterns over base58 address strings, compiled once per search.

mod difficulty;
mod matcher;

pub use difficulty::estimate_difficulty;
pub use matcher::{CompiledPattern, PatternError};
