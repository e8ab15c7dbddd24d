//! Core survey logic
//!
//! Data model, T-score classification, the seams to console and chart, and
//! the collect/summarize/chart flow built on top of them.

pub mod classify;
pub mod data;
pub mod operations;
pub mod traits;
