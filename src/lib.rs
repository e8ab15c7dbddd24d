//! Selfscope - self-assessment questionnaires with terminal charts
//!
//! Two fixed surveys are provided: a multiple intelligences T-score survey
//! rendered as a bar chart with band thresholds, and a RIASEC career
//! interest survey rendered as a radar chart.

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod survey;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    classify::{Band, Classification, classify},
    data::{Category, ScoreRange, ScoreSet, SummaryRow},
    operations::{SummaryFormat, SurveyOperations},
    traits::{ChartRenderer, ScoreSource},
};
pub use survey::{Survey, SurveyKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
