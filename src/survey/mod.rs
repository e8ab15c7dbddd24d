//! Fixed survey definitions: categories, valid range and user-facing text

pub mod career;
pub mod intelligences;

use crate::config::Locale;
use crate::core::data::{Category, ScoreRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyKind {
    /// Multiple intelligences T-scores
    Intelligences,
    /// RIASEC career interest ratings
    Career,
}

/// Text shown to the user during a run
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub welcome: &'static str,
    pub instructions: &'static str,
    pub invalid_number: &'static str,
    pub out_of_range: &'static str,
    pub summary_header: &'static str,
}

#[derive(Debug, Clone)]
pub struct Survey {
    pub kind: SurveyKind,
    pub locale: Locale,
    pub categories: Vec<Category>,
    pub range: ScoreRange,
    pub messages: Messages,
}

impl Survey {
    pub fn build(kind: SurveyKind, locale: Locale) -> Self {
        match kind {
            SurveyKind::Intelligences => intelligences::survey(locale),
            SurveyKind::Career => career::survey(locale),
        }
    }
}
