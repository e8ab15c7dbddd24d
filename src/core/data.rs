//! Core data structures for the questionnaires
//!
//! Categories are fixed per survey, scores live in a [`ScoreSet`] for the
//! duration of one run and are never persisted.

use crate::utils::error::{AppError, AppResult};
use crate::utils::format::format_score_echo;
use serde::Serialize;
use thiserror::Error;

/// A fixed survey category: short key plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
}

impl Category {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }

    /// Text shown when asking for this category's score
    pub fn prompt(&self) -> String {
        format!("{} ({}): ", self.label, self.key)
    }
}

/// Why a line of user input was not accepted as a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not a number")]
    NotANumber,
    #[error("out of range")]
    OutOfRange,
}

/// Closed interval `[min, max]` a score must fall into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    /// T-scores of the multiple intelligences survey
    pub const T_SCORE: ScoreRange = ScoreRange { min: 0.0, max: 100.0 };
    /// Interest ratings of the RIASEC survey
    pub const INTEREST: ScoreRange = ScoreRange { min: 0.0, max: 6.0 };

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Parse one line of input into an accepted score
    pub fn parse(&self, raw: &str) -> Result<f64, Rejection> {
        let value: f64 = normalize_number(raw)
            .ok_or(Rejection::NotANumber)?
            .parse()
            .map_err(|_| Rejection::NotANumber)?;
        if self.contains(value) {
            Ok(value)
        } else {
            Err(Rejection::OutOfRange)
        }
    }
}

/// Fold full-width digits and signs (IME input) to ASCII and drop `_`
/// separators that sit between two digits. `None` for a misplaced `_`.
fn normalize_number(raw: &str) -> Option<String> {
    let chars: Vec<char> = raw.trim().chars().map(fold_full_width).collect();
    let mut number = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            number.push(c);
            continue;
        }
        let between_digits = i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
        if !between_digits {
            return None;
        }
    }
    Some(number)
}

fn fold_full_width(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' | '\u{FF0B}' | '\u{FF0D}' | '\u{FF0E}' => {
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        _ => c,
    }
}

/// Validated scores keyed by category, kept in category order
#[derive(Debug, Clone)]
pub struct ScoreSet {
    categories: Vec<Category>,
    range: ScoreRange,
    values: Vec<Option<f64>>,
}

impl ScoreSet {
    pub fn new(categories: &[Category], range: ScoreRange) -> Self {
        Self {
            categories: categories.to_vec(),
            range,
            values: vec![None; categories.len()],
        }
    }

    /// Record a score; unknown keys and out-of-range values are refused
    pub fn insert(&mut self, key: &str, score: f64) -> AppResult<()> {
        if !self.range.contains(score) {
            return Err(AppError::System(format!(
                "score {} for '{}' is outside [{}, {}]",
                score, key, self.range.min, self.range.max
            )));
        }
        let index = self
            .categories
            .iter()
            .position(|c| c.key == key)
            .ok_or_else(|| AppError::System(format!("unknown category '{}'", key)))?;
        self.values[index] = Some(score);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.categories
            .iter()
            .position(|c| c.key == key)
            .and_then(|i| self.values[i])
    }

    /// Recorded entries in category order
    pub fn iter(&self) -> impl Iterator<Item = (&Category, f64)> {
        self.categories
            .iter()
            .zip(self.values.iter())
            .filter_map(|(c, v)| v.map(|v| (c, v)))
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.iter().map(|(c, _)| c.key).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.iter().map(|(_, v)| v).collect()
    }

    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    pub fn range(&self) -> ScoreRange {
        self.range
    }
}

/// One line of the printed or serialized result summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub key: String,
    pub label: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<u8>,
}

impl SummaryRow {
    pub fn echoed_score(&self) -> String {
        format_score_echo(self.score)
    }
}
