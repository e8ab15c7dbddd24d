//! Seams between the survey flow and the outside world
//!
//! Input comes from a [`ScoreSource`], charts go to a [`ChartRenderer`];
//! the console and terminal implementations live in `utils::interactive`
//! and `chart`, tests substitute scripted ones.

use crate::chart::ChartModel;
use crate::core::data::Category;
use crate::survey::Survey;
use crate::utils::error::AppResult;

/// Supplies one validated score per category
pub trait ScoreSource {
    /// Ask for `category` until a value inside the survey's range is given.
    ///
    /// Only fails when the source itself fails or is exhausted.
    fn request_score(&mut self, category: &Category, survey: &Survey) -> AppResult<f64>;
}

/// Displays a finished chart, blocking until the user dismisses it
pub trait ChartRenderer {
    fn render(&mut self, chart: &ChartModel) -> AppResult<()>;
}
