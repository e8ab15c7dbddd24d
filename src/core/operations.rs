//! The survey flow: collect, summarize, chart
//!
//! [`SurveyOperations`] is generic over its input source, chart renderer
//! and output writer so the whole run can be driven from tests.

use crate::chart::{BarChartModel, ChartModel, RadarChartModel};
use crate::core::data::{ScoreSet, SummaryRow};
use crate::core::traits::{ChartRenderer, ScoreSource};
use crate::survey::{Survey, SurveyKind, career, intelligences};
use crate::utils::error::{AppError, AppResult};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    survey: &'a str,
    scores: &'a [SummaryRow],
}

pub struct SurveyOperations {
    survey: Survey,
}

impl SurveyOperations {
    pub fn new(survey: Survey) -> Self {
        Self { survey }
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    /// Ask for every category in order; the result is always complete
    pub fn collect_scores<S: ScoreSource>(&self, source: &mut S) -> AppResult<ScoreSet> {
        let mut scores = ScoreSet::new(&self.survey.categories, self.survey.range);
        for category in &self.survey.categories {
            let score = source.request_score(category, &self.survey)?;
            scores.insert(category.key, score)?;
        }
        tracing::debug!(count = scores.len(), "all scores collected");
        Ok(scores)
    }

    pub fn summarize(&self, scores: &ScoreSet) -> Vec<SummaryRow> {
        let locale = self.survey.locale;
        scores
            .iter()
            .map(|(category, score)| match self.survey.kind {
                SurveyKind::Intelligences => intelligences::summary_row(category, score, locale),
                SurveyKind::Career => career::summary_row(category, score),
            })
            .collect()
    }

    pub fn write_summary<W: Write>(
        &self,
        scores: &ScoreSet,
        format: SummaryFormat,
        out: &mut W,
    ) -> AppResult<()> {
        let rows = self.summarize(scores);
        match format {
            SummaryFormat::Text => {
                writeln!(out)?;
                writeln!(out, "{}", self.survey.messages.summary_header)?;
                for row in &rows {
                    let line = match self.survey.kind {
                        SurveyKind::Intelligences => {
                            intelligences::summary_line(row, self.survey.locale)
                        }
                        SurveyKind::Career => career::summary_line(row, self.survey.locale),
                    };
                    writeln!(out, "{}", line)?;
                }
            }
            SummaryFormat::Json => {
                let report = SummaryReport {
                    survey: self.kind_name(),
                    scores: &rows,
                };
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| AppError::System(format!("Failed to serialize summary: {}", e)))?;
                writeln!(out, "{}", json)?;
            }
        }
        Ok(())
    }

    pub fn chart_model(&self, scores: &ScoreSet) -> ChartModel {
        match self.survey.kind {
            SurveyKind::Intelligences => {
                ChartModel::Bars(BarChartModel::from_scores(scores, self.survey.locale))
            }
            SurveyKind::Career => ChartModel::Radar(RadarChartModel::from_scores(scores)),
        }
    }

    /// collect -> summary -> chart. Passing no renderer skips the chart.
    pub fn run<S, C, W>(
        &self,
        source: &mut S,
        renderer: Option<&mut C>,
        format: SummaryFormat,
        out: &mut W,
    ) -> AppResult<ScoreSet>
    where
        S: ScoreSource,
        C: ChartRenderer + ?Sized,
        W: Write,
    {
        let scores = self.collect_scores(source)?;
        self.write_summary(&scores, format, out)?;
        out.flush()?;

        if let Some(renderer) = renderer {
            renderer.render(&self.chart_model(&scores))?;
        }
        Ok(scores)
    }

    fn kind_name(&self) -> &'static str {
        match self.survey.kind {
            SurveyKind::Intelligences => "intelligences",
            SurveyKind::Career => "riasec",
        }
    }
}
