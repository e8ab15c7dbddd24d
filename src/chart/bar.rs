//! Bar chart of T-scores with band threshold lines

use crate::config::Locale;
use crate::core::classify::{BANDS, Band, classify};
use crate::core::data::ScoreSet;
use crate::survey::intelligences;
use crate::utils::format::format_score_short;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Paragraph};

pub const BAR_WIDTH: f64 = 0.8;
const BAR_FILL_STEPS: usize = 16;
const BAR_COLOR: Color = Color::Blue;
const AXIS_COLOR: Color = Color::DarkGray;
const DASH: f64 = 0.15;
const DASH_GAP: f64 = 0.1;
const Y_TICK_STEP: f64 = 20.0;
/// Text rows kept free above the top of the axis for annotations
const HEADROOM_LINES: f64 = 4.0;
/// Text rows kept free below zero for category keys
const FOOTROOM_LINES: f64 = 3.0;
const LEGEND_WIDTH: u16 = 22;

#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub key: String,
    pub score: f64,
    pub percentile: u8,
    pub band: String,
}

impl BarSpec {
    /// Annotation printed above the bar, top line first
    pub fn annotation(&self) -> [String; 3] {
        [
            format!("T: {}", format_score_short(self.score)),
            format!("PR: {}", self.percentile),
            self.band.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdLine {
    pub value: f64,
    pub label: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartModel {
    pub title: String,
    pub y_label: String,
    pub y_max: f64,
    pub bars: Vec<BarSpec>,
    pub thresholds: Vec<ThresholdLine>,
}

pub fn band_color(band: Band) -> Color {
    match band {
        Band::High => Color::Green,
        Band::SlightlyHigh => Color::LightGreen,
        Band::Average => Color::Rgb(255, 165, 0),
        Band::SlightlyLow => Color::Red,
        Band::Low => Color::Gray,
    }
}

impl BarChartModel {
    pub fn from_scores(scores: &ScoreSet, locale: Locale) -> Self {
        let bars = scores
            .iter()
            .map(|(category, score)| {
                let classification = classify(score);
                BarSpec {
                    key: category.key.to_string(),
                    score,
                    percentile: classification.percentile,
                    band: classification.band.label(locale).to_string(),
                }
            })
            .collect();

        let thresholds = BANDS
            .iter()
            .map(|row| ThresholdLine {
                value: row.threshold,
                label: row.band.label(locale).to_string(),
                color: band_color(row.band),
            })
            .collect();

        Self {
            title: intelligences::TITLE.to_string(),
            y_label: intelligences::Y_AXIS_LABEL.to_string(),
            y_max: scores.range().max,
            bars,
            thresholds,
        }
    }
}

/// Horizontal extent of bar `index`; bars sit on unit slots starting at 0
pub fn bar_span(index: usize) -> (f64, f64) {
    let center = index as f64 + 0.5;
    (center - BAR_WIDTH / 2.0, center + BAR_WIDTH / 2.0)
}

/// Split `[start, end]` into dash segments
pub fn dashed_segments(start: f64, end: f64) -> Vec<(f64, f64)> {
    let mut segments = Vec::new();
    let mut x = start;
    while x < end {
        segments.push((x, (x + DASH).min(end)));
        x += DASH + DASH_GAP;
    }
    segments
}

/// Canvas y bounds leaving room for annotation rows above and key rows below
pub fn y_bounds(y_max: f64, inner_height: u16) -> [f64; 2] {
    let rows = (f64::from(inner_height) - HEADROOM_LINES - FOOTROOM_LINES).max(1.0);
    let line_height = y_max / rows;
    [-FOOTROOM_LINES * line_height, y_max + HEADROOM_LINES * line_height]
}

pub fn render(frame: &mut Frame, area: Rect, model: &BarChartModel, marker: Marker) {
    let [chart_area, side_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(LEGEND_WIDTH)]).areas(area);
    let [legend_area, _] = Layout::vertical([
        Constraint::Length(model.thresholds.len() as u16 + 2),
        Constraint::Min(0),
    ])
    .areas(side_area);

    let block = Block::bordered()
        .title(Line::from(model.title.as_str()).centered())
        .title_bottom(Line::from(model.y_label.as_str()).centered());
    let inner = block.inner(chart_area);

    let x_bounds = [-1.0, model.bars.len() as f64];
    let y_bounds = y_bounds(model.y_max, inner.height);
    let scale = CellScale::new(x_bounds, y_bounds, inner);

    let canvas = Canvas::default()
        .block(block)
        .marker(marker)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| paint_bars(ctx, model, &scale));
    frame.render_widget(canvas, chart_area);

    let legend: Vec<Line> = model
        .thresholds
        .iter()
        .map(|t| {
            Line::from(vec![
                Span::styled("- - ", Style::default().fg(t.color)),
                Span::raw(t.label.clone()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(legend).block(Block::bordered().title("Legend")),
        legend_area,
    );
}

/// Data units covered by one terminal cell, used to place text
struct CellScale {
    x_per_cell: f64,
    y_per_cell: f64,
}

impl CellScale {
    fn new(x_bounds: [f64; 2], y_bounds: [f64; 2], inner: Rect) -> Self {
        Self {
            x_per_cell: (x_bounds[1] - x_bounds[0]) / f64::from(inner.width.max(1)),
            y_per_cell: (y_bounds[1] - y_bounds[0]) / f64::from(inner.height.max(1)),
        }
    }

    fn centered_x(&self, center: f64, text: &str) -> f64 {
        center - Span::raw(text).width() as f64 * self.x_per_cell / 2.0
    }
}

fn paint_bars(ctx: &mut Context, model: &BarChartModel, scale: &CellScale) {
    let x_end = model.bars.len() as f64;

    // axes and ticks
    ctx.draw(&CanvasLine::new(0.0, 0.0, x_end, 0.0, AXIS_COLOR));
    ctx.draw(&CanvasLine::new(0.0, 0.0, 0.0, model.y_max, AXIS_COLOR));
    let mut tick = 0.0;
    while tick <= model.y_max {
        let text = format!("{:>3}", tick);
        let x = -(Span::raw(text.as_str()).width() as f64 + 1.0) * scale.x_per_cell;
        ctx.print(x, tick, Span::styled(text, Style::default().fg(AXIS_COLOR)));
        tick += Y_TICK_STEP;
    }

    for (index, bar) in model.bars.iter().enumerate() {
        let (x0, x1) = bar_span(index);
        for step in 0..=BAR_FILL_STEPS {
            let x = x0 + (x1 - x0) * step as f64 / BAR_FILL_STEPS as f64;
            ctx.draw(&CanvasLine::new(x, 0.0, x, bar.score, BAR_COLOR));
        }
    }

    ctx.layer();
    for threshold in &model.thresholds {
        for (a, b) in dashed_segments(0.0, x_end) {
            ctx.draw(&CanvasLine::new(a, threshold.value, b, threshold.value, threshold.color));
        }
    }

    ctx.layer();
    for (index, bar) in model.bars.iter().enumerate() {
        let center = index as f64 + 0.5;
        let lines = bar.annotation();
        let rows = lines.len();
        for (row, text) in lines.into_iter().enumerate() {
            let y = bar.score + (rows - row) as f64 * scale.y_per_cell;
            let x = scale.centered_x(center, &text);
            ctx.print(x, y, Span::raw(text));
        }

        // alternate rows so long keys on neighbouring bars do not collide
        let key_row = if index % 2 == 0 { 1.0 } else { 2.0 };
        let x = scale.centered_x(center, &bar.key);
        ctx.print(x, -key_row * scale.y_per_cell, Span::raw(bar.key.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::intelligences;

    fn full_scores() -> ScoreSet {
        let survey = intelligences::survey(Locale::En);
        let mut scores = ScoreSet::new(&survey.categories, survey.range);
        for (i, category) in survey.categories.iter().enumerate() {
            scores.insert(category.key, 35.0 + i as f64 * 5.0).unwrap();
        }
        scores
    }

    #[test]
    fn test_model_has_one_bar_per_category() {
        let model = BarChartModel::from_scores(&full_scores(), Locale::En);
        assert_eq!(model.bars.len(), 9);
        assert_eq!(model.bars[0].key, "Linguistic");
        assert_eq!(model.bars[0].band, "Low");
        assert_eq!(model.bars[5].score, 60.0);
        assert_eq!(model.bars[5].percentile, 91);
        assert_eq!(model.y_max, 100.0);
    }

    #[test]
    fn test_four_threshold_lines() {
        let model = BarChartModel::from_scores(&full_scores(), Locale::En);
        let values: Vec<f64> = model.thresholds.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![60.0, 55.0, 45.0, 40.0]);
        let labels: Vec<&str> = model.thresholds.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["High", "Slightly High", "Average", "Slightly Low"]);
        assert_eq!(model.thresholds[0].color, Color::Green);
        assert_eq!(model.thresholds[3].color, Color::Red);
    }

    #[test]
    fn test_annotation_text() {
        let bar = BarSpec {
            key: "Musical".to_string(),
            score: 57.0,
            percentile: 75,
            band: "Slightly High".to_string(),
        };
        assert_eq!(bar.annotation(), ["T: 57.0", "PR: 75", "Slightly High"]);
    }

    #[test]
    fn test_bar_spans_do_not_overlap() {
        let (a0, a1) = bar_span(0);
        let (b0, _) = bar_span(1);
        assert!((a0 - 0.1).abs() < 1e-9);
        assert!((a1 - 0.9).abs() < 1e-9);
        assert!(a1 < b0);
    }

    #[test]
    fn test_dashed_segments_cover_range() {
        let segments = dashed_segments(0.0, 1.0);
        assert_eq!(segments.first().map(|s| s.0), Some(0.0));
        assert!(segments.iter().all(|(a, b)| a < b && *b <= 1.0));
        assert!(segments.windows(2).all(|w| w[0].1 < w[1].0));
    }

    #[test]
    fn test_y_bounds_reserve_text_rows() {
        let [low, high] = y_bounds(100.0, 27);
        assert!(low < 0.0);
        assert!(high > 100.0);
        assert!((high - 100.0 - 20.0).abs() < 1e-9);
        assert!((low + 15.0).abs() < 1e-9);
    }
}
