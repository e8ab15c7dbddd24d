//! Radar (polar polygon) chart of interest ratings

use crate::core::data::ScoreSet;
use crate::survey::career;
use crate::utils::format::format_score_short;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use std::f64::consts::TAU;

/// Annotations sit slightly outside their vertex
pub const ANNOTATION_OFFSET: f64 = 1.1;
const LABEL_RADIUS_FACTOR: f64 = 1.18;
const BOUNDS_FACTOR: f64 = 1.3;
const RING_SEGMENTS: usize = 72;
const FILL_STEPS: usize = 24;
const GRID_COLOR: Color = Color::DarkGray;
const FILL_COLOR: Color = Color::Rgb(60, 80, 160);
const OUTLINE_COLOR: Color = Color::LightBlue;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub angle: f64,
    pub radius: f64,
}

impl PolarPoint {
    pub fn to_cartesian(self) -> (f64, f64) {
        (self.radius * self.angle.cos(), self.radius * self.angle.sin())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarChartModel {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub r_max: f64,
    pub ticks: Vec<f64>,
}

impl RadarChartModel {
    pub fn from_scores(scores: &ScoreSet) -> Self {
        let r_max = scores.range().max;
        Self {
            title: career::TITLE.to_string(),
            labels: scores.keys().iter().map(|k| k.to_string()).collect(),
            values: scores.values(),
            r_max,
            ticks: (1..=r_max as u32).map(f64::from).collect(),
        }
    }

    pub fn polygon(&self) -> Vec<PolarPoint> {
        closed_polygon(&self.values)
    }
}

/// `n` evenly spaced angles starting at 0, counter-clockwise, endpoint excluded
pub fn angles(n: usize) -> Vec<f64> {
    (0..n).map(|i| TAU * i as f64 / n as f64).collect()
}

/// Polygon vertices with the first value and angle repeated at the end
pub fn closed_polygon(values: &[f64]) -> Vec<PolarPoint> {
    let mut points: Vec<PolarPoint> = angles(values.len())
        .into_iter()
        .zip(values.iter())
        .map(|(angle, &radius)| PolarPoint { angle, radius })
        .collect();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

/// Canvas bounds that keep circles round given terminal cells are about
/// twice as tall as they are wide
pub fn canvas_bounds(radius: f64, inner_width: u16, inner_height: u16) -> ([f64; 2], [f64; 2]) {
    let extent = radius * BOUNDS_FACTOR;
    let aspect = f64::from(inner_width.max(1)) / (2.0 * f64::from(inner_height.max(1)));
    let (half_x, half_y) = if aspect >= 1.0 {
        (extent * aspect, extent)
    } else {
        (extent, extent / aspect)
    };
    ([-half_x, half_x], [-half_y, half_y])
}

pub fn render(frame: &mut Frame, area: Rect, model: &RadarChartModel, marker: Marker) {
    let block = Block::bordered().title(Line::from(model.title.as_str()).centered());
    let inner = block.inner(area);
    let (x_bounds, y_bounds) = canvas_bounds(model.r_max, inner.width, inner.height);
    let x_per_cell = (x_bounds[1] - x_bounds[0]) / f64::from(inner.width.max(1));

    let canvas = Canvas::default()
        .block(block)
        .marker(marker)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| paint_radar(ctx, model, x_per_cell));
    frame.render_widget(canvas, area);
}

fn paint_radar(ctx: &mut Context, model: &RadarChartModel, x_per_cell: f64) {
    let spokes = angles(model.values.len());

    for &tick in &model.ticks {
        for i in 0..RING_SEGMENTS {
            let a = TAU * i as f64 / RING_SEGMENTS as f64;
            let b = TAU * (i + 1) as f64 / RING_SEGMENTS as f64;
            ctx.draw(&CanvasLine::new(
                tick * a.cos(),
                tick * a.sin(),
                tick * b.cos(),
                tick * b.sin(),
                GRID_COLOR,
            ));
        }
    }
    for &angle in &spokes {
        let (x, y) = PolarPoint { angle, radius: model.r_max }.to_cartesian();
        ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, GRID_COLOR));
    }

    ctx.layer();
    let vertices: Vec<(f64, f64)> = model
        .polygon()
        .into_iter()
        .map(PolarPoint::to_cartesian)
        .collect();
    for edge in vertices.windows(2) {
        let (x0, y0) = edge[0];
        let (x1, y1) = edge[1];
        for step in 0..=FILL_STEPS {
            let t = step as f64 / FILL_STEPS as f64;
            ctx.draw(&CanvasLine::new(
                0.0,
                0.0,
                x0 + (x1 - x0) * t,
                y0 + (y1 - y0) * t,
                FILL_COLOR,
            ));
        }
    }

    ctx.layer();
    for edge in vertices.windows(2) {
        ctx.draw(&CanvasLine::new(edge[0].0, edge[0].1, edge[1].0, edge[1].1, OUTLINE_COLOR));
    }

    ctx.layer();
    // tick labels along the gap between the first two spokes
    let tick_angle = spokes.get(1).map_or(0.0, |a| a / 2.0);
    for &tick in &model.ticks {
        let (x, y) = PolarPoint { angle: tick_angle, radius: tick }.to_cartesian();
        ctx.print(
            x,
            y,
            Span::styled(format!("{}", tick), Style::default().fg(GRID_COLOR)),
        );
    }

    for ((&angle, &value), label) in spokes.iter().zip(&model.values).zip(&model.labels) {
        let text = format_score_short(value);
        let (x, y) = PolarPoint {
            angle,
            radius: value * ANNOTATION_OFFSET,
        }
        .to_cartesian();
        ctx.print(centered(x, &text, x_per_cell), y, Span::raw(text));

        let (x, y) = PolarPoint {
            angle,
            radius: model.r_max * LABEL_RADIUS_FACTOR,
        }
        .to_cartesian();
        ctx.print(
            centered(x, label, x_per_cell),
            y,
            Span::styled(label.clone(), Style::default().fg(Color::White)),
        );
    }
}

fn centered(x: f64, text: &str, x_per_cell: f64) -> f64 {
    x - Span::raw(text).width() as f64 * x_per_cell / 2.0
}
