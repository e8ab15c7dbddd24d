//! Full-screen terminal charts drawn with `ratatui`.
//!
//! [`TerminalChartRenderer`] takes over the terminal (raw mode, alternate
//! screen), draws the chart and blocks until the user closes it with `q`,
//! `Esc` or `Enter`. The terminal is restored when the session is dropped,
//! including on error paths.

pub mod bar;
pub mod radar;

use crate::core::traits::ChartRenderer;
use crate::utils::error::{AppError, AppResult};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;

pub use bar::BarChartModel;
pub use radar::RadarChartModel;

const CLOSE_HINT: &str = "Press q, Esc or Enter to close";

#[derive(Debug, Clone, PartialEq)]
pub enum ChartModel {
    Bars(BarChartModel),
    Radar(RadarChartModel),
}

impl ChartModel {
    pub fn title(&self) -> &str {
        match self {
            ChartModel::Bars(model) => &model.title,
            ChartModel::Radar(model) => &model.title,
        }
    }
}

/// Draw a chart into the whole frame with a one-line close hint underneath
pub fn draw_chart(frame: &mut Frame, model: &ChartModel, marker: Marker) {
    let [chart_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    match model {
        ChartModel::Bars(bars) => bar::render(frame, chart_area, bars, marker),
        ChartModel::Radar(radar) => radar::render(frame, chart_area, radar, marker),
    }

    frame.render_widget(
        Paragraph::new(Line::from(CLOSE_HINT).centered()).style(Style::default().dim()),
        hint_area,
    );
}

fn chart_error(err: io::Error) -> AppError {
    AppError::Chart(err.to_string())
}

/// Owns the terminal while a chart is on screen
struct ChartSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl ChartSession {
    fn new() -> AppResult<Self> {
        enable_raw_mode().map_err(chart_error)?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(chart_error(err));
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(chart_error(err))
            }
        }
    }

    fn show(&mut self, model: &ChartModel, marker: Marker) -> AppResult<()> {
        loop {
            self.terminal
                .draw(|frame| draw_chart(frame, model, marker))
                .map_err(chart_error)?;

            match event::read().map_err(chart_error)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => break,
                    _ => {}
                },
                _ => {}
            }
        }
        Ok(())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for ChartSession {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Shows charts in the current terminal
pub struct TerminalChartRenderer {
    marker: Marker,
}

impl TerminalChartRenderer {
    pub fn new(marker: Marker) -> Self {
        Self { marker }
    }
}

impl ChartRenderer for TerminalChartRenderer {
    fn render(&mut self, chart: &ChartModel) -> AppResult<()> {
        tracing::debug!(title = chart.title(), "opening chart");
        let mut session = ChartSession::new()?;
        session.show(chart, self.marker)?;
        tracing::debug!("chart closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use crate::core::data::ScoreSet;
    use crate::survey::{Survey, SurveyKind};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn filled(kind: SurveyKind, value: f64) -> ScoreSet {
        let survey = Survey::build(kind, Locale::En);
        let mut set = ScoreSet::new(&survey.categories, survey.range);
        for category in &survey.categories {
            set.insert(category.key, value).unwrap();
        }
        set
    }

    fn draw(model: &ChartModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|frame| draw_chart(frame, model, Marker::Braille))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_bar_chart_draws_title_and_legend() {
        let model = ChartModel::Bars(BarChartModel::from_scores(
            &filled(SurveyKind::Intelligences, 50.0),
            Locale::En,
        ));
        let text = draw(&model);
        assert!(text.contains("Multiple Intelligences Chart"));
        assert!(text.contains("Legend"));
        assert!(text.contains("Slightly High"));
        assert!(text.contains(CLOSE_HINT));
    }

    #[test]
    fn test_radar_chart_draws_title() {
        let model = ChartModel::Radar(RadarChartModel::from_scores(&filled(
            SurveyKind::Career,
            3.0,
        )));
        let text = draw(&model);
        assert!(text.contains("Career Interest Inventory Radar Chart"));
        assert!(text.contains(CLOSE_HINT));
    }
}
