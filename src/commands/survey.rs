use crate::chart::TerminalChartRenderer;
use crate::cli::RunArgs;
use crate::config::Config;
use crate::core::operations::{SummaryFormat, SurveyOperations};
use crate::survey::{Survey, SurveyKind};
use crate::utils::interactive::{ConsolePrompter, select_survey};
use crate::utils::output::OutputStyle;
use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Write};

pub fn handle_survey_command(
    config: &Config,
    kind: Option<SurveyKind>,
    args: &RunArgs,
) -> Result<()> {
    let locale = config.general.locale;
    let mut input = io::stdin().lock();

    // keep stdout clean for the JSON document
    let mut console: Box<dyn Write> = match args.format {
        SummaryFormat::Text => Box::new(io::stdout()),
        SummaryFormat::Json => Box::new(io::stderr()),
    };

    let kind = match kind {
        Some(kind) => kind,
        None => select_survey(&mut input, &mut console, locale)?,
    };
    let survey = Survey::build(kind, locale);
    tracing::debug!(?kind, ?locale, "starting survey");

    writeln!(console, "{}", OutputStyle::title(survey.messages.welcome))?;
    writeln!(console, "{}", OutputStyle::muted(survey.messages.instructions))?;

    let operations = SurveyOperations::new(survey);
    let mut prompter = ConsolePrompter::new(input, console);

    let show_chart = should_show_chart(
        config.chart.enabled,
        args.no_chart,
        args.format,
        io::stdout().is_terminal(),
    );
    let mut renderer = TerminalChartRenderer::new(config.chart.marker.symbol());
    let renderer = show_chart.then_some(&mut renderer);

    let scores = operations
        .run(&mut prompter, renderer, args.format, &mut io::stdout())
        .context("Survey did not complete")?;

    tracing::info!(answered = scores.len(), chart = show_chart, "survey finished");
    Ok(())
}

/// The chart needs stdout to be an interactive terminal and is skipped when
/// the JSON document is going there.
pub fn should_show_chart(
    chart_enabled: bool,
    no_chart: bool,
    format: SummaryFormat,
    stdout_is_terminal: bool,
) -> bool {
    chart_enabled && !no_chart && format == SummaryFormat::Text && stdout_is_terminal
}
