use crate::commands::{configure, survey};
use crate::config::Config;
use crate::core::operations::SummaryFormat;
use crate::survey::SurveyKind;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "selfscope")]
#[command(about = "Self-assessment questionnaires with terminal charts")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    pub debug: bool,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    #[arg(long, global = true, help = "Print the summary only, skip the chart")]
    pub no_chart: bool,

    #[arg(short, long, global = true, value_enum, default_value_t = SummaryFormat::Text)]
    pub format: SummaryFormat,
}

impl Cli {
    pub fn execute(self, config: Config) -> Result<()> {
        let config_path = self.config_path();
        match self.command {
            Some(Commands::Mi) => {
                survey::handle_survey_command(&config, Some(SurveyKind::Intelligences), &self.run)
            }
            Some(Commands::Riasec) => {
                survey::handle_survey_command(&config, Some(SurveyKind::Career), &self.run)
            }
            Some(Commands::Config(args)) => {
                configure::handle_config_command(&config, &config_path, args.command)
            }
            None => survey::handle_survey_command(&config, None, &self.run),
        }
    }

    /// Config file the run reads from (`--config` or the default location)
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Multiple intelligences T-score survey (bar chart)
    Mi,

    /// RIASEC career interest survey (radar chart)
    Riasec,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Write the default configuration file
    Reset,

    /// Print the configuration file location
    Path,
}
