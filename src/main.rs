use clap::Parser;

use selfscope::cli::Cli;
use selfscope::config::Config;
use selfscope::utils::error::{AppError, report_error};
use selfscope::utils::logging::init_logging;
use selfscope::utils::output::OutputStyle;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        match err.downcast_ref::<AppError>() {
            Some(app_err) => report_error(app_err),
            None => eprintln!("❌ {}", OutputStyle::error(&format!("{:#}", err))),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_custom(&cli.config_path())?;
    if !config.general.color {
        OutputStyle::disable_colors();
    }
    cli.execute(config)
}
