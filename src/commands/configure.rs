use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::output::OutputStyle;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle_config_command(
    config: &Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(config, config_path),
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        None => handle_config_help(),
    }
}

fn handle_show_command(config: &Config, config_path: &Path) -> Result<()> {
    OutputStyle::print_header("⚙️  Selfscope Configuration");

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };
    OutputStyle::print_field_colored("File", &source, OutputStyle::muted);

    println!("{}", OutputStyle::header("General:"));
    OutputStyle::print_field_colored("Color", &config.general.color.to_string(), OutputStyle::info);
    OutputStyle::print_field_colored("Locale", &format!("{:?}", config.general.locale), OutputStyle::info);

    println!("{}", OutputStyle::header("Chart:"));
    OutputStyle::print_field_colored("Enabled", &config.chart.enabled.to_string(), OutputStyle::info);
    OutputStyle::print_field_colored("Marker", &format!("{:?}", config.chart.marker), OutputStyle::info);

    Ok(())
}

fn handle_reset_command(config_path: &Path) -> Result<()> {
    Config::default()
        .save_to(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "✅ {}",
        OutputStyle::success(&format!("Configuration reset: {}", config_path.display()))
    );
    Ok(())
}

fn handle_config_help() -> Result<()> {
    OutputStyle::print_header("⚙️  Configuration Management");
    println!("Available configuration commands:");
    println!("  selfscope config show    - Show current configuration");
    println!("  selfscope config reset   - Write default configuration");
    println!("  selfscope config path    - Print configuration file location");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selfscope").join("config.toml");

        handle_config_command(&Config::default(), &path, Some(ConfigCommands::Reset)).unwrap();

        assert!(path.exists());
        assert_eq!(Config::load_custom(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_show_without_file_does_not_create_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        handle_config_command(&Config::default(), &path, Some(ConfigCommands::Show)).unwrap();

        assert!(!path.exists());
    }
}
