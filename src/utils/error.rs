use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before all answers were collected")]
    InputClosed,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("System error: {0}")]
    System(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::InputClosed => {
            eprintln!("⏹️  {}", OutputStyle::muted(&err.to_string()));
        }
        AppError::Config(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&format!("Config: {}", msg)));
        }
        AppError::Chart(msg) => {
            eprintln!("📉 {}", OutputStyle::error(&format!("Chart: {}", msg)));
        }
        AppError::Io(e) => {
            eprintln!("❌ {}", OutputStyle::error(&e.to_string()));
        }
        AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::Config("bad locale".to_string()).to_string(),
            "Config error: bad locale"
        );
        assert!(AppError::InputClosed.to_string().contains("Input closed"));
    }
}
