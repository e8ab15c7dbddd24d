pub mod error;
pub mod format;
pub mod interactive;
pub mod logging;
pub mod output;

pub use interactive::*;
