//! Terminal front-end for the CRT boot screen.
//!
//! [`app::run`] draws the boot sequence with ratatui and hands over to the
//! main view; [`transcript::write_transcript`] plays the same sequence
//! headless on the virtual clock.

pub mod app;
pub mod cli;
pub mod clock;
pub mod error;
pub mod logging;
pub mod transcript;
pub mod widgets;

pub use cli::AppConfig;
pub use cli::Cli;
pub use error::ConfigError;
