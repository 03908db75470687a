use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crt_boot::BootScript;
use crt_boot::HostConfig;
use crt_boot::LinePacing;

use crate::error::ConfigError;

/// Upper bound for the clock multiplier.
pub const MAX_SPEED: f64 = 1000.0;

/// Play a CRT boot sequence, then show the main screen.
#[derive(Debug, Clone, Parser)]
#[command(name = "crt-boot", version, about)]
pub struct Cli {
    /// Milliseconds until the host reports that its work is done. Defaults
    /// to the full boot sequence plus a short margin.
    #[arg(long, env = "CRT_BOOT_READY_AFTER_MS", value_name = "MS")]
    pub ready_after_ms: Option<u64>,

    /// Clock multiplier; 2.0 plays the sequence twice as fast.
    #[arg(long, env = "CRT_BOOT_SPEED", default_value_t = 1.0)]
    pub speed: f64,

    /// Start the next line on the same tick that finishes the previous one.
    #[arg(long)]
    pub immediate_line_breaks: bool,

    /// Print every distinct frame to stdout instead of drawing the screen.
    #[arg(long)]
    pub transcript: bool,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: HostConfig,
    pub speed: f64,
    pub transcript: bool,
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Result<AppConfig, ConfigError> {
        if !self.speed.is_finite() || self.speed <= 0.0 || self.speed > MAX_SPEED {
            return Err(ConfigError::InvalidSpeed {
                value: self.speed,
                max: MAX_SPEED,
            });
        }
        if self.ready_after_ms == Some(0) {
            return Err(ConfigError::ZeroReadyDelay);
        }

        let line_pacing = if self.immediate_line_breaks {
            LinePacing::Immediate
        } else {
            LinePacing::IdleTick
        };
        let mut host = HostConfig::for_script(BootScript::standard(), line_pacing);
        if let Some(ms) = self.ready_after_ms {
            host.ready_after = Duration::from_millis(ms);
        }

        Ok(AppConfig {
            host,
            speed: self.speed,
            transcript: self.transcript,
            log_file: self.log_file,
        })
    }
}
