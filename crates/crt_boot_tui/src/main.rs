use std::io;

use anyhow::Context;
use clap::Parser;
use crt_boot_tui::Cli;
use crt_boot_tui::app;
use crt_boot_tui::logging;
use crt_boot_tui::transcript;

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;
    let _log_guard = logging::init(&config)?;

    if config.transcript {
        let mut out = io::stdout().lock();
        transcript::write_transcript(config.host, &mut out)
            .context("failed to write transcript")?;
        return Ok(());
    }

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?
        .block_on(app::run(config))
}
