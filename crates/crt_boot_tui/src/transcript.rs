//! Headless mode: runs the sequence on the virtual clock and prints every
//! distinct frame.

use std::io;
use std::io::Write;

use crt_boot::HostConfig;
use crt_boot::HostShell;
use crt_boot::Phase;
use tracing::debug;

use crate::widgets::MainContent;

/// Write each boot frame whose phase or text differs from the previous one,
/// then the main view. Returns the number of frames written.
pub fn write_transcript<W: Write>(config: HostConfig, out: &mut W) -> io::Result<usize> {
    let mut host = HostShell::new(config);
    host.mount();

    let mut last: Option<(Phase, String)> = None;
    let mut written = 0;

    loop {
        let at_ms = host.now().as_millis();

        if host.is_main_visible() {
            writeln!(out, "--- {at_ms} ms main view ---")?;
            for line in MainContent::plain_lines() {
                writeln!(out, "{line}")?;
            }
            written += 1;
            break;
        }

        let Some(frame) = host.loader_frame() else {
            break;
        };
        let current = (frame.phase, frame.to_text());
        if last.as_ref() != Some(&current) {
            writeln!(out, "--- {at_ms} ms {:?} ---", current.0)?;
            writeln!(out, "{}", current.1)?;
            written += 1;
            last = Some(current);
        }

        match host.next_deadline() {
            Some(deadline) => host.advance_to(deadline),
            None => break,
        }
    }

    out.flush()?;
    debug!(frames = written, "transcript written");
    Ok(written)
}
