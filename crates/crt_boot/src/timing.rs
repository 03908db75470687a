//! Timing constants for the boot sequence.

use std::time::Duration;

use crate::animator::LinePacing;
use crate::script::BootScript;

/// Delay between typing ticks.
pub const TYPING_INTERVAL: Duration = Duration::from_millis(30);

/// Delay between progress bar increments.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(30);

/// Length of the exit transition.
pub const EXIT_DURATION: Duration = Duration::from_millis(1200);

/// Slack the host's readiness timer keeps past the moment the bar fills.
pub const READY_MARGIN: Duration = Duration::from_millis(500);

/// Fade-in time for the main view once the boot screen is gone.
pub const MAIN_FADE_IN: Duration = Duration::from_millis(1000);

/// Width of the progress bar in cells.
pub const BAR_WIDTH: usize = 50;

/// Number of typing ticks needed to finish `script`, including the final tick
/// that observes the cursor past the last line.
pub fn typing_ticks(script: &BootScript, pacing: LinePacing) -> u32 {
    let mut ticks: u32 = 1;
    for line in script.lines() {
        let chars = line.chars().count() as u32;
        ticks = ticks.saturating_add(chars);
        // Empty lines cost a skip tick; typed lines cost one idle tick at the
        // boundary unless it is collapsed into the last character.
        if chars == 0 || pacing == LinePacing::IdleTick {
            ticks = ticks.saturating_add(1);
        }
    }
    ticks
}

/// Time from mount until the progress bar reaches 100%.
pub fn sequence_duration(script: &BootScript, pacing: LinePacing) -> Duration {
    let typing = TYPING_INTERVAL.saturating_mul(typing_ticks(script, pacing));
    typing.saturating_add(PROGRESS_INTERVAL.saturating_mul(100))
}

/// Default readiness delay for `script`: the full typing and bar time plus
/// [`READY_MARGIN`], so the bar always reaches 100% before the host is ready.
pub fn ready_after(script: &BootScript, pacing: LinePacing) -> Duration {
    sequence_duration(script, pacing).saturating_add(READY_MARGIN)
}
