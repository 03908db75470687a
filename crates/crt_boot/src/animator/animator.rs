//! Boot sequence state machine.

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::render::BootFrame;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::script::BootScript;
use crate::timing;

use super::exit::ExitCoordinator;
use super::progress::ProgressDriver;
use super::state::{LinePacing, Phase, TypingCursor};
use super::typing::{TypingDriver, TypingStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BootTimer {
    TypingTick,
    ProgressTick,
    ExitComplete,
}

type CompletionCallback = Box<dyn FnOnce()>;

/// Drives the boot sequence: typing, bar filling, then the exit handoff.
///
/// The animator runs on its own virtual clock. Callers advance it with
/// [`advance_to`](Self::advance_to) and report readiness once with
/// [`set_ready`](Self::set_ready). Every phase owns at most one scheduled
/// task, and that task is cancelled the moment the phase is left.
///
/// # Example
///
/// ```ignore
/// let mut animator = BootAnimator::new(BootScript::standard())
///     .on_sequence_complete(|| println!("boot finished"));
///
/// animator.start();
/// animator.set_ready(true);
///
/// // In the frame loop:
/// animator.advance_to(elapsed);
/// let text = animator.frame().to_text();
/// ```
pub struct BootAnimator {
    script: BootScript,
    bar_width: usize,
    phase: Phase,
    started: bool,
    torn_down: bool,
    typing: TypingDriver,
    progress: ProgressDriver,
    exit: ExitCoordinator,
    scheduler: Scheduler<BootTimer>,
    /// Task owned by the current phase.
    phase_task: Option<TaskHandle>,
    on_complete: Option<CompletionCallback>,
}

impl BootAnimator {
    /// Create an animator for `script`. Nothing runs until [`start`](Self::start).
    pub fn new(script: BootScript) -> Self {
        let typing = TypingDriver::new(&script, LinePacing::default());
        Self {
            script,
            bar_width: timing::BAR_WIDTH,
            phase: Phase::Typing,
            started: false,
            torn_down: false,
            typing,
            progress: ProgressDriver::new(),
            exit: ExitCoordinator::new(timing::EXIT_DURATION),
            scheduler: Scheduler::new(),
            phase_task: None,
            on_complete: None,
        }
    }

    /// Set the progress bar width in cells.
    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Set how the cursor moves past a fully typed line. Ignored once started.
    pub fn line_pacing(mut self, pacing: LinePacing) -> Self {
        if !self.started {
            self.typing = TypingDriver::new(&self.script, pacing);
        }
        self
    }

    /// Register the notification invoked once the exit transition finishes.
    pub fn on_sequence_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Begin typing. The first tick lands one typing interval from now.
    pub fn start(&mut self) {
        if self.started || self.torn_down {
            return;
        }
        self.started = true;
        debug!(lines = self.script.len(), "boot sequence started");
        self.phase_task = self.arm(Phase::Typing);
    }

    /// Report host readiness. Only the first `true` has an effect, and none
    /// after teardown.
    pub fn set_ready(&mut self, ready: bool) {
        if !ready || self.torn_down || self.exit.is_host_ready() {
            return;
        }
        info!(progress = self.progress.percent(), "host reported ready");
        if self.exit.host_ready() {
            self.transition(Phase::Exiting);
        }
    }

    /// Run every task due up to `now` in deadline order.
    pub fn advance_to(&mut self, now: Duration) {
        if self.torn_down {
            return;
        }
        while let Some((_, timer)) = self.scheduler.pop_due(now) {
            match timer {
                BootTimer::TypingTick => self.on_typing_tick(),
                BootTimer::ProgressTick => self.on_progress_tick(),
                BootTimer::ExitComplete => self.on_exit_complete(),
            }
        }
        self.scheduler.settle(now);
    }

    pub fn advance(&mut self, delta: Duration) {
        self.advance_to(self.now().saturating_add(delta));
    }

    fn on_typing_tick(&mut self) {
        match self.typing.step(&self.script) {
            TypingStep::Complete => {
                debug!("typing complete");
                self.transition(Phase::BarFilling);
            }
            step => trace!(?step, cursor = ?self.typing.cursor(), "typing tick"),
        }
    }

    fn on_progress_tick(&mut self) {
        if !self.progress.step() {
            trace!(progress = self.progress.percent(), "progress tick");
            return;
        }
        let next = if self.exit.progress_full() {
            Phase::Exiting
        } else {
            Phase::WaitingToExit
        };
        self.transition(next);
    }

    fn on_exit_complete(&mut self) {
        if !self.exit.finish() {
            return;
        }
        self.transition(Phase::Done);
        if let Some(callback) = self.on_complete.take() {
            info!("boot sequence complete, notifying host");
            callback();
        }
    }

    /// Leave the current phase, cancelling its task, and arm the next one.
    fn transition(&mut self, next: Phase) {
        if let Some(task) = self.phase_task.take() {
            self.scheduler.cancel(task);
        }
        debug!(
            from = ?self.phase,
            to = ?next,
            at_ms = self.now().as_millis() as u64,
            "boot phase transition"
        );
        if next == Phase::Exiting {
            self.exit.begin(self.scheduler.now());
        }
        self.phase = next;
        self.phase_task = self.arm(next);
    }

    fn arm(&mut self, phase: Phase) -> Option<TaskHandle> {
        match phase {
            Phase::Typing => Some(
                self.scheduler
                    .schedule_repeating(timing::TYPING_INTERVAL, BootTimer::TypingTick),
            ),
            Phase::BarFilling => Some(
                self.scheduler
                    .schedule_repeating(timing::PROGRESS_INTERVAL, BootTimer::ProgressTick),
            ),
            Phase::Exiting => Some(
                self.scheduler
                    .schedule_once(self.exit.duration(), BootTimer::ExitComplete),
            ),
            Phase::WaitingToExit | Phase::Done => None,
        }
    }

    /// Cancel every pending task and drop the completion callback. The
    /// animator is inert afterwards: `start`, `set_ready` and `advance_to`
    /// become no-ops. Also runs on drop.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        let pending = self.scheduler.pending();
        if pending > 0 {
            debug!(pending, phase = ?self.phase, "tearing down boot animator");
        }
        self.scheduler.cancel_all();
        self.phase_task = None;
        self.on_complete = None;
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.exit.is_host_ready()
    }

    #[inline]
    pub fn cursor(&self) -> TypingCursor {
        self.typing.cursor()
    }

    pub fn revealed(&self) -> &[String] {
        self.typing.revealed()
    }

    #[inline]
    pub fn progress(&self) -> u8 {
        self.progress.percent()
    }

    pub fn script(&self) -> &BootScript {
        &self.script
    }

    /// Current virtual time since start.
    #[inline]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// When the next tick is due, if any task is pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Linear progress of the exit transition, once it has begun.
    pub fn exit_progress(&self) -> Option<f32> {
        self.exit.progress_at(self.now())
    }

    pub fn frame(&self) -> BootFrame {
        BootFrame {
            phase: self.phase,
            lines: self.typing.revealed().to_vec(),
            marker_line: self.typing.marker_line(),
            progress: self.phase.shows_bar().then(|| self.progress.percent()),
            bar_width: self.bar_width,
            exit_progress: self.exit_progress(),
        }
    }
}

impl Drop for BootAnimator {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for BootAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootAnimator")
            .field("phase", &self.phase)
            .field("cursor", &self.typing.cursor())
            .field("progress", &self.progress.percent())
            .field("ready", &self.exit.is_host_ready())
            .field("now", &self.scheduler.now())
            .finish_non_exhaustive()
    }
}
