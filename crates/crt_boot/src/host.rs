//! Host shell around the boot animator.
//!
//! The host owns the readiness flag (flipped by its own timer), mounts the
//! animator, and latches the main view visible once the animator reports
//! completion. After that the animator is dropped and never rendered again.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use crate::animator::{BootAnimator, LinePacing};
use crate::render::BootFrame;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::script::BootScript;
use crate::timing;

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Delay after mount before the host reports readiness. Defaults to
    /// [`timing::ready_after`], which outlasts the whole typing and bar time.
    pub ready_after: Duration,
    pub script: BootScript,
    pub line_pacing: LinePacing,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::for_script(BootScript::standard(), LinePacing::default())
    }
}

impl HostConfig {
    /// Config whose readiness delay is derived from `script` and `line_pacing`.
    pub fn for_script(script: BootScript, line_pacing: LinePacing) -> Self {
        Self {
            ready_after: timing::ready_after(&script, line_pacing),
            script,
            line_pacing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostTimer {
    Ready,
}

/// Application shell that plays the boot screen before its main view.
#[derive(Debug)]
pub struct HostShell {
    config: HostConfig,
    scheduler: Scheduler<HostTimer>,
    mounted: bool,
    ready: bool,
    ready_task: Option<TaskHandle>,
    loader: Option<BootAnimator>,
    loader_finished: Rc<Cell<bool>>,
    main_visible_since: Option<Duration>,
}

impl Default for HostShell {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}

impl HostShell {
    pub fn new(config: HostConfig) -> Self {
        let loader_finished = Rc::new(Cell::new(false));
        let finished = Rc::clone(&loader_finished);
        let loader = BootAnimator::new(config.script.clone())
            .line_pacing(config.line_pacing)
            .on_sequence_complete(move || finished.set(true));

        Self {
            config,
            scheduler: Scheduler::new(),
            mounted: false,
            ready: false,
            ready_task: None,
            loader: Some(loader),
            loader_finished,
            main_visible_since: None,
        }
    }

    /// Start the readiness timer and the boot animation.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let fill = timing::sequence_duration(&self.config.script, self.config.line_pacing);
        debug!(
            ready_after_ms = self.config.ready_after.as_millis() as u64,
            bar_full_ms = fill.as_millis() as u64,
            "host mounted"
        );

        self.ready_task = Some(
            self.scheduler
                .schedule_once(self.config.ready_after, HostTimer::Ready),
        );
        if let Some(loader) = self.loader.as_mut() {
            loader.start();
        }
    }

    /// Advance the host and the boot animator to `now`, interleaving host
    /// timers with animator ticks in time order.
    pub fn advance_to(&mut self, now: Duration) {
        while let Some((_, timer)) = self.scheduler.pop_due(now) {
            let at = self.scheduler.now();
            self.advance_loader(at);
            match timer {
                HostTimer::Ready => self.on_ready(),
            }
        }
        self.scheduler.settle(now);
        self.advance_loader(now);
    }

    pub fn advance(&mut self, delta: Duration) {
        self.advance_to(self.now().saturating_add(delta));
    }

    fn on_ready(&mut self) {
        self.ready_task = None;
        self.ready = true;
        info!(at_ms = self.now().as_millis() as u64, "host work finished");
        if let Some(loader) = self.loader.as_mut() {
            loader.set_ready(true);
        }
    }

    /// Step the animator deadline by deadline so the completion instant is
    /// known exactly.
    fn advance_loader(&mut self, until: Duration) {
        while let Some(loader) = self.loader.as_mut() {
            let step = loader
                .next_deadline()
                .filter(|deadline| *deadline <= until)
                .unwrap_or(until);
            loader.advance_to(step);

            if self.loader_finished.get() {
                self.unmount_loader(step);
                return;
            }
            if step >= until {
                return;
            }
        }
    }

    fn unmount_loader(&mut self, at: Duration) {
        self.loader = None;
        if self.main_visible_since.is_none() {
            info!(at_ms = at.as_millis() as u64, "boot screen finished, showing main view");
            self.main_visible_since = Some(at);
        }
    }

    /// Cancel the readiness timer and discard the animator.
    pub fn teardown(&mut self) {
        if let Some(task) = self.ready_task.take() {
            self.scheduler.cancel(task);
        }
        self.scheduler.cancel_all();
        if let Some(mut loader) = self.loader.take() {
            loader.teardown();
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The boot animator, while it is still mounted.
    pub fn loader(&self) -> Option<&BootAnimator> {
        self.loader.as_ref()
    }

    pub fn loader_frame(&self) -> Option<BootFrame> {
        self.loader.as_ref().map(BootAnimator::frame)
    }

    #[inline]
    pub fn is_main_visible(&self) -> bool {
        self.main_visible_since.is_some()
    }

    pub fn main_visible_since(&self) -> Option<Duration> {
        self.main_visible_since
    }

    /// Fade-in progress of the main view, from 0.0 to 1.0.
    pub fn main_fade_in(&self) -> Option<f32> {
        let since = self.main_visible_since?;
        let elapsed = self.now().saturating_sub(since);
        Some((elapsed.as_secs_f32() / timing::MAIN_FADE_IN.as_secs_f32()).min(1.0))
    }

    /// Earliest pending host timer or animator tick.
    pub fn next_deadline(&self) -> Option<Duration> {
        let host = self.scheduler.next_deadline();
        let loader = self.loader.as_ref().and_then(BootAnimator::next_deadline);
        match (host, loader) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
