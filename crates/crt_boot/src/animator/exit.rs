//! Exit / handoff coordination.

use std::time::Duration;

use crate::latch::{JoinLatch, Side};

const PROGRESS_FULL: Side = Side::Left;
const HOST_READY: Side = Side::Right;

/// Exit coordinator states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitState {
    WaitingToExit,
    Exiting { started_at: Duration },
    Done,
}

/// Joins "bar is full" with "host is ready" and times the exit transition.
#[derive(Debug, Clone)]
pub struct ExitCoordinator {
    latch: JoinLatch,
    state: ExitState,
    duration: Duration,
}

impl ExitCoordinator {
    pub fn new(duration: Duration) -> Self {
        Self {
            latch: JoinLatch::new(),
            state: ExitState::WaitingToExit,
            duration,
        }
    }

    /// Record that the bar reached 100%. Returns `true` if the exit should
    /// start now.
    pub fn progress_full(&mut self) -> bool {
        self.latch.set(PROGRESS_FULL)
    }

    /// Record host readiness. Returns `true` if the exit should start now.
    pub fn host_ready(&mut self) -> bool {
        self.latch.set(HOST_READY)
    }

    pub fn is_host_ready(&self) -> bool {
        self.latch.is_set(HOST_READY)
    }

    /// Enter `Exiting`. Only valid once the latch has fired; later calls are
    /// ignored so the transition cannot be re-entered.
    pub fn begin(&mut self, now: Duration) -> bool {
        if self.latch.has_fired() && self.state == ExitState::WaitingToExit {
            self.state = ExitState::Exiting { started_at: now };
            return true;
        }
        false
    }

    /// Enter `Done`. Returns `true` only for the call that leaves `Exiting`.
    pub fn finish(&mut self) -> bool {
        if matches!(self.state, ExitState::Exiting { .. }) {
            self.state = ExitState::Done;
            return true;
        }
        false
    }

    #[inline]
    pub fn state(&self) -> ExitState {
        self.state
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress of the exit transition at `now`, from 0.0 to 1.0.
    pub fn progress_at(&self, now: Duration) -> Option<f32> {
        match self.state {
            ExitState::WaitingToExit => None,
            ExitState::Exiting { started_at } => {
                if self.duration.is_zero() {
                    return Some(1.0);
                }
                let elapsed = now.saturating_sub(started_at);
                Some((elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0))
            }
            ExitState::Done => Some(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn begin_requires_both_inputs() {
        let mut exit = ExitCoordinator::new(ms(1200));
        assert!(!exit.host_ready());
        assert!(!exit.begin(ms(10)));
        assert_eq!(exit.state(), ExitState::WaitingToExit);

        assert!(exit.progress_full());
        assert!(exit.begin(ms(20)));
        assert_eq!(exit.state(), ExitState::Exiting { started_at: ms(20) });
    }

    #[test]
    fn exiting_cannot_be_reentered() {
        let mut exit = ExitCoordinator::new(ms(1200));
        exit.progress_full();
        exit.host_ready();
        assert!(exit.begin(ms(0)));
        assert!(!exit.begin(ms(500)));
        assert_eq!(exit.state(), ExitState::Exiting { started_at: ms(0) });

        assert!(exit.finish());
        assert!(!exit.finish());
        assert!(!exit.begin(ms(600)));
        assert_eq!(exit.state(), ExitState::Done);
    }

    #[test]
    fn progress_tracks_elapsed_exit_time() {
        let mut exit = ExitCoordinator::new(ms(1200));
        assert_eq!(exit.progress_at(ms(0)), None);
        exit.host_ready();
        exit.progress_full();
        exit.begin(ms(1000));

        assert_eq!(exit.progress_at(ms(1000)), Some(0.0));
        let halfway = exit.progress_at(ms(1600)).unwrap_or_default();
        assert!((halfway - 0.5).abs() < 1e-4, "halfway was {halfway}");
        assert_eq!(exit.progress_at(ms(5000)), Some(1.0));
        exit.finish();
        assert_eq!(exit.progress_at(ms(0)), Some(1.0));
    }
}
