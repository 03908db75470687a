//! CRT boot screen - a simulated terminal boot sequence.
//!
//! The crate plays a short intro before the host application reveals its
//! main view. The sequence has three phases:
//!
//! 1. **Typing** - the boot script is revealed one character per tick.
//! 2. **Bar filling** - a progress bar climbs from 0% to 100%.
//! 3. **Exit** - once the bar is full *and* the host reports that its real
//!    work is done, a fixed-length exit transition runs and the host is
//!    notified exactly once.
//!
//! # Components
//!
//! - [`animator::BootAnimator`] - the phase state machine
//! - [`host::HostShell`] - readiness timer and main-view latch around it
//! - [`scheduler::Scheduler`] - cooperative clock with cancellable tasks
//! - [`latch::JoinLatch`] - fires once when two conditions have both arrived
//! - [`render`] - byte-exact text rendering of a frame
//!
//! Everything runs on a virtual clock that callers advance explicitly, so the
//! whole sequence is deterministic and can be driven by a real-time loop or
//! stepped through in tests.

pub mod animator;
pub mod host;
pub mod latch;
pub mod render;
pub mod scheduler;
pub mod script;
pub mod timing;

pub use animator::{BootAnimator, LinePacing, Phase, TypingCursor};
pub use host::{HostConfig, HostShell};
pub use latch::{JoinLatch, Side};
pub use render::{BootFrame, CURSOR_GLYPH, progress_bar};
pub use scheduler::{Scheduler, TaskHandle};
pub use script::BootScript;
