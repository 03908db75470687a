//! Boot sequence animation.
//!
//! - [`BootAnimator`] - phase state machine driving the whole sequence
//! - [`typing::TypingDriver`] - reveals the script
//! - [`progress::ProgressDriver`] - fills the bar
//! - [`exit::ExitCoordinator`] - joins bar completion with host readiness

mod animator;
pub mod exit;
pub mod progress;
mod state;
pub mod typing;

pub use animator::BootAnimator;
pub use exit::{ExitCoordinator, ExitState};
pub use progress::ProgressDriver;
pub use state::{LinePacing, Phase, TypingCursor};
pub use typing::{TypingDriver, TypingStep};
