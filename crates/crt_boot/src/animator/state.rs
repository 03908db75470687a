//! Boot sequence state types.

/// Lifecycle stage of a [`super::BootAnimator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Script lines are being revealed.
    Typing,
    /// Typing finished; the progress bar is filling.
    BarFilling,
    /// The bar is full but the host has not reported readiness yet.
    WaitingToExit,
    /// Exit transition running.
    Exiting,
    /// Sequence finished and the host has been notified. Terminal.
    Done,
}

impl Phase {
    /// Whether the progress bar row is shown.
    #[inline]
    pub fn shows_bar(self) -> bool {
        !matches!(self, Phase::Typing)
    }

    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, Phase::Done)
    }
}

/// Position within the script currently being revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypingCursor {
    pub line_index: usize,
    /// Counted in characters.
    pub char_index: usize,
}

/// How the typing driver moves past a fully typed line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinePacing {
    /// Spend one extra tick on the finished line before moving on.
    #[default]
    IdleTick,
    /// Move on in the same tick that reveals the last character.
    Immediate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_hidden_only_while_typing() {
        assert!(!Phase::Typing.shows_bar());
        for phase in [
            Phase::BarFilling,
            Phase::WaitingToExit,
            Phase::Exiting,
            Phase::Done,
        ] {
            assert!(phase.shows_bar(), "{phase:?} should show the bar");
        }
    }
}
