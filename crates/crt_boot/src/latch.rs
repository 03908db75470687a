//! Two-input join latch.

/// One of the two inputs of a [`JoinLatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Fires exactly once, at the moment both inputs have been set.
///
/// Inputs are sticky: setting a side twice has no further effect, and the
/// order in which the two sides arrive does not matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinLatch {
    left: bool,
    right: bool,
    fired: bool,
}

impl JoinLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one input. Returns `true` only for the call that completes the
    /// join; every later call returns `false`.
    pub fn set(&mut self, side: Side) -> bool {
        match side {
            Side::Left => self.left = true,
            Side::Right => self.right = true,
        }
        if self.left && self.right && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn is_set(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
