//! Progress bar driver.

/// Highest progress value.
pub const FULL: u8 = 100;

/// Counts from 0 to 100, one step per tick, then holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressDriver {
    percent: u8,
}

impl ProgressDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one step. Returns `true` only on the tick that reaches 100.
    pub fn step(&mut self) -> bool {
        if self.percent >= FULL {
            return false;
        }
        self.percent += 1;
        self.percent == FULL
    }

    #[inline]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.percent >= FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_full_after_one_hundred_steps() {
        let mut driver = ProgressDriver::new();
        for expected in 1..FULL {
            assert!(!driver.step());
            assert_eq!(driver.percent(), expected);
        }
        assert!(driver.step());
        assert!(driver.is_full());
    }

    #[test]
    fn saturates_at_full() {
        let mut driver = ProgressDriver::new();
        while !driver.step() {}
        for _ in 0..10 {
            assert!(!driver.step());
            assert_eq!(driver.percent(), FULL);
        }
    }
}
