use std::time::Duration;

use tokio::time::Instant;

/// Wall clock scaled by a constant speed factor, measured from `start`.
#[derive(Debug, Clone, Copy)]
pub struct ScaledClock {
    origin: Instant,
    speed: f64,
}

impl ScaledClock {
    /// `speed` must be finite and positive; [`crate::Cli::into_config`]
    /// guarantees that.
    pub fn start(speed: f64) -> Self {
        Self {
            origin: Instant::now(),
            speed,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed().mul_f64(self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test(start_paused = true)]
    async fn scales_elapsed_time() {
        let normal = ScaledClock::start(1.0);
        let fast = ScaledClock::start(2.0);

        tokio::time::advance(Duration::from_millis(100)).await;
        assert_eq!(normal.elapsed(), Duration::from_millis(100));
        assert_eq!(fast.elapsed(), Duration::from_millis(200));
    }
}
