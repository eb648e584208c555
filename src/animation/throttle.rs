use crate::foundation::error::{EaselError, EaselResult};

/// Accumulated-interval trigger for slow (palette) re-randomisation.
///
/// Not gated by timeline windows, only by the halt flag and its own interval.
/// An interval of zero fires on every advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct SlowTrigger {
    interval: f64,
    accumulator: f64,
    fired: u64,
}

impl SlowTrigger {
    pub fn new(interval: f64) -> EaselResult<Self> {
        let mut t = Self::default();
        t.set_interval(interval)?;
        Ok(t)
    }

    pub fn set_interval(&mut self, interval: f64) -> EaselResult<()> {
        if !interval.is_finite() || interval < 0.0 {
            return Err(EaselError::validation(format!(
                "slow interval must be finite and >= 0, got {interval}"
            )));
        }
        self.interval = interval;
        Ok(())
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Number of times this trigger has fired.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn advance(&mut self, dt: f64, halted: bool) -> bool {
        if halted {
            return false;
        }
        if self.interval > 0.0 {
            self.accumulator += dt.max(0.0);
            if self.accumulator <= self.interval {
                return false;
            }
        }
        self.accumulator = 0.0;
        self.fired += 1;
        tracing::trace!(fired = self.fired, "slow trigger fired");
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/throttle.rs"]
mod tests;
