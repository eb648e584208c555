/// Global elapsed-animation clock with the single halt flag shared by both tracks.
///
/// Elapsed time only advances while not halted; timestamps are seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct AnimationClock {
    elapsed: f64,
    delta: f64,
    last_timestamp: Option<f64>,
    halted: bool,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a host timestamp. The first tick and backwards jumps yield a zero delta.
    pub fn tick(&mut self, timestamp: f64) -> f64 {
        let raw = match self.last_timestamp {
            Some(last) if timestamp.is_finite() => (timestamp - last).max(0.0),
            _ => 0.0,
        };
        if timestamp.is_finite() {
            self.last_timestamp = Some(timestamp);
        }
        self.advance(raw)
    }

    /// Advance by a fixed step; returns the effective delta.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.delta = if self.halted || !dt.is_finite() {
            0.0
        } else {
            dt.max(0.0)
        };
        self.elapsed += self.delta;
        self.delta
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Effective delta of the last tick (zero while halted).
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn set_halted(&mut self, halted: bool) {
        if halted != self.halted {
            tracing::debug!(halted, "animation halt flag changed");
        }
        self.halted = halted;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
