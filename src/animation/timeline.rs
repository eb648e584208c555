//! Windowed per-frame animation.
//!
//! Items only step while the global clock lies inside their closed window and the
//! clock is not halted. Outside the window an item keeps its last value.

use crate::{
    animation::clock::AnimationClock,
    foundation::core::Vec2,
    foundation::error::{EaselError, EaselResult},
};

/// Triangular pulse between `min` and `max`, advanced by `increment` per active step.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Breathe {
    pub min: f64,
    pub max: f64,
    pub now: f64,
    pub direction: f64, // +1 or -1
    pub increment: f64,
}

impl Breathe {
    pub fn new(min: f64, max: f64, increment: f64) -> EaselResult<Self> {
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(EaselError::animation(format!(
                "breathe bounds must satisfy min <= max, got [{min}, {max}]"
            )));
        }
        if !increment.is_finite() || increment <= 0.0 {
            return Err(EaselError::animation("breathe increment must be > 0"));
        }
        Ok(Self {
            min,
            max,
            now: min,
            direction: 1.0,
            increment,
        })
    }

    pub fn step(&mut self) {
        self.now += self.direction * self.increment;
        if self.now >= self.max {
            self.now = self.max;
            self.direction = -1.0;
        } else if self.now <= self.min {
            self.now = self.min;
            self.direction = 1.0;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Behavior {
    /// Sinusoidal displacement along `axis`.
    Oscillate {
        axis: Vec2,
        amplitude: f64,
        frequency_hz: f64,
        phase: f64,
        value: f64,
    },
    /// Constant-velocity drift.
    Linear { velocity: Vec2, offset: Vec2 },
    /// Draw-scale pulse.
    Breathe(Breathe),
}

impl Behavior {
    pub fn oscillate(axis: Vec2, amplitude: f64, frequency_hz: f64) -> Self {
        Self::Oscillate {
            axis,
            amplitude,
            frequency_hz,
            phase: 0.0,
            value: 0.0,
        }
    }

    pub fn linear(velocity: Vec2) -> Self {
        Self::Linear {
            velocity,
            offset: Vec2::ZERO,
        }
    }

    pub fn step(&mut self, dt: f64) {
        match self {
            Self::Oscillate {
                amplitude,
                frequency_hz,
                phase,
                value,
                ..
            } => {
                *phase += std::f64::consts::TAU * *frequency_hz * dt;
                *value = *amplitude * phase.sin();
            }
            Self::Linear { velocity, offset } => {
                *offset += *velocity * dt;
            }
            Self::Breathe(b) => b.step(),
        }
    }

    /// Positional contribution of this behaviour.
    pub fn offset(&self) -> Vec2 {
        match *self {
            Self::Oscillate { axis, value, .. } => axis * value,
            Self::Linear { offset, .. } => offset,
            Self::Breathe(_) => Vec2::ZERO,
        }
    }

    /// Scale contribution of this behaviour.
    pub fn scale(&self) -> f64 {
        match self {
            Self::Breathe(b) => b.now,
            _ => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineItem {
    pub start: f64,
    pub end: f64,
    pub behavior: Behavior,
}

impl TimelineItem {
    pub fn new(start: f64, end: f64, behavior: Behavior) -> EaselResult<Self> {
        if start.is_nan() || end.is_nan() || start > end {
            return Err(EaselError::animation(format!(
                "timeline window must satisfy start <= end, got [{start}, {end}]"
            )));
        }
        Ok(Self {
            start,
            end,
            behavior,
        })
    }

    /// An item spanning all time.
    pub fn always(behavior: Behavior) -> Self {
        Self {
            start: 0.0,
            end: f64::INFINITY,
            behavior,
        }
    }

    pub fn contains(&self, now: f64) -> bool {
        self.start <= now && now <= self.end
    }
}

/// Ordered list of windowed items owned by one drawable.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    items: Vec<TimelineItem>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: TimelineItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Step every item active at the clock's elapsed time. Returns how many stepped.
    pub fn perform_if_active(&mut self, clock: &AnimationClock) -> usize {
        if clock.is_halted() {
            return 0;
        }
        let now = clock.elapsed();
        let dt = clock.delta();
        let mut stepped = 0;
        for item in self.items.iter_mut().filter(|i| i.contains(now)) {
            item.behavior.step(dt);
            stepped += 1;
        }
        stepped
    }

    pub fn offset(&self) -> Vec2 {
        self.items
            .iter()
            .fold(Vec2::ZERO, |acc, i| acc + i.behavior.offset())
    }

    pub fn scale(&self) -> f64 {
        self.items.iter().map(|i| i.behavior.scale()).product()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
