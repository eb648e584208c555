//! Format state machine over `(orientation, aspect_ratio)`.

use crate::{
    format::state::{FormatParams, FormatState, center_of},
    foundation::core::{Orientation, Scale3, Size},
    foundation::error::{EaselError, EaselResult},
    notify::subject::{Notification, ObserverRef, Subject},
};

/// Owns the canonical [`FormatState`] and notifies observers when it changes.
#[derive(Debug)]
pub struct FormatEngine {
    state: FormatState,
    subject: Subject,
}

impl FormatEngine {
    pub fn new(initial_size: Size) -> EaselResult<Self> {
        validate_size(initial_size)?;
        Ok(Self {
            state: FormatState::new(initial_size),
            subject: Subject::new(),
        })
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FormatState {
        self.state
    }

    pub fn add_observer(&mut self, observer: ObserverRef) -> bool {
        self.subject.add_observer(observer)
    }

    pub fn remove_observer(&mut self, observer: &ObserverRef) -> bool {
        self.subject.remove_observer(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.subject.len()
    }

    /// Apply `params`; returns `true` when observers were notified.
    ///
    /// Preconditions: `aspect_ratio` is finite and `> 0`, and the requested size is
    /// finite and positive. Violations are rejected before any state changes.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn check_and_apply(&mut self, params: &FormatParams) -> EaselResult<bool> {
        if !params.aspect_ratio.is_finite() || params.aspect_ratio <= 0.0 {
            return Err(EaselError::validation(format!(
                "aspect ratio must be finite and > 0, got {}",
                params.aspect_ratio
            )));
        }
        validate_size(params.requested_size)?;

        let previous = self.state;
        let mut dirty = false;

        if params.fencing != self.state.fencing {
            self.state.fencing = params.fencing;
            dirty = true;
        }
        if params.keep_aspect_ratio != self.state.keep_aspect_ratio {
            self.state.keep_aspect_ratio = params.keep_aspect_ratio;
            dirty = true;
        }

        if params.orientation != previous.orientation || params.aspect_ratio != previous.aspect_ratio
        {
            self.apply_geometry(params, &previous);
            dirty = true;
            tracing::debug!(
                orientation = ?self.state.orientation,
                aspect_ratio = self.state.aspect_ratio,
                width = self.state.size.width,
                height = self.state.size.height,
                "format changed"
            );
        }

        if !dirty {
            return Ok(false);
        }
        self.subject.notify_all(&Notification::Format {
            new: self.state,
            old: previous,
        })?;
        Ok(true)
    }

    fn apply_geometry(&mut self, params: &FormatParams, previous: &FormatState) {
        let ratio = params.aspect_ratio;
        let requested = params.requested_size;
        let ratio_unchanged = ratio == previous.aspect_ratio;

        // Toggling orientation keeps the long edge; changing ratio keeps the fixed edge.
        let long_side = match (params.orientation, ratio_unchanged) {
            (Orientation::Landscape, true) => requested.height,
            (Orientation::Portrait, true) => requested.width,
            (Orientation::Landscape, false) => requested.width,
            (Orientation::Portrait, false) => requested.height,
        };

        let (size, scale) = match params.orientation {
            Orientation::Landscape => (
                Size::new(long_side, long_side * ratio),
                Scale3::new(1.0, ratio, ratio),
            ),
            Orientation::Portrait => (
                Size::new(long_side * ratio, long_side),
                Scale3::new(ratio, 1.0, ratio),
            ),
        };

        self.state.orientation = params.orientation;
        self.state.aspect_ratio = ratio;
        self.state.size = size;
        self.state.center = center_of(size);
        self.state.scale = scale;
    }
}

pub(crate) fn validate_size(size: Size) -> EaselResult<()> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if !ok(size.width) || !ok(size.height) {
        return Err(EaselError::validation(format!(
            "canvas size must be finite and positive, got {}x{}",
            size.width, size.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/format/engine.rs"]
mod tests;
