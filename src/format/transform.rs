//! Pure coordinate transforms over a [`FormatState`] snapshot.

use crate::{
    format::state::FormatState,
    foundation::core::{Point, Size},
};

#[inline]
fn uniform_factor(state: &FormatState) -> f64 {
    if state.is_upright() {
        state.scale.x
    } else {
        state.scale.y
    }
}

/// Scale a length: `scale.x` on portrait/square canvases, `scale.y` otherwise.
#[inline]
pub fn transform_scalar(value: f64, state: &FormatState) -> f64 {
    value * uniform_factor(state)
}

/// Uniform scale under keep-aspect-ratio, per-axis stretch otherwise.
pub fn transform_position(pos: Point, state: &FormatState) -> Point {
    if state.keep_aspect_ratio {
        let k = uniform_factor(state);
        Point::new(pos.x * k, pos.y * k)
    } else {
        Point::new(pos.x * state.scale.x, pos.y * state.scale.y)
    }
}

pub fn transform_size(size: Size, state: &FormatState) -> Size {
    if state.keep_aspect_ratio {
        let k = uniform_factor(state);
        Size::new(size.width * k, size.height * k)
    } else {
        Size::new(size.width * state.scale.x, size.height * state.scale.y)
    }
}

/// Outcome of [`check_bounce`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounce {
    pub bounced: bool,
    /// The horizontal extent left `[0, width]`.
    pub x: bool,
    /// The vertical extent left `[0, height]`.
    pub y: bool,
    /// `old` when bounced, `new` otherwise.
    pub position: Point,
}

/// Check whether an object whose min corner moves `old -> new` leaves the canvas.
pub fn check_bounce(old: Point, new: Point, object: Size, state: &FormatState) -> Bounce {
    let x = new.x < 0.0 || new.x + object.width > state.size.width;
    let y = new.y < 0.0 || new.y + object.height > state.size.height;
    let bounced = x || y;
    Bounce {
        bounced,
        x,
        y,
        position: if bounced { old } else { new },
    }
}

/// Wrap a position that crossed a canvas edge to the opposite edge.
pub fn wrap_position(pos: Point, state: &FormatState) -> Point {
    fn wrap(v: f64, bound: f64) -> f64 {
        if v > bound {
            0.0
        } else if v < 0.0 {
            bound
        } else {
            v
        }
    }
    Point::new(
        wrap(pos.x, state.size.width),
        wrap(pos.y, state.size.height),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/format/transform.rs"]
mod tests;
