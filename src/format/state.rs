use crate::foundation::core::{Orientation, Point, Scale3, Size};

/// Canonical canvas format. Everything except the inputs of [`FormatParams`] is derived.
///
/// Drawables only ever hold copies of this value received through notifications.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormatState {
    pub orientation: Orientation,
    pub aspect_ratio: f64,
    pub keep_aspect_ratio: bool,
    pub fencing: bool,
    pub size: Size,
    pub center: Point, // always size * 0.5
    pub scale: Scale3,
}

impl FormatState {
    /// Identity-scaled portrait format of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            orientation: Orientation::Portrait,
            aspect_ratio: 1.0,
            keep_aspect_ratio: false,
            fencing: true,
            size,
            center: center_of(size),
            scale: Scale3::IDENTITY,
        }
    }

    /// True for portrait-shaped and square canvases.
    pub fn is_upright(&self) -> bool {
        self.size.width <= self.size.height
    }

    pub fn long_edge(&self) -> f64 {
        self.size.width.max(self.size.height)
    }
}

impl Default for FormatState {
    fn default() -> Self {
        Self::new(Size::new(800.0, 800.0))
    }
}

pub(crate) fn center_of(size: Size) -> Point {
    Point::new(size.width * 0.5, size.height * 0.5)
}

/// Per-frame target values for the format engine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormatParams {
    pub orientation: Orientation,
    pub aspect_ratio: f64,
    pub requested_size: Size,
    pub fencing: bool,
    pub keep_aspect_ratio: bool,
}

impl Default for FormatParams {
    fn default() -> Self {
        let state = FormatState::default();
        Self {
            orientation: state.orientation,
            aspect_ratio: state.aspect_ratio,
            requested_size: state.size,
            fencing: state.fencing,
            keep_aspect_ratio: state.keep_aspect_ratio,
        }
    }
}
