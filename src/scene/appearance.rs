use crate::{
    palette::resolver::{ColorMode, ColorRequest, ResolvedColors},
    scene::draw::{ColorSource, DrawParams, Style},
};

/// Colour state shared by every drawable variant.
///
/// A palette notification only marks the colours stale; they are re-resolved on
/// the next update, where randomness is available.
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
    pub colors: ResolvedColors,
    pub request: ColorRequest,
    stale: bool,
}

impl Appearance {
    pub fn new(request: ColorRequest) -> Self {
        Self {
            colors: ResolvedColors::default(),
            request,
            stale: true,
        }
    }

    /// Fixed colours that survive every re-resolution.
    pub fn custom(colors: ResolvedColors) -> Self {
        Self {
            colors,
            request: ColorRequest {
                mode: ColorMode::Custom,
                ..ColorRequest::default()
            },
            stale: false,
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn on_palette(&mut self, request: &ColorRequest) {
        self.request = request.clone();
        self.stale = true;
    }

    /// Resolve colours if a palette change is pending. Returns whether it did.
    pub fn sync(&mut self, source: &mut ColorSource<'_>) -> bool {
        if !self.stale {
            return false;
        }
        self.reroll(source);
        true
    }

    pub fn reroll(&mut self, source: &mut ColorSource<'_>) {
        self.colors = source.resolve(&self.request, &self.colors);
        self.stale = false;
    }

    pub fn style(&self, params: &DrawParams) -> Style {
        Style {
            fill: Some(self.colors.fill),
            stroke: params.show_border.then_some(self.colors.border),
            stroke_width: params.stroke_width,
        }
    }
}
