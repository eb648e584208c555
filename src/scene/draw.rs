//! Capability traits shared by every drawable node.

use std::{cell::RefCell, rc::Rc};

use rand::RngCore;

use crate::{
    animation::clock::AnimationClock,
    foundation::core::{Circle, Rect, Rgba8},
    foundation::error::EaselResult,
    palette::{
        registry::PaletteRegistry,
        resolver::{ColorRequest, ResolvedColors, resolve},
    },
};

/// Fill/stroke description handed to leaf drawing calls.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Style {
    pub fill: Option<Rgba8>,
    pub stroke: Option<Rgba8>,
    pub stroke_width: f64,
}

/// Opaque render target. The engine only forwards leaf drawing calls to it.
pub trait RenderContext {
    fn clear(&mut self, color: Rgba8);
    fn rect(&mut self, rect: Rect, style: &Style);
    fn circle(&mut self, circle: Circle, style: &Style);
}

/// Per-frame values forwarded to `draw`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DrawParams {
    pub frame: u64,
    pub stroke_width: f64,
    pub show_border: bool,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            frame: 0,
            stroke_width: 1.0,
            show_border: true,
        }
    }
}

/// Palette lookups plus the randomness they may consume.
pub struct ColorSource<'a> {
    pub registry: &'a PaletteRegistry,
    pub rng: &'a mut dyn RngCore,
}

impl ColorSource<'_> {
    pub fn resolve(&mut self, request: &ColorRequest, current: &ResolvedColors) -> ResolvedColors {
        resolve(self.registry, request, current, &mut *self.rng)
    }
}

/// Everything a node may consult while updating.
pub struct FrameCtx<'a> {
    pub clock: &'a AnimationClock,
    pub colors: ColorSource<'a>,
}

/// A unit that updates, draws, and optionally reacts to the slow trigger.
pub trait Drawable {
    fn update(&mut self, frame: &mut FrameCtx<'_>) -> EaselResult<()>;

    fn draw(&self, ctx: &mut dyn RenderContext, params: &DrawParams) -> EaselResult<()>;

    fn animate_slow(&mut self, _source: &mut ColorSource<'_>) -> EaselResult<()> {
        Ok(())
    }
}

pub type NodeRef = Rc<RefCell<dyn Drawable>>;
