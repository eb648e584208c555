//! Easel is the coordination engine behind a family of generative-art sketches.
//!
//! Drawing primitives are somebody else's problem. Easel keeps many independently
//! drawn entities consistent while the canvas format changes at runtime, animates
//! them at two rates, and keeps a live population at the requested size.
//!
//! # Frame overview
//!
//! 1. **Derive**: flat [`ControlValues`] -> [`SketchParams`] (pure, fresh every tick)
//! 2. **Reconcile**: grow/shrink the [`Population`] and (un)wire its members
//! 3. **Notify**: [`FormatEngine`] and [`PaletteHub`] broadcast [`Notification`]s
//! 4. **Slow track**: [`SlowTrigger`] re-rolls palette colours at a throttled rate
//! 5. **Traverse**: [`Composite`] calls update-then-draw on every node in insertion order
//!
//! Everything runs synchronously on the caller's thread; [`Sketch::tick`] is the
//! single host entry point.
#![forbid(unsafe_code)]

mod animation;
mod format;
mod foundation;
mod notify;
mod palette;
mod population;
mod scene;
mod sketch;

pub use animation::clock::AnimationClock;
pub use animation::throttle::SlowTrigger;
pub use animation::timeline::{Behavior, Breathe, Timeline, TimelineItem};
pub use format::engine::FormatEngine;
pub use format::state::{FormatParams, FormatState};
pub use format::transform::{
    Bounce, check_bounce, transform_position, transform_scalar, transform_size, wrap_position,
};
pub use foundation::core::{Circle, Orientation, Point, Rect, Rgba8, Scale3, Size, Vec2};
pub use foundation::error::{EaselError, EaselResult};
pub use notify::subject::{Notification, Observer, ObserverRef, Subject};
pub use palette::hub::PaletteHub;
pub use palette::registry::{Palette, PaletteRegistry};
pub use palette::resolver::{ColorMode, ColorRequest, Pick, ResolvedColors, resolve};
pub use population::reconciler::{
    Population, ReconcileReport, Spawner, Subscriptions, reconcile,
};
pub use scene::appearance::Appearance;
pub use scene::background::Background;
pub use scene::composite::{Composite, Index};
pub use scene::draw::{ColorSource, DrawParams, Drawable, FrameCtx, NodeRef, RenderContext, Style};
pub use scene::entity::{BoundsMode, Entity, EntitySpawner};
pub use scene::recorder::{DrawCommand, Recorder};
pub use scene::shape::{Shape, ShapeKind};
pub use sketch::driver::{FrameReport, Sketch};
pub use sketch::params::{BreatheParams, ControlValues, EntityParams, SketchParams};
