//! Animated primitive placed in design space and mapped through the format transforms.

use crate::{
    animation::timeline::{Behavior, Breathe, Timeline, TimelineItem},
    format::{
        state::FormatState,
        transform::{transform_position, transform_scalar},
    },
    foundation::core::{Circle, Point, Rect, Size},
    foundation::error::EaselResult,
    notify::subject::{Notification, Observer},
    palette::resolver::ColorRequest,
    scene::{
        appearance::Appearance,
        draw::{ColorSource, DrawParams, Drawable, FrameCtx, RenderContext},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
}

#[derive(Clone, Debug)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Centre in untransformed design coordinates.
    pub anchor: Point,
    /// Radius (circle) or half side (square) in design units.
    pub extent: f64,
    pub appearance: Appearance,
    pub timeline: Timeline,
    format: FormatState,
}

impl Shape {
    pub fn new(
        kind: ShapeKind,
        anchor: Point,
        extent: f64,
        request: ColorRequest,
        format: FormatState,
    ) -> Self {
        Self {
            kind,
            anchor,
            extent,
            appearance: Appearance::new(request),
            timeline: Timeline::new(),
            format,
        }
    }

    /// Attach a breathing scale pulse active during `[start, end]`.
    pub fn with_breathe(mut self, start: f64, end: f64, breathe: Breathe) -> EaselResult<Self> {
        self.timeline
            .push(TimelineItem::new(start, end, Behavior::Breathe(breathe))?);
        Ok(self)
    }

    pub fn with_item(mut self, item: TimelineItem) -> Self {
        self.timeline.push(item);
        self
    }

    /// Canvas-space centre after animation and format transforms.
    pub fn center(&self) -> Point {
        transform_position(self.anchor + self.timeline.offset(), &self.format)
    }

    /// Canvas-space extent after animation and format transforms.
    pub fn radius(&self) -> f64 {
        transform_scalar(self.extent * self.timeline.scale(), &self.format)
    }
}

impl Observer for Shape {
    fn update(&mut self, notification: &Notification) -> EaselResult<()> {
        match notification {
            Notification::Format { new, .. } => self.format = *new,
            Notification::Palette { new, .. } => self.appearance.on_palette(new),
        }
        Ok(())
    }
}

impl Drawable for Shape {
    fn update(&mut self, frame: &mut FrameCtx<'_>) -> EaselResult<()> {
        self.timeline.perform_if_active(frame.clock);
        self.appearance.sync(&mut frame.colors);
        Ok(())
    }

    fn draw(&self, ctx: &mut dyn RenderContext, params: &DrawParams) -> EaselResult<()> {
        let center = self.center();
        let r = self.radius();
        let style = self.appearance.style(params);
        match self.kind {
            ShapeKind::Circle => ctx.circle(Circle::new(center, r), &style),
            ShapeKind::Square => ctx.rect(
                Rect::from_center_size(center, Size::new(2.0 * r, 2.0 * r)),
                &style,
            ),
        }
        Ok(())
    }

    fn animate_slow(&mut self, source: &mut ColorSource<'_>) -> EaselResult<()> {
        self.appearance.reroll(source);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shape.rs"]
mod tests;
