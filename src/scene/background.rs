use crate::{
    format::state::FormatState,
    foundation::core::{Point, Rect},
    foundation::error::EaselResult,
    notify::subject::{Notification, Observer},
    palette::resolver::ColorRequest,
    scene::{
        appearance::Appearance,
        draw::{ColorSource, DrawParams, Drawable, FrameCtx, RenderContext, Style},
    },
};

/// Full-canvas backdrop in the palette's background colour.
#[derive(Clone, Debug)]
pub struct Background {
    pub appearance: Appearance,
    format: FormatState,
}

impl Background {
    pub fn new(request: ColorRequest, format: FormatState) -> Self {
        Self {
            appearance: Appearance::new(request),
            format,
        }
    }

    pub fn format(&self) -> &FormatState {
        &self.format
    }
}

impl Observer for Background {
    fn update(&mut self, notification: &Notification) -> EaselResult<()> {
        match notification {
            Notification::Format { new, .. } => self.format = *new,
            Notification::Palette { new, .. } => self.appearance.on_palette(new),
        }
        Ok(())
    }
}

impl Drawable for Background {
    fn update(&mut self, frame: &mut FrameCtx<'_>) -> EaselResult<()> {
        self.appearance.sync(&mut frame.colors);
        Ok(())
    }

    fn draw(&self, ctx: &mut dyn RenderContext, _params: &DrawParams) -> EaselResult<()> {
        let background = self.appearance.colors.background;
        ctx.clear(background);
        ctx.rect(
            Rect::from_origin_size(Point::ORIGIN, self.format.size),
            &Style {
                fill: Some(background),
                stroke: None,
                stroke_width: 0.0,
            },
        );
        Ok(())
    }

    fn animate_slow(&mut self, source: &mut ColorSource<'_>) -> EaselResult<()> {
        self.appearance.reroll(source);
        Ok(())
    }
}
