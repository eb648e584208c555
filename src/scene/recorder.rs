use crate::{
    foundation::core::{Circle, Rect, Rgba8},
    scene::draw::{RenderContext, Style},
};

/// One leaf drawing call captured by [`Recorder`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: Rgba8,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: Style,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        style: Style,
    },
}

/// Headless render context that records every call, in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands, leaving the recorder empty for the next frame.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderContext for Recorder {
    fn clear(&mut self, color: Rgba8) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn rect(&mut self, rect: Rect, style: &Style) {
        self.commands.push(DrawCommand::Rect {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
            style: style.clone(),
        });
    }

    fn circle(&mut self, circle: Circle, style: &Style) {
        self.commands.push(DrawCommand::Circle {
            cx: circle.center.x,
            cy: circle.center.y,
            r: circle.radius,
            style: style.clone(),
        });
    }
}
