use rand::{Rng, RngCore};

use crate::{
    format::{
        state::FormatState,
        transform::{check_bounce, wrap_position},
    },
    foundation::core::{Circle, Point, Size, Vec2},
    foundation::error::{EaselError, EaselResult},
    notify::subject::{Notification, Observer},
    palette::resolver::ColorRequest,
    population::reconciler::Spawner,
    scene::{
        appearance::Appearance,
        draw::{ColorSource, DrawParams, Drawable, FrameCtx, RenderContext},
    },
};

/// What happens when an entity reaches the canvas edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsMode {
    #[default]
    Bounce,
    Wrap,
}

impl BoundsMode {
    pub fn from_fencing(fencing: bool) -> Self {
        if fencing { Self::Bounce } else { Self::Wrap }
    }
}

/// Moving population member. `position` is the min corner of its bounding square.
#[derive(Clone, Debug)]
pub struct Entity {
    pub position: Point,
    pub velocity: Vec2, // px per second
    pub radius: f64,
    pub bounds_mode: BoundsMode,
    pub appearance: Appearance,
    format: FormatState,
}

impl Entity {
    pub fn new(
        position: Point,
        velocity: Vec2,
        radius: f64,
        request: ColorRequest,
        format: FormatState,
    ) -> Self {
        Self {
            position,
            velocity,
            radius,
            bounds_mode: BoundsMode::from_fencing(format.fencing),
            appearance: Appearance::new(request),
            format,
        }
    }

    pub fn format(&self) -> &FormatState {
        &self.format
    }

    fn footprint(&self) -> Size {
        Size::new(2.0 * self.radius, 2.0 * self.radius)
    }

    /// Integrate one step of motion, then bounce or wrap at the canvas edge.
    pub fn step(&mut self, dt: f64) {
        let next = self.position + self.velocity * dt;
        match self.bounds_mode {
            BoundsMode::Bounce => {
                let b = check_bounce(self.position, next, self.footprint(), &self.format);
                if b.x {
                    self.velocity.x = -self.velocity.x;
                }
                if b.y {
                    self.velocity.y = -self.velocity.y;
                }
                self.position = b.position;
            }
            BoundsMode::Wrap => self.position = wrap_position(next, &self.format),
        }
    }

    /// Shrink to fit the canvas, then clamp inside it. An axis left with no room
    /// stops moving, otherwise every step would bounce in place.
    fn fit_into_canvas(&mut self) {
        let size = self.format.size;
        self.radius = self.radius.min(0.5 * size.width.min(size.height));
        let d = 2.0 * self.radius;
        if size.width - d <= 0.0 {
            self.velocity.x = 0.0;
        }
        if size.height - d <= 0.0 {
            self.velocity.y = 0.0;
        }
        self.position.x = self.position.x.min(size.width - d).max(0.0);
        self.position.y = self.position.y.min(size.height - d).max(0.0);
    }
}

impl Observer for Entity {
    fn update(&mut self, notification: &Notification) -> EaselResult<()> {
        match notification {
            Notification::Format { new, .. } => {
                self.format = *new;
                self.bounds_mode = BoundsMode::from_fencing(new.fencing);
                self.fit_into_canvas();
            }
            Notification::Palette { new, .. } => self.appearance.on_palette(new),
        }
        Ok(())
    }
}

impl Drawable for Entity {
    fn update(&mut self, frame: &mut FrameCtx<'_>) -> EaselResult<()> {
        if !frame.clock.is_halted() {
            self.step(frame.clock.delta());
        }
        self.appearance.sync(&mut frame.colors);
        Ok(())
    }

    fn draw(&self, ctx: &mut dyn RenderContext, params: &DrawParams) -> EaselResult<()> {
        let c = self.position + Vec2::new(self.radius, self.radius);
        ctx.circle(Circle::new(c, self.radius), &self.appearance.style(params));
        Ok(())
    }

    fn animate_slow(&mut self, source: &mut ColorSource<'_>) -> EaselResult<()> {
        self.appearance.reroll(source);
        Ok(())
    }
}

/// Builds entities with random placement inside the current canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct EntitySpawner {
    pub min_radius: f64,
    pub max_radius: f64,
    pub max_speed: f64,
    pub request: ColorRequest,
}

impl EntitySpawner {
    pub fn new(min_radius: f64, max_radius: f64, max_speed: f64) -> EaselResult<Self> {
        let finite = min_radius.is_finite() && max_radius.is_finite();
        if !finite || min_radius <= 0.0 || min_radius > max_radius {
            return Err(EaselError::validation(format!(
                "entity radius range must satisfy 0 < min <= max, got [{min_radius}, {max_radius}]"
            )));
        }
        if !max_speed.is_finite() || max_speed < 0.0 {
            return Err(EaselError::validation("entity max speed must be >= 0"));
        }
        Ok(Self {
            min_radius,
            max_radius,
            max_speed,
            request: ColorRequest::default(),
        })
    }
}

impl Spawner<Entity> for EntitySpawner {
    fn spawn(&mut self, format: &FormatState, rng: &mut dyn RngCore) -> Entity {
        let size = format.size;
        let max_r = self
            .max_radius
            .min(size.width * 0.5)
            .min(size.height * 0.5);
        let min_r = self.min_radius.min(max_r);
        let radius = if max_r > min_r {
            rng.gen_range(min_r..=max_r)
        } else {
            min_r
        };
        let span = |extent: f64| (extent - 2.0 * radius).max(0.0);
        let x = rng.gen_range(0.0..=span(size.width));
        let y = rng.gen_range(0.0..=span(size.height));
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = if self.max_speed > 0.0 {
            rng.gen_range(0.0..=self.max_speed)
        } else {
            0.0
        };
        let mut entity = Entity::new(
            Point::new(x, y),
            Vec2::from_angle(angle) * speed,
            radius,
            self.request.clone(),
            *format,
        );
        entity.fit_into_canvas();
        entity
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/entity.rs"]
mod tests;
