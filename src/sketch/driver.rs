//! Frame driver: one `tick` per display refresh.
//!
//! Within a tick the order is fixed: derive params, reconcile the population,
//! deliver format and palette notifications, fire the slow trigger, then walk the
//! tree (update then draw, per node).

use std::{cell::RefCell, rc::Rc};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    animation::{
        clock::AnimationClock,
        throttle::SlowTrigger,
        timeline::{Behavior, TimelineItem},
    },
    format::{engine::FormatEngine, state::FormatState},
    foundation::core::{Point, Vec2},
    foundation::error::EaselResult,
    notify::subject::{Observer, ObserverRef},
    palette::{hub::PaletteHub, registry::PaletteRegistry},
    population::reconciler::{Population, ReconcileReport, Subscriptions, reconcile},
    scene::{
        background::Background,
        composite::Composite,
        draw::{ColorSource, DrawParams, Drawable, FrameCtx, RenderContext},
        entity::{Entity, EntitySpawner},
        shape::{Shape, ShapeKind},
    },
    sketch::params::{ControlValues, SketchParams},
};

const GRID: usize = 3;

/// Summary of one tick, for hosts and tests.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub elapsed: f64,
    pub format: FormatState,
    pub format_changed: bool,
    pub palette_changed: bool,
    pub slow_fired: bool,
    pub population: ReconcileReport,
    pub entities: usize,
    pub format_observers: usize,
    pub palette_observers: usize,
}

/// A complete sketch: background, a grid of breathing shapes, and a live population.
pub struct Sketch {
    registry: PaletteRegistry,
    format: FormatEngine,
    palette: PaletteHub,
    clock: AnimationClock,
    slow: SlowTrigger,
    tree: Composite,
    population: Rc<RefCell<Population<Entity>>>,
    spawner: EntitySpawner,
    rng: StdRng,
    frame: u64,
}

fn wire<T: Observer + 'static>(
    format: &mut FormatEngine,
    palette: &mut PaletteHub,
    node: &Rc<RefCell<T>>,
) {
    let handle: ObserverRef = node.clone();
    format.add_observer(handle.clone());
    palette.add_observer(handle);
}

impl Sketch {
    pub fn new(controls: &ControlValues) -> EaselResult<Self> {
        Self::with_registry(controls, PaletteRegistry::builtin())
    }

    pub fn with_registry(controls: &ControlValues, registry: PaletteRegistry) -> EaselResult<Self> {
        let params = SketchParams::derive(controls)?;
        params.validate()?;

        let mut format = FormatEngine::new(params.format.requested_size)?;
        let mut palette = PaletteHub::new(params.colors.clone());
        let state = format.state();
        let mut tree = Composite::new();

        let background = Rc::new(RefCell::new(Background::new(params.colors.clone(), state)));
        wire(&mut format, &mut palette, &background);
        tree.push(background, None);

        let mut grid = Composite::new();
        let design = params.format.requested_size;
        let extent = design.width.min(design.height) / (GRID as f64 * 4.0);
        for row in 0..GRID {
            for col in 0..GRID {
                let i = row * GRID + col;
                let anchor = Point::new(
                    (col as f64 + 0.5) / GRID as f64 * design.width,
                    (row as f64 + 0.5) / GRID as f64 * design.height,
                );
                let kind = if i % 2 == 0 {
                    ShapeKind::Circle
                } else {
                    ShapeKind::Square
                };
                let breathe = params.breathe.breathe()?;
                let shape = Shape::new(kind, anchor, extent, params.colors.clone(), state)
                    .with_breathe(i as f64 * 0.25, f64::INFINITY, breathe)?
                    .with_item(TimelineItem::always(Behavior::oscillate(
                        Vec2::new(0.0, 1.0),
                        extent * 0.25,
                        0.2 + 0.05 * i as f64,
                    )));
                let shape = Rc::new(RefCell::new(shape));
                wire(&mut format, &mut palette, &shape);
                grid.push(shape, Some(row));
            }
        }
        tree.push(Rc::new(RefCell::new(grid)), None);

        let population: Rc<RefCell<Population<Entity>>> =
            Rc::new(RefCell::new(Population::new()));
        tree.push(population.clone(), None);

        let mut spawner = params.entities.spawner()?;
        spawner.request = params.colors.clone();

        tracing::debug!(nodes = tree.count(), "sketch built");
        Ok(Self {
            registry,
            format,
            palette,
            clock: AnimationClock::new(),
            slow: SlowTrigger::new(params.slow_interval)?,
            tree,
            population,
            spawner,
            rng: StdRng::seed_from_u64(params.seed),
            frame: 0,
        })
    }

    /// Advance one frame at host `timestamp` (seconds) and draw into `ctx`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn tick(
        &mut self,
        timestamp: f64,
        controls: &ControlValues,
        ctx: &mut dyn RenderContext,
    ) -> EaselResult<FrameReport> {
        let params = SketchParams::derive(controls)?;
        params.validate()?;

        let mut spawner = params.entities.spawner()?;
        spawner.request = self.palette.request().clone();

        self.clock.set_halted(params.halted);
        let delta = self.clock.tick(timestamp);
        self.spawner = spawner;

        let population = {
            let mut pop = self.population.borrow_mut();
            let mut subs = Subscriptions {
                format: &mut self.format,
                palette: &mut self.palette,
            };
            reconcile(
                params.entities.count,
                &mut *pop,
                &mut self.spawner,
                &mut subs,
                &mut self.rng,
            )?
        };

        let format_changed = self.format.check_and_apply(&params.format)?;
        let palette_changed = self.palette.apply(&params.colors)?;

        self.slow.set_interval(params.slow_interval)?;
        let slow_fired = self.slow.advance(delta, self.clock.is_halted());
        if slow_fired {
            self.tree.animate_slow(&mut ColorSource {
                registry: &self.registry,
                rng: &mut self.rng,
            })?;
        }

        let draw = DrawParams {
            frame: self.frame,
            ..params.draw
        };
        let mut frame = FrameCtx {
            clock: &self.clock,
            colors: ColorSource {
                registry: &self.registry,
                rng: &mut self.rng,
            },
        };
        self.tree.traverse(&mut frame, ctx, &draw)?;

        let report = FrameReport {
            frame: self.frame,
            elapsed: self.clock.elapsed(),
            format: self.format.state(),
            format_changed,
            palette_changed,
            slow_fired,
            population,
            entities: self.population.borrow().count(),
            format_observers: self.format.observer_count(),
            palette_observers: self.palette.observer_count(),
        };
        self.frame += 1;
        Ok(report)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn format_state(&self) -> FormatState {
        self.format.state()
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn registry(&self) -> &PaletteRegistry {
        &self.registry
    }

    pub fn tree(&self) -> &Composite {
        &self.tree
    }

    pub fn population(&self) -> Rc<RefCell<Population<Entity>>> {
        Rc::clone(&self.population)
    }

    /// Observers wired to the format engine that are not population members.
    pub fn fixed_observers(&self) -> usize {
        self.format.observer_count() - self.population.borrow().count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/driver.rs"]
mod tests;
