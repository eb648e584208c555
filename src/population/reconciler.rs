//! Converges a live entity collection to a requested size each frame.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use rand::RngCore;

use crate::{
    format::{engine::FormatEngine, state::FormatState},
    foundation::error::{EaselError, EaselResult},
    notify::subject::{Observer, ObserverRef},
    palette::hub::PaletteHub,
    scene::draw::{ColorSource, DrawParams, Drawable, FrameCtx, RenderContext},
};

/// Builds one fresh member bounded by the current format.
pub trait Spawner<E> {
    fn spawn(&mut self, format: &FormatState, rng: &mut dyn RngCore) -> E;
}

/// The subjects every population member must be wired to.
pub struct Subscriptions<'a> {
    pub format: &'a mut FormatEngine,
    pub palette: &'a mut PaletteHub,
}

/// Ordered live collection; the front holds the oldest member.
pub struct Population<E> {
    members: VecDeque<Rc<RefCell<E>>>,
}

impl<E> Default for Population<E> {
    fn default() -> Self {
        Self {
            members: VecDeque::new(),
        }
    }
}

impl<E> Population<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rc<RefCell<E>>> {
        self.members.get(index).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<RefCell<E>>> {
        self.members.iter()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReconcileReport {
    pub added: usize,
    pub removed: usize,
}

/// Grow or shrink `population` to exactly `requested` members.
///
/// Removal is oldest-first and unsubscribes each member from both subjects before
/// dropping it. New members are spawned against the current format, subscribed to
/// both subjects, then appended. A negative target is rejected untouched.
#[tracing::instrument(level = "trace", skip(population, spawner, subs, rng))]
pub fn reconcile<E, S>(
    requested: i64,
    population: &mut Population<E>,
    spawner: &mut S,
    subs: &mut Subscriptions<'_>,
    rng: &mut dyn RngCore,
) -> EaselResult<ReconcileReport>
where
    E: Observer + 'static,
    S: Spawner<E>,
{
    let target = usize::try_from(requested).map_err(|_| {
        EaselError::validation(format!("population target must be >= 0, got {requested}"))
    })?;
    let mut report = ReconcileReport::default();

    while population.members.len() > target {
        let Some(oldest) = population.members.pop_front() else {
            break;
        };
        let handle: ObserverRef = oldest;
        subs.format.remove_observer(&handle);
        subs.palette.remove_observer(&handle);
        report.removed += 1;
    }

    if population.members.len() < target {
        let format = subs.format.state();
        while population.members.len() < target {
            let member = Rc::new(RefCell::new(spawner.spawn(&format, rng)));
            let handle: ObserverRef = member.clone();
            subs.format.add_observer(handle.clone());
            subs.palette.add_observer(handle);
            population.members.push_back(member);
            report.added += 1;
        }
    }

    if report != ReconcileReport::default() {
        tracing::debug!(
            added = report.added,
            removed = report.removed,
            count = population.count(),
            "population reconciled"
        );
    }
    Ok(report)
}

impl<E: Drawable> Drawable for Population<E> {
    fn update(&mut self, frame: &mut FrameCtx<'_>) -> EaselResult<()> {
        for (i, m) in self.members.iter().enumerate() {
            m.try_borrow_mut().map_err(|_| conflict(i))?.update(frame)?;
        }
        Ok(())
    }

    fn draw(&self, ctx: &mut dyn RenderContext, params: &DrawParams) -> EaselResult<()> {
        for (i, m) in self.members.iter().enumerate() {
            m.try_borrow().map_err(|_| conflict(i))?.draw(ctx, params)?;
        }
        Ok(())
    }

    fn animate_slow(&mut self, source: &mut ColorSource<'_>) -> EaselResult<()> {
        for (i, m) in self.members.iter().enumerate() {
            m.try_borrow_mut()
                .map_err(|_| conflict(i))?
                .animate_slow(source)?;
        }
        Ok(())
    }
}

fn conflict(index: usize) -> EaselError {
    EaselError::borrow(format!("population member #{index} is already borrowed"))
}

#[cfg(test)]
#[path = "../../tests/unit/population/reconciler.rs"]
mod tests;
