//! Minimal subject/observer plumbing.
//!
//! Delivery is synchronous, in registration order, on the calling thread. There
//! is no error isolation: the first failing observer aborts the rest of the
//! delivery and its error is returned to whoever called [`Subject::notify_all`].

use std::{cell::RefCell, rc::Rc};

use crate::{
    format::state::FormatState,
    foundation::error::{EaselError, EaselResult},
    palette::resolver::ColorRequest,
};

/// Tagged payload describing which subject fired and what changed.
#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    /// The canvas format changed. Both snapshots are immutable copies.
    Format { new: FormatState, old: FormatState },
    /// The palette selection changed; observers should re-resolve their colours.
    Palette {
        new: ColorRequest,
        old: ColorRequest,
    },
}

impl Notification {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Format { .. } => "format",
            Self::Palette { .. } => "palette",
        }
    }
}

/// Receiver side of a [`Subject`].
pub trait Observer {
    fn update(&mut self, notification: &Notification) -> EaselResult<()>;
}

/// Shared handle under which observers are registered.
pub type ObserverRef = Rc<RefCell<dyn Observer>>;

fn same_observer(a: &ObserverRef, b: &ObserverRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Ordered, duplicate-free list of observers.
#[derive(Default)]
pub struct Subject {
    observers: Vec<ObserverRef>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `observer` unless it is already registered. Returns whether it was added.
    pub fn add_observer(&mut self, observer: ObserverRef) -> bool {
        if self.contains(&observer) {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Remove `observer` by identity. Returns whether anything was removed.
    pub fn remove_observer(&mut self, observer: &ObserverRef) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !same_observer(o, observer));
        self.observers.len() != before
    }

    pub fn contains(&self, observer: &ObserverRef) -> bool {
        self.observers.iter().any(|o| same_observer(o, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }

    pub fn notify_all(&self, notification: &Notification) -> EaselResult<()> {
        for (index, observer) in self.observers.iter().enumerate() {
            let mut observer = observer.try_borrow_mut().map_err(|_| {
                EaselError::observer(format!(
                    "observer #{index} is already borrowed during {} delivery",
                    notification.kind()
                ))
            })?;
            observer.update(notification)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/notify/subject.rs"]
mod tests;
