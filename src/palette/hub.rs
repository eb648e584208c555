use crate::{
    foundation::error::EaselResult,
    notify::subject::{Notification, ObserverRef, Subject},
    palette::resolver::ColorRequest,
};

/// Holds the active palette selection and broadcasts changes to it.
#[derive(Debug, Default)]
pub struct PaletteHub {
    request: ColorRequest,
    subject: Subject,
}

impl PaletteHub {
    pub fn new(request: ColorRequest) -> Self {
        Self {
            request,
            subject: Subject::new(),
        }
    }

    pub fn request(&self) -> &ColorRequest {
        &self.request
    }

    pub fn add_observer(&mut self, observer: ObserverRef) -> bool {
        self.subject.add_observer(observer)
    }

    pub fn remove_observer(&mut self, observer: &ObserverRef) -> bool {
        self.subject.remove_observer(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.subject.len()
    }

    /// Store `request`; notifies observers only when it differs from the current one.
    pub fn apply(&mut self, request: &ColorRequest) -> EaselResult<bool> {
        if *request == self.request {
            return Ok(false);
        }
        let old = std::mem::replace(&mut self.request, request.clone());
        tracing::debug!(
            mode = ?self.request.mode,
            group = %self.request.group,
            "palette selection changed"
        );
        self.subject.notify_all(&Notification::Palette {
            new: self.request.clone(),
            old,
        })?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/hub.rs"]
mod tests;
