use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::notify::subject::Observer;

#[derive(Default)]
struct Seen {
    formats: Vec<(FormatState, FormatState)>,
}

impl Observer for Seen {
    fn update(&mut self, notification: &Notification) -> EaselResult<()> {
        if let Notification::Format { new, old } = notification {
            self.formats.push((*new, *old));
        }
        Ok(())
    }
}

fn engine_with_probe() -> (FormatEngine, Rc<RefCell<Seen>>) {
    let mut engine = FormatEngine::new(Size::new(800.0, 800.0)).unwrap();
    let seen = Rc::new(RefCell::new(Seen::default()));
    engine.add_observer(seen.clone());
    (engine, seen)
}

fn params(orientation: Orientation, aspect_ratio: f64) -> FormatParams {
    FormatParams {
        orientation,
        aspect_ratio,
        requested_size: Size::new(800.0, 800.0),
        fencing: true,
        keep_aspect_ratio: false,
    }
}

#[test]
fn identical_params_notify_once() {
    let (mut engine, seen) = engine_with_probe();
    let p = params(Orientation::Portrait, 0.5);
    assert!(engine.check_and_apply(&p).unwrap());
    assert!(!engine.check_and_apply(&p).unwrap());
    assert_eq!(seen.borrow().formats.len(), 1);
}

#[test]
fn default_params_do_not_notify() {
    let (mut engine, seen) = engine_with_probe();
    assert!(!engine.check_and_apply(&FormatParams::default()).unwrap());
    assert!(seen.borrow().formats.is_empty());
    assert_eq!(engine.state().scale, Scale3::IDENTITY);
}

#[test]
fn portrait_ratio_change_fixes_height() {
    let (mut engine, seen) = engine_with_probe();
    engine
        .check_and_apply(&params(Orientation::Portrait, 0.5))
        .unwrap();
    let s = engine.state();
    assert_eq!(s.size, Size::new(400.0, 800.0));
    assert_eq!(s.center, crate::foundation::core::Point::new(200.0, 400.0));
    assert_eq!(s.scale, Scale3::new(0.5, 1.0, 0.5));

    let (new, old) = seen.borrow().formats[0];
    assert_eq!(new, s);
    assert_eq!(old.size, Size::new(800.0, 800.0));
    assert_eq!(old.aspect_ratio, 1.0);
}

#[test]
fn orientation_toggle_preserves_long_edge() {
    let (mut engine, _seen) = engine_with_probe();
    engine
        .check_and_apply(&params(Orientation::Portrait, 0.5))
        .unwrap();
    let before = engine.state().long_edge();

    engine
        .check_and_apply(&params(Orientation::Landscape, 0.5))
        .unwrap();
    let s = engine.state();
    assert_eq!(s.long_edge(), before);
    assert_eq!(s.size, Size::new(800.0, 400.0));
    assert_eq!(s.scale, Scale3::new(1.0, 0.5, 0.5));

    engine
        .check_and_apply(&params(Orientation::Portrait, 0.5))
        .unwrap();
    assert_eq!(engine.state().long_edge(), before);
}

#[test]
fn landscape_ratio_change_uses_requested_width() {
    let (mut engine, _seen) = engine_with_probe();
    let mut p = params(Orientation::Landscape, 0.75);
    p.requested_size = Size::new(1000.0, 600.0);
    engine.check_and_apply(&p).unwrap();
    assert_eq!(engine.state().size, Size::new(1000.0, 750.0));
}

#[test]
fn flag_changes_notify_without_geometry() {
    let (mut engine, seen) = engine_with_probe();
    let mut p = FormatParams::default();
    p.fencing = false;
    assert!(engine.check_and_apply(&p).unwrap());
    p.keep_aspect_ratio = true;
    assert!(engine.check_and_apply(&p).unwrap());

    let s = engine.state();
    assert!(!s.fencing);
    assert!(s.keep_aspect_ratio);
    assert_eq!(s.size, Size::new(800.0, 800.0));
    assert_eq!(seen.borrow().formats.len(), 2);
}

#[test]
fn non_positive_aspect_ratio_is_rejected() {
    let (mut engine, seen) = engine_with_probe();
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = engine
            .check_and_apply(&params(Orientation::Landscape, bad))
            .unwrap_err();
        assert!(err.to_string().contains("aspect ratio"));
    }
    assert_eq!(engine.state(), FormatState::new(Size::new(800.0, 800.0)));
    assert!(seen.borrow().formats.is_empty());
}

#[test]
fn degenerate_sizes_are_rejected() {
    assert!(FormatEngine::new(Size::new(0.0, 10.0)).is_err());
    let (mut engine, _seen) = engine_with_probe();
    let mut p = params(Orientation::Portrait, 0.5);
    p.requested_size = Size::new(-5.0, 10.0);
    assert!(engine.check_and_apply(&p).is_err());
}

#[test]
fn removed_observers_are_not_notified() {
    let (mut engine, seen) = engine_with_probe();
    let handle: ObserverRef = seen.clone();
    assert!(engine.remove_observer(&handle));
    assert_eq!(engine.observer_count(), 0);
    engine
        .check_and_apply(&params(Orientation::Landscape, 0.5))
        .unwrap();
    assert!(seen.borrow().formats.is_empty());
}
