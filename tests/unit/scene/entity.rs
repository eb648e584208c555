use rand::{SeedableRng, rngs::StdRng};

use super::*;

fn canvas(fencing: bool) -> FormatState {
    FormatState {
        fencing,
        ..FormatState::new(Size::new(200.0, 100.0))
    }
}

fn at_right_edge(fencing: bool) -> Entity {
    let format = canvas(fencing);
    let mut e = Entity::new(
        Point::new(190.0, 50.0),
        Vec2::new(30.0, 0.0),
        5.0,
        ColorRequest::default(),
        format,
    );
    if !fencing {
        e.position.x = format.size.width;
    }
    e
}

#[test]
fn bounce_reverses_x_velocity_at_right_edge() {
    let mut e = at_right_edge(true);
    assert_eq!(e.bounds_mode, BoundsMode::Bounce);
    e.step(1.0 / 60.0);
    assert!(e.velocity.x < 0.0);
    assert_eq!(e.velocity.y, 0.0);
    assert_eq!(e.position, Point::new(190.0, 50.0));
    e.step(1.0 / 60.0);
    assert!(e.position.x < 190.0);
}

#[test]
fn wrap_resets_x_to_zero_at_right_edge() {
    let mut e = at_right_edge(false);
    assert_eq!(e.bounds_mode, BoundsMode::Wrap);
    e.step(1.0 / 60.0);
    assert_eq!(e.position.x, 0.0);
    assert!(e.velocity.x > 0.0);
}

#[test]
fn format_notification_switches_mode_and_clamps() {
    let mut e = at_right_edge(true);
    let smaller = FormatState {
        fencing: false,
        ..FormatState::new(Size::new(100.0, 100.0))
    };
    Observer::update(
        &mut e,
        &Notification::Format {
            new: smaller,
            old: canvas(true),
        },
    )
    .unwrap();
    assert_eq!(e.bounds_mode, BoundsMode::Wrap);
    assert_eq!(e.position.x, 90.0);
}

#[test]
fn palette_notification_marks_colours_stale() {
    let mut e = at_right_edge(true);
    let reg = crate::palette::registry::PaletteRegistry::builtin();
    let mut rng = StdRng::seed_from_u64(2);
    let mut source = ColorSource {
        registry: &reg,
        rng: &mut rng,
    };
    assert!(e.appearance.sync(&mut source));
    assert!(!e.appearance.is_stale());

    let new = ColorRequest {
        group: "tundra".to_string(),
        ..ColorRequest::default()
    };
    Observer::update(
        &mut e,
        &Notification::Palette {
            new: new.clone(),
            old: ColorRequest::default(),
        },
    )
    .unwrap();
    assert!(e.appearance.is_stale());
    assert_eq!(e.appearance.request, new);
}

#[test]
fn spawner_validates_ranges() {
    assert!(EntitySpawner::new(0.0, 4.0, 10.0).is_err());
    assert!(EntitySpawner::new(5.0, 4.0, 10.0).is_err());
    assert!(EntitySpawner::new(1.0, 4.0, -1.0).is_err());
    assert!(EntitySpawner::new(1.0, 1.0, 0.0).is_ok());
}

#[test]
fn spawner_is_seed_deterministic() {
    let mut spawner = EntitySpawner::new(1.0, 6.0, 40.0).unwrap();
    let format = canvas(true);
    let a = spawner.spawn(&format, &mut StdRng::seed_from_u64(9));
    let b = spawner.spawn(&format, &mut StdRng::seed_from_u64(9));
    assert_eq!(a.position, b.position);
    assert_eq!(a.velocity, b.velocity);
    assert_eq!(a.radius, b.radius);
    assert!(a.velocity.hypot() <= 40.0 + 1e-9);
}

#[test]
fn shrinking_canvas_below_diameter_shrinks_radius_and_keeps_moving() {
    let mut e = Entity::new(
        Point::new(50.0, 40.0),
        Vec2::new(30.0, 20.0),
        15.0,
        ColorRequest::default(),
        canvas(true),
    );
    let strip = FormatState::new(Size::new(200.0, 20.0));
    Observer::update(
        &mut e,
        &Notification::Format {
            new: strip,
            old: canvas(true),
        },
    )
    .unwrap();
    assert_eq!(e.radius, 10.0);
    assert_eq!(e.position.y, 0.0);
    assert_eq!(e.velocity.y, 0.0);

    for _ in 0..10 {
        e.step(0.1);
        assert!(e.velocity.x > 0.0);
        assert_eq!(e.position.y, 0.0);
    }
    assert!((e.position.x - 80.0).abs() < 1e-9);
}

#[test]
fn spawned_entity_filling_the_short_side_does_not_move_across_it() {
    let mut spawner = EntitySpawner::new(50.0, 80.0, 40.0).unwrap();
    let format = FormatState::new(Size::new(300.0, 60.0));
    for seed in 0..8 {
        let e = spawner.spawn(&format, &mut StdRng::seed_from_u64(seed));
        assert_eq!(e.radius, 30.0);
        assert_eq!(e.position.y, 0.0);
        assert_eq!(e.velocity.y, 0.0);
    }
}
