use super::*;

#[test]
fn partial_json_fills_defaults() {
    let cv = ControlValues::from_json_str(r#"{ "orientation": "landscape", "entity_count": 3 }"#)
        .unwrap();
    assert_eq!(cv.orientation, "landscape");
    assert_eq!(cv.entity_count, 3);
    assert_eq!(cv.palette_group, "dale");
    assert_eq!(cv.aspect_ratio, 1.0);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ControlValues::from_json_str("{ nope").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
    assert!(ControlValues::from_path("/definitely/missing.json").is_err());
}

#[test]
fn derive_maps_sentinels_and_enums() {
    let cv = ControlValues {
        color_mode: "random".to_string(),
        palette_variant: -1,
        palette_number: 2,
        ..ControlValues::default()
    };
    let p = SketchParams::derive(&cv).unwrap();
    assert_eq!(p.colors.mode, ColorMode::Random);
    assert_eq!(p.colors.variant, Pick::Any);
    assert_eq!(p.colors.number, Pick::Index(2));
    assert_eq!(p.format.orientation, Orientation::Portrait);
    assert_eq!(p.format.requested_size, Size::new(800.0, 800.0));
}

#[test]
fn derive_is_pure() {
    let cv = ControlValues::default();
    assert_eq!(
        SketchParams::derive(&cv).unwrap(),
        SketchParams::derive(&cv).unwrap()
    );
}

#[test]
fn derive_rejects_unknown_strings() {
    let bad_mode = ControlValues {
        color_mode: "neon".to_string(),
        ..ControlValues::default()
    };
    assert!(SketchParams::derive(&bad_mode).is_err());

    let bad_orientation = ControlValues {
        orientation: "diagonal".to_string(),
        ..ControlValues::default()
    };
    assert!(SketchParams::derive(&bad_orientation).is_err());
}

#[test]
fn validate_catches_component_preconditions() {
    let ok = SketchParams::derive(&ControlValues::default()).unwrap();
    assert!(ok.validate().is_ok());

    for cv in [
        ControlValues {
            aspect_ratio: 0.0,
            ..ControlValues::default()
        },
        ControlValues {
            entity_count: -3,
            ..ControlValues::default()
        },
        ControlValues {
            slow_interval: -0.5,
            ..ControlValues::default()
        },
        ControlValues {
            canvas_width: 0.0,
            ..ControlValues::default()
        },
        ControlValues {
            canvas_height: f64::NAN,
            ..ControlValues::default()
        },
        ControlValues {
            entity_min_radius: 0.0,
            ..ControlValues::default()
        },
        ControlValues {
            entity_min_radius: 20.0,
            entity_max_radius: 10.0,
            ..ControlValues::default()
        },
        ControlValues {
            entity_max_speed: -1.0,
            ..ControlValues::default()
        },
        ControlValues {
            breathe_min: 1.5,
            breathe_max: 1.0,
            ..ControlValues::default()
        },
        ControlValues {
            breathe_increment: 0.0,
            ..ControlValues::default()
        },
    ] {
        assert!(SketchParams::derive(&cv).unwrap().validate().is_err());
    }
}
