// Host-side tests for sketch presets and parameter validation.

use ribbon_core::*;

fn desktop() -> Viewport {
    Viewport::new(1200.0, 800.0, 1.0, false)
}

#[test]
fn viewport_resolution_is_clamped() {
    assert_eq!(Viewport::new(100.0, 100.0, 3.0, false).resolution(), 2.0);
    assert_eq!(Viewport::new(100.0, 100.0, 1.5, false).resolution(), 1.5);
    assert_eq!(Viewport::new(100.0, 100.0, 0.0, false).resolution(), 1.0);
    assert_eq!(Viewport::new(100.0, 100.0, f64::NAN, false).resolution(), 1.0);
    let hi = Viewport::new(600.0, 400.0, 2.0, true);
    assert_eq!(hi.surface(), Surface::new(1200.0, 800.0));
    assert_eq!(hi.size_factor(), 0.5);
}

#[test]
fn toothpaste_preset() {
    let config = SketchConfig::toothpaste(&desktop());
    assert_eq!(config.chain.link_count, 300);
    assert_eq!(config.chain.segment_spacing, 20.0);
    assert!((config.chain.max_turn_per_step - 20.0 / 300.0 * 2.0).abs() < 1e-12);
    assert_eq!(config.chain.max_head_speed, 300.0);
    assert_eq!(config.chain.speed_damp, 10.0);
    assert_eq!(config.chain.heading_damping, SKETCH_HEADING_DAMPING);
    assert_eq!(config.ribbon.half_width, 150.0);
    assert_eq!(config.ribbon.rows, 2);
    assert_eq!(config.ribbon.paint, PaintStyle::Linear);
    assert!(!config.ribbon.caps);
    assert!(config.validate().is_ok());
}

#[test]
fn softice_preset_is_shorter_with_caps() {
    let config = SketchConfig::softice(&desktop());
    assert_eq!(config.chain.link_count, 200);
    assert!(config.ribbon.caps);

    let mobile = SketchConfig::softice(&Viewport::new(1200.0, 800.0, 1.0, true));
    assert_eq!(mobile.chain.segment_spacing, 26.0);
    assert_eq!(mobile.chain.link_count, (3000.0f64 / 26.0).ceil() as usize);
}

#[test]
fn type_twister_sizes_from_texture() {
    let config = SketchConfig::type_twister(&desktop(), 600.0, 120.0).unwrap();
    assert_eq!(config.chain.link_count, 10);
    assert_eq!(config.chain.segment_spacing, 60.0);
    assert_eq!(config.ribbon.rows, 2);
    assert_eq!(config.ribbon.half_width, 60.0);
    assert!((config.chain.max_turn_per_step - 0.6).abs() < 1e-12);
    assert_eq!(config.chain.max_head_speed, 200.0);
    assert!(config.ribbon.scan_transparency);
    assert_eq!(
        config.ribbon.paint,
        PaintStyle::Texture {
            width: 600.0,
            height: 120.0
        }
    );

    let tall = SketchConfig::type_twister(&desktop(), 1200.0, 300.0).unwrap();
    assert_eq!(tall.ribbon.rows, 5);
}

#[test]
fn type_twister_keeps_one_span_for_short_text() {
    let narrow = SketchConfig::type_twister(&desktop(), 70.0, 140.0).unwrap();
    assert_eq!(narrow.chain.link_count, 2);
    assert_eq!(narrow.chain.segment_spacing, 35.0);
    assert_eq!(narrow.ribbon.rows, 4);

    let mobile = Viewport::new(600.0, 400.0, 2.0, true);
    let config = SketchConfig::type_twister(&mobile, 150.0, 200.0).unwrap();
    assert_eq!(config.chain.link_count, 2);
    assert!(RibbonSketch::new(config, &mobile, 1).is_ok());
}

#[test]
fn type_twister_rejects_empty_textures() {
    assert!(matches!(
        SketchConfig::type_twister(&desktop(), 0.0, 40.0),
        Err(ConfigError::EmptyTexture { .. })
    ));
}

#[test]
fn chain_validation() {
    let mut config = ChainConfig::new(10, 5.0, 0.1);
    assert!(config.validate().is_ok());
    assert_eq!(config.max_head_step(), 30.0);

    config.heading_damping = 1.0;
    assert_eq!(config.validate(), Err(ConfigError::DampingOutOfRange(1.0)));
    config.heading_damping = 0.0;
    config.segment_spacing = f64::INFINITY;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotPositive {
            name: "segment_spacing",
            ..
        })
    ));
}

#[test]
fn ribbon_validation() {
    let mut ribbon = RibbonConfig::strip(10.0, PaintStyle::Linear);
    assert!(ribbon.validate().is_ok());
    ribbon.rows = 1;
    assert_eq!(ribbon.validate(), Err(ConfigError::TooFewRows(1)));
    ribbon.rows = 2;
    ribbon.half_width = -1.0;
    assert!(ribbon.validate().is_err());
    let texture = RibbonConfig::strip(
        10.0,
        PaintStyle::Texture {
            width: 10.0,
            height: 0.0,
        },
    );
    assert!(matches!(
        texture.validate(),
        Err(ConfigError::EmptyTexture { .. })
    ));
}

#[test]
fn sketch_kind_names_round_trip() {
    for kind in SketchKind::ALL {
        assert_eq!(SketchKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(SketchKind::from_name(" SoftIce "), Some(SketchKind::SoftIce));
    assert_eq!(SketchKind::from_name("marbles"), None);
}

#[test]
fn errors_render_readably() {
    let err = ConfigError::NotPositive {
        name: "half_width",
        value: -2.0,
    };
    assert_eq!(err.to_string(), "half_width must be positive and finite, got -2");
}
