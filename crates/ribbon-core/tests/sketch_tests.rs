// Host-side tests for whole sketch instances.

use ribbon_core::*;
use std::time::Duration;

fn viewport() -> Viewport {
    Viewport::new(1200.0, 800.0, 1.0, false)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn ribbon_swims_in_from_the_corner() {
    let config = SketchConfig::toothpaste(&viewport());
    let mut sketch = RibbonSketch::new(config, &viewport(), 7).unwrap();
    assert_eq!(sketch.chain().head().position, Point::new(1200.0, 800.0));
    assert_eq!(sketch.mesh().triangles().len(), 299 * 2);

    let start = sketch.chain().head().position;
    sketch.pointer_input(Point::new(600.0, 400.0), ms(0));
    let mut moved = 0;
    for i in 1..=60 {
        if sketch.tick(ms(16 * i)) {
            moved += 1;
        }
    }
    assert!(moved > 0);
    assert!(sketch.chain().head().position.distance(start) > 100.0);
    assert!(!sketch.mesh().draw_list().is_empty());
    assert!(sketch.tint_offset() > 0.0);
}

#[test]
fn pointer_on_the_head_is_a_no_op_tick() {
    let config = SketchConfig::softice(&viewport());
    let mut sketch = RibbonSketch::new(config, &viewport(), 1).unwrap();
    for i in 1..=10 {
        sketch.tick(ms(16 * i));
    }
    let head = sketch.chain().head().position;
    sketch.pointer_input(head, ms(200));
    assert_eq!(sketch.motion().mode(), MotionMode::Driven);
    assert!(!sketch.tick(ms(216)));
    assert_eq!(sketch.chain().head().position, head);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = SketchConfig::toothpaste(&viewport());
    config.ribbon.rows = 0;
    assert!(matches!(
        RibbonSketch::new(config, &viewport(), 0),
        Err(ConfigError::TooFewRows(0))
    ));
}

#[test]
fn scan_only_runs_for_textured_ribbons() {
    let mask = AlphaBuffer::from_rgba(1, 1, vec![0, 0, 0, 255]).unwrap();
    let mut plain = RibbonSketch::new(SketchConfig::toothpaste(&viewport()), &viewport(), 0).unwrap();
    assert_eq!(plain.scan_transparency(&mask, 10), 0);

    let config = SketchConfig::type_twister(&viewport(), 600.0, 120.0).unwrap();
    let mut textured = RibbonSketch::new(config, &viewport(), 0).unwrap();
    assert_eq!(textured.scan_transparency(&mask, 4), 4);
}

#[test]
fn segment_tints_are_phased_over_the_link_count() {
    let config = SketchConfig::type_twister(&viewport(), 600.0, 120.0).unwrap();
    let mut sketch = RibbonSketch::new(config, &viewport(), 0).unwrap();
    assert_eq!(sketch.chain().len(), 10);
    assert_eq!(sketch.segment_tint(0, 1000), 700);
    assert_eq!(sketch.segment_tint(9, 1000), 0);

    sketch.pointer_input(Point::new(100.0, 100.0), ms(0));
    sketch.tick(ms(16));
    let offset = sketch.tint_offset();
    assert!(offset > 0.0);
    assert_eq!(
        sketch.segment_tint(4, 1000),
        segment_tint_index(4, 10, offset, 1000)
    );
}

#[test]
fn resize_keeps_the_chain() {
    let mut sketch =
        RibbonSketch::new(SketchConfig::toothpaste(&viewport()), &viewport(), 3).unwrap();
    let links = sketch.chain().links().to_vec();
    sketch.resize(&Viewport::new(800.0, 600.0, 2.0, false));
    assert_eq!(sketch.surface(), Surface::new(1600.0, 1200.0));
    assert_eq!(sketch.chain().links(), &links[..]);
}

#[test]
fn rain_sketch_ticks_and_respawns() {
    let config = RainConfig {
        drop_count: 64,
        ..RainConfig::default()
    };
    let mut sketch = RainSketch::new(config, &viewport(), 5);
    let before = sketch.rain().drops().to_vec();
    sketch.tick(ms(16));
    assert_eq!(sketch.rain().drops().len(), 64);
    assert_ne!(sketch.rain().drops(), &before[..]);

    sketch.pointer_input(Point::new(10.0, 10.0), ms(32));
    assert_eq!(sketch.motion().mode(), MotionMode::Driven);

    sketch.resize(&Viewport::new(300.0, 300.0, 1.0, true));
    assert_eq!(sketch.surface(), Surface::new(300.0, 300.0));
    assert!(sketch.rain().drops().iter().all(|d| d.position.x < 300.0));
}
