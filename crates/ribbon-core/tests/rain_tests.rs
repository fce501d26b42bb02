// Host-side tests for the paint drop simulation.

use ribbon_core::*;

fn still_field() -> GridFlowField {
    GridFlowField::from_fn(100, |_, _| 0.0, |_, _| 0.0)
}

fn small_config(drop_count: usize) -> RainConfig {
    RainConfig {
        drop_count,
        ..RainConfig::default()
    }
}

#[test]
fn drops_spawn_above_the_surface() {
    let surface = Surface::new(400.0, 300.0);
    let config = small_config(500);
    let rain = PaintRain::new(config.clone(), surface, still_field(), 9);
    assert_eq!(rain.drops().len(), 500);
    for drop in rain.drops() {
        assert!(drop.position.x >= 0.0 && drop.position.x < 400.0);
        assert!(drop.position.y <= 0.0 && drop.position.y > -config.spawn_depth);
        assert!(drop.radius >= config.min_radius);
        assert!(drop.radius < config.min_radius + config.radius_span);
        assert_eq!(drop.color, config.color_for_radius(drop.radius));
    }
}

#[test]
fn drop_colour_follows_radius() {
    let config = RainConfig::default();
    let [c0, _, c2] = config.colors;
    assert_eq!(config.color_for_radius(0.0), c0);
    assert_eq!(config.color_for_radius(42.5), c2);
}

#[test]
fn drops_fall_and_pointer_steers_once_on_screen() {
    let surface = Surface::new(100.0, 100.0);
    let config = RainConfig {
        spawn_depth: 0.0,
        ..small_config(20)
    };
    let mut rain = PaintRain::new(config, surface, still_field(), 4);
    let start: Vec<(f64, f64)> = rain
        .drops()
        .iter()
        .map(|d| (d.radius, d.position.x))
        .collect();

    // Pointer at the left edge pushes drops left, but only below the top row.
    rain.update(Point::new(0.0, 50.0));
    for drop in rain.drops() {
        let (_, x0) = start.iter().find(|(r, _)| *r == drop.radius).unwrap();
        assert_eq!(drop.position.x, *x0);
        assert!((drop.position.y - (3.0 + drop.radius / 50.0)).abs() < 1e-9);
    }
    rain.update(Point::new(0.0, 50.0));
    for drop in rain.drops() {
        let (_, x0) = start.iter().find(|(r, _)| *r == drop.radius).unwrap();
        assert!((drop.position.x - (x0 - 3.0)).abs() < 1e-9);
    }
}

#[test]
fn drops_are_sorted_by_top_edge() {
    let mut rain = PaintRain::with_noise(small_config(300), Surface::new(200.0, 200.0), 11);
    for _ in 0..5 {
        rain.update(Point::new(150.0, 0.0));
        let tops: Vec<f64> = rain
            .drops()
            .iter()
            .map(|d| d.position.y - d.radius)
            .collect();
        assert!(tops.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn respawn_uses_new_surface() {
    let mut rain = PaintRain::new(small_config(50), Surface::new(100.0, 100.0), still_field(), 2);
    rain.respawn(Surface::new(10.0, 500.0));
    assert_eq!(rain.surface(), Surface::new(10.0, 500.0));
    assert_eq!(rain.drops().len(), 50);
    assert!(rain.drops().iter().all(|d| d.position.x < 10.0));
}

#[test]
fn flow_field_is_zero_outside_grid() {
    let field = GridFlowField::from_fn(4, |x, _| x as f64, |_, y| y as f64 * 2.0);
    assert_eq!(field.resolution(), 4);
    assert_eq!(field.sample(3, 2), Point::new(3.0, 4.0));
    assert_eq!(field.sample(4, 0), Point::ZERO);
    assert_eq!(field.sample(-1, 1), Point::ZERO);
    assert_eq!(field.sample(0, 4), Point::ZERO);
}

#[test]
fn noise_field_is_seeded_bounded_and_zero_on_lattice() {
    let a = GridFlowField::noise(100, 3);
    let b = GridFlowField::noise(100, 3);
    let mut layers_differ = false;
    for gy in 0..100 {
        for gx in 0..100 {
            let v = a.sample(gx, gy);
            assert_eq!(v, b.sample(gx, gy));
            assert!(v.x.abs() <= 1.0 + 1e-9 && v.y.abs() <= 1.0 + 1e-9);
            if gx % 20 == 0 && gy % 20 == 0 {
                assert_eq!(v, Point::ZERO);
            }
            layers_differ |= v.x != v.y;
        }
    }
    assert!(layers_differ);
}
