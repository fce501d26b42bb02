// Host-side tests for the motion source state machine, driven by a fake clock.

use ribbon_core::*;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(16);

fn surface() -> Surface {
    Surface::new(1200.0, 800.0)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn starts_autonomous_at_the_centre() {
    let source = MotionSource::new(WanderConfig::default(), surface(), 1.0, 1);
    assert_eq!(source.mode(), MotionMode::Autonomous);
    assert_eq!(source.target(), surface().center());
}

#[test]
fn wander_moves_and_stays_near_the_surface() {
    let mut source = MotionSource::new(WanderConfig::default(), surface(), 1.0, 7);
    let mut last = source.target();
    let mut moved = false;
    for i in 1..500u64 {
        let p = source.update(TICK * i as u32, surface());
        moved |= p != last;
        last = p;
        // Radius never exceeds r0 + 4/3 r0 around the centre.
        assert!(p.distance(surface().center()) <= 700.0 + 1e-9);
    }
    assert!(moved);
}

#[test]
fn wander_point_is_deterministic_for_phases() {
    let phases = [0.0; 6];
    let p = wander_point(&phases, surface());
    // r = r0 with every trig term at zero; angle 0 points along +x.
    assert!((p - Point::new(900.0, 400.0)).length() < 1e-9);
}

#[test]
fn pointer_input_drives_target_in_surface_pixels() {
    let mut source = MotionSource::new(WanderConfig::default(), surface(), 2.0, 3);
    source.pointer_input(Point::new(10.0, 20.0), ms(100));
    assert_eq!(source.mode(), MotionMode::Driven);
    let phases = source.phases();
    for i in 1..100u64 {
        assert_eq!(source.update(ms(100 + 16 * i), surface()), Point::new(20.0, 40.0));
    }
    // Wander is frozen while the pointer drives.
    assert_eq!(source.phases(), phases);
}

#[test]
fn idle_pointer_hands_back_to_wander() {
    let config = WanderConfig::default();
    let timeout = config.idle_timeout;
    let mut source = MotionSource::new(config, surface(), 1.0, 5);
    source.pointer_input(Point::new(100.0, 100.0), ms(0));

    source.update(timeout - ms(1), surface());
    assert_eq!(source.mode(), MotionMode::Driven);

    source.update(timeout, surface());
    assert_eq!(source.mode(), MotionMode::Autonomous);

    // New input takes over again immediately.
    source.pointer_input(Point::new(300.0, 200.0), timeout + TICK);
    assert_eq!(source.mode(), MotionMode::Driven);
    assert_eq!(source.target(), Point::new(300.0, 200.0));
}

#[test]
fn target_is_continuous_across_mode_switch() {
    for seed in [1, 2, 3, 42, 1234] {
        let mut source = MotionSource::new(WanderConfig::default(), surface(), 1.0, seed);
        source.pointer_input(Point::new(100.0, 100.0), ms(0));
        let mut last = source.target();
        let mut now = ms(0);
        for _ in 0..600 {
            now += TICK;
            let p = source.update(now, surface());
            assert!(
                p.distance(last) < 40.0,
                "seed {seed}: jumped {} at {now:?}",
                p.distance(last)
            );
            last = p;
        }
        assert_eq!(source.mode(), MotionMode::Autonomous);
    }
}

#[test]
fn hand_off_ends_on_the_wander_path() {
    let config = WanderConfig::default();
    let ticks = config.handoff_ticks as u64;
    let mut source = MotionSource::with_phases(config, surface(), 1.0, [0.0; 6]);
    source.pointer_input(Point::new(100.0, 100.0), ms(0));
    let mut now = IDLE_TIMEOUT;
    for _ in 0..ticks + 1 {
        source.update(now, surface());
        now += TICK;
    }
    assert_eq!(source.target(), wander_point(&source.phases(), surface()));
}
