//! Target point for the chain head.
//!
//! Pointer input drives the target directly. After `idle_timeout` without
//! input the source goes back to an autonomous wander: six phases advancing
//! at different rates combine into a radius and an angle around the surface
//! centre. Time is passed in by the caller so tests can use a fake clock.

use crate::config::WanderConfig;
use crate::geometry::{direction, Point, Surface};
use rand::prelude::*;
use std::f64::consts::TAU;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionMode {
    Autonomous,
    Driven,
}

#[derive(Clone, Copy, Debug)]
struct Handoff {
    from: Point,
    tick: u32,
}

#[derive(Clone, Debug)]
pub struct MotionSource {
    config: WanderConfig,
    mode: MotionMode,
    target: Point,
    phases: [f64; 6],
    resolution: f64,
    last_input: Option<Duration>,
    handoff: Option<Handoff>,
}

impl MotionSource {
    /// Starts autonomous at the surface centre with random phases from `seed`.
    pub fn new(config: WanderConfig, surface: Surface, resolution: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let phases = std::array::from_fn(|_| rng.gen::<f64>() * TAU);
        Self::with_phases(config, surface, resolution, phases)
    }

    pub fn with_phases(
        config: WanderConfig,
        surface: Surface,
        resolution: f64,
        phases: [f64; 6],
    ) -> Self {
        Self {
            config,
            mode: MotionMode::Autonomous,
            target: surface.center(),
            phases,
            resolution,
            last_input: None,
            handoff: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    /// Current target in surface pixels.
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    #[inline]
    pub fn phases(&self) -> [f64; 6] {
        self.phases
    }

    /// Surface pixels per CSS pixel applied to pointer input.
    pub fn set_resolution(&mut self, resolution: f64) {
        self.resolution = resolution;
    }

    /// Pointer or touch position in CSS pixels observed at `now`.
    pub fn pointer_input(&mut self, css: Point, now: Duration) {
        if self.mode == MotionMode::Autonomous {
            log::debug!("[motion] pointer input, switching to driven");
        }
        self.target = css * self.resolution;
        self.mode = MotionMode::Driven;
        self.last_input = Some(now);
        self.handoff = None;
    }

    /// Advances one tick and returns the target for it.
    pub fn update(&mut self, now: Duration, surface: Surface) -> Point {
        if self.mode == MotionMode::Driven {
            let idle = self
                .last_input
                .map_or(true, |t| now.saturating_sub(t) >= self.config.idle_timeout);
            if idle {
                log::debug!("[motion] idle for {:?}, resuming wander", self.config.idle_timeout);
                self.mode = MotionMode::Autonomous;
                self.handoff = Some(Handoff {
                    from: self.target,
                    tick: 0,
                });
            }
        }
        if self.mode == MotionMode::Autonomous {
            let wander = self.step_wander(surface);
            let ticks = self.config.handoff_ticks;
            let blended = self.handoff.as_mut().and_then(|h| {
                h.tick += 1;
                let t = h.tick as f64 / ticks.max(1) as f64;
                (t < 1.0).then(|| h.from.lerp(wander, t))
            });
            if blended.is_none() {
                self.handoff = None;
            }
            self.target = blended.unwrap_or(wander);
        }
        self.target
    }

    fn step_wander(&mut self, surface: Surface) -> Point {
        let m = self.config.base_rate;
        let a = &mut self.phases;
        a[1] += m * 0.012;
        a[2] += m * 0.02;
        a[3] += m * 0.03;
        a[4] += m * 0.04;
        a[5] += m * 0.1;
        a[0] += m * 0.07 * a[2].cos() * a[3].sin();
        wander_point(&self.phases, surface)
    }
}

/// Point on the wander path for the given phases.
pub fn wander_point(phases: &[f64; 6], surface: Surface) -> Point {
    let r0 = surface.width.max(surface.height) / 4.0;
    let r = r0 + r0 * 2.0 / 3.0 * phases[1].cos() * phases[4].sin()
        - r0 * 2.0 / 3.0 * phases[5].sin();
    surface.center() + direction(phases[0]) * r
}
