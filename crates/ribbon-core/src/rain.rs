//! Paint drops falling through a flow field.
//!
//! Drops start above the surface, fall with gravity (bigger drops faster),
//! and once on screen are pushed by a sampled flow field and sideways by the
//! pointer. The renderer never clears, so the drops leave streaks of paint.

use crate::constants::{RAIN_COLORS, RAIN_FLOW_RESOLUTION};
use crate::geometry::{Point, Surface};
use crate::palette::Rgb;
use noise::{NoiseFn, Perlin};
use rand::prelude::*;
use std::f64::consts::PI;

/// Two-component field sampled on an integer grid.
pub trait FlowField {
    fn resolution(&self) -> usize;
    /// Flow at grid cell `(gx, gy)`; zero outside the grid.
    fn sample(&self, gx: i64, gy: i64) -> Point;
}

#[derive(Clone, Debug)]
pub struct GridFlowField {
    resolution: usize,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl GridFlowField {
    pub fn from_fn(
        resolution: usize,
        mut fx: impl FnMut(usize, usize) -> f64,
        mut fy: impl FnMut(usize, usize) -> f64,
    ) -> Self {
        let mut x = Vec::with_capacity(resolution * resolution);
        let mut y = Vec::with_capacity(resolution * resolution);
        for gy in 0..resolution {
            for gx in 0..resolution {
                x.push(fx(gx, gy));
                y.push(fy(gx, gy));
            }
        }
        Self { resolution, x, y }
    }

    /// Perlin noise on both axes, one independently seeded layer each,
    /// sampled every twentieth of a lattice cell per grid step.
    pub fn noise(resolution: usize, seed: u64) -> Self {
        let nx = Perlin::new(seed as u32);
        let ny = Perlin::new((seed >> 32) as u32 ^ 0x9E37_79B9);
        Self::from_fn(
            resolution,
            |gx, gy| nx.get([gx as f64 / 20.0, gy as f64 / 20.0]),
            |gx, gy| ny.get([gx as f64 / 20.0, gy as f64 / 20.0]),
        )
    }
}

impl FlowField for GridFlowField {
    fn resolution(&self) -> usize {
        self.resolution
    }

    fn sample(&self, gx: i64, gy: i64) -> Point {
        let res = self.resolution as i64;
        if gx < 0 || gy < 0 || gx >= res || gy >= res {
            return Point::ZERO;
        }
        let n = (gy * res + gx) as usize;
        Point::new(self.x[n], self.y[n])
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drop {
    pub position: Point,
    pub radius: f64,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RainConfig {
    pub drop_count: usize,
    pub gravity: Point,
    pub min_radius: f64,
    pub radius_span: f64,
    /// Drops spawn up to this far above the surface.
    pub spawn_depth: f64,
    pub colors: [Rgb; 3],
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            drop_count: 10_000,
            gravity: Point::new(0.0, 3.0),
            min_radius: 5.0,
            radius_span: 80.0,
            spawn_depth: 100_000.0,
            colors: RAIN_COLORS.map(Rgb::from_u32),
        }
    }
}

impl RainConfig {
    /// Size-dependent colour: small and very large drops lean to the first
    /// pair of colours, mid-sized ones to the second.
    pub fn color_for_radius(&self, radius: f64) -> Rgb {
        let [c0, c1, c2] = self.colors;
        let n = (radius / 85.0 * PI).sin();
        if n < 0.5 {
            c0.lerp(c1, n)
        } else {
            c1.lerp(c2, n)
        }
    }
}

#[derive(Clone, Debug)]
pub struct PaintRain<F: FlowField> {
    config: RainConfig,
    flow: F,
    drops: Vec<Drop>,
    surface: Surface,
    rng: StdRng,
}

impl PaintRain<GridFlowField> {
    pub fn with_noise(config: RainConfig, surface: Surface, seed: u64) -> Self {
        let flow = GridFlowField::noise(RAIN_FLOW_RESOLUTION, seed);
        Self::new(config, surface, flow, seed)
    }
}

impl<F: FlowField> PaintRain<F> {
    pub fn new(config: RainConfig, surface: Surface, flow: F, seed: u64) -> Self {
        let mut rain = Self {
            config,
            flow,
            drops: Vec::new(),
            surface,
            rng: StdRng::seed_from_u64(seed),
        };
        rain.respawn(surface);
        rain
    }

    #[inline]
    pub fn drops(&self) -> &[Drop] {
        &self.drops
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Replaces every drop with a fresh one above `surface`.
    pub fn respawn(&mut self, surface: Surface) {
        self.surface = surface;
        let cfg = &self.config;
        let rng = &mut self.rng;
        self.drops = (0..cfg.drop_count)
            .map(|_| {
                let x = rng.gen::<f64>() * surface.width;
                let y = -cfg.spawn_depth * rng.gen::<f64>();
                let radius = cfg.min_radius + cfg.radius_span * rng.gen::<f64>();
                Drop {
                    position: Point::new(x, y),
                    radius,
                    color: cfg.color_for_radius(radius),
                }
            })
            .collect();
        log::info!(
            "[rain] spawned {} drops for {:.0}x{:.0}",
            self.drops.len(),
            surface.width,
            surface.height
        );
    }

    /// One tick. `pointer` is the current target in surface pixels; its
    /// horizontal offset from the centre steers the drops.
    pub fn update(&mut self, pointer: Point) {
        let Surface { width, height } = self.surface;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let res = self.flow.resolution() as f64;
        let steer = 0.5 - pointer.x / width;
        let gravity = self.config.gravity;
        for drop in &mut self.drops {
            let gx = (drop.position.x / width * res).round() as i64;
            let gy = (drop.position.y / height * res).round() as i64;
            drop.position.y += gravity.y + drop.radius / 50.0;
            if gy > 0 {
                let flow = self.flow.sample(gx, gy);
                drop.position.x += gravity.x - 6.0 * steer + 6.0 * flow.x;
                drop.position.y += 8.0 * flow.y;
            }
        }
        // Paint order: drops whose top edge is higher go first.
        self.drops.sort_by(|a, b| {
            (a.position.y - a.radius).total_cmp(&(b.position.y - b.radius))
        });
    }
}
