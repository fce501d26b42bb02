//! One running sketch instance: everything the frame loop touches lives here
//! instead of in globals.

use crate::chain::Chain;
use crate::config::{SketchConfig, Viewport, WanderConfig};
use crate::error::ConfigError;
use crate::geometry::{Point, Surface};
use crate::mesh::{AlphaMask, RibbonMesh};
use crate::motion::MotionSource;
use crate::palette::{segment_tint_index, Palette};
use crate::rain::{GridFlowField, PaintRain, RainConfig};
use std::time::Duration;

/// Scroll rate of the segment tint, in tint cycles per spacing travelled.
const TINT_SCROLL: f64 = 1.2;

#[derive(Clone, Debug)]
pub struct RibbonSketch {
    config: SketchConfig,
    surface: Surface,
    palette: Palette,
    motion: MotionSource,
    chain: Chain,
    mesh: RibbonMesh,
}

impl RibbonSketch {
    pub fn new(config: SketchConfig, viewport: &Viewport, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let surface = viewport.surface();
        // The ribbon starts folded off the bottom-right corner and swims in.
        let chain = Chain::new(config.chain.clone(), Point::new(surface.width, surface.height))?;
        let motion = MotionSource::new(config.wander.clone(), surface, viewport.resolution(), seed);
        let mut mesh = RibbonMesh::new(chain.len(), &config.ribbon);
        mesh.rebuild(&chain, surface);
        log::debug!(
            "[sketch] ribbon ready: {} links on {:.0}x{:.0}",
            chain.len(),
            surface.width,
            surface.height
        );
        Ok(Self {
            config,
            surface,
            palette: Palette::default(),
            motion,
            chain,
            mesh,
        })
    }

    #[inline]
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn motion(&self) -> &MotionSource {
        &self.motion
    }

    #[inline]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    #[inline]
    pub fn mesh(&self) -> &RibbonMesh {
        &self.mesh
    }

    /// Pointer or touch position in CSS pixels.
    pub fn pointer_input(&mut self, css: Point, now: Duration) {
        self.motion.pointer_input(css, now);
    }

    /// One simulation step. Returns true when the chain moved and the mesh
    /// was rebuilt, i.e. when the frame needs repainting.
    pub fn tick(&mut self, now: Duration) -> bool {
        let target = self.motion.update(now, self.surface);
        if !self.chain.advance(target) {
            return false;
        }
        self.mesh.rebuild(&self.chain, self.surface);
        true
    }

    /// Runs part of the transparency scan when the ribbon is configured for it.
    pub fn scan_transparency<M: AlphaMask + ?Sized>(&mut self, mask: &M, budget: usize) -> usize {
        if !self.config.ribbon.scan_transparency {
            return 0;
        }
        self.mesh.scan_transparency(mask, budget)
    }

    /// Offset fed to the segment tint so colours travel along the ribbon.
    pub fn tint_offset(&self) -> f64 {
        self.chain.path_length() / self.config.chain.segment_spacing * TINT_SCROLL
    }

    /// Index into a `steps`-entry tint table for `segment`, phased over the
    /// whole link count.
    pub fn segment_tint(&self, segment: usize, steps: usize) -> usize {
        segment_tint_index(segment, self.chain.len(), self.tint_offset(), steps)
    }

    /// Adopts a new surface size without rebuilding the chain.
    pub fn resize(&mut self, viewport: &Viewport) {
        self.surface = viewport.surface();
        self.motion.set_resolution(viewport.resolution());
        self.mesh.rebuild(&self.chain, self.surface);
        log::info!(
            "[sketch] resized to {:.0}x{:.0}",
            self.surface.width,
            self.surface.height
        );
    }
}

/// Wet-paint sketch: drops steered by the same motion source as the ribbons.
#[derive(Clone, Debug)]
pub struct RainSketch {
    motion: MotionSource,
    rain: PaintRain<GridFlowField>,
}

impl RainSketch {
    pub fn new(config: RainConfig, viewport: &Viewport, seed: u64) -> Self {
        let surface = viewport.surface();
        Self {
            motion: MotionSource::new(WanderConfig::default(), surface, viewport.resolution(), seed),
            rain: PaintRain::with_noise(config, surface, seed),
        }
    }

    #[inline]
    pub fn rain(&self) -> &PaintRain<GridFlowField> {
        &self.rain
    }

    #[inline]
    pub fn motion(&self) -> &MotionSource {
        &self.motion
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.rain.surface()
    }

    pub fn pointer_input(&mut self, css: Point, now: Duration) {
        self.motion.pointer_input(css, now);
    }

    pub fn tick(&mut self, now: Duration) {
        let target = self.motion.update(now, self.rain.surface());
        self.rain.update(target);
    }

    /// Starts a fresh shower sized for `viewport`.
    pub fn resize(&mut self, viewport: &Viewport) {
        self.motion.set_resolution(viewport.resolution());
        self.rain.respawn(viewport.surface());
    }
}
