//! Per-sketch parameters.
//!
//! The simulation takes explicit numbers; the presets below derive those
//! numbers from the viewport the same way every sketch does: a single
//! `size_factor` relative to a 1200px reference plus a mobile switch.

use crate::constants::{
    DEFAULT_HEADING_DAMPING, HANDOFF_TICKS, IDLE_TIMEOUT, MAX_RESOLUTION, NOOP_THRESHOLD_PX,
    REFERENCE_VIEWPORT_PX, WANDER_BASE_RATE,
};
use crate::error::{ensure_positive, ConfigError};
use crate::geometry::Surface;
use std::time::Duration;

// The published sketches keep 80% of the previous heading every tick.
pub const SKETCH_HEADING_DAMPING: f64 = 0.8;

/// Browser viewport as reported by the page, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
    pub mobile: bool,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64, mobile: bool) -> Self {
        Self {
            css_width,
            css_height,
            device_pixel_ratio,
            mobile,
        }
    }

    #[inline]
    pub fn size_factor(&self) -> f64 {
        self.css_width.max(self.css_height) / REFERENCE_VIEWPORT_PX
    }

    /// Backing-store pixels per CSS pixel, clamped to `MAX_RESOLUTION`.
    #[inline]
    pub fn resolution(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(MAX_RESOLUTION)
        } else {
            1.0
        }
    }

    pub fn surface(&self) -> Surface {
        let res = self.resolution();
        Surface::new(self.css_width * res, self.css_height * res)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChainConfig {
    pub link_count: usize,
    pub segment_spacing: f64,
    pub max_turn_per_step: f64,
    pub max_head_speed: f64,
    pub speed_damp: f64,
    /// Fraction of the heading error left uncorrected each tick (0 snaps instantly).
    pub heading_damping: f64,
    pub noop_threshold: f64,
}

impl ChainConfig {
    pub fn new(link_count: usize, segment_spacing: f64, max_turn_per_step: f64) -> Self {
        Self {
            link_count,
            segment_spacing,
            max_turn_per_step,
            max_head_speed: 300.0,
            speed_damp: 10.0,
            heading_damping: DEFAULT_HEADING_DAMPING,
            noop_threshold: NOOP_THRESHOLD_PX,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.link_count < 2 {
            return Err(ConfigError::TooFewLinks(self.link_count));
        }
        ensure_positive("segment_spacing", self.segment_spacing)?;
        ensure_positive("max_turn_per_step", self.max_turn_per_step)?;
        ensure_positive("max_head_speed", self.max_head_speed)?;
        ensure_positive("speed_damp", self.speed_damp)?;
        ensure_positive("noop_threshold", self.noop_threshold)?;
        if !(0.0..1.0).contains(&self.heading_damping) {
            return Err(ConfigError::DampingOutOfRange(self.heading_damping));
        }
        Ok(())
    }

    /// Largest distance the head can cover in one tick.
    #[inline]
    pub fn max_head_step(&self) -> f64 {
        self.max_head_speed / self.speed_damp
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintStyle {
    /// Banded sheen gradient across each triangle.
    Linear,
    /// Sheen as concentric rings around the bend centre of each span.
    RadialJoint,
    /// Affine-mapped texture of the given pixel size.
    Texture { width: f64, height: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RibbonConfig {
    pub half_width: f64,
    /// Boundary points per link; 2 gives a plain strip.
    pub rows: usize,
    pub paint: PaintStyle,
    pub caps: bool,
    pub scan_transparency: bool,
}

impl RibbonConfig {
    pub fn strip(half_width: f64, paint: PaintStyle) -> Self {
        Self {
            half_width,
            rows: 2,
            paint,
            caps: false,
            scan_transparency: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("half_width", self.half_width)?;
        if self.rows < 2 {
            return Err(ConfigError::TooFewRows(self.rows));
        }
        if let PaintStyle::Texture { width, height } = self.paint {
            if !(width > 0.0 && height > 0.0) {
                return Err(ConfigError::EmptyTexture { width, height });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WanderConfig {
    pub base_rate: f64,
    pub idle_timeout: Duration,
    pub handoff_ticks: u32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            base_rate: WANDER_BASE_RATE,
            idle_timeout: IDLE_TIMEOUT,
            handoff_ticks: HANDOFF_TICKS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchKind {
    Toothpaste,
    SoftIce,
    TypeTwister,
    WetPaint,
}

impl SketchKind {
    pub const ALL: [SketchKind; 4] = [
        SketchKind::Toothpaste,
        SketchKind::SoftIce,
        SketchKind::TypeTwister,
        SketchKind::WetPaint,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SketchKind::Toothpaste => "toothpaste",
            SketchKind::SoftIce => "softice",
            SketchKind::TypeTwister => "type-twister",
            SketchKind::WetPaint => "wet-paint",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SketchConfig {
    pub chain: ChainConfig,
    pub ribbon: RibbonConfig,
    pub wander: WanderConfig,
}

impl SketchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chain.validate()?;
        self.ribbon.validate()
    }

    /// Long flat ribbon with the banded sheen gradient.
    pub fn toothpaste(viewport: &Viewport) -> Self {
        let length = if viewport.mobile { 4000.0 } else { 6000.0 };
        Self::sheen_ribbon(viewport, length, false)
    }

    /// Shorter sheen ribbon closed by rounded caps.
    pub fn softice(viewport: &Viewport) -> Self {
        let length = if viewport.mobile { 3000.0 } else { 4000.0 };
        Self::sheen_ribbon(viewport, length, true)
    }

    fn sheen_ribbon(viewport: &Viewport, length_px: f64, caps: bool) -> Self {
        let sf = viewport.size_factor();
        let res = viewport.resolution();
        let length = length_px * res * sf;
        let width = 300.0 * res * sf;
        let spacing = (if viewport.mobile { 26.0 } else { 20.0 }) * res * sf;
        let link_count = (length / spacing).ceil() as usize;
        let mut chain = ChainConfig::new(link_count, spacing, spacing / width * 2.0);
        chain.max_head_speed = 300.0 * sf;
        chain.speed_damp = 10.0 * sf;
        chain.heading_damping = SKETCH_HEADING_DAMPING;
        let mut ribbon = RibbonConfig::strip(width / 2.0, PaintStyle::Linear);
        ribbon.caps = caps;
        log::debug!(
            "[config] ribbon links={} spacing={:.2} width={:.2} caps={}",
            link_count,
            spacing,
            width,
            caps
        );
        Self {
            chain,
            ribbon,
            wander: WanderConfig::default(),
        }
    }

    /// Grid ribbon textured with a `texture_width` x `texture_height` image.
    pub fn type_twister(
        viewport: &Viewport,
        texture_width: f64,
        texture_height: f64,
    ) -> Result<Self, ConfigError> {
        if !(texture_width > 0.0 && texture_height > 0.0) {
            return Err(ConfigError::EmptyTexture {
                width: texture_width,
                height: texture_height,
            });
        }
        let sf = viewport.size_factor();
        ensure_positive("size_factor", sf)?;
        let length = texture_width * sf;
        let width = texture_height * sf;
        let segment = if viewport.mobile { 80.0 } else { 60.0 };
        // Short text still gets one span.
        let link_count = ((texture_width / segment).floor() as usize).max(2);
        let spacing = length / link_count as f64;
        let rows = ((width / spacing).round() as usize).max(2);
        let mut chain = ChainConfig::new(link_count, spacing, spacing / width * 1.2);
        chain.max_head_speed = 200.0 * sf;
        chain.speed_damp = 10.0 * sf;
        chain.heading_damping = SKETCH_HEADING_DAMPING;
        let ribbon = RibbonConfig {
            half_width: width / 2.0,
            rows,
            paint: PaintStyle::Texture {
                width: texture_width,
                height: texture_height,
            },
            caps: false,
            scan_transparency: true,
        };
        log::debug!(
            "[config] type twister links={} rows={} spacing={:.2}",
            link_count,
            rows,
            spacing
        );
        let config = Self {
            chain,
            ribbon,
            wander: WanderConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}
