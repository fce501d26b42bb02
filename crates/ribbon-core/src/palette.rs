//! Colours and gradient stop sets.

use crate::constants::{SHEEN_BANDS, SHEEN_BASE, SHEEN_COLOR_0, SHEEN_COLOR_1, TINT_RAMP};
use smallvec::SmallVec;
use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parses `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_u32)
    }

    /// Per-channel linear mix, truncated towards zero.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgb,
}

pub type Stops = SmallVec<[ColorStop; 24]>;

/// Gradient stops shared by every triangle of a ribbon, plus the derived cap
/// stops and the fill used where no gradient axis exists.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub base: Rgb,
    pub stops: Stops,
    pub cap_stops: Stops,
}

impl Palette {
    pub fn sheen(base: Rgb, color0: Rgb, color1: Rgb) -> Self {
        let stops = sheen_stops(base, color0, color1, SHEEN_BANDS);
        let cap_stops = cap_stops(&stops);
        Self {
            base,
            stops,
            cap_stops,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::sheen(
            Rgb::from_u32(SHEEN_BASE),
            Rgb::from_u32(SHEEN_COLOR_0),
            Rgb::from_u32(SHEEN_COLOR_1),
        )
    }
}

/// Narrow cosine-spaced bands across the ribbon: odd bands in `base`, even
/// bands alternating `color0` and (every fourth) `color1`.
pub fn sheen_stops(base: Rgb, color0: Rgb, color1: Rgb, bands: usize) -> Stops {
    let count = bands as f64;
    let ease = |t: f64| (1.0 + (PI * t.clamp(0.0, 1.0)).cos()) / 2.0;
    let mut stops = Stops::new();
    for i in 1..bands {
        let fi = i as f64;
        let stop0 = ease(fi / count + 1.0 / count / 4.0 + 0.001);
        let stop1 = ease(fi / count - 1.0 / count / 4.0 - 0.001);
        if i % 2 == 1 {
            stops.push(ColorStop {
                offset: stop0,
                color: base,
            });
            stops.push(ColorStop {
                offset: stop1,
                color: base,
            });
        } else {
            let color = if i % 4 == 0 { color1 } else { color0 };
            stops.push(ColorStop {
                offset: 1.0 - stop0,
                color,
            });
            stops.push(ColorStop {
                offset: 1.0 - stop1,
                color,
            });
        }
    }
    stops
}

/// Folds the first half of a ribbon's stops into a centre-out radial set.
pub fn cap_stops(stops: &[ColorStop]) -> Stops {
    stops
        .iter()
        .filter(|s| s.offset * 2.0 < 1.0)
        .map(|s| ColorStop {
            offset: 1.0 - s.offset * 2.0,
            color: s.color,
        })
        .collect()
}

/// Piecewise-linear colour ramp.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    /// `stops` must be sorted by offset.
    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self { stops }
    }

    pub fn tint() -> Self {
        Self::new(
            TINT_RAMP
                .iter()
                .map(|&(offset, rgb)| ColorStop {
                    offset,
                    color: Rgb::from_u32(rgb),
                })
                .collect(),
        )
    }

    pub fn sample(&self, t: f64) -> Rgb {
        let Some(first) = self.stops.first() else {
            return Rgb::default();
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let local = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
                return a.color.lerp(b.color, local);
            }
        }
        self.stops[self.stops.len() - 1].color
    }

    /// `steps` evenly spaced samples taken at pixel centres.
    pub fn table(&self, steps: usize) -> Vec<Rgb> {
        (0..steps)
            .map(|i| self.sample((i as f64 + 0.5) / steps as f64))
            .collect()
    }
}

/// Index into a `steps`-long tint table for a ribbon segment; `path_offset`
/// scrolls the colours as the head travels.
pub fn segment_tint_index(
    segment: usize,
    segment_count: usize,
    path_offset: f64,
    steps: usize,
) -> usize {
    if segment_count == 0 || steps == 0 {
        return 0;
    }
    let along = (segment_count as f64 - 1.0 - segment as f64 + path_offset) / segment_count as f64;
    let n = (steps as f64 * along * 3.0).floor() as i64;
    n.rem_euclid(steps as i64) as usize
}
