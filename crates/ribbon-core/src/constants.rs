use std::time::Duration;

// Shared tuning constants used by the core and the web frontend.

// Viewport scaling
pub const REFERENCE_VIEWPORT_PX: f64 = 1200.0; // size_factor = max(w, h) / this
pub const MAX_RESOLUTION: f64 = 2.0; // device pixel ratio is clamped to this

// Chain
pub const NOOP_THRESHOLD_PX: f64 = 2.0; // per-axis head/target distance that skips a tick
pub const DEFAULT_HEADING_DAMPING: f64 = 0.2; // share of the heading error kept each tick
pub const INITIAL_HEADING: f64 = std::f64::consts::PI;

// Motion source
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(5000);
pub const WANDER_BASE_RATE: f64 = 0.3;
pub const HANDOFF_TICKS: u32 = 120; // ticks to blend from pointer target into the wander path

// Resize handling
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(300);

// Mesh
pub const TRANSPARENCY_SCAN_BUDGET: usize = 10; // triangles checked per tick
pub const RADIAL_MAX_REACH: f64 = 50.0; // radial joint centre farther than this * half width falls back to linear

// Default palette (toothpaste / softice)
pub const SHEEN_BASE: u32 = 0xf2c0c1;
pub const SHEEN_COLOR_0: u32 = 0xf76c55;
pub const SHEEN_COLOR_1: u32 = 0x11545c;
pub const SHEEN_BANDS: usize = 12;

// Segment tint ramp (type twister)
pub const TINT_RAMP: [(f64, u32); 6] = [
    (0.0, 0xe9a5a5),
    (0.2, 0xb8c1c0),
    (0.4, 0x65c0e0),
    (0.6, 0xaea2db),
    (0.8, 0x81c1d9),
    (1.0, 0xe9a5a5),
];
pub const TINT_STEPS: usize = 1000;

// Paint drops (wet paint)
pub const RAIN_COLORS: [u32; 3] = [0xf4481a, 0x030744, 0x20246d];
pub const RAIN_FLOW_RESOLUTION: usize = 100;
