// Front-end tuning constants: DOM ids, text texture styling, defaults.

pub const CANVAS_ID: &str = "app-canvas";

// Type twister text texture
pub const DEFAULT_TEXT: &str = "Store your data on CDs";
pub const FONT_FAMILY: &str = "sans-serif";
pub const FONT_WEIGHT: u32 = 900;
pub const FONT_SIZE_DESKTOP_PX: f64 = 190.0; // scaled by resolution
pub const FONT_SIZE_MOBILE_PX: f64 = 140.0;
pub const TEXT_FILL_START: &str = "#ea5041";
pub const TEXT_FILL_END: &str = "#1c2068";
pub const TEXT_MAX_CHARS: usize = 64; // longer query text is truncated

// Textured triangles sample one extra pixel around their source box
pub const TEXTURE_SAMPLE_PAD_PX: f64 = 1.0;
