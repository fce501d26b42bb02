use percent_encoding::percent_decode_str;
use ribbon_core::{PaintStyle, SketchKind};

/// Page options read from the URL query: `?s=<sketch>&t=<text>&paint=<style>`.
#[derive(Clone, Debug, PartialEq)]
pub struct PageParams {
    pub kind: SketchKind,
    pub text: String,
    /// Overrides the sheen paint of the untextured ribbons.
    pub paint: Option<PaintStyle>,
}

impl PageParams {
    pub fn with_default_text(default_text: &str) -> Self {
        Self {
            kind: SketchKind::Toothpaste,
            text: default_text.to_string(),
            paint: None,
        }
    }
}

/// Parses a `location.search` string (leading `?` optional). Unknown keys and
/// unparseable values fall back to defaults.
pub fn parse_query(search: &str, default_text: &str, max_chars: usize) -> PageParams {
    let mut params = PageParams::with_default_text(default_text);
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode_component(value);
        match key {
            "s" => match SketchKind::from_name(&value) {
                Some(kind) => params.kind = kind,
                None => log::warn!("[params] unknown sketch {:?}", value),
            },
            "t" => {
                let text: String = value.trim().chars().take(max_chars).collect();
                if !text.is_empty() {
                    params.text = text;
                }
            }
            "paint" => params.paint = parse_paint(&value),
            _ => {}
        }
    }
    params
}

pub fn parse_paint(value: &str) -> Option<PaintStyle> {
    match value.trim().to_ascii_lowercase().as_str() {
        "linear" | "sheen" => Some(PaintStyle::Linear),
        "radial" | "joint" => Some(PaintStyle::RadialJoint),
        _ => None,
    }
}

/// `application/x-www-form-urlencoded` value decoding: `+` is a space and
/// `%XX` a byte; malformed escapes are kept literally.
pub fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
