use crate::constants::{
    FONT_FAMILY, FONT_SIZE_DESKTOP_PX, FONT_SIZE_MOBILE_PX, FONT_WEIGHT, TEXT_FILL_END,
    TEXT_FILL_START,
};
use crate::dom;
use ribbon_core::{AlphaBuffer, Rgb};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Offscreen canvas holding the upper-cased text the type twister ribbon is
/// mapped from. Segment tints are painted straight into it.
pub struct TextTexture {
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl TextTexture {
    pub fn new(
        document: &web::Document,
        text: &str,
        mobile: bool,
        resolution: f64,
    ) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let ctx = dom::context_2d(&canvas)?;
        let size = if mobile {
            FONT_SIZE_MOBILE_PX
        } else {
            FONT_SIZE_DESKTOP_PX
        } * resolution;
        let font = format!("{} {}px {}", FONT_WEIGHT, size, FONT_FAMILY);
        let text = text.to_uppercase();

        ctx.set_font(&font);
        ctx.set_text_baseline("top");
        let metrics = ctx
            .measure_text(&text)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let ascent = metrics.actual_bounding_box_ascent();
        let height = ascent + metrics.actual_bounding_box_descent();
        canvas.set_width((metrics.width().ceil() as u32).max(1));
        canvas.set_height((height.ceil() as u32).max(1));

        // Resizing the canvas resets its state.
        ctx.set_font(&font);
        ctx.set_text_baseline("top");
        let gradient = ctx.create_linear_gradient(0.0, 0.0, canvas.width() as f64, 0.0);
        gradient
            .add_color_stop(0.0, TEXT_FILL_START)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        gradient
            .add_color_stop(1.0, TEXT_FILL_END)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        ctx.set_fill_style(&gradient);
        ctx.fill_text(&text, 0.0, ascent)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        log::info!(
            "[texture] {:?} rendered at {}x{}",
            text,
            canvas.width(),
            canvas.height()
        );
        Ok(Self { canvas, ctx })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    /// Alpha channel snapshot for the transparency scan.
    pub fn alpha_mask(&self) -> anyhow::Result<AlphaBuffer> {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let data = self
            .ctx
            .get_image_data(0.0, 0.0, w as f64, h as f64)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        AlphaBuffer::from_rgba(w, h, data.data().0)
            .ok_or_else(|| anyhow::anyhow!("image data size mismatch for {}x{}", w, h))
    }

    /// Recolours the glyph pixels in a vertical strip, keeping their alpha.
    pub fn tint_strip(&self, x: f64, width: f64, color: Rgb) {
        self.ctx.save();
        let _ = self.ctx.set_global_composite_operation("source-atop");
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.ctx.fill_rect(x, 0.0, width, self.height());
        self.ctx.restore();
    }
}
