use crate::constants::CANVAS_ID;
use ribbon_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Touch-capable browsers accept `createEvent("TouchEvent")`.
pub fn is_mobile(document: &web::Document) -> bool {
    document.create_event("TouchEvent").is_ok()
}

pub fn current_viewport(window: &web::Window, document: &web::Document) -> Viewport {
    let css = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0)
    };
    Viewport::new(
        css(window.inner_width()),
        css(window.inner_height()),
        window.device_pixel_ratio(),
        is_mobile(document),
    )
}

/// `#app-canvas` if the page has one, otherwise a new canvas appended to the body.
pub fn find_or_create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let element = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => el,
        None => {
            let el = document
                .create_element("canvas")
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            el.set_id(CANVAS_ID);
            let body = document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body"))?;
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            el
        }
    };
    element
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Backing store at `css * resolution`, displayed at CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let surface = viewport.surface();
    canvas.set_width((surface.width as u32).max(1));
    canvas.set_height((surface.height as u32).max(1));
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", viewport.css_width));
    let _ = style.set_property("height", &format!("{}px", viewport.css_height));
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}
