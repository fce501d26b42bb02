use glam::DVec2;
use web_sys as web;

/// Pointer position relative to the canvas's top-left corner, in CSS pixels.
#[inline]
pub fn css_offset(client: DVec2, rect_left: f64, rect_top: f64) -> DVec2 {
    DVec2::new(client.x - rect_left, client.y - rect_top)
}

/// First finite point among the candidates, in order.
#[inline]
pub fn first_finite(candidates: &[Option<DVec2>]) -> Option<DVec2> {
    candidates.iter().flatten().copied().find(|p| p.is_finite())
}

// ---------------- DOM event helpers ----------------
#[inline]
pub fn pointer_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
    css_offset(client, rect.left(), rect.top())
}

/// Active touch if any, otherwise the touch that just changed.
pub fn touch_css(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<DVec2> {
    let rect = canvas.get_bounding_client_rect();
    let at = |t: web::Touch| {
        css_offset(
            DVec2::new(t.client_x() as f64, t.client_y() as f64),
            rect.left(),
            rect.top(),
        )
    };
    first_finite(&[
        ev.touches().get(0).map(&at),
        ev.changed_touches().get(0).map(&at),
    ])
}
