//! Canvas 2D painting of sketch state. Nothing here mutates the simulation.

use crate::constants::TEXTURE_SAMPLE_PAD_PX;
use crate::scene::{Scene, TextRibbon};
use ribbon_core::{Cap, ColorStop, DrawItem, Paint, Palette, Point, RainSketch, RibbonSketch};
use wasm_bindgen::JsValue;
use web_sys as web;

pub fn draw_scene(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    match scene {
        Scene::Ribbon { sketch, text } => draw_ribbon(ctx, sketch, text.as_ref()),
        Scene::Rain(rain) => draw_rain(ctx, rain),
    }
}

pub fn draw_ribbon(
    ctx: &web::CanvasRenderingContext2d,
    sketch: &RibbonSketch,
    text: Option<&TextRibbon>,
) {
    let surface = sketch.surface();
    ctx.clear_rect(0.0, 0.0, surface.width, surface.height);
    let mesh = sketch.mesh();
    let palette = sketch.palette();
    let caps = mesh.caps();

    if let Some((_, end)) = caps {
        draw_cap(ctx, end, palette);
    }
    match text {
        Some(text) => {
            tint_segments(sketch, text);
            for item in mesh.draw_list() {
                draw_textured_triangle(ctx, sketch, text, item);
            }
        }
        None => {
            for item in mesh.draw_list() {
                fill_triangle(ctx, &mesh.triangle_points(item.triangle), item, palette);
            }
        }
    }
    if let Some((start, _)) = caps {
        draw_cap(ctx, start, palette);
    }
}

fn trace_triangle(ctx: &web::CanvasRenderingContext2d, pts: &[Point; 3]) {
    ctx.begin_path();
    ctx.move_to(pts[0].x, pts[0].y);
    ctx.line_to(pts[1].x, pts[1].y);
    ctx.line_to(pts[2].x, pts[2].y);
    ctx.close_path();
}

fn gradient_with_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) {
    for stop in stops {
        let _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
    }
}

fn fill_triangle(
    ctx: &web::CanvasRenderingContext2d,
    pts: &[Point; 3],
    item: &DrawItem,
    palette: &Palette,
) {
    let style: JsValue = match item.paint {
        Paint::Linear { start, end } => {
            let g = ctx.create_linear_gradient(start.x, start.y, end.x, end.y);
            gradient_with_stops(&g, &palette.stops);
            g.into()
        }
        Paint::Radial {
            center,
            start_radius,
            end_radius,
        } => match ctx.create_radial_gradient(
            center.x,
            center.y,
            start_radius,
            center.x,
            center.y,
            end_radius,
        ) {
            Ok(g) => {
                gradient_with_stops(&g, &palette.stops);
                g.into()
            }
            Err(_) => JsValue::from_str(&palette.base.to_css()),
        },
        Paint::Solid | Paint::Texture(_) => JsValue::from_str(&palette.base.to_css()),
    };
    trace_triangle(ctx, pts);
    ctx.set_fill_style(&style);
    // Stroking with the same paint hides the hairline seams between triangles.
    ctx.set_stroke_style(&style);
    ctx.fill();
    ctx.stroke();
}

fn draw_cap(ctx: &web::CanvasRenderingContext2d, cap: &Cap, palette: &Palette) {
    let Ok(gradient) = ctx.create_radial_gradient(
        cap.center.x,
        cap.center.y,
        0.0,
        cap.center.x,
        cap.center.y,
        cap.radius,
    ) else {
        return;
    };
    gradient_with_stops(&gradient, &palette.cap_stops);
    ctx.begin_path();
    ctx.set_fill_style(&gradient);
    let _ = ctx.arc(
        cap.center.x,
        cap.center.y,
        cap.radius,
        cap.start_angle,
        cap.end_angle,
    );
    ctx.close_path();
    ctx.fill();
}

/// Paints each visible segment's strip of the text texture with its tint.
fn tint_segments(sketch: &RibbonSketch, text: &TextRibbon) {
    let mesh = sketch.mesh();
    let spans = mesh.link_count().saturating_sub(1);
    if spans == 0 || text.tints.is_empty() {
        return;
    }
    let strip = text.texture.width() / spans as f64;
    let mut painted = vec![false; spans];
    for item in mesh.draw_list() {
        let segment = mesh.triangles()[item.triangle].segment;
        if std::mem::replace(&mut painted[segment], true) {
            continue;
        }
        let n = sketch.segment_tint(segment, text.tints.len());
        text.texture
            .tint_strip(segment as f64 * strip, strip + 1.0, text.tints[n]);
    }
}

fn draw_textured_triangle(
    ctx: &web::CanvasRenderingContext2d,
    sketch: &RibbonSketch,
    text: &TextRibbon,
    item: &DrawItem,
) {
    let Paint::Texture(transform) = item.paint else {
        return;
    };
    let mesh = sketch.mesh();
    let Some(src) = mesh.source_triangle(item.triangle) else {
        return;
    };
    let (w, h) = (text.texture.width(), text.texture.height());
    let min = src[0].min(src[1]).min(src[2]);
    let max = src[0].max(src[1]).max(src[2]);
    let x0 = (min.x - TEXTURE_SAMPLE_PAD_PX).max(0.0);
    let y0 = (min.y - TEXTURE_SAMPLE_PAD_PX).max(0.0);
    let x1 = (max.x + TEXTURE_SAMPLE_PAD_PX).min(w);
    let y1 = (max.y + TEXTURE_SAMPLE_PAD_PX).min(h);
    if x1 <= x0 || y1 <= y0 {
        return;
    }

    ctx.save();
    trace_triangle(ctx, &mesh.triangle_points(item.triangle));
    ctx.clip();
    let [a, b, c, d, e, f] = transform.to_canvas_args();
    let _ = ctx.transform(a, b, c, d, e, f);
    let _ = ctx
        .draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            &text.texture.canvas,
            x0,
            y0,
            x1 - x0,
            y1 - y0,
            x0,
            y0,
            x1 - x0,
            y1 - y0,
        );
    ctx.restore();
}

/// Drops are painted on top of everything drawn before; the canvas is never
/// cleared so the paint builds up.
pub fn draw_rain(ctx: &web::CanvasRenderingContext2d, rain: &RainSketch) {
    let visible = rain
        .rain()
        .drops()
        .iter()
        .filter(|d| d.position.y + d.radius >= 0.0);
    for drop in visible {
        ctx.begin_path();
        ctx.set_fill_style(&JsValue::from_str(&drop.color.to_css()));
        let _ = ctx.arc(
            drop.position.x,
            drop.position.y,
            drop.radius,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.close_path();
        ctx.fill();
    }
}
