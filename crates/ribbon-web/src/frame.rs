use crate::dom;
use crate::params::PageParams;
use crate::render;
use crate::scene::Scene;
use instant::Instant;
use ribbon_core::{ResizeDebounce, TRANSPARENCY_SCAN_BUDGET};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub resize: Rc<RefCell<ResizeDebounce>>,
    pub params: PageParams,
    pub seed: u64,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,

    /// Shared with the input handlers so every timestamp is on one clock.
    pub epoch: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.epoch.elapsed();
        if self.resize.borrow_mut().poll(now) {
            self.apply_resize();
        }

        let mut scene = self.scene.borrow_mut();
        let repaint = match &mut *scene {
            Scene::Ribbon { sketch, text } => {
                if let Some(text) = text {
                    sketch.scan_transparency(&text.mask, TRANSPARENCY_SCAN_BUDGET);
                }
                sketch.tick(now)
            }
            Scene::Rain(rain) => {
                rain.tick(now);
                true
            }
        };
        if repaint {
            render::draw_scene(&self.ctx, &scene);
        }
    }

    fn apply_resize(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = dom::current_viewport(&window, &self.document);
        dom::sync_canvas_backing_size(&self.canvas, &viewport);
        let result =
            self.scene
                .borrow_mut()
                .resize(&self.document, &self.params, &viewport, self.seed);
        match result {
            Ok(()) => {
                // Resizing wipes the canvas; paint the current state right away.
                render::draw_scene(&self.ctx, &self.scene.borrow());
            }
            Err(e) => log::error!("resize error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
