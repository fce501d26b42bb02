#![cfg(target_arch = "wasm32")]
use instant::Instant;
use ribbon_core::{ResizeDebounce, RESIZE_DEBOUNCE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod params;
mod render;
mod scene;
mod texture;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ribbon-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Text metrics depend on the page font being available.
    if let Ok(promise) = document.fonts().ready() {
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    let search = window.location().search().unwrap_or_default();
    let params = params::parse_query(&search, constants::DEFAULT_TEXT, constants::TEXT_MAX_CHARS);
    log::info!("[params] {:?}", params);

    let canvas = dom::find_or_create_canvas(&document)?;
    let viewport = dom::current_viewport(&window, &document);
    dom::sync_canvas_backing_size(&canvas, &viewport);
    let ctx = dom::context_2d(&canvas)?;

    let seed = random_seed();
    let scene = Rc::new(RefCell::new(scene::Scene::build(
        &document, &params, &viewport, seed,
    )?));
    let resize = Rc::new(RefCell::new(ResizeDebounce::new(RESIZE_DEBOUNCE)));
    let epoch = Instant::now();

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        resize: resize.clone(),
        epoch,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        resize,
        params,
        seed,
        document,
        canvas,
        ctx,
        epoch,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn random_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(e) => {
            log::warn!("getrandom failed ({}), falling back to Math.random", e);
            (js_sys::Math::random() * u64::MAX as f64) as u64
        }
    }
}
