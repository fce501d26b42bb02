use crate::input;
use crate::scene::Scene;
use instant::Instant;
use ribbon_core::ResizeDebounce;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub resize: Rc<RefCell<ResizeDebounce>>,
    pub epoch: Instant,
}

pub fn wire_input_handlers(w: InputWiring) {
    let Some(window) = web::window() else {
        log::error!("no window; input disabled");
        return;
    };

    // pointermove
    {
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        let epoch = w.epoch;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_css(&ev, &canvas);
            if pos.is_finite() {
                scene.borrow_mut().pointer_input(pos, epoch.elapsed());
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchmove
    {
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        let epoch = w.epoch;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(pos) = input::touch_css(&ev, &canvas) {
                scene.borrow_mut().pointer_input(pos, epoch.elapsed());
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // resize: only noted here, applied by the frame loop once things settle
    {
        let resize = w.resize.clone();
        let epoch = w.epoch;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            resize.borrow_mut().notify(epoch.elapsed());
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
