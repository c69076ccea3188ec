use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive `tick` from `requestAnimationFrame` until it returns `false`.
pub fn start_loop(mut tick: impl FnMut() -> bool + 'static) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !tick() {
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), slot_tick.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
