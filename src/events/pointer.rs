use super::Listener;
use crate::dom;
use crate::state::MotionState;
use folio_core::PointerSample;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Retarget the follower on every pointer move. Only the latest sample per
/// frame matters; the frame loop does the smoothing.
pub fn wire_pointermove(
    window: &web::Window,
    state: Rc<RefCell<MotionState>>,
) -> Option<Listener> {
    let wnd = window.clone();
    Listener::attach(window.as_ref(), "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let sample = PointerSample::new(ev.client_x() as f32, ev.client_y() as f32);
        let viewport = dom::viewport(&wnd);
        state.borrow_mut().follower.on_pointer_move(sample, viewport);
    })
}
