use super::Listener;
use crate::render;
use crate::state::MotionState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scroll feeds the section tracker's debounce and restyles scroll-bound
/// elements immediately; the tracker itself recomputes from the frame loop.
pub fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    state: Rc<RefCell<MotionState>>,
) -> Option<Listener> {
    let wnd = window.clone();
    let doc = document.clone();
    Listener::attach(window.as_ref(), "scroll", move |_ev: web::Event| {
        let mut s = state.borrow_mut();
        let now = s.elapsed();
        s.tracker.on_scroll(now);
        render::apply_scroll(&wnd, &doc, &s);
    })
}

/// Resize only changes measurements: restyle scroll-bound elements. Spring
/// state is untouched; the parallax domain is read live each frame.
pub fn wire_resize(
    window: &web::Window,
    document: &web::Document,
    state: Rc<RefCell<MotionState>>,
) -> Option<Listener> {
    let wnd = window.clone();
    let doc = document.clone();
    Listener::attach(window.as_ref(), "resize", move |_ev: web::Event| {
        render::apply_scroll(&wnd, &doc, &state.borrow());
    })
}
