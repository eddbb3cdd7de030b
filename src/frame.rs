use crate::dom::{self, DomSectionProbe};
use crate::render;
use crate::state::MotionState;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<MotionState>>,
    pub window: web::Window,
    pub document: web::Document,
    pub probe: DomSectionProbe,
    pub particles: Vec<web::HtmlElement>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        state: Rc<RefCell<MotionState>>,
        window: web::Window,
        document: web::Document,
        particles: Vec<web::HtmlElement>,
    ) -> Self {
        let probe = DomSectionProbe::new(window.clone(), document.clone());
        Self {
            state,
            window,
            document,
            probe,
            particles,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Viewport is re-read every frame so a resize reshapes the parallax
        // remap without touching spring state.
        let viewport = dom::viewport(&self.window);
        let mut state = self.state.borrow_mut();
        state.follower.step(dt_sec, viewport);

        let elapsed = state.elapsed();
        state.tracker.poll(elapsed, &self.probe);

        render::apply_pointer(&self.document, &state, viewport, &self.particles);
    }
}

/// Handle to a running `requestAnimationFrame` loop.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
    ctx: Rc<RefCell<FrameContext>>,
}

impl FrameLoop {
    pub fn context(&self) -> &Rc<RefCell<FrameContext>> {
        &self.ctx
    }

    /// Cancel the pending frame and release the tick closure.
    pub fn stop(self) {
        if let (Some(w), Some(id)) = (web::window(), self.handle.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference cycle back to `tick`.
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, handle: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone, &handle_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &handle);

    FrameLoop { tick, handle, ctx }
}
