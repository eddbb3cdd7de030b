#![cfg(target_arch = "wasm32")]
use folio_core::MotionConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod nav;
mod render;
mod state;
mod style;

use state::MotionState;

/// Everything registered at mount, released again by `teardown`.
struct Runtime {
    state: Rc<RefCell<MotionState>>,
    listeners: Vec<events::Listener>,
    frame_loop: frame::FrameLoop,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

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

    if RUNTIME.with(|r| r.borrow().is_some()) {
        log::info!("[init] already mounted");
        return Ok(());
    }

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let config = MotionConfig::default().with_seed(seed);
    let viewport = dom::viewport(&window);
    let state = Rc::new(RefCell::new(MotionState::new(&config, viewport)?));

    // Navigation highlighting observes the tracker's published value.
    {
        let doc = document.clone();
        let sections = config.sections.clone();
        state.borrow_mut().tracker.observe(move |active| {
            nav::highlight(&doc, &sections, active.as_deref());
            nav::mark_body(&doc, active.as_deref());
        });
    }

    // Mount: one unconditional section recomputation and an initial layout pass.
    {
        let probe = dom::DomSectionProbe::new(window.clone(), document.clone());
        let mut s = state.borrow_mut();
        s.tracker.attach(&probe);
        render::apply_scroll(&window, &document, &s);
        log::info!(
            "[init] sections={} bindings={} active={:?}",
            s.tracker.ids().len(),
            s.bindings.len(),
            s.tracker.active()
        );
    }

    let listeners: Vec<events::Listener> = [
        events::wire_pointermove(&window, state.clone()),
        events::wire_scroll(&window, &document, state.clone()),
        events::wire_resize(&window, &document, state.clone()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let particles = render::create_particles(&document, config.particle_count);
    let frame_loop = frame::start_loop(frame::FrameContext::new(
        state.clone(),
        window,
        document,
        particles,
    ));

    RUNTIME.with(|r| {
        *r.borrow_mut() = Some(Runtime {
            state,
            listeners,
            frame_loop,
        })
    });
    Ok(())
}

/// Unmount: remove listeners, cancel the frame loop and any pending section
/// recomputation, and drop the particle nodes.
#[wasm_bindgen]
pub fn teardown() {
    let Some(runtime) = RUNTIME.with(|r| r.borrow_mut().take()) else {
        return;
    };
    for listener in runtime.listeners {
        listener.detach();
    }
    render::remove_particles(&runtime.frame_loop.context().borrow().particles);
    runtime.frame_loop.stop();
    runtime.state.borrow_mut().tracker.detach();
    log::info!("folio-web torn down");
}
