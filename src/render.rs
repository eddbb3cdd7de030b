use crate::constants::{CURSOR_ID, PARALLAX_ID, PARTICLE_CLASS, PARTICLE_FIELD_ID, PROGRESS_BAR_ID};
use crate::dom;
use crate::state::MotionState;
use crate::style;
use folio_core::{progress, ScrollRegion, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create one node per particle under the particle field container.
pub fn create_particles(document: &web::Document, count: usize) -> Vec<web::HtmlElement> {
    let Some(container) = dom::html_element(document, PARTICLE_FIELD_ID) else {
        log::info!("[render] no #{}; particles disabled", PARTICLE_FIELD_ID);
        return Vec::new();
    };
    let mut nodes = Vec::with_capacity(count);
    for _ in 0..count {
        let el = match document
            .create_element("div")
            .map(|el| el.dyn_into::<web::HtmlElement>())
        {
            Ok(Ok(el)) => el,
            _ => continue,
        };
        el.set_class_name(PARTICLE_CLASS);
        dom::set_style(&el, "opacity", "0");
        if container.append_child(&el).is_ok() {
            nodes.push(el);
        }
    }
    nodes
}

pub fn remove_particles(nodes: &[web::HtmlElement]) {
    for el in nodes {
        el.remove();
    }
}

/// Cursor follower, background parallax and particles for the current frame.
pub fn apply_pointer(
    document: &web::Document,
    state: &MotionState,
    viewport: Viewport,
    particles: &[web::HtmlElement],
) {
    let follower = &state.follower;
    if let Some(cursor) = dom::html_element(document, CURSOR_ID) {
        let p = follower.position();
        dom::set_style(&cursor, "transform", &style::translate(p.x, p.y));
    }
    if let Some(layer) = dom::html_element(document, PARALLAX_ID) {
        let p = follower.parallax(viewport);
        dom::set_style(&layer, "transform", &style::translate(p.x, p.y));
    }
    for (el, frame) in particles.iter().zip(follower.particle_frames()) {
        dom::set_style(
            el,
            "transform",
            &style::translate_scaled(frame.position.x, frame.position.y, frame.scale),
        );
        dom::set_style(el, "opacity", &style::opacity(frame.opacity));
    }
}

/// Scroll-bound section styles plus the page progress bar. Runs synchronously
/// on every scroll and resize event.
pub fn apply_scroll(window: &web::Window, document: &web::Document, state: &MotionState) {
    for binding in &state.bindings {
        let Some(el) = dom::html_element(document, binding.element_id) else {
            continue;
        };
        let geometry = dom::scroll_geometry(window, document, binding.mapper.region());
        let look = binding.mapper.presentation(&geometry);
        dom::set_style(&el, "opacity", &style::opacity(look.opacity));
        dom::set_style(&el, "transform", &style::scale(look.scale));
    }

    if let Some(bar) = dom::html_element(document, PROGRESS_BAR_ID) {
        let page = ScrollRegion::page();
        let ratio = progress(&page, &dom::scroll_geometry(window, document, &page));
        dom::set_style(&bar, "transform-origin", "0% 50%");
        dom::set_style(&bar, "transform", &style::scale_x(ratio));
    }
}
