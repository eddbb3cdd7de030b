use folio_core::{
    ElementRect, RegionTarget, ScrollGeometry, ScrollRegion, SectionBounds, SectionProbe, Viewport,
};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::trace!("[dom] set {} failed: {:?}", property, e);
    }
}

/// Viewport size, read fresh on every call.
pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

pub fn document_height(document: &web::Document) -> f32 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0)
}

pub fn element_rect(document: &web::Document, id: &str) -> Option<ElementRect> {
    let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
    Some(ElementRect {
        top: rect.top() as f32,
        height: rect.height() as f32,
    })
}

/// Measure everything `region` needs for one progress computation.
pub fn scroll_geometry(
    window: &web::Window,
    document: &web::Document,
    region: &ScrollRegion,
) -> ScrollGeometry {
    let target = match region.target() {
        RegionTarget::Page => None,
        RegionTarget::Element(id) => element_rect(document, id),
    };
    ScrollGeometry {
        scroll_y: scroll_y(window),
        viewport_height: viewport(window).height,
        document_height: document_height(document),
        target,
    }
}

/// Section layout queried live from the document.
pub struct DomSectionProbe {
    window: web::Window,
    document: web::Document,
}

impl DomSectionProbe {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }
}

impl SectionProbe for DomSectionProbe {
    fn viewport_height(&self) -> f32 {
        viewport(&self.window).height
    }

    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        let rect = self.document.get_element_by_id(id)?.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top() as f32, rect.bottom() as f32))
    }
}
