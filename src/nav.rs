use crate::constants::{ACTIVE_SECTION_ATTR, NAV_ACTIVE_CLASS};
use crate::style;
use web_sys as web;

#[inline]
fn set_link_active(document: &web::Document, section: &str, active: bool) {
    if let Some(el) = document.get_element_by_id(&style::nav_link_id(section)) {
        let cl = el.class_list();
        if active {
            _ = cl.add_1(NAV_ACTIVE_CLASS);
        } else {
            _ = cl.remove_1(NAV_ACTIVE_CLASS);
        }
    }
}

/// Highlight the nav link for `active` and un-highlight every other one.
pub fn highlight(document: &web::Document, sections: &[String], active: Option<&str>) {
    for id in sections {
        set_link_active(document, id, Some(id.as_str()) == active);
    }
}

/// Mirror the active section onto `<body>` for stylesheet hooks.
pub fn mark_body(document: &web::Document, active: Option<&str>) {
    if let Some(body) = document.body() {
        _ = body.set_attribute(ACTIVE_SECTION_ATTR, active.unwrap_or(""));
    }
}
