// Inline style strings written by the renderer. Kept free of browser types so
// the formatting can be tested on the host.

use crate::constants::{NAV_LINK_PREFIX, PX_PRECISION, UNIT_PRECISION};

#[inline]
pub fn translate(x: f32, y: f32) -> String {
    format!(
        "translate3d({:.p$}px, {:.p$}px, 0)",
        finite_or_zero(x),
        finite_or_zero(y),
        p = PX_PRECISION
    )
}

#[inline]
pub fn translate_scaled(x: f32, y: f32, scale: f32) -> String {
    format!("{} scale({:.p$})", translate(x, y), finite_or_zero(scale), p = UNIT_PRECISION)
}

#[inline]
pub fn scale(s: f32) -> String {
    format!("scale({:.p$})", finite_or_zero(s), p = UNIT_PRECISION)
}

/// Progress bar transform; the bar is anchored at its left edge.
#[inline]
pub fn scale_x(s: f32) -> String {
    format!("scaleX({:.p$})", finite_or_zero(s).clamp(0.0, 1.0), p = UNIT_PRECISION)
}

#[inline]
pub fn opacity(v: f32) -> String {
    format!("{:.p$}", finite_or_zero(v).clamp(0.0, 1.0), p = UNIT_PRECISION)
}

#[inline]
pub fn nav_link_id(section: &str) -> String {
    format!("{NAV_LINK_PREFIX}{section}")
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
