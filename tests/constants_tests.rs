// Host-side tests for the DOM hook constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_distinct() {
    let ids = [CURSOR_ID, PARALLAX_ID, PARTICLE_FIELD_ID, PROGRESS_BAR_ID];
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_empty() && !id.contains(' ')));
}

#[test]
fn nav_links_cannot_collide_with_sections() {
    for section in folio_core::SECTION_IDS {
        let link = format!("{NAV_LINK_PREFIX}{section}");
        assert!(!folio_core::SECTION_IDS.contains(&link.as_str()));
    }
}

#[test]
fn active_section_attribute_is_a_data_attribute() {
    assert!(ACTIVE_SECTION_ATTR.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn style_precision_is_reasonable() {
    assert!(PX_PRECISION <= 4);
    assert!((2..=6).contains(&UNIT_PRECISION));
}
