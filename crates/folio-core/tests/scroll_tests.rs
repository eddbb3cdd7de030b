// Host-side tests for scroll progress and piecewise interpolation.

use folio_core::*;

fn page(scroll_y: f32) -> ScrollGeometry {
    ScrollGeometry {
        scroll_y,
        viewport_height: 600.0,
        document_height: 2600.0,
        target: None,
    }
}

// Element laid out at absolute y = 2000 with height 500, viewed through an
// 800px viewport.
fn element_at(scroll_y: f32) -> ScrollGeometry {
    ScrollGeometry {
        scroll_y,
        viewport_height: 800.0,
        document_height: 4000.0,
        target: Some(ElementRect {
            top: 2000.0 - scroll_y,
            height: 500.0,
        }),
    }
}

#[test]
fn page_progress_is_clamped_to_unit_range() {
    let region = ScrollRegion::page();
    assert_eq!(progress(&region, &page(-50.0)), 0.0);
    assert_eq!(progress(&region, &page(0.0)), 0.0);
    assert_eq!(progress(&region, &page(1000.0)), 0.5);
    assert_eq!(progress(&region, &page(2000.0)), 1.0);
    assert_eq!(progress(&region, &page(2600.0)), 1.0);
}

#[test]
fn page_progress_is_monotonic() {
    let region = ScrollRegion::page();
    let mut prev = progress(&region, &page(-200.0));
    let mut y = -200.0;
    while y <= 3000.0 {
        let p = progress(&region, &page(y));
        assert!(p >= prev, "progress decreased at {y}");
        assert!((0.0..=1.0).contains(&p));
        prev = p;
        y += 7.5;
    }
}

#[test]
fn page_without_scrollable_height_reports_zero() {
    let region = ScrollRegion::page();
    let geometry = ScrollGeometry {
        scroll_y: 30.0,
        viewport_height: 900.0,
        document_height: 900.0,
        target: None,
    };
    assert_eq!(progress(&region, &geometry), 0.0);
}

#[test]
fn element_progress_spans_entry_to_exit() {
    let region = ScrollRegion::element_in_view("experience").unwrap();
    // top meets viewport bottom at scroll 1200, bottom meets viewport top at 2500
    assert_eq!(progress(&region, &element_at(1000.0)), 0.0);
    assert_eq!(progress(&region, &element_at(1200.0)), 0.0);
    assert_eq!(progress(&region, &element_at(1850.0)), 0.5);
    assert_eq!(progress(&region, &element_at(2500.0)), 1.0);
    assert_eq!(progress(&region, &element_at(3000.0)), 1.0);
}

#[test]
fn element_progress_with_custom_edges() {
    let region = ScrollRegion::element(
        "projects",
        Intersection::new(Edge::Top, Edge::Top),
        Intersection::new(Edge::Bottom, Edge::Top),
    )
    .unwrap();
    assert_eq!(progress(&region, &element_at(2000.0)), 0.0);
    assert_eq!(progress(&region, &element_at(2250.0)), 0.5);
    assert_eq!(progress(&region, &element_at(2500.0)), 1.0);
}

#[test]
fn unmounted_or_flat_element_reports_zero() {
    let region = ScrollRegion::element_in_view("experience").unwrap();
    let mut geometry = element_at(1850.0);
    geometry.target = None;
    assert_eq!(progress(&region, &geometry), 0.0);

    geometry.target = Some(ElementRect {
        top: 100.0,
        height: 0.0,
    });
    let p = progress(&region, &geometry);
    assert_eq!(p, 0.0);
    assert!(!p.is_nan());
}

#[test]
fn region_misconfiguration_fails_fast() {
    assert_eq!(
        ScrollRegion::element(
            "",
            Intersection::new(Edge::Top, Edge::Bottom),
            Intersection::new(Edge::Bottom, Edge::Top),
        ),
        Err(MotionError::EmptyRegionTarget)
    );
    let same = Intersection::new(Edge::Top, Edge::Top);
    assert_eq!(
        ScrollRegion::element("about", same, same),
        Err(MotionError::DegenerateRegion)
    );
}

#[test]
fn keyframes_interpolate_linearly_and_clamp() {
    let k = Keyframes::new(&[(0.0, 0.0), (0.2, 1.0)]).unwrap();
    assert_eq!(k.sample(0.1), 0.5);
    assert_eq!(k.sample(0.2), 1.0);
    assert_eq!(k.sample(0.9), 1.0);
    assert_eq!(k.sample(-1.0), 0.0);
    assert_eq!(k.sample(f32::NAN), 0.0);
}

#[test]
fn keyframes_are_continuous_at_inner_breakpoints() {
    let k = Keyframes::new(&[(0.0, 0.0), (0.5, 0.8), (1.0, 0.0)]).unwrap();
    assert_eq!(k.sample(0.5), 0.8);
    assert!((k.sample(0.4999) - 0.8).abs() < 1e-3);
    assert!((k.sample(0.5001) - 0.8).abs() < 1e-3);
    assert_eq!(k.sample(1.0), 0.0);
}

#[test]
fn keyframes_reject_bad_breakpoints() {
    assert_eq!(Keyframes::new(&[]), Err(MotionError::EmptyKeyframes));
    assert_eq!(
        Keyframes::new(&[(0.0, 0.0), (0.0, 1.0)]),
        Err(MotionError::UnorderedKeyframes { index: 1 })
    );
    assert_eq!(
        Keyframes::new(&[(0.5, 0.0), (0.2, 1.0)]),
        Err(MotionError::UnorderedKeyframes { index: 1 })
    );
    assert_eq!(
        Keyframes::new(&[(0.0, f32::INFINITY)]),
        Err(MotionError::NonFiniteOutput { index: 0 })
    );
    let single = Keyframes::new(&[(0.3, 0.7)]).unwrap();
    assert_eq!(single.sample(0.0), 0.7);
    assert_eq!(single.sample(1.0), 0.7);
}

#[test]
fn remap_handles_degenerate_domain() {
    assert_eq!(remap(5.0, (0.0, 10.0), (-20.0, 20.0)), 0.0);
    assert_eq!(remap(50.0, (0.0, 10.0), (-20.0, 20.0)), 20.0);
    assert_eq!(remap(5.0, (3.0, 3.0), (-20.0, 20.0)), 0.0);
}

#[test]
fn mapper_recomputation_is_bit_identical() {
    let mapper = ScrollProgressMapper::new(ScrollRegion::element_in_view("projects").unwrap())
        .track(Property::Opacity, Keyframes::linear([0.0, 0.2], [0.0, 1.0]).unwrap())
        .track(Property::Scale, Keyframes::linear([0.0, 0.2], [0.8, 1.0]).unwrap());
    let geometry = element_at(1337.0);
    let a = mapper.presentation(&geometry);
    let b = mapper.presentation(&geometry);
    assert_eq!(a.opacity.to_bits(), b.opacity.to_bits());
    assert_eq!(a.scale.to_bits(), b.scale.to_bits());
}

#[test]
fn mapper_leaves_untracked_properties_at_identity() {
    let mapper = ScrollProgressMapper::new(ScrollRegion::page())
        .track(Property::Opacity, Keyframes::linear([0.0, 0.5], [0.0, 0.2]).unwrap());
    let p = mapper.presentation(&page(2000.0));
    assert_eq!(p.opacity, 0.2);
    assert_eq!(p.scale, 1.0);
    assert_eq!(mapper.sample(Property::Scale, 0.3), None);
}

#[test]
fn track_replaces_existing_curve() {
    let mapper = ScrollProgressMapper::new(ScrollRegion::page())
        .track(Property::Opacity, Keyframes::linear([0.0, 1.0], [0.0, 1.0]).unwrap())
        .track(Property::Opacity, Keyframes::linear([0.0, 1.0], [1.0, 1.0]).unwrap());
    assert_eq!(mapper.sample(Property::Opacity, 0.0), Some(1.0));
}

#[test]
fn hero_binding_fades_over_first_half_of_page() {
    let bindings = default_bindings().unwrap();
    let hero = bindings
        .iter()
        .find(|b| b.element_id == HERO_CONTENT_ID)
        .unwrap();
    let p = hero.mapper.presentation(&page(500.0));
    assert_eq!(p.opacity, 0.5);
    assert!((p.scale - 0.95).abs() < 1e-6);

    let end = hero.mapper.presentation(&page(1500.0));
    assert_eq!(end.opacity, 0.0);
    assert!((end.scale - 0.9).abs() < 1e-6);
}

#[test]
fn default_bindings_target_distinct_elements() {
    let bindings = default_bindings().unwrap();
    assert_eq!(bindings.len(), 4);
    let mut ids: Vec<_> = bindings.iter().map(|b| b.element_id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
    let regions: Vec<_> = bindings
        .iter()
        .filter_map(|b| b.mapper.region().element_id())
        .collect();
    assert_eq!(regions, vec!["projects", "projects", "experience"]);
}
