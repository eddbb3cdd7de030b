// Host-side tests for tuning constants and the default configuration.

use folio_core::*;
use std::collections::HashSet;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SPRING_DAMPING > 0.0);
    assert!(SPRING_MASS > 0.0);
    assert!(SPRING_MAX_SUBSTEP_SEC > 0.0 && SPRING_MAX_SUBSTEP_SEC <= SPRING_MAX_DT_SEC);

    assert!(PARALLAX_RANGE_PX > 0.0);
    assert!(PARTICLE_RADIUS_PX >= 0.0);
    assert!(PARTICLE_DURATION_MIN_SEC > 0.0);
    assert!(PARTICLE_PEAK_OPACITY > 0.0 && PARTICLE_PEAK_OPACITY <= 1.0);
    assert!(PARTICLE_FOLLOW_TAU_FRACTION > 0.0);

    assert!((0.0..=1.0).contains(&ACTIVE_LINE_FRACTION));
    assert!(!SCROLL_DEBOUNCE.is_zero());
}

#[test]
fn integrator_substep_is_stable_for_default_spring() {
    // semi-implicit Euler needs omega * h well below 2
    let omega = (SPRING_STIFFNESS / SPRING_MASS).sqrt();
    assert!(omega * SPRING_MAX_SUBSTEP_SEC < SPRING_STABILITY_MARGIN);
    assert!(SPRING_DAMPING / SPRING_MASS * SPRING_MAX_SUBSTEP_SEC < SPRING_STABILITY_MARGIN);
    assert!(SPRING_MAX_DT_SEC / SPRING_MAX_SUBSTEP_SEC <= SPRING_MAX_SUBSTEPS as f32);
}

#[test]
fn section_ids_are_unique_and_non_empty() {
    let unique: HashSet<_> = SECTION_IDS.iter().collect();
    assert_eq!(unique.len(), SECTION_IDS.len());
    assert!(SECTION_IDS.iter().all(|s| !s.is_empty()));
}

#[test]
fn default_config_is_valid() {
    let config = MotionConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.particle_count, PARTICLE_COUNT);
    assert_eq!(config.sections, SECTION_IDS.to_vec());
}

#[test]
fn config_validation_reports_first_problem() {
    let mut config = MotionConfig::default();
    config.active_line_fraction = -0.1;
    assert_eq!(
        config.validate(),
        Err(MotionError::InvalidLineFraction(-0.1))
    );

    let mut config = MotionConfig::default();
    config.sections.push("about".into());
    assert_eq!(
        config.validate(),
        Err(MotionError::DuplicateSection("about".into()))
    );

    let mut config = MotionConfig::default();
    config.particle_radius = f32::NAN;
    assert!(matches!(
        config.validate(),
        Err(MotionError::InvalidParticleRadius(_))
    ));

    let mut config = MotionConfig::default();
    config.parallax_range = -5.0;
    assert_eq!(
        config.validate(),
        Err(MotionError::InvalidParallaxRange(-5.0))
    );

    let mut config = MotionConfig::default();
    config.parallax_range = f32::INFINITY;
    assert!(matches!(
        config.validate(),
        Err(MotionError::InvalidParallaxRange(_))
    ));
}
