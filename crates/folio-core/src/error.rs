use thiserror::Error;

/// Setup-time misconfiguration. Nothing on the per-frame path returns these;
/// they surface once, when components are constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("spring stiffness must be positive and finite, got {0}")]
    InvalidStiffness(f32),
    #[error("spring damping must be positive and finite, got {0}")]
    InvalidDamping(f32),
    #[error("spring mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    #[error("spring (stiffness {stiffness}, damping {damping}) is too stiff to integrate per frame")]
    UnstableSpring { stiffness: f32, damping: f32 },
    #[error("parallax range must be finite and non-negative, got {0}")]
    InvalidParallaxRange(f32),
    #[error("scroll region target id is empty")]
    EmptyRegionTarget,
    #[error("scroll region start and end intersections coincide")]
    DegenerateRegion,
    #[error("keyframes need at least one breakpoint")]
    EmptyKeyframes,
    #[error("keyframe inputs must be finite and strictly increasing (breakpoint {index})")]
    UnorderedKeyframes { index: usize },
    #[error("keyframe output at breakpoint {index} is not finite")]
    NonFiniteOutput { index: usize },
    #[error("section list is empty")]
    NoSections,
    #[error("section id at position {0} is empty")]
    EmptySectionId(usize),
    #[error("section id `{0}` is declared more than once")]
    DuplicateSection(String),
    #[error("active line fraction must lie in [0, 1], got {0}")]
    InvalidLineFraction(f32),
    #[error("particle radius must be finite and non-negative, got {0}")]
    InvalidParticleRadius(f32),
}
