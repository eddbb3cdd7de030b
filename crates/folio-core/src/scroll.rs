//! Scroll progress over the whole page or a bounded element, and the
//! piecewise-linear presentation values derived from it.
//!
//! Everything here is a pure function of the measured geometry: calling it
//! twice with the same inputs yields bit-identical output.

use crate::error::MotionError;
use crate::interpolate::Keyframes;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// "Target edge meets viewport edge". `Intersection::new(Edge::Top, Edge::Bottom)`
/// reads as the element's top reaching the viewport's bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intersection {
    pub target: Edge,
    pub viewport: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, viewport: Edge) -> Self {
        Self { target, viewport }
    }

    /// Signed distance the page still has to scroll before this
    /// intersection is reached.
    #[inline]
    fn distance(&self, rect: ElementRect, viewport_height: f32) -> f32 {
        let target = match self.target {
            Edge::Top => rect.top,
            Edge::Bottom => rect.top + rect.height,
        };
        let viewport = match self.viewport {
            Edge::Top => 0.0,
            Edge::Bottom => viewport_height,
        };
        target - viewport
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionTarget {
    Page,
    Element(String),
}

/// Span over which progress is measured. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRegion {
    target: RegionTarget,
    start: Intersection,
    end: Intersection,
}

impl ScrollRegion {
    pub fn page() -> Self {
        Self {
            target: RegionTarget::Page,
            start: Intersection::new(Edge::Top, Edge::Top),
            end: Intersection::new(Edge::Bottom, Edge::Bottom),
        }
    }

    pub fn element(
        id: impl Into<String>,
        start: Intersection,
        end: Intersection,
    ) -> Result<Self, MotionError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(MotionError::EmptyRegionTarget);
        }
        if start == end {
            return Err(MotionError::DegenerateRegion);
        }
        Ok(Self {
            target: RegionTarget::Element(id),
            start,
            end,
        })
    }

    /// Element entering from the bottom of the viewport until it has left
    /// through the top.
    pub fn element_in_view(id: impl Into<String>) -> Result<Self, MotionError> {
        Self::element(
            id,
            Intersection::new(Edge::Top, Edge::Bottom),
            Intersection::new(Edge::Bottom, Edge::Top),
        )
    }

    pub fn target(&self) -> &RegionTarget {
        &self.target
    }

    pub fn element_id(&self) -> Option<&str> {
        match &self.target {
            RegionTarget::Page => None,
            RegionTarget::Element(id) => Some(id),
        }
    }
}

/// Bounding rect of a tracked element relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub top: f32,
    pub height: f32,
}

/// Live measurements taken on each scroll/resize event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_y: f32,
    pub viewport_height: f32,
    pub document_height: f32,
    /// `None` when the region's element is not mounted.
    pub target: Option<ElementRect>,
}

/// Normalized progress in `[0, 1]`. Unmeasurable regions report 0.
pub fn progress(region: &ScrollRegion, geometry: &ScrollGeometry) -> f32 {
    let raw = match region.target {
        RegionTarget::Page => {
            let scrollable = geometry.document_height - geometry.viewport_height;
            if scrollable <= 0.0 {
                return 0.0;
            }
            geometry.scroll_y / scrollable
        }
        RegionTarget::Element(_) => {
            let Some(rect) = geometry.target else {
                return 0.0;
            };
            if rect.height <= 0.0 {
                return 0.0;
            }
            let d_start = region.start.distance(rect, geometry.viewport_height);
            let d_end = region.end.distance(rect, geometry.viewport_height);
            let span = d_end - d_start;
            if span.abs() <= f32::EPSILON {
                return 0.0;
            }
            -d_start / span
        }
    };
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Opacity,
    Scale,
}

/// Interpolated presentation values. Untracked properties stay at 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    pub opacity: f32,
    pub scale: f32,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollProgressMapper {
    region: ScrollRegion,
    tracks: SmallVec<[(Property, Keyframes); 2]>,
}

impl ScrollProgressMapper {
    pub fn new(region: ScrollRegion) -> Self {
        Self {
            region,
            tracks: SmallVec::new(),
        }
    }

    /// Attach a curve to `property`, replacing any previous one.
    pub fn track(mut self, property: Property, keyframes: Keyframes) -> Self {
        self.tracks.retain(|(p, _)| *p != property);
        self.tracks.push((property, keyframes));
        self
    }

    pub fn region(&self) -> &ScrollRegion {
        &self.region
    }

    pub fn progress(&self, geometry: &ScrollGeometry) -> f32 {
        progress(&self.region, geometry)
    }

    /// Value of `property` at an already computed progress.
    pub fn sample(&self, property: Property, progress: f32) -> Option<f32> {
        self.tracks
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, k)| k.sample(progress))
    }

    pub fn presentation(&self, geometry: &ScrollGeometry) -> Presentation {
        let p = self.progress(geometry);
        let mut out = Presentation::default();
        for (property, keyframes) in &self.tracks {
            let v = keyframes.sample(p);
            match property {
                Property::Opacity => out.opacity = v,
                Property::Scale => out.scale = v,
            }
        }
        out
    }
}
