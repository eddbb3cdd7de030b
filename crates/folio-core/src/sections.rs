//! Active-section detection for navigation highlighting.
//!
//! A section is active when its bounds straddle a horizontal reference line
//! placed at a fixed fraction of the viewport height. Sections are tested in
//! declaration order and the first hit wins; when nothing straddles the line
//! the active section is cleared rather than left on the last hit.

use crate::debounce::TrailingDebounce;
use crate::error::MotionError;
use crate::signal::{ObserverId, Published};
use std::collections::HashSet;
use std::time::Duration;

/// Vertical extent of a section relative to the viewport top.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub bottom: f32,
}

impl SectionBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    #[inline]
    pub fn straddles(&self, line_y: f32) -> bool {
        self.top <= line_y && self.bottom >= line_y
    }
}

/// Live layout queries. Implemented over the DOM in the browser and over
/// fixed tables in tests.
pub trait SectionProbe {
    fn viewport_height(&self) -> f32;
    /// `None` when the section is not mounted.
    fn bounds(&self, id: &str) -> Option<SectionBounds>;
}

pub fn validate_ids(ids: &[String]) -> Result<(), MotionError> {
    if ids.is_empty() {
        return Err(MotionError::NoSections);
    }
    let mut seen = HashSet::new();
    for (i, id) in ids.iter().enumerate() {
        if id.is_empty() {
            return Err(MotionError::EmptySectionId(i));
        }
        if !seen.insert(id.as_str()) {
            return Err(MotionError::DuplicateSection(id.clone()));
        }
    }
    Ok(())
}

/// Index of the first section straddling the reference line.
pub fn find_active<P: SectionProbe + ?Sized>(
    ids: &[String],
    probe: &P,
    line_fraction: f32,
) -> Option<usize> {
    let line_y = probe.viewport_height() * line_fraction;
    ids.iter().position(|id| {
        probe
            .bounds(id)
            .map(|b| b.straddles(line_y))
            .unwrap_or(false)
    })
}

pub struct ActiveSectionTracker {
    ids: Vec<String>,
    line_fraction: f32,
    debounce: TrailingDebounce,
    active: Published<Option<String>>,
    attached: bool,
    recomputations: u64,
}

impl ActiveSectionTracker {
    pub fn new(
        ids: Vec<String>,
        line_fraction: f32,
        debounce: Duration,
    ) -> Result<Self, MotionError> {
        validate_ids(&ids)?;
        if !(0.0..=1.0).contains(&line_fraction) {
            return Err(MotionError::InvalidLineFraction(line_fraction));
        }
        Ok(Self {
            ids,
            line_fraction,
            debounce: TrailingDebounce::new(debounce),
            active: Published::new(None),
            attached: false,
            recomputations: 0,
        })
    }

    pub fn from_config(config: &crate::config::MotionConfig) -> Result<Self, MotionError> {
        Self::new(
            config.sections.clone(),
            config.active_line_fraction,
            config.scroll_debounce,
        )
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Start tracking. Runs one recomputation immediately so the active
    /// section is right before the first scroll.
    pub fn attach<P: SectionProbe + ?Sized>(&mut self, probe: &P) {
        self.attached = true;
        self.debounce.cancel();
        self.recompute(probe);
    }

    /// Stop tracking and drop any pending recomputation.
    pub fn detach(&mut self) {
        self.attached = false;
        self.debounce.cancel();
        self.active.clear_observers();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn on_scroll(&mut self, now: Duration) {
        if self.attached {
            self.debounce.trigger(now);
        }
    }

    pub fn has_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Run the deferred recomputation once the scroll stream has been idle for
    /// the debounce delay. Returns true when it ran.
    pub fn poll<P: SectionProbe + ?Sized>(&mut self, now: Duration, probe: &P) -> bool {
        if !self.attached || !self.debounce.fire_if_due(now) {
            return false;
        }
        self.recompute(probe);
        true
    }

    pub fn recompute<P: SectionProbe + ?Sized>(&mut self, probe: &P) {
        self.recomputations += 1;
        let next = find_active(&self.ids, probe, self.line_fraction).map(|i| self.ids[i].clone());
        if self.active.set(next) {
            log::debug!("[sections] active -> {:?}", self.active.get());
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.get().as_deref()
    }

    pub fn version(&self) -> u64 {
        self.active.version()
    }

    pub fn observe(&mut self, observer: impl FnMut(&Option<String>) + 'static) -> ObserverId {
        self.active.observe(observer)
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
