use crate::error::MotionError;
use crate::interpolate::Keyframes;
use crate::scroll::{Property, ScrollProgressMapper, ScrollRegion};

/// A scroll mapper paired with the element whose style it drives.
#[derive(Clone, Debug)]
pub struct ScrollBinding {
    pub element_id: &'static str,
    pub mapper: ScrollProgressMapper,
}

pub const HERO_CONTENT_ID: &str = "hero-content";
pub const PROJECTS_BACKDROP_ID: &str = "projects-backdrop";
pub const PROJECTS_HEADING_ID: &str = "projects-heading";
pub const EXPERIENCE_HEADING_ID: &str = "experience-heading";

/// Bindings for the portfolio page: the hero fades out over the first half of
/// the page, section headings grow in as their section enters the viewport.
pub fn default_bindings() -> Result<Vec<ScrollBinding>, MotionError> {
    let hero = ScrollProgressMapper::new(ScrollRegion::page())
        .track(Property::Opacity, Keyframes::linear([0.0, 0.5], [1.0, 0.0])?)
        .track(Property::Scale, Keyframes::linear([0.0, 0.5], [1.0, 0.9])?);

    let projects = ScrollRegion::element_in_view("projects")?;
    let experience = ScrollRegion::element_in_view("experience")?;

    Ok(vec![
        ScrollBinding {
            element_id: HERO_CONTENT_ID,
            mapper: hero,
        },
        ScrollBinding {
            element_id: PROJECTS_BACKDROP_ID,
            mapper: ScrollProgressMapper::new(projects.clone())
                .track(Property::Opacity, Keyframes::linear([0.0, 0.5], [0.0, 0.2])?),
        },
        ScrollBinding {
            element_id: PROJECTS_HEADING_ID,
            mapper: heading_entrance(projects)?,
        },
        ScrollBinding {
            element_id: EXPERIENCE_HEADING_ID,
            mapper: heading_entrance(experience)?,
        },
    ])
}

fn heading_entrance(region: ScrollRegion) -> Result<ScrollProgressMapper, MotionError> {
    Ok(ScrollProgressMapper::new(region)
        .track(Property::Opacity, Keyframes::linear([0.0, 0.2], [0.0, 1.0])?)
        .track(Property::Scale, Keyframes::linear([0.0, 0.2], [0.8, 1.0])?))
}
