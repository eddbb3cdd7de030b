use glam::Vec2;

/// Current viewport size in CSS pixels. Read live from the host on every use;
/// never cached across resizes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Pointer position as a fraction of the viewport; zero-sized axes map to 0.
    #[inline]
    pub fn normalize(&self, p: Vec2) -> Vec2 {
        let nx = if self.width > 0.0 { p.x / self.width } else { 0.0 };
        let ny = if self.height > 0.0 { p.y / self.height } else { 0.0 };
        Vec2::new(nx, ny)
    }
}

/// Raw pointer coordinates in viewport pixels, overwritten on every move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
