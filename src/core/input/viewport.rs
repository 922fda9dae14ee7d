//=========================================================================
// Viewport
//
// Current drawable width/height in pixels.
//
// A change of viewport is a reconstruction event: the scene manager
// re-initializes the live scene so its population matches the new size.
//
//=========================================================================

//=== External Crates =====================================================
use glam::Vec2;

//=== Viewport ============================================================

/// Drawable area of the surface, in pixels (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport of the given size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` when both sides are positive and finite. A minimized window
    /// reports a zero-sized viewport, which no scene can be built for.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Center point of the surface.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Size as a vector `(width, height)`.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Larger of the two sides.
    #[inline]
    pub fn max_side(&self) -> f32 {
        self.width.max(self.height)
    }

    /// Surface area in square pixels.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Wraps a point toroidally: a coordinate past one edge jumps to the
    /// opposite edge. Coordinates inside `[0, size]` are left untouched.
    pub fn wrap(&self, mut p: Vec2) -> Vec2 {
        if p.x < 0.0 {
            p.x = self.width;
        } else if p.x > self.width {
            p.x = 0.0;
        }
        if p.y < 0.0 {
            p.y = self.height;
        } else if p.y > self.height {
            p.y = 0.0;
        }
        p
    }

    /// Flips the velocity component for every axis on which `p` lies outside
    /// the surface. Position is not clamped.
    pub fn bounce(&self, p: Vec2, mut velocity: Vec2) -> Vec2 {
        if p.x < 0.0 || p.x > self.width {
            velocity.x = -velocity.x;
        }
        if p.y < 0.0 || p.y > self.height {
            velocity.y = -velocity.y;
        }
        velocity
    }
}

impl Default for Viewport {
    /// 800×600, the default window size.
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
