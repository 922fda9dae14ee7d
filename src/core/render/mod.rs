//=========================================================================
// Render Interface
//=========================================================================
//
// Contract between scenes and whatever rasterizer the host provides.
//
// Architecture:
//   Scene::draw() ──► &mut dyn Surface ──► host rasterizer
//                                     └──► DrawList (headless / tests)
//
// Scenes only issue primitive draw calls. The core never reads pixels
// back, so any 2D backend that can fill circles, stroke lines and keep a
// transform stack can display every scene.
//
//=========================================================================

//=== Module Declarations =================================================

mod color;
mod draw_list;

//=== Public API ==========================================================

pub use color::Color;
pub use draw_list::{DrawCommand, DrawList};

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Surface Trait =======================================================

/// A 2D drawing target.
///
/// Coordinates are pixels with a top-left origin, transformed by the
/// current `translate`/`rotate` state. `save` pushes the transform and
/// `restore` pops it.
///
/// # Minimal Implementation
///
/// A backend that ignores transforms can still render every scene except
/// Kaleidoscope and Boids correctly; those two rely on the stack.
pub trait Surface {
    /// Clears the whole surface. Called by the frame driver once per tick,
    /// before the active scene draws.
    fn clear(&mut self);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Strokes a circle outline.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color);

    /// Strokes a single line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Strokes an open polyline through `points`. Fewer than two points
    /// draws nothing.
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color);

    /// Fills a closed polygon.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Draws a single glyph with its baseline-left corner at `position`.
    fn fill_glyph(&mut self, glyph: char, position: Vec2, size: f32, color: Color);

    /// Pushes the current transform.
    fn save(&mut self);

    /// Pops the transform pushed by the matching `save`.
    fn restore(&mut self);

    /// Translates subsequent draws.
    fn translate(&mut self, offset: Vec2);

    /// Rotates subsequent draws by `angle` radians around the current origin.
    fn rotate(&mut self, angle: f32);
}
