//=========================================================================
// Draw List
//=========================================================================
//
// Recording `Surface`: every draw call becomes a `DrawCommand`.
//
// Used as the headless surface (engine runs without a rasterizer) and as
// the surface double in tests. `clear()` empties the list, so after a tick
// it holds exactly one frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{Color, Surface};

//=== DrawCommand =========================================================

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillCircle { center: Vec2, radius: f32, color: Color },
    StrokeCircle { center: Vec2, radius: f32, width: f32, color: Color },
    StrokeLine { from: Vec2, to: Vec2, width: f32, color: Color },
    StrokePolyline { points: Vec<Vec2>, width: f32, color: Color },
    FillPolygon { points: Vec<Vec2>, color: Color },
    FillRect { origin: Vec2, size: Vec2, color: Color },
    FillGlyph { glyph: char, position: Vec2, size: f32, color: Color },
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
}

impl DrawCommand {
    /// Returns `true` if every coordinate and scalar in the command is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::FillCircle { center, radius, color } => {
                center.is_finite() && radius.is_finite() && color.a.is_finite()
            }
            Self::StrokeCircle { center, radius, width, .. } => {
                center.is_finite() && radius.is_finite() && width.is_finite()
            }
            Self::StrokeLine { from, to, width, .. } => {
                from.is_finite() && to.is_finite() && width.is_finite()
            }
            Self::StrokePolyline { points, width, .. } => {
                width.is_finite() && points.iter().all(|p| p.is_finite())
            }
            Self::FillPolygon { points, .. } => points.iter().all(|p| p.is_finite()),
            Self::FillRect { origin, size, .. } => origin.is_finite() && size.is_finite(),
            Self::FillGlyph { position, size, .. } => position.is_finite() && size.is_finite(),
            Self::Translate(offset) => offset.is_finite(),
            Self::Rotate(angle) => angle.is_finite(),
            Self::Save | Self::Restore => true,
        }
    }
}

//=== DrawList ============================================================

/// A `Surface` that records draw calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    depth: usize,
    clears: u64,
}

impl DrawList {
    /// Creates an empty draw list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last `clear()`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing has been drawn since the last clear.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current `save` nesting depth. Zero after a balanced frame.
    pub fn transform_depth(&self) -> usize {
        self.depth
    }

    /// How many times the surface has been cleared (one per driven frame).
    pub fn frames(&self) -> u64 {
        self.clears
    }

    /// Counts recorded commands matching `predicate`.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&DrawCommand) -> bool,
    {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Returns `true` if every recorded command is finite.
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(DrawCommand::is_finite)
    }
}

//--- Surface Implementation ----------------------------------------------

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.depth = 0;
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, width, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeLine { from, to, width, color });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::StrokePolyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect { origin, size, color });
    }

    fn fill_glyph(&mut self, glyph: char, position: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::FillGlyph { glyph, position, size, color });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
