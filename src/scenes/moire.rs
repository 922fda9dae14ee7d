//=========================================================================
// Moire Patterns
//=========================================================================
//
// Two sets of concentric rings: a white set fixed at the viewport center
// and a cyan set following the pointer. The interference fringes come
// entirely from the overlap; the scene has no state.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::Viewport;
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneContext};

//=== Constants ===========================================================

const RING_SPACING: usize = 8;
const RING_WIDTH: f32 = 2.0;

//=== MoireScene ==========================================================

#[derive(Debug, Default)]
pub struct MoireScene;

impl MoireScene {
    pub fn new() -> Self {
        Self
    }
}

/// Radii of one ring set, `0, 8, 16, ...` strictly below `max_side`.
pub(crate) fn ring_radii(max_side: f32) -> impl Iterator<Item = f32> {
    (0..)
        .step_by(RING_SPACING)
        .map(|r| r as f32)
        .take_while(move |&r| r < max_side)
}

impl Scene for MoireScene {
    fn name(&self) -> &'static str {
        "Moire Patterns"
    }

    fn init(&mut self, _viewport: Viewport) {}

    fn update(&mut self, _ctx: &SceneContext) {}

    fn draw(&self, surface: &mut dyn Surface, ctx: &SceneContext) {
        let center = ctx.viewport.center();
        let focus = ctx.input.pointer_or(center);
        let max_side = ctx.viewport.max_side();

        for r in ring_radii(max_side) {
            surface.stroke_circle(center, r, RING_WIDTH, Color::WHITE);
        }
        for r in ring_radii(max_side) {
            surface.stroke_circle(focus, r, RING_WIDTH, Color::CYAN);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputState;
    use crate::core::render::{DrawCommand, DrawList};
    use glam::Vec2;

    #[test]
    fn radii_stop_below_longest_side() {
        let radii: Vec<f32> = ring_radii(20.0).collect();
        assert_eq!(radii, vec![0.0, 8.0, 16.0]);
        assert_eq!(ring_radii(16.0).count(), 2);
    }

    #[test]
    fn second_grating_follows_pointer() {
        let viewport = Viewport::new(80.0, 40.0);
        let ctx = SceneContext::new(InputState::with_pointer(10.0, 20.0), viewport);
        let mut list = DrawList::new();
        MoireScene::new().draw(&mut list, &ctx);

        assert_eq!(list.len(), 20);
        let cyan_centers: Vec<Vec2> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeCircle { center, color, .. } if *color == Color::CYAN => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(cyan_centers.len(), 10);
        assert!(cyan_centers.iter().all(|&c| c == Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn gratings_coincide_without_pointer() {
        let viewport = Viewport::new(80.0, 40.0);
        let mut list = DrawList::new();
        MoireScene::new().draw(&mut list, &SceneContext::new(InputState::new(), viewport));

        for command in list.commands() {
            if let DrawCommand::StrokeCircle { center, .. } = command {
                assert_eq!(*center, viewport.center());
            }
        }
    }
}
