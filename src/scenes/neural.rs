//=========================================================================
// Neural Network
//=========================================================================
//
// Slowly drifting nodes linked to every neighbor within `LINK_DISTANCE`.
// The pointer fires nodes within `PULSE_RADIUS`: their pulse jumps to 1
// and then decays linearly, brightening and swelling the node and the
// links touching it.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputState, Viewport};
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneContext};

//=== Constants ===========================================================

const NODE_COUNT: usize = 60;
const PULSE_RADIUS: f32 = 100.0;
const PULSE_DECAY: f32 = 0.02;
const LINK_DISTANCE: f32 = 150.0;

//=== Node ================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) pulse: f32,
}

//=== NeuralScene =========================================================

pub struct NeuralScene {
    rng: StdRng,
    nodes: Vec<Node>,
}

impl NeuralScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: Vec::new(),
        }
    }
}

/// Whether the pointer fires a node at `position` this tick.
pub(crate) fn fires(position: Vec2, input: &InputState) -> bool {
    input.pointer().is_some_and(|pointer| pointer.distance(position) < PULSE_RADIUS)
}

impl Scene for NeuralScene {
    fn name(&self) -> &'static str {
        "Neural Network"
    }

    fn init(&mut self, viewport: Viewport) {
        let rng = &mut self.rng;

        self.nodes = (0..NODE_COUNT)
            .map(|_| Node {
                position: Vec2::new(rng.gen::<f32>() * viewport.width, rng.gen::<f32>() * viewport.height),
                velocity: Vec2::new(rng.gen_range(-0.25..0.25), rng.gen_range(-0.25..0.25)),
                pulse: 0.0,
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        for n in &mut self.nodes {
            n.position += n.velocity;
            n.velocity = ctx.viewport.bounce(n.position, n.velocity);
            n.pulse = (n.pulse - PULSE_DECAY).max(0.0);

            if fires(n.position, &ctx.input) {
                n.pulse = 1.0;
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        for (i, a) in self.nodes.iter().enumerate() {
            surface.fill_circle(a.position, 3.0 + a.pulse * 5.0, Color::rgba(255, 255, 255, 0.3 + a.pulse));

            for b in &self.nodes[i + 1..] {
                if a.position.distance(b.position) < LINK_DISTANCE {
                    let alpha = 0.1 + (a.pulse + b.pulse) * 0.5;
                    surface.stroke_line(a.position, b.position, 1.0, Color::rgba(100, 200, 255, alpha));
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{DrawCommand, DrawList};

    fn still(positions: &[Vec2]) -> NeuralScene {
        let mut scene = NeuralScene::new(0);
        scene.nodes = positions
            .iter()
            .map(|&position| Node { position, velocity: Vec2::ZERO, pulse: 0.0 })
            .collect();
        scene
    }

    #[test]
    fn nothing_fires_without_pointer() {
        let mut scene = NeuralScene::new(6);
        scene.init(Viewport::default());
        for _ in 0..10 {
            scene.update(&SceneContext::default());
        }
        assert!(scene.nodes.iter().all(|n| n.pulse == 0.0));
        assert!(!fires(Vec2::ZERO, &InputState::new()));
    }

    #[test]
    fn pulse_fires_then_decays_to_zero() {
        let mut scene = still(&[Vec2::new(100.0, 100.0)]);
        let near = SceneContext::new(InputState::with_pointer(120.0, 100.0), Viewport::default());

        scene.update(&near);
        assert_eq!(scene.nodes[0].pulse, 1.0);

        scene.update(&SceneContext::default());
        assert!((scene.nodes[0].pulse - 0.98).abs() < 1e-6);

        for _ in 0..100 {
            scene.update(&SceneContext::default());
        }
        assert_eq!(scene.nodes[0].pulse, 0.0);
    }

    #[test]
    fn link_alpha_includes_both_pulses() {
        let mut scene = still(&[Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(400.0, 0.0)]);
        scene.nodes[0].pulse = 0.4;
        scene.nodes[1].pulse = 0.2;

        let mut list = DrawList::new();
        scene.draw(&mut list, &SceneContext::default());

        let links: Vec<f32> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeLine { color, .. } => Some(color.a),
                _ => None,
            })
            .collect();
        assert_eq!(links.len(), 1);
        assert!((links[0] - 0.4).abs() < 1e-6);
    }
}
