//=========================================================================
// Quantum Field
//=========================================================================
//
// Particles jitter hard every tick. When the pointer "observes" one from
// within `OBSERVER_RADIUS`, it collapses toward its private anchor; an
// unobserved particle's anchor drifts and wraps instead. Without a pointer
// there is only jitter.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::input::Viewport;
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneContext};

//=== Constants ===========================================================

const PARTICLE_COUNT: usize = 300;
const JITTER: f32 = 10.0;
const OBSERVER_RADIUS: f32 = 200.0;
const COLLAPSE_RATE: f32 = 0.1;
const ANCHOR_DRIFT: f32 = 0.1;

//=== Particle ============================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Particle {
    pub(crate) position: Vec2,
    pub(crate) anchor: Vec2,
    pub(crate) velocity: Vec2,
    color: Color,
}

//=== QuantumScene ========================================================

pub struct QuantumScene {
    rng: StdRng,
    particles: Vec<Particle>,
}

impl QuantumScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            particles: Vec::new(),
        }
    }
}

fn random_point(rng: &mut StdRng, viewport: Viewport) -> Vec2 {
    Vec2::new(rng.gen::<f32>() * viewport.width, rng.gen::<f32>() * viewport.height)
}

impl Scene for QuantumScene {
    fn name(&self) -> &'static str {
        "Quantum Field"
    }

    fn init(&mut self, viewport: Viewport) {
        let rng = &mut self.rng;

        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                position: random_point(rng, viewport),
                anchor: random_point(rng, viewport),
                velocity: Vec2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)),
                color: Color::hsl(rng.gen::<f32>() * 60.0 + 180.0, 100.0, 70.0),
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        for p in &mut self.particles {
            p.position += Vec2::new(self.rng.gen_range(-JITTER..JITTER), self.rng.gen_range(-JITTER..JITTER));

            let Some(pointer) = ctx.input.pointer() else {
                continue;
            };

            if pointer.distance(p.position) < OBSERVER_RADIUS {
                p.position += (p.anchor - p.position) * COLLAPSE_RATE;
            } else {
                p.anchor = ctx.viewport.wrap(p.anchor + p.velocity * ANCHOR_DRIFT);
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        let size = Vec2::splat(2.0);
        for p in &self.particles {
            surface.fill_rect(p.position, size, p.color);
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

    fn lone(position: Vec2, anchor: Vec2, velocity: Vec2) -> QuantumScene {
        let mut scene = QuantumScene::new(17);
        scene.particles = vec![Particle { position, anchor, velocity, color: Color::WHITE }];
        scene
    }

    #[test]
    fn jitter_is_bounded_and_anchor_still_without_pointer() {
        let start = Vec2::new(400.0, 300.0);
        let anchor = Vec2::new(10.0, 10.0);
        let mut scene = lone(start, anchor, Vec2::new(5.0, 5.0));

        let mut previous = start;
        for _ in 0..100 {
            scene.update(&SceneContext::default());
            let p = scene.particles[0];
            let step = p.position - previous;
            assert!(step.x.abs() <= JITTER && step.y.abs() <= JITTER);
            assert_eq!(p.anchor, anchor);
            previous = p.position;
        }
    }

    #[test]
    fn observed_particles_collapse_toward_anchor() {
        let anchor = Vec2::new(400.0, 300.0);
        let mut scene = lone(Vec2::new(400.0, 100.0), anchor, Vec2::ZERO);
        let ctx = SceneContext::new(InputState::with_pointer(400.0, 200.0), Viewport::default());

        for _ in 0..200 {
            scene.update(&ctx);
        }

        // Jitter keeps it from settling exactly, but collapse bounds the spread
        assert!(scene.particles[0].position.distance(anchor) < 150.0);
    }

    #[test]
    fn unobserved_anchor_drifts_and_wraps() {
        let mut scene = lone(Vec2::new(700.0, 500.0), Vec2::new(799.8, 300.0), Vec2::new(4.0, 0.0));
        let ctx = SceneContext::new(InputState::with_pointer(0.0, 0.0), Viewport::default());

        scene.update(&ctx);

        assert_eq!(scene.particles[0].anchor, Vec2::new(0.0, 300.0));
    }
}
