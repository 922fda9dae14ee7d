//=========================================================================
// Gravity
//=========================================================================
//
// The pointer is a softened inverse-square attractor. Velocity is damped
// by a fixed friction factor every tick before integrating position, and
// particles wrap toroidally at the edges.
//
//   force = K / (d² + ε)       K = 500, ε = 100
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

const AREA_PER_PARTICLE: f32 = 5000.0;
const STRENGTH: f32 = 500.0;
const SOFTENING: f32 = 100.0;
const FRICTION: f32 = 0.95;

// Tethers are drawn to particles within this distance of the pointer
const TETHER_DISTANCE: f32 = 200.0;

//=== Particle ============================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Particle {
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    size: f32,
}

//=== GravityScene ========================================================

pub struct GravityScene {
    rng: StdRng,
    particles: Vec<Particle>,
}

impl GravityScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            particles: Vec::new(),
        }
    }
}

/// Acceleration toward the pointer. Zero when the pointer is absent or
/// exactly on the particle (direction undefined).
pub(crate) fn attraction(position: Vec2, input: &InputState) -> Vec2 {
    let Some(pointer) = input.pointer() else {
        return Vec2::ZERO;
    };

    let offset = pointer - position;
    let force = STRENGTH / (offset.length_squared() + SOFTENING);
    offset.normalize_or_zero() * force
}

impl Scene for GravityScene {
    fn name(&self) -> &'static str {
        "Gravity"
    }

    fn init(&mut self, viewport: Viewport) {
        let count = (viewport.area() / AREA_PER_PARTICLE).ceil() as usize;
        let rng = &mut self.rng;

        self.particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * viewport.width, rng.gen::<f32>() * viewport.height),
                velocity: Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
                size: rng.gen::<f32>() * 2.0 + 1.0,
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        for p in &mut self.particles {
            p.velocity += attraction(p.position, &ctx.input);
            p.velocity *= FRICTION;
            p.position = ctx.viewport.wrap(p.position + p.velocity);
        }
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &SceneContext) {
        let body = Color::rgba(100, 200, 255, 0.8);
        for p in &self.particles {
            surface.fill_circle(p.position, p.size, body);
        }

        if let Some(pointer) = ctx.input.pointer() {
            let tether = Color::rgba(100, 200, 255, 0.1);
            for p in &self.particles {
                if pointer.distance_squared(p.position) < TETHER_DISTANCE * TETHER_DISTANCE {
                    surface.stroke_line(pointer, p.position, 1.0, tether);
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

    fn at_rest(x: f32, y: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            size: 1.0,
        }
    }

    #[test]
    fn attraction_uses_softened_inverse_square() {
        let input = InputState::with_pointer(0.0, 0.0);
        let a = attraction(Vec2::new(10.0, 0.0), &input);
        // 500 / (100 + 100) = 2.5, pointing toward -x
        assert!((a.x + 2.5).abs() < 1e-5);
        assert_eq!(a.y, 0.0);
    }

    #[test]
    fn attraction_is_zero_without_pointer_or_on_top() {
        assert_eq!(attraction(Vec2::new(5.0, 5.0), &InputState::new()), Vec2::ZERO);

        let on_top = InputState::with_pointer(5.0, 5.0);
        let a = attraction(Vec2::new(5.0, 5.0), &on_top);
        assert!(a.is_finite());
        assert_eq!(a, Vec2::ZERO);
    }

    #[test]
    fn distance_to_pointer_shrinks_while_approaching() {
        let mut scene = GravityScene::new(0);
        scene.particles = vec![at_rest(600.0, 300.0), at_rest(400.0, 100.0), at_rest(250.0, 450.0)];
        let pointer = Vec2::new(400.0, 300.0);
        let ctx = SceneContext::new(InputState::with_pointer(pointer.x, pointer.y), Viewport::default());

        let mut last: Vec<f32> = scene.particles.iter().map(|p| p.position.distance(pointer)).collect();
        for _ in 0..30 {
            scene.update(&ctx);
            for (p, prev) in scene.particles.iter().zip(last.iter_mut()) {
                let d = p.position.distance(pointer);
                assert!(d <= *prev, "distance grew from {} to {}", prev, d);
                *prev = d;
            }
        }
    }

    #[test]
    fn friction_decays_free_motion() {
        let mut scene = GravityScene::new(0);
        scene.particles = vec![Particle {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::new(2.0, 0.0),
            size: 1.0,
        }];

        scene.update(&SceneContext::default());

        assert!((scene.particles[0].velocity.x - 1.9).abs() < 1e-5);
        assert!((scene.particles[0].position.x - 101.9).abs() < 1e-4);
    }

    #[test]
    fn particles_wrap_at_edges() {
        let mut scene = GravityScene::new(0);
        scene.particles = vec![Particle {
            position: Vec2::new(799.5, 10.0),
            velocity: Vec2::new(2.0, 0.0),
            size: 1.0,
        }];

        scene.update(&SceneContext::default());

        assert_eq!(scene.particles[0].position.x, 0.0);
    }
}
