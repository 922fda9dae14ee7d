//=========================================================================
// Antigravity
//=========================================================================
//
// Drifting motes that bounce off the edges and are shoved away from the
// pointer. Nearby motes are linked by fading lines.
//
// Pointer term: inside `POINTER_RADIUS` each mote is displaced away from
// the pointer by `(R - d) / R * density` pixels. It moves the position
// directly and never touches velocity.
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

const AREA_PER_PARTICLE: f32 = 9000.0;
const POINTER_RADIUS: f32 = 200.0;
const LINK_DISTANCE: f32 = 150.0;
const PARTICLE_SIZE: f32 = 2.0;

//=== Particle ============================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Particle {
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    density: f32,
}

//=== AntigravityScene ====================================================

pub struct AntigravityScene {
    rng: StdRng,
    particles: Vec<Particle>,
}

impl AntigravityScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            particles: Vec::new(),
        }
    }

    pub(crate) fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Displacement the pointer applies to a mote at `position` with the given
/// density. Exactly zero when the pointer is absent, out of range, or
/// sitting on the mote.
pub(crate) fn pointer_displacement(position: Vec2, density: f32, input: &InputState) -> Vec2 {
    let Some(pointer) = input.pointer() else {
        return Vec2::ZERO;
    };

    let offset = pointer - position;
    let distance = offset.length();
    if distance >= POINTER_RADIUS || distance == 0.0 {
        return Vec2::ZERO;
    }

    let force = (POINTER_RADIUS - distance) / POINTER_RADIUS;
    -(offset / distance) * force * density
}

impl Scene for AntigravityScene {
    fn name(&self) -> &'static str {
        "Antigravity"
    }

    fn init(&mut self, viewport: Viewport) {
        let count = (viewport.area() / AREA_PER_PARTICLE).ceil() as usize;
        let rng = &mut self.rng;

        self.particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * viewport.width, rng.gen::<f32>() * viewport.height),
                velocity: Vec2::new(rng.gen_range(-0.75..0.75), rng.gen_range(-0.75..0.75)),
                density: rng.gen::<f32>() * 30.0 + 1.0,
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        for p in &mut self.particles {
            p.position += p.velocity;
            p.velocity = ctx.viewport.bounce(p.position, p.velocity);
            p.position += pointer_displacement(p.position, p.density, &ctx.input);
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        let dot = Color::rgba(255, 255, 255, 0.8);

        for (i, p) in self.particles.iter().enumerate() {
            surface.fill_circle(p.position, PARTICLE_SIZE, dot);

            for other in &self.particles[i + 1..] {
                let distance = p.position.distance(other.position);
                if distance < LINK_DISTANCE {
                    let opacity = 1.0 - distance / LINK_DISTANCE;
                    surface.stroke_line(
                        p.position,
                        other.position,
                        1.0,
                        Color::rgba(255, 255, 255, opacity * 0.5),
                    );
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

    fn ctx(input: InputState) -> SceneContext {
        SceneContext::new(input, Viewport::new(900.0, 600.0))
    }

    #[test]
    fn population_scales_with_area() {
        let mut scene = AntigravityScene::new(1);
        scene.init(Viewport::new(900.0, 600.0));
        assert_eq!(scene.particles().len(), 60);

        scene.init(Viewport::new(1.0, 1.0));
        assert_eq!(scene.particles().len(), 1);
    }

    #[test]
    fn pointer_term_is_exactly_zero_when_absent() {
        let mut scene = AntigravityScene::new(7);
        scene.init(Viewport::new(900.0, 600.0));
        let input = InputState::new();

        for _ in 0..50 {
            for p in scene.particles() {
                assert_eq!(pointer_displacement(p.position, p.density, &input), Vec2::ZERO);
            }
            let before: Vec<Vec2> = scene.particles().iter().map(|p| p.velocity).collect();
            scene.update(&ctx(input));
            for (p, v) in scene.particles().iter().zip(before) {
                // Only bounce can change velocity, and only its sign
                assert_eq!(p.velocity.abs(), v.abs());
            }
        }
    }

    #[test]
    fn pointer_pushes_particles_away() {
        let input = InputState::with_pointer(100.0, 100.0);
        let shove = pointer_displacement(Vec2::new(150.0, 100.0), 10.0, &input);
        assert!(shove.x > 0.0);
        assert_eq!(shove.y, 0.0);
        // (200 - 50) / 200 * 10
        assert!((shove.x - 7.5).abs() < 1e-5);
    }

    #[test]
    fn pointer_outside_radius_or_on_top_does_nothing() {
        let input = InputState::with_pointer(0.0, 0.0);
        assert_eq!(pointer_displacement(Vec2::new(300.0, 0.0), 10.0, &input), Vec2::ZERO);
        assert_eq!(pointer_displacement(Vec2::ZERO, 10.0, &input), Vec2::ZERO);
    }

    #[test]
    fn bounce_flips_velocity_past_edge() {
        let mut scene = AntigravityScene::new(3);
        scene.particles = vec![Particle {
            position: Vec2::new(899.5, 300.0),
            velocity: Vec2::new(0.7, 0.0),
            density: 5.0,
        }];

        scene.update(&ctx(InputState::new()));

        assert_eq!(scene.particles()[0].velocity, Vec2::new(-0.7, 0.0));
    }
}
