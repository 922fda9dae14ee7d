//=========================================================================
// Vortex
//=========================================================================
//
// Particles spiral into the pointer (or the viewport center when no
// pointer is present). Both angular and inward radial speed grow as
// `1 / (d + 1)`.
//
// Event horizon: once a step brings a particle within `HORIZON` pixels of
// the center it is reset onto a large ring at a random angle. The reset
// replaces the step result; it does not clamp and continue.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::TAU;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::input::Viewport;
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneContext};

//=== Constants ===========================================================

const PARTICLE_COUNT: usize = 500;
const HORIZON: f32 = 5.0;
const SPAWN_RING: f32 = 0.8;

//=== Particle ============================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Particle {
    pub(crate) position: Vec2,
    size: f32,
    color: Color,
}

//=== VortexScene =========================================================

pub struct VortexScene {
    rng: StdRng,
    particles: Vec<Particle>,
}

impl VortexScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            particles: Vec::new(),
        }
    }
}

/// One polar step around `center`. Returns the new position, or `None`
/// when the particle crossed the event horizon.
pub(crate) fn spiral_step(position: Vec2, center: Vec2) -> Option<Vec2> {
    let offset = position - center;
    let distance = offset.length();
    let angle = offset.y.atan2(offset.x);

    let radial_velocity = 1.0 + 200.0 / (distance + 1.0);
    let angular_velocity = 0.02 + 5.0 / (distance + 1.0);

    let angle = angle + angular_velocity;
    let distance = distance - radial_velocity;

    if distance < HORIZON {
        return None;
    }

    Some(center + Vec2::from_angle(angle) * distance)
}

impl Scene for VortexScene {
    fn name(&self) -> &'static str {
        "Vortex"
    }

    fn init(&mut self, viewport: Viewport) {
        let rng = &mut self.rng;

        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * viewport.width, rng.gen::<f32>() * viewport.height),
                size: rng.gen::<f32>() * 2.0 + 0.5,
                color: Color::hsl(rng.gen::<f32>() * 60.0 + 220.0, 80.0, 60.0),
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        let center = ctx.input.pointer_or(ctx.viewport.center());
        let spawn_radius = ctx.viewport.max_side() * SPAWN_RING;

        for p in &mut self.particles {
            p.position = match spiral_step(p.position, center) {
                Some(next) => next,
                None => {
                    let spawn_angle = self.rng.gen::<f32>() * TAU;
                    center + Vec2::from_angle(spawn_angle) * spawn_radius
                }
            };
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        for p in &self.particles {
            surface.fill_circle(p.position, p.size, p.color);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
