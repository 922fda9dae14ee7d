//=========================================================================
// Flow Field
//=========================================================================
//
// Particles ride a smooth pseudo-noise angle field and leave short trails.
// Near the pointer the field angle is replaced by one perpendicular to the
// pointer direction, plus a speed boost, so the stream parts around it
// like water around a rock.
//
// Trails are capped per particle (oldest point dropped). Wrapping at an
// edge clears the trail so no segment spans the whole surface.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;
use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputState, Viewport};
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneContext};

//=== Constants ===========================================================

const PARTICLE_COUNT: usize = 1000;
const NOISE_SCALE: f32 = 0.005;
const POINTER_RADIUS: f32 = 150.0;
const BASE_THRUST: f32 = 0.5;
const POINTER_BOOST: f32 = 2.0;
const FRICTION: f32 = 0.95;

//=== Particle ============================================================

#[derive(Debug, Clone)]
pub(crate) struct Particle {
    pub(crate) position: Vec2,
    velocity: Vec2,
    pub(crate) history: VecDeque<Vec2>,
    pub(crate) max_length: usize,
    base_hue: f32,
    hue: f32,
}

//=== FlowFieldScene ======================================================

pub struct FlowFieldScene {
    rng: StdRng,
    particles: Vec<Particle>,
}

impl FlowFieldScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            particles: Vec::new(),
        }
    }
}

/// Ambient field angle at `p`.
pub(crate) fn field_angle(p: Vec2) -> f32 {
    ((p.x * NOISE_SCALE).sin() + (p.y * NOISE_SCALE).cos()) * TAU
}

/// Steering for a particle at `p`: `(angle, boost)`; `None` boost means the
/// pointer is not influencing it.
fn steering(p: Vec2, input: &InputState) -> (f32, Option<f32>) {
    if let Some(pointer) = input.pointer() {
        let away = p - pointer;
        if away.length() < POINTER_RADIUS {
            let angle_to_pointer = away.y.atan2(away.x);
            return (angle_to_pointer + FRAC_PI_2, Some(POINTER_BOOST));
        }
    }
    (field_angle(p), None)
}

impl Scene for FlowFieldScene {
    fn name(&self) -> &'static str {
        "Flow Field"
    }

    fn init(&mut self, viewport: Viewport) {
        let rng = &mut self.rng;

        self.particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let base_hue = rng.gen::<f32>() * 60.0 + 180.0;
                Particle {
                    position: Vec2::new(rng.gen::<f32>() * viewport.width, rng.gen::<f32>() * viewport.height),
                    velocity: Vec2::ZERO,
                    history: VecDeque::new(),
                    max_length: rng.gen_range(10..30),
                    base_hue,
                    hue: base_hue,
                }
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        let viewport = ctx.viewport;

        for p in &mut self.particles {
            let (angle, boost) = steering(p.position, &ctx.input);
            // Hot red near the pointer
            p.hue = if boost.is_some() { 0.0 } else { p.base_hue };

            let thrust = BASE_THRUST + boost.unwrap_or(0.0);
            p.velocity += Vec2::from_angle(angle) * thrust;
            p.velocity *= FRICTION;
            p.position += p.velocity;

            p.history.push_back(p.position);
            if p.history.len() > p.max_length {
                p.history.pop_front();
            }

            let wrapped = viewport.wrap(p.position);
            if wrapped != p.position {
                p.position = wrapped;
                p.history.clear();
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        let mut trail = Vec::with_capacity(32);

        for p in &self.particles {
            trail.clear();
            trail.extend(p.history.iter().copied());
            surface.stroke_polyline(&trail, 1.0, Color::hsla(p.hue, 80.0, 60.0, 0.5));
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
