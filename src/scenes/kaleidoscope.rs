//=========================================================================
// Kaleidoscope
//=========================================================================
//
// A handful of bouncing particles drawn N times around the viewport
// center, each copy also mirrored across its slice axis. The pointer's
// horizontal position picks N; the last chosen N is kept while the
// pointer is away.
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

const PARTICLE_COUNT: usize = 50;
const DEFAULT_SYMMETRY: u32 = 6;
const MIN_SYMMETRY: u32 = 2;
const MAX_SYMMETRY: u32 = 12;

//=== Particle ============================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Particle {
    pub(crate) position: Vec2,
    velocity: Vec2,
    size: f32,
    color: Color,
}

//=== KaleidoscopeScene ===================================================

pub struct KaleidoscopeScene {
    rng: StdRng,
    symmetry: u32,
    particles: Vec<Particle>,
}

impl KaleidoscopeScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            symmetry: DEFAULT_SYMMETRY,
            particles: Vec::new(),
        }
    }

    pub(crate) fn symmetry(&self) -> u32 {
        self.symmetry
    }
}

/// Slice count for a pointer at horizontal position `x`.
pub(crate) fn symmetry_for(x: f32, width: f32) -> u32 {
    let raw = (x / width * MAX_SYMMETRY as f32).floor();
    if raw.is_nan() {
        return MIN_SYMMETRY;
    }
    (raw.max(0.0) as u32).clamp(MIN_SYMMETRY, MAX_SYMMETRY)
}

impl Scene for KaleidoscopeScene {
    fn name(&self) -> &'static str {
        "Kaleidoscope"
    }

    fn init(&mut self, viewport: Viewport) {
        let rng = &mut self.rng;

        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * viewport.width, rng.gen::<f32>() * viewport.height),
                velocity: Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)),
                size: rng.gen::<f32>() * 5.0 + 2.0,
                color: Color::hsl(rng.gen::<f32>() * 360.0, 100.0, 50.0),
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        if let Some(pointer) = ctx.input.pointer() {
            self.symmetry = symmetry_for(pointer.x, ctx.viewport.width);
        }

        for p in &mut self.particles {
            p.position += p.velocity;
            p.velocity = ctx.viewport.bounce(p.position, p.velocity);
        }
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &SceneContext) {
        let center = ctx.viewport.center();
        let slice = TAU / self.symmetry as f32;

        surface.save();
        surface.translate(center);

        for _ in 0..self.symmetry {
            surface.rotate(slice);
            for p in &self.particles {
                let rel = p.position - center;
                surface.fill_circle(rel, p.size, p.color);
                surface.fill_circle(Vec2::new(rel.x, -rel.y), p.size, p.color);
            }
        }

        surface.restore();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
