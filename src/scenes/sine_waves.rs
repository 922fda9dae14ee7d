//=========================================================================
// Sine Waves
//=========================================================================
//
// A static lattice shaded by a radial wave `z = sin(0.03 * d - t)`, where
// `d` is the distance to the pointer (or the viewport center). Only the
// size and lightness of each dot follow `z`; lattice points never move.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::input::Viewport;
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneContext};

//=== Constants ===========================================================

const SPACING: f32 = 40.0;
const WAVE_NUMBER: f32 = 0.03;
const PHASE_STEP: f32 = 0.05;

//=== Wave Point ==========================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct WavePoint {
    pub(crate) position: Vec2,
    pub(crate) size: f32,
    pub(crate) lightness: f32,
}

//=== SineWaveScene =======================================================

#[derive(Debug, Default)]
pub struct SineWaveScene {
    time: f32,
    points: Vec<WavePoint>,
}

impl SineWaveScene {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Wave height in `[-1, 1]` at `distance` from the source.
pub(crate) fn wave(distance: f32, time: f32) -> f32 {
    (distance * WAVE_NUMBER - time).sin()
}

impl Scene for SineWaveScene {
    fn name(&self) -> &'static str {
        "Sine Waves"
    }

    fn init(&mut self, viewport: Viewport) {
        let cols = (viewport.width / SPACING).ceil() as usize;
        let rows = (viewport.height / SPACING).ceil() as usize;

        self.points = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| Vec2::new(x as f32, y as f32) * SPACING))
            .map(|position| WavePoint { position, size: 1.0, lightness: 20.0 })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        self.time += PHASE_STEP;
        let source = ctx.input.pointer_or(ctx.viewport.center());

        for p in &mut self.points {
            let z = wave(p.position.distance(source), self.time);
            p.size = (z + 1.0) * 3.0 + 1.0;
            p.lightness = (z + 1.0) * 40.0 + 20.0;
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        for p in &self.points {
            surface.fill_circle(p.position, p.size, Color::hsl(200.0, 80.0, p.lightness));
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
