//=========================================================================
// Ripple
//=========================================================================
//
// A lattice of points that breathes with an idle wave and is pushed aside
// by the pointer. Each point eases a fixed fraction of the way toward its
// target every tick instead of snapping, which is what makes the surface
// look like liquid.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::input::{InputState, Viewport};
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneContext};

//=== Constants ===========================================================

const SPACING: f32 = 30.0;
const PHASE_STEP: f32 = 0.05;
const IDLE_FREQUENCY: f32 = 0.02;
const IDLE_AMPLITUDE: f32 = 5.0;
const POINTER_RADIUS: f32 = 300.0;
const POINTER_PUSH: f32 = 50.0;
const EASING: f32 = 0.1;

//=== Lattice Point =======================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct LatticePoint {
    pub(crate) base: Vec2,
    pub(crate) position: Vec2,
}

//=== RippleScene =========================================================

#[derive(Debug, Default)]
pub struct RippleScene {
    time: f32,
    points: Vec<LatticePoint>,
}

impl RippleScene {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Where the point anchored at `base` wants to be at phase `time`.
pub(crate) fn target(base: Vec2, time: f32, input: &InputState) -> Vec2 {
    let idle = (base.x * IDLE_FREQUENCY + time).sin() * IDLE_AMPLITUDE
        + (base.y * IDLE_FREQUENCY + time).cos() * IDLE_AMPLITUDE;
    let mut target = Vec2::new(base.x, base.y + idle);

    if let Some(pointer) = input.pointer() {
        let offset = pointer - base;
        let distance = offset.length();
        if distance < POINTER_RADIUS {
            let force = (POINTER_RADIUS - distance) / POINTER_RADIUS;
            // atan2(0, 0) is 0, so a point under the pointer is pushed along -x
            let angle = offset.y.atan2(offset.x);
            target -= Vec2::from_angle(angle) * force * POINTER_PUSH;
        }
    }

    target
}

impl Scene for RippleScene {
    fn name(&self) -> &'static str {
        "Ripple"
    }

    fn init(&mut self, viewport: Viewport) {
        let cols = (viewport.width / SPACING).ceil() as usize;
        let rows = (viewport.height / SPACING).ceil() as usize;

        self.time = 0.0;
        self.points = (0..=rows)
            .flat_map(|y| (0..=cols).map(move |x| Vec2::new(x as f32, y as f32) * SPACING))
            .map(|base| LatticePoint { base, position: base })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        self.time += PHASE_STEP;

        for p in &mut self.points {
            let target = target(p.base, self.time, &ctx.input);
            p.position += (target - p.position) * EASING;
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        let color = Color::rgba(0, 255, 150, 0.6);
        for p in &self.points {
            surface.fill_circle(p.position, 2.0, color);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
