//=========================================================================
// Hyperspace
//=========================================================================
//
// Stars rush toward the viewer. Each star has a fixed lateral offset and
// a depth that shrinks every tick; its screen position is the perspective
// divide `offset / depth * size + center`. A star that reaches depth zero
// is recycled at full depth with a fresh offset.
//
// Warp speed is constant without a pointer; with one it grows with the
// pointer's distance from the center.
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

const STAR_COUNT: usize = 1000;
const CRUISE_SPEED: f32 = 5.0;
const WARP_FACTOR: f32 = 0.1;
const STREAK_DEPTH: f32 = 20.0;

//=== Star ================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Star {
    /// Lateral offset from the center, before projection.
    pub(crate) offset: Vec2,
    pub(crate) depth: f32,
}

impl Star {
    fn spawn(rng: &mut StdRng, viewport: Viewport, depth: f32) -> Self {
        Self {
            offset: Vec2::new(
                rng.gen::<f32>() * viewport.width - viewport.width / 2.0,
                rng.gen::<f32>() * viewport.height - viewport.height / 2.0,
            ),
            depth,
        }
    }
}

//=== HyperspaceScene =====================================================

pub struct HyperspaceScene {
    rng: StdRng,
    stars: Vec<Star>,
}

impl HyperspaceScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            stars: Vec::new(),
        }
    }
}

/// Depth units the stars travel this tick.
pub(crate) fn warp_speed(input: &InputState, viewport: Viewport) -> f32 {
    input
        .pointer()
        .map_or(CRUISE_SPEED, |pointer| pointer.distance(viewport.center()) * WARP_FACTOR)
}

/// Screen position of `offset` seen at `depth`.
pub(crate) fn project(offset: Vec2, depth: f32, viewport: Viewport) -> Vec2 {
    offset / depth * viewport.size() + viewport.center()
}

impl Scene for HyperspaceScene {
    fn name(&self) -> &'static str {
        "Hyperspace"
    }

    fn init(&mut self, viewport: Viewport) {
        let rng = &mut self.rng;

        self.stars = (0..STAR_COUNT)
            .map(|_| {
                // In (0, w] so nothing sits on the eye plane before the first update
                let depth = viewport.width - rng.gen::<f32>() * viewport.width;
                Star::spawn(rng, viewport, depth)
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        let speed = warp_speed(&ctx.input, ctx.viewport);

        for star in &mut self.stars {
            star.depth -= speed;
            if star.depth <= 0.0 {
                *star = Star::spawn(&mut self.rng, ctx.viewport, ctx.viewport.width);
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &SceneContext) {
        let viewport = ctx.viewport;

        for star in &self.stars {
            let nearness = 1.0 - star.depth / viewport.width;
            let head = project(star.offset, star.depth, viewport);
            let tail = project(star.offset, star.depth + STREAK_DEPTH, viewport);

            surface.stroke_line(tail, head, nearness * 3.0, Color::rgba(255, 255, 255, nearness));
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
