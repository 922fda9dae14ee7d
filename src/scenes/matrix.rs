//=========================================================================
// Matrix Rain
//=========================================================================
//
// One falling glyph per 14 px column. A column that has fallen past the
// bottom edge restarts at the top with a small probability each tick, so
// the columns drift out of phase. Glyphs near the pointer turn white and
// float upward instead of falling.
//
// The glyph and its near-pointer state are chosen in `update` against the
// drop position at the start of the tick; `draw` only replays them.
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

const FONT_SIZE: f32 = 14.0;
const GLYPHS: &[u8] = b"0123456789ABCDEF";
const NEAR_DISTANCE_SQ: f32 = 10_000.0;
const RESET_PROBABILITY: f64 = 0.025;
const FALL_RATE: f32 = 1.0;
const LIFT_RATE: f32 = 0.5;

//=== Column ==============================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Column {
    /// Fall offset in rows; negative is above the top edge.
    pub(crate) drop: f32,
    glyph: char,
    /// Where `glyph` is drawn this tick.
    glyph_at: Vec2,
    pub(crate) near: bool,
}

//=== MatrixScene =========================================================

pub struct MatrixScene {
    rng: StdRng,
    columns: Vec<Column>,
}

impl MatrixScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            columns: Vec::new(),
        }
    }
}

/// Whether the glyph at `position` is within reach of the pointer.
pub(crate) fn is_near(position: Vec2, input: &InputState) -> bool {
    input
        .pointer()
        .is_some_and(|pointer| position.distance_squared(pointer) < NEAR_DISTANCE_SQ)
}

impl Scene for MatrixScene {
    fn name(&self) -> &'static str {
        "Matrix Rain"
    }

    fn init(&mut self, viewport: Viewport) {
        let count = (viewport.width / FONT_SIZE).floor() as usize;
        let rng = &mut self.rng;

        self.columns = (0..count)
            .map(|_| Column {
                drop: rng.gen::<f32>() * -100.0,
                glyph: '0',
                glyph_at: Vec2::ZERO,
                near: false,
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        for (i, column) in self.columns.iter_mut().enumerate() {
            let position = Vec2::new(i as f32 * FONT_SIZE, column.drop * FONT_SIZE);

            column.glyph = char::from(GLYPHS[self.rng.gen_range(0..GLYPHS.len())]);
            column.glyph_at = position;
            column.near = is_near(position, &ctx.input);

            if position.y > ctx.viewport.height && self.rng.gen_bool(RESET_PROBABILITY) {
                column.drop = 0.0;
            }

            if column.near {
                column.drop -= LIFT_RATE;
            } else {
                column.drop += FALL_RATE;
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &SceneContext) {
        surface.fill_rect(Vec2::ZERO, ctx.viewport.size(), Color::rgba(0, 0, 0, 0.05));

        for column in &self.columns {
            let color = if column.near { Color::WHITE } else { Color::GREEN };
            surface.fill_glyph(column.glyph, column.glyph_at, FONT_SIZE, color);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
