//=========================================================================
// Game of Life
//=========================================================================
//
// Conway's B3/S23 on a toroidal lattice of 10 px cells.
//
// Each tick:
// 1. If the pointer is present, paint the 3x3 block around its cell alive.
// 2. Compute the next generation into the back buffer from the front one.
// 3. Swap buffers.
//
// Painting happens before the generation, so painted cells can die in the
// same tick.
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

const CELL_SIZE: f32 = 10.0;
const INITIAL_DENSITY: f64 = 0.15;

//=== Lattice =============================================================

/// Row-major boolean lattice with wrap-around neighbor lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Lattice {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl Lattice {
    pub(crate) fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
        }
    }

    fn index(&self, col: i64, row: i64) -> usize {
        let col = col.rem_euclid(self.cols as i64) as usize;
        let row = row.rem_euclid(self.rows as i64) as usize;
        row * self.cols + col
    }

    pub(crate) fn get(&self, col: i64, row: i64) -> bool {
        self.cells[self.index(col, row)]
    }

    pub(crate) fn set(&mut self, col: i64, row: i64, alive: bool) {
        let i = self.index(col, row);
        self.cells[i] = alive;
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub(crate) fn neighbors(&self, col: i64, row: i64) -> u8 {
        let mut sum = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if (dc, dr) != (0, 0) && self.get(col + dc, row + dr) {
                    sum += 1;
                }
            }
        }
        sum
    }

    /// Writes the next generation of `self` into `next`.
    pub(crate) fn step_into(&self, next: &mut Lattice) {
        debug_assert_eq!((self.cols, self.rows), (next.cols, next.rows));

        for row in 0..self.rows as i64 {
            for col in 0..self.cols as i64 {
                let alive = self.get(col, row);
                let n = self.neighbors(col, row);
                next.set(col, row, matches!((alive, n), (true, 2) | (_, 3)));
            }
        }
    }

    fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % cols, i / cols))
    }
}

//=== LifeScene ===========================================================

pub struct LifeScene {
    rng: StdRng,
    front: Lattice,
    back: Lattice,
}

impl LifeScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            front: Lattice::default(),
            back: Lattice::default(),
        }
    }

    fn paint(&mut self, input: &InputState) {
        let Some(pointer) = input.pointer() else {
            return;
        };

        let col = (pointer.x / CELL_SIZE).floor() as i64;
        let row = (pointer.y / CELL_SIZE).floor() as i64;
        for dr in -1..=1 {
            for dc in -1..=1 {
                self.front.set(col + dc, row + dr, true);
            }
        }
    }
}

impl Scene for LifeScene {
    fn name(&self) -> &'static str {
        "Game of Life"
    }

    fn init(&mut self, viewport: Viewport) {
        let cols = (viewport.width / CELL_SIZE).ceil() as usize;
        let rows = (viewport.height / CELL_SIZE).ceil() as usize;

        self.front = Lattice::new(cols, rows);
        self.back = Lattice::new(cols, rows);
        for cell in &mut self.front.cells {
            *cell = self.rng.gen_bool(INITIAL_DENSITY);
        }
    }

    fn update(&mut self, ctx: &SceneContext) {
        if self.front.is_empty() {
            return;
        }

        self.paint(&ctx.input);
        self.front.step_into(&mut self.back);
        std::mem::swap(&mut self.front, &mut self.back);
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &SceneContext) {
        surface.fill_rect(Vec2::ZERO, ctx.viewport.size(), Color::rgba(0, 0, 0, 0.1));

        let cell = Vec2::splat(CELL_SIZE - 1.0);
        for (col, row) in self.front.live_cells() {
            let origin = Vec2::new(col as f32, row as f32) * CELL_SIZE;
            surface.fill_rect(origin, cell, Color::CYAN);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with(cols: usize, rows: usize, alive: &[(i64, i64)]) -> LifeScene {
        let mut scene = LifeScene::new(0);
        scene.front = Lattice::new(cols, rows);
        scene.back = Lattice::new(cols, rows);
        for &(c, r) in alive {
            scene.front.set(c, r, true);
        }
        scene
    }

    fn idle(cols: usize, rows: usize) -> SceneContext {
        SceneContext::new(
            InputState::new(),
            Viewport::new(cols as f32 * CELL_SIZE, rows as f32 * CELL_SIZE),
        )
    }

    //--- Rules -----------------------------------------------------------

    #[test]
    fn blinker_oscillates() {
        let mut scene = scene_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let ctx = idle(5, 5);

        scene.update(&ctx);
        let vertical = scene_with(5, 5, &[(2, 1), (2, 2), (2, 3)]).front;
        assert_eq!(scene.front, vertical);

        scene.update(&ctx);
        assert!(scene.front.get(1, 2) && scene.front.get(3, 2));
        assert_eq!(scene.front.population(), 3);
    }

    #[test]
    fn glider_moves_diagonally() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut scene = scene_with(10, 10, &glider);
        let ctx = idle(10, 10);

        for _ in 0..4 {
            scene.update(&ctx);
        }

        let shifted: Vec<(i64, i64)> = glider.iter().map(|&(c, r)| (c + 1, r + 1)).collect();
        assert_eq!(scene.front, scene_with(10, 10, &shifted).front);
    }

    #[test]
    fn neighbors_wrap_around_edges() {
        let lattice = scene_with(4, 4, &[(3, 3), (0, 3), (3, 0)]).front;
        assert_eq!(lattice.neighbors(0, 0), 3);
    }

    //--- Pointer ---------------------------------------------------------

    #[test]
    fn painting_happens_before_generation() {
        let mut scene = scene_with(10, 10, &[]);
        let ctx = SceneContext::new(InputState::with_pointer(55.0, 55.0), Viewport::new(100.0, 100.0));

        scene.update(&ctx);

        // A painted 3x3 block keeps its corners, loses edges and center,
        // and grows a cell past the middle of each side
        assert!(scene.front.get(4, 4) && scene.front.get(6, 6));
        assert!(!scene.front.get(5, 5));
        assert!(!scene.front.get(5, 4));
        assert!(scene.front.get(5, 3));
        assert_eq!(scene.front.population(), 8);
    }

    #[test]
    fn painting_wraps_at_edges() {
        let mut scene = scene_with(6, 6, &[]);
        scene.paint(&InputState::with_pointer(0.0, 0.0));
        assert!(scene.front.get(5, 5));
        assert!(scene.front.get(1, 1));
        assert_eq!(scene.front.population(), 9);
    }

    //--- Lifecycle -------------------------------------------------------

    #[test]
    fn init_sizes_lattice_to_viewport() {
        let mut scene = LifeScene::new(8);
        scene.init(Viewport::new(95.0, 41.0));
        assert_eq!((scene.front.cols, scene.front.rows), (10, 5));
        assert!(scene.front.population() <= 50);
    }
}
