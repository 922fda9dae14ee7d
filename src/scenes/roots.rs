//=========================================================================
// Fractal Roots
//=========================================================================
//
// Roots creep in from the viewport edges toward the pointer (or the
// center), wiggling as they go.
//
// Lifecycle of a root:
// 1. Spawned at a random point on a random edge.
// 2. Active: each tick the head steps `STEP` px toward the target with a
//    random angular wiggle. The trail keeps at most `MAX_TRAIL` points.
// 3. Arrival within `ARRIVAL_DISTANCE` retires it and schedules a
//    replacement `RESPAWN_DELAY_TICKS` ticks later.
// 4. Retired roots wither one point per tick and are dropped when empty.
//
// Pending replacements belong to the scene and are discarded by `init`,
// so a replacement never lands in a freshly re-initialized population.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::input::Viewport;
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneContext};

//=== Constants ===========================================================

const INITIAL_ROOTS: usize = 20;
const STEP: f32 = 5.0;
const ARRIVAL_DISTANCE: f32 = 10.0;
const MAX_TRAIL: usize = 100;

/// 100 ms at the default 60 ticks per second.
pub(crate) const RESPAWN_DELAY_TICKS: u64 = 6;

//=== Root ================================================================

#[derive(Debug, Clone)]
pub(crate) struct Root {
    pub(crate) trail: VecDeque<Vec2>,
    pub(crate) active: bool,
}

impl Root {
    fn head(&self) -> Option<Vec2> {
        self.trail.back().copied()
    }
}

//=== RootsScene ==========================================================

pub struct RootsScene {
    rng: StdRng,
    roots: Vec<Root>,
    /// Ticks at which a replacement root is due.
    pending: Vec<u64>,
    tick: u64,
}

impl RootsScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            roots: Vec::new(),
            pending: Vec::new(),
            tick: 0,
        }
    }

    fn spawn(&mut self, viewport: Viewport) {
        let along_x = self.rng.gen::<f32>() * viewport.width;
        let along_y = self.rng.gen::<f32>() * viewport.height;

        let origin = match self.rng.gen_range(0..4) {
            0 => Vec2::new(along_x, 0.0),
            1 => Vec2::new(viewport.width, along_y),
            2 => Vec2::new(along_x, viewport.height),
            _ => Vec2::new(0.0, along_y),
        };

        self.roots.push(Root {
            trail: VecDeque::from([origin]),
            active: true,
        });
    }

    fn spawn_due(&mut self, viewport: Viewport) {
        let now = self.tick;
        let before = self.pending.len();
        self.pending.retain(|&due| due > now);

        for _ in self.pending.len()..before {
            self.spawn(viewport);
        }
    }

    pub(crate) fn active_count(&self) -> usize {
        self.roots.iter().filter(|r| r.active).count()
    }
}

impl Scene for RootsScene {
    fn name(&self) -> &'static str {
        "Fractal Roots"
    }

    fn init(&mut self, viewport: Viewport) {
        self.roots.clear();
        self.pending.clear();
        self.tick = 0;

        for _ in 0..INITIAL_ROOTS {
            self.spawn(viewport);
        }
    }

    fn update(&mut self, ctx: &SceneContext) {
        self.tick += 1;
        self.spawn_due(ctx.viewport);

        let target = ctx.input.pointer_or(ctx.viewport.center());

        for root in &mut self.roots {
            if !root.active {
                root.trail.pop_front();
                continue;
            }
            let Some(head) = root.head() else {
                continue;
            };

            let offset = target - head;
            if offset.length() < ARRIVAL_DISTANCE {
                root.active = false;
                self.pending.push(self.tick + RESPAWN_DELAY_TICKS);
                continue;
            }

            let wiggle = self.rng.gen::<f32>() - 0.5;
            let heading = offset.y.atan2(offset.x) + wiggle;
            root.trail.push_back(head + Vec2::from_angle(heading) * STEP);
            if root.trail.len() > MAX_TRAIL {
                root.trail.pop_front();
            }
        }

        self.roots.retain(|r| r.active || !r.trail.is_empty());
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        let color = Color::rgba(255, 200, 100, 0.5);
        let mut points = Vec::with_capacity(MAX_TRAIL);

        for root in &self.roots {
            points.clear();
            points.extend(root.trail.iter().copied());
            surface.stroke_polyline(&points, 2.0, color);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
