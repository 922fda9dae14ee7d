//=========================================================================
// Voronoi
//=========================================================================
//
// Bouncing seed points joined to every other seed closer than a fixed
// distance. The links approximate the Delaunay triangulation, the dual of
// the Voronoi diagram, without rasterizing the cells. The pointer takes
// part as one extra white seed.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::input::Viewport;
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneContext};

//=== Constants ===========================================================

const SEED_COUNT: usize = 20;
const SEED_RADIUS: f32 = 4.0;
const LINK_DISTANCE: f32 = 300.0;

//=== Seed ================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Seed {
    pub(crate) position: Vec2,
    velocity: Vec2,
    color: Color,
}

//=== VoronoiScene ========================================================

pub struct VoronoiScene {
    rng: StdRng,
    seeds: Vec<Seed>,
    pointer_seed: Option<Seed>,
}

impl VoronoiScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seeds: Vec::new(),
            pointer_seed: None,
        }
    }

    fn all_seeds(&self) -> impl Iterator<Item = &Seed> {
        self.seeds.iter().chain(self.pointer_seed.as_ref())
    }
}

impl Scene for VoronoiScene {
    fn name(&self) -> &'static str {
        "Voronoi"
    }

    fn init(&mut self, viewport: Viewport) {
        let rng = &mut self.rng;

        self.pointer_seed = None;
        self.seeds = (0..SEED_COUNT)
            .map(|_| Seed {
                position: Vec2::new(rng.gen::<f32>() * viewport.width, rng.gen::<f32>() * viewport.height),
                velocity: Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
                color: Color::hsl(rng.gen::<f32>() * 360.0, 70.0, 50.0),
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        for seed in &mut self.seeds {
            seed.position += seed.velocity;
            seed.velocity = ctx.viewport.bounce(seed.position, seed.velocity);
        }

        self.pointer_seed = ctx.input.pointer().map(|position| Seed {
            position,
            velocity: Vec2::ZERO,
            color: Color::WHITE,
        });
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        let link = Color::rgba(255, 255, 255, 0.2);
        let seeds: Vec<&Seed> = self.all_seeds().collect();

        for (i, a) in seeds.iter().enumerate() {
            surface.fill_circle(a.position, SEED_RADIUS, a.color);

            for b in &seeds[i + 1..] {
                if a.position.distance(b.position) < LINK_DISTANCE {
                    surface.stroke_line(a.position, b.position, 1.0, link);
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
    use crate::core::input::InputState;
    use crate::core::render::{DrawCommand, DrawList};

    fn fixed(positions: &[Vec2]) -> VoronoiScene {
        let mut scene = VoronoiScene::new(0);
        scene.seeds = positions
            .iter()
            .map(|&position| Seed { position, velocity: Vec2::ZERO, color: Color::BLACK })
            .collect();
        scene
    }

    #[test]
    fn pointer_becomes_white_seed() {
        let mut scene = VoronoiScene::new(5);
        scene.init(Viewport::default());
        assert_eq!(scene.all_seeds().count(), SEED_COUNT);

        scene.update(&SceneContext::new(InputState::with_pointer(10.0, 10.0), Viewport::default()));
        assert_eq!(scene.all_seeds().count(), SEED_COUNT + 1);
        assert_eq!(scene.pointer_seed.map(|s| s.color), Some(Color::WHITE));

        scene.update(&SceneContext::default());
        assert!(scene.pointer_seed.is_none());
    }

    #[test]
    fn links_only_close_pairs() {
        let scene = fixed(&[Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(500.0, 0.0)]);
        let mut list = DrawList::new();
        scene.draw(&mut list, &SceneContext::default());

        assert_eq!(list.count(|c| matches!(c, DrawCommand::FillCircle { .. })), 3);
        assert_eq!(list.count(|c| matches!(c, DrawCommand::StrokeLine { .. })), 1);
    }

    #[test]
    fn seeds_bounce_at_edges() {
        let mut scene = fixed(&[Vec2::new(0.5, 300.0)]);
        scene.seeds[0].velocity = Vec2::new(-1.0, 0.0);

        scene.update(&SceneContext::default());

        assert_eq!(scene.seeds[0].velocity, Vec2::new(1.0, 0.0));
    }
}
