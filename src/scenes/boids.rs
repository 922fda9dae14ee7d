//=========================================================================
// Boids (Flocking)
//=========================================================================
//
// Reynolds flocking over a naive all-pairs neighbor scan.
//
// Responsibilities:
// - Separation, alignment and cohesion within `NEIGHBOR_RADIUS`, each
//   weighted by `RULE_WEIGHT` and added to velocity
// - Predator flight from the pointer within `PREDATOR_RADIUS`
// - Speed cap and toroidal wrap
//
// Notes:
// - Boids are updated in place, in order, so a boid sees the already
//   updated state of the boids before it in the same tick.
// - Coincident neighbors contribute no separation (there is no direction
//   to push along) but still count for alignment and cohesion.
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

const BOID_COUNT: usize = 150;
const NEIGHBOR_RADIUS: f32 = 50.0;
const RULE_WEIGHT: f32 = 0.05;
const PREDATOR_RADIUS: f32 = 150.0;
const PREDATOR_FACTOR: f32 = 0.05;
const MAX_SPEED: f32 = 4.0;

/// Arrow pointing along +x, in boid-local coordinates.
const SHAPE: [Vec2; 3] = [Vec2::new(10.0, 0.0), Vec2::new(-5.0, 5.0), Vec2::new(-5.0, -5.0)];

//=== Boid ================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Boid {
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    color: Color,
}

impl Boid {
    pub(crate) fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }
}

//=== BoidsScene ==========================================================

pub struct BoidsScene {
    rng: StdRng,
    boids: Vec<Boid>,
}

impl BoidsScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            boids: Vec::new(),
        }
    }
}

/// Combined separation, alignment and cohesion for the boid at `index`.
/// `None` when it has no neighbors.
pub(crate) fn flocking(boids: &[Boid], index: usize) -> Option<Vec2> {
    let me = boids[index];
    let mut separation = Vec2::ZERO;
    let mut alignment = Vec2::ZERO;
    let mut cohesion = Vec2::ZERO;
    let mut count = 0usize;

    for (j, other) in boids.iter().enumerate() {
        if j == index {
            continue;
        }
        let offset = other.position - me.position;
        if offset.length() >= NEIGHBOR_RADIUS {
            continue;
        }

        if let Some(dir) = offset.try_normalize() {
            separation -= dir;
        }
        alignment += other.velocity;
        cohesion += other.position;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let n = count as f32;
    let alignment = alignment / n;
    let cohesion = cohesion / n - me.position;
    Some((separation + alignment + cohesion) * RULE_WEIGHT)
}

/// Flight from the pointer. Exactly zero when the pointer is absent or
/// out of range.
pub(crate) fn predator_term(position: Vec2, input: &InputState) -> Vec2 {
    match input.pointer() {
        Some(pointer) if position.distance(pointer) < PREDATOR_RADIUS => -(pointer - position) * PREDATOR_FACTOR,
        _ => Vec2::ZERO,
    }
}

impl Scene for BoidsScene {
    fn name(&self) -> &'static str {
        "Boids (Flocking)"
    }

    fn init(&mut self, viewport: Viewport) {
        let rng = &mut self.rng;

        self.boids = (0..BOID_COUNT)
            .map(|_| Boid {
                position: Vec2::new(rng.gen::<f32>() * viewport.width, rng.gen::<f32>() * viewport.height),
                velocity: Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)),
                color: Color::hsl(rng.gen::<f32>() * 60.0 + 200.0, 70.0, 60.0),
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        for i in 0..self.boids.len() {
            let steer = flocking(&self.boids, i);
            let boid = &mut self.boids[i];

            if let Some(steer) = steer {
                boid.velocity += steer;
            }
            boid.velocity += predator_term(boid.position, &ctx.input);
            boid.velocity = boid.velocity.clamp_length_max(MAX_SPEED);

            boid.position = ctx.viewport.wrap(boid.position + boid.velocity);
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        for boid in &self.boids {
            surface.save();
            surface.translate(boid.position);
            surface.rotate(boid.heading());
            surface.fill_polygon(&SHAPE, boid.color);
            surface.restore();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{DrawCommand, DrawList};

    fn boid(x: f32, y: f32, vx: f32, vy: f32) -> Boid {
        Boid {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            color: Color::WHITE,
        }
    }

    //--- Rules -----------------------------------------------------------

    #[test]
    fn lone_boid_keeps_velocity() {
        let boids = [boid(0.0, 0.0, 1.0, 0.0), boid(200.0, 0.0, -1.0, 0.0)];
        assert_eq!(flocking(&boids, 0), None);
    }

    #[test]
    fn flocking_combines_three_rules() {
        // Neighbor 10 px to the right, moving up
        let boids = [boid(0.0, 0.0, 0.0, 0.0), boid(10.0, 0.0, 0.0, 2.0)];
        let steer = flocking(&boids, 0).unwrap_or(Vec2::NAN);

        // separation (-1, 0) + alignment (0, 2) + cohesion (10, 0), times 0.05
        assert!((steer - Vec2::new(0.45, 0.1)).length() < 1e-6);
    }

    #[test]
    fn coincident_boids_still_align() {
        let boids = [boid(5.0, 5.0, 0.0, 0.0), boid(5.0, 5.0, 2.0, 0.0)];
        let steer = flocking(&boids, 0).unwrap_or(Vec2::NAN);
        assert!(steer.is_finite());
        assert!((steer - Vec2::new(0.1, 0.0)).length() < 1e-6);
    }

    #[test]
    fn predator_term_is_exactly_zero_without_pointer() {
        assert_eq!(predator_term(Vec2::new(3.0, 4.0), &InputState::new()), Vec2::ZERO);
        assert_eq!(predator_term(Vec2::new(300.0, 0.0), &InputState::with_pointer(0.0, 0.0)), Vec2::ZERO);
    }

    #[test]
    fn predator_pushes_away_from_pointer() {
        let flee = predator_term(Vec2::new(100.0, 0.0), &InputState::with_pointer(0.0, 0.0));
        assert!((flee - Vec2::new(5.0, 0.0)).length() < 1e-6);
    }

    //--- Integration -----------------------------------------------------

    #[test]
    fn speed_is_capped() {
        let mut scene = BoidsScene::new(0);
        scene.boids = vec![boid(100.0, 100.0, 0.0, 0.0)];

        // Pointer right next to it gives a huge flee term
        scene.update(&SceneContext::new(InputState::with_pointer(0.0, 100.0), Viewport::new(1000.0, 1000.0)));

        let v = scene.boids[0].velocity;
        assert!((v.length() - MAX_SPEED).abs() < 1e-4);
        assert!(v.x > 0.0);
    }

    #[test]
    fn flock_stays_bounded_and_finite() {
        let viewport = Viewport::default();
        let mut scene = BoidsScene::new(21);
        scene.init(viewport);
        let ctx = SceneContext::new(InputState::with_pointer(400.0, 300.0), viewport);

        for _ in 0..100 {
            scene.update(&ctx);
        }

        for b in &scene.boids {
            assert!(b.velocity.length() <= MAX_SPEED + 1e-4);
            assert!((0.0..=viewport.width).contains(&b.position.x));
            assert!((0.0..=viewport.height).contains(&b.position.y));
        }
    }

    #[test]
    fn draw_orients_each_boid() {
        let mut scene = BoidsScene::new(0);
        scene.boids = vec![boid(10.0, 10.0, 0.0, 1.0)];
        let mut list = DrawList::new();
        scene.draw(&mut list, &SceneContext::default());

        assert_eq!(list.commands()[0], DrawCommand::Save);
        assert_eq!(list.commands()[1], DrawCommand::Translate(Vec2::new(10.0, 10.0)));
        assert_eq!(list.commands()[2], DrawCommand::Rotate(std::f32::consts::FRAC_PI_2));
        assert_eq!(list.transform_depth(), 0);
    }
}
