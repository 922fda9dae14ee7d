//=========================================================================
// Galaxy
//=========================================================================
//
// Stars placed on a three-armed spiral, each orbiting the viewport center
// with an angular speed that falls off with radius (differential rotation).
// The pointer's vertical position tilts the disc by scaling the projected
// Y axis.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::TAU;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputState, Viewport};
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneContext};

//=== Constants ===========================================================

const STAR_COUNT: usize = 800;
const ARMS: u32 = 3;
const TURNS: f32 = 3.0;
const DEFAULT_TILT: f32 = 0.6;

//=== Star ================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct Star {
    /// Angle along the spiral before the arm offset is applied.
    pub(crate) spiral_angle: f32,
    /// Radius on the arm, before scatter.
    pub(crate) arm_radius: f32,
    pub(crate) orbit_radius: f32,
    pub(crate) angle: f32,
    pub(crate) speed: f32,
    size: f32,
    color: Color,
    pub(crate) position: Vec2,
}

//=== GalaxyScene =========================================================

pub struct GalaxyScene {
    rng: StdRng,
    stars: Vec<Star>,
}

impl GalaxyScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            stars: Vec::new(),
        }
    }
}

/// Radius of the spiral arm at `spiral_angle`.
pub(crate) fn arm_radius(spiral_angle: f32) -> f32 {
    5.0 + spiral_angle.powf(1.5) * 15.0
}

/// Angular speed per tick for a star on an arm of radius `r`.
pub(crate) fn orbital_speed(r: f32) -> f32 {
    0.002 / (r * 0.01 + 1.0)
}

/// Vertical projection factor.
pub(crate) fn tilt(input: &InputState, viewport: Viewport) -> f32 {
    match input.pointer() {
        Some(pointer) => 0.3 + (pointer.y / viewport.height) * 0.7,
        None => DEFAULT_TILT,
    }
}

fn star_color(rng: &mut StdRng, radius: f32) -> Color {
    // Hot core, pink middle, blue rim
    if radius < 50.0 {
        Color::hsl(60.0, 100.0, 80.0)
    } else if radius < 150.0 {
        Color::hsl(300.0 + rng.gen::<f32>() * 40.0, 80.0, 60.0)
    } else {
        Color::hsl(200.0 + rng.gen::<f32>() * 60.0, 80.0, 60.0)
    }
}

impl Scene for GalaxyScene {
    fn name(&self) -> &'static str {
        "Galaxy"
    }

    fn init(&mut self, viewport: Viewport) {
        let rng = &mut self.rng;
        let center = viewport.center();

        self.stars = (0..STAR_COUNT)
            .map(|_| {
                let spiral_angle = rng.gen::<f32>() * TAU * TURNS;
                let arm = rng.gen_range(0..ARMS) as f32;
                let angle = spiral_angle + arm / ARMS as f32 * TAU;

                let radius = arm_radius(spiral_angle);
                let scatter = (rng.gen::<f32>() - 0.5) * radius * 0.4;

                Star {
                    spiral_angle,
                    arm_radius: radius,
                    orbit_radius: radius + scatter,
                    angle,
                    speed: orbital_speed(radius),
                    size: rng.gen::<f32>() * 2.0 + 0.5,
                    color: star_color(rng, radius),
                    position: center,
                }
            })
            .collect();
    }

    fn update(&mut self, ctx: &SceneContext) {
        let center = ctx.viewport.center();
        let tilt = tilt(&ctx.input, ctx.viewport);

        for star in &mut self.stars {
            star.angle += star.speed;
            let projected = Vec2::from_angle(star.angle) * star.orbit_radius;
            star.position = center + Vec2::new(projected.x, projected.y * tilt);
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
        for star in &self.stars {
            surface.fill_circle(star.position, star.size, star.color);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_sit_on_spiral_arms() {
        let mut scene = GalaxyScene::new(11);
        scene.init(Viewport::default());
        assert_eq!(scene.stars.len(), STAR_COUNT);

        for star in &scene.stars {
            assert!((0.0..TAU * TURNS).contains(&star.spiral_angle));
            assert!((star.arm_radius - arm_radius(star.spiral_angle)).abs() < 1e-3);
            assert!((star.orbit_radius - star.arm_radius).abs() <= star.arm_radius * 0.2 + 1e-3);
        }
    }

    #[test]
    fn outer_stars_turn_slower() {
        assert!(orbital_speed(10.0) > orbital_speed(100.0));
        assert!(orbital_speed(100.0) > orbital_speed(1000.0));
        assert!((orbital_speed(0.0) - 0.002).abs() < 1e-9);
    }

    #[test]
    fn pointer_height_maps_to_tilt() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(tilt(&InputState::new(), viewport), DEFAULT_TILT);
        assert!((tilt(&InputState::with_pointer(0.0, 0.0), viewport) - 0.3).abs() < 1e-6);
        assert!((tilt(&InputState::with_pointer(0.0, 600.0), viewport) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tilt_only_scales_vertical_axis() {
        let mut scene = GalaxyScene::new(2);
        scene.init(Viewport::default());
        let viewport = Viewport::default();
        let center = viewport.center();

        for star in &mut scene.stars {
            star.speed = 0.0;
        }

        scene.update(&SceneContext::new(InputState::with_pointer(0.0, 600.0), viewport));
        let flat: Vec<Vec2> = scene.stars.iter().map(|s| s.position - center).collect();
        scene.update(&SceneContext::new(InputState::new(), viewport));

        for (star, full) in scene.stars.iter().zip(flat) {
            let tilted = star.position - center;
            assert!((tilted.x - full.x).abs() < 1e-3);
            assert!((tilted.y - full.y * DEFAULT_TILT).abs() < 1e-3);
        }
    }
}
