//=========================================================================
// Scenes
//=========================================================================
//
// The built-in visualizations, one module each.
//
// `all` builds them in display order. Every randomized scene receives its
// own seed drawn from one master generator, so a fixed master seed makes
// the whole engine reproducible.
//
//=========================================================================

//=== Module Declarations =================================================

mod antigravity;
mod boids;
mod flow_field;
mod galaxy;
mod gravity;
mod hyperspace;
mod kaleidoscope;
mod life;
mod matrix;
mod moire;
mod neural;
mod quantum;
mod ripple;
mod roots;
mod sine_waves;
mod voronoi;
mod vortex;

//=== Public API ==========================================================

pub use antigravity::AntigravityScene;
pub use boids::BoidsScene;
pub use flow_field::FlowFieldScene;
pub use galaxy::GalaxyScene;
pub use gravity::GravityScene;
pub use hyperspace::HyperspaceScene;
pub use kaleidoscope::KaleidoscopeScene;
pub use life::LifeScene;
pub use matrix::MatrixScene;
pub use moire::MoireScene;
pub use neural::NeuralScene;
pub use quantum::QuantumScene;
pub use ripple::RippleScene;
pub use roots::RootsScene;
pub use sine_waves::SineWaveScene;
pub use voronoi::VoronoiScene;
pub use vortex::VortexScene;

//=== External Dependencies ===============================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::scene::Scene;

//=== Registry ============================================================

/// Builds every scene in display order.
///
/// The order is fixed: Antigravity first, Fractal Roots last. The
/// `SceneManager` cycles through them in this order.
pub fn all(seed: u64) -> Vec<Box<dyn Scene>> {
    let mut master = StdRng::seed_from_u64(seed);
    let mut next = move || master.gen::<u64>();

    vec![
        Box::new(AntigravityScene::new(next())),
        Box::new(GravityScene::new(next())),
        Box::new(VortexScene::new(next())),
        Box::new(RippleScene::new()),
        Box::new(GalaxyScene::new(next())),
        Box::new(MatrixScene::new(next())),
        Box::new(FlowFieldScene::new(next())),
        Box::new(VoronoiScene::new(next())),
        Box::new(SineWaveScene::new()),
        Box::new(BoidsScene::new(next())),
        Box::new(LifeScene::new(next())),
        Box::new(KaleidoscopeScene::new(next())),
        Box::new(HyperspaceScene::new(next())),
        Box::new(MoireScene::new()),
        Box::new(QuantumScene::new(next())),
        Box::new(NeuralScene::new(next())),
        Box::new(RootsScene::new(next())),
    ]
}

//=========================================================================
// Unit Tests
//=========================================================================
