//=========================================================================
// Scene System
//=========================================================================
//
// Pluggable visualizations sharing one execution contract.
//
// Architecture:
//   SceneManager
//     ├─ scenes: Vec<Box<dyn Scene>>   (ordered, all built eagerly)
//     └─ current: usize                (exactly one live scene)
//
// Lifecycle of every scene:
//   Uninitialized ──init()──► Initialized ──► (update ⇄ draw)* ──init()──► ...
//
// Flow:
//   frame driver → SceneManager::update(ctx) → Scene::update(ctx)
//                → SceneManager::draw(surface, ctx) → Scene::draw(surface, ctx)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{InputState, Viewport};
use crate::core::render::Surface;

//=== Module Declarations =================================================

mod scene_manager;

//=== Public API ==========================================================

pub use scene_manager::{SceneDirection, SceneManager};

//=== Scene Context =======================================================

/// Read-only host state handed to scenes each tick.
///
/// Scenes never see globals; everything that comes from the host arrives
/// through this value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneContext {
    /// Pointer state (present or absent).
    pub input: InputState,

    /// Current drawable size.
    pub viewport: Viewport,
}

impl SceneContext {
    /// Creates a context from its parts.
    pub fn new(input: InputState, viewport: Viewport) -> Self {
        Self { input, viewport }
    }
}

//=== Scene Trait =========================================================

/// One self-contained visualization.
///
/// A scene exclusively owns its entity population. `init` rebuilds that
/// population from scratch for the given viewport and may be called any
/// number of times: at startup, when the scene becomes current and on
/// resize.
///
/// # Minimal Implementation
///
/// ```rust
/// # use aetheric_fields::prelude::*;
/// struct Blank;
///
/// impl Scene for Blank {
///     fn name(&self) -> &'static str { "Blank" }
///     fn init(&mut self, _viewport: Viewport) {}
///     fn update(&mut self, _ctx: &SceneContext) {}
///     fn draw(&self, _surface: &mut dyn Surface, _ctx: &SceneContext) {}
/// }
/// ```
pub trait Scene: Send {
    /// Human-readable name published to the host on activation.
    fn name(&self) -> &'static str;

    /// (Re)populates the scene for `viewport`, discarding all prior state.
    fn init(&mut self, viewport: Viewport);

    /// Advances the simulation by one logical tick.
    fn update(&mut self, ctx: &SceneContext);

    /// Issues this tick's draw calls. Never mutates the scene.
    fn draw(&self, surface: &mut dyn Surface, ctx: &SceneContext);
}
