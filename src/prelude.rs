//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_fields::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder};

// Host input
pub use crate::core::input::{InputState, SwipeDetector, Viewport};

// Drawing
pub use crate::core::render::{Color, DrawCommand, DrawList, Surface};

// Scene system
pub use crate::core::scene::{Scene, SceneContext, SceneDirection, SceneManager};
