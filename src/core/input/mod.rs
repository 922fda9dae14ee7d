//=========================================================================
// Input System
//
// Host-boundary state consumed by every scene each tick.
//
// Responsibilities:
// - Track the unified pointer (mouse or touch), present or absent
// - Track the current drawable viewport
// - Turn horizontal touch gestures into scene switch requests
//
// Notes:
// Both `InputState` and `Viewport` are written only by the frame driver
// when it applies host events between ticks. Scenes receive copies through
// `SceneContext` and never mutate them.
//
//=========================================================================

//=== Submodules ==========================================================
mod input_state;
mod swipe;
mod viewport;

//=== Public API ==========================================================
pub use input_state::InputState;
pub use swipe::{SwipeDetector, SWIPE_THRESHOLD};
pub use viewport::Viewport;
