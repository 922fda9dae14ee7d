//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core and core-to-platform message types, plus platform
// errors.
//
// `FrameInput` is the unit of host input. Pointer and viewport changes
// are last-value-wins within a frame; scene switch requests are kept in
// arrival order. Merging two frames preserves both rules, so the core can
// fold any number of frames into one tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::input::Viewport;
use crate::core::scene::SceneDirection;

//=== PointerChange =======================================================

/// Latest pointer transition seen by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PointerChange {
    /// Pointer moved to (or appeared at) this position.
    Moved(Vec2),

    /// Pointer left the surface or the touch ended.
    Left,
}

impl PointerChange {
    /// Pointer position after this change.
    pub(crate) fn position(self) -> Option<Vec2> {
        match self {
            Self::Moved(p) => Some(p),
            Self::Left => None,
        }
    }
}

//=== FrameInput ==========================================================

/// Host input gathered over one display frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FrameInput {
    /// `None` when the pointer did not change this frame.
    pub pointer: Option<PointerChange>,

    /// `None` when the window was not resized this frame.
    pub viewport: Option<Viewport>,

    /// Scene switch requests, oldest first.
    pub switches: Vec<SceneDirection>,
}

impl FrameInput {
    pub(crate) fn is_empty(&self) -> bool {
        self.pointer.is_none() && self.viewport.is_none() && self.switches.is_empty()
    }

    /// Folds a later frame into this one.
    pub(crate) fn merge(&mut self, later: FrameInput) {
        if later.pointer.is_some() {
            self.pointer = later.pointer;
        }
        if later.viewport.is_some() {
            self.viewport = later.viewport;
        }
        self.switches.extend(later.switches);
    }
}

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Buffered input for one display frame. Never empty.
    Inputs(FrameInput),

    /// Window close requested.
    WindowClosed,
}

//=== CoreEvent ===========================================================

/// Events sent from core to platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CoreEvent {
    /// A scene was (re)initialized by startup or a switch.
    SceneActivated { index: usize, name: &'static str },
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
