//=========================================================================
// Input State
//
// Maintains the current pointer snapshot for the engine.
//
// Responsibilities:
// - Track the pointer position while it is over the surface
// - Represent "no active pointer" explicitly (left the window, touch lifted,
//   or never moved)
// - Detect whether the last applied update changed anything
//
// Notes:
// This is a plain `Copy` value. The frame driver owns the authoritative
// instance and hands scenes a copy inside `SceneContext`.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::fmt;

//=== External Crates =====================================================
use glam::Vec2;

//=== InputState ==========================================================
//
// Pointer state shared across the scene/driver boundary.
//
#[derive(Clone, Copy, PartialEq, Default)]
pub struct InputState {
    pointer: Option<Vec2>,
}

impl InputState {
    //--- Constructor ------------------------------------------------------

    /// Creates a state with no active pointer.
    pub const fn new() -> Self {
        Self { pointer: None }
    }

    /// Creates a state with the pointer at `(x, y)`.
    pub fn with_pointer(x: f32, y: f32) -> Self {
        Self {
            pointer: Some(Vec2::new(x, y)),
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Moves the pointer. Returns `true` if the state changed.
    pub fn set_pointer(&mut self, position: Vec2) -> bool {
        let changed = self.pointer != Some(position);
        self.pointer = Some(position);
        changed
    }

    /// Marks the pointer absent. Returns `true` if it was present.
    pub fn clear_pointer(&mut self) -> bool {
        self.pointer.take().is_some()
    }

    /// Applies a coalesced pointer update (`None` means absent).
    pub fn apply(&mut self, pointer: Option<Vec2>) -> bool {
        match pointer {
            Some(position) => self.set_pointer(position),
            None => self.clear_pointer(),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the pointer position, if a pointer is active.
    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Returns `true` while a pointer is over the surface.
    #[inline]
    pub fn has_pointer(&self) -> bool {
        self.pointer.is_some()
    }

    /// Returns the pointer, or `fallback` when absent.
    ///
    /// Several scenes orbit or aim at the viewport center when nobody is
    /// pointing at the surface.
    #[inline]
    pub fn pointer_or(&self, fallback: Vec2) -> Vec2 {
        self.pointer.unwrap_or(fallback)
    }
}

//=== Debug Trait =========================================================
//
// ```text
// InputState { pointer: Some((420.0, 255.0)) }
// InputState { pointer: None }
// ```
//
impl fmt::Debug for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pointer = self.pointer.map(|p| (p.x, p.y));

        f.debug_struct("InputState")
            .field("pointer", &pointer)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
