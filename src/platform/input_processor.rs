//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit events into host input for the scene engine.
//
// Architecture:
//   Winit Events → InputProcessor → PointerChange / SceneDirection → InputBuffer
//
// Mapping:
// - CursorMoved                 → pointer moved
// - CursorLeft                  → pointer left
// - ArrowRight / ArrowLeft down → next / previous scene
// - Touch started / moved       → pointer moved (primary finger only)
// - Touch ended                 → pointer left + swipe evaluation
// - Touch cancelled             → pointer left, gesture abandoned
//
// Only the first finger down is tracked; additional fingers are ignored
// until it lifts.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use winit::{
    event::{ElementState, KeyEvent, TouchPhase},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::SwipeDetector;
use crate::core::platform_bridge::PointerChange;
use crate::core::scene::SceneDirection;

//=== TouchOutcome ========================================================

/// Host input produced by one touch event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct TouchOutcome {
    pub pointer: Option<PointerChange>,
    pub switch: Option<SceneDirection>,
}

//=== InputProcessor ======================================================

/// Converts Winit events to host input, tracking the active touch gesture.
pub(crate) struct InputProcessor {
    swipe: SwipeDetector,
    primary_touch: Option<u64>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            swipe: SwipeDetector::new(),
            primary_touch: None,
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Scene switch requested by a key event, if any.
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<SceneDirection> {
        match key_event.physical_key {
            PhysicalKey::Code(code) => direction_for_key(code, key_event.state),
            _ => None,
        }
    }

    /// Pointer change for a cursor move (window coordinates).
    pub(crate) fn process_cursor_moved(&self, x: f32, y: f32) -> PointerChange {
        PointerChange::Moved(Vec2::new(x, y))
    }

    /// Pointer change for the cursor leaving the window.
    pub(crate) fn process_cursor_left(&self) -> PointerChange {
        PointerChange::Left
    }

    /// Converts one touch event. Secondary fingers produce nothing.
    pub(crate) fn process_touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) -> TouchOutcome {
        match phase {
            TouchPhase::Started => {
                if self.primary_touch.is_some() {
                    return TouchOutcome::default();
                }
                self.primary_touch = Some(id);
                self.swipe.begin(x);
                TouchOutcome {
                    pointer: Some(PointerChange::Moved(Vec2::new(x, y))),
                    switch: None,
                }
            }

            TouchPhase::Moved if self.primary_touch == Some(id) => TouchOutcome {
                pointer: Some(PointerChange::Moved(Vec2::new(x, y))),
                switch: None,
            },

            TouchPhase::Ended if self.primary_touch == Some(id) => {
                self.primary_touch = None;
                TouchOutcome {
                    pointer: Some(PointerChange::Left),
                    switch: self.swipe.end(x),
                }
            }

            TouchPhase::Cancelled if self.primary_touch == Some(id) => {
                self.primary_touch = None;
                self.swipe.cancel();
                TouchOutcome {
                    pointer: Some(PointerChange::Left),
                    switch: None,
                }
            }

            _ => TouchOutcome::default(),
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Scene switch bound to a physical key. Key repeat counts as a new press.
pub(crate) fn direction_for_key(code: WinitKeyCode, state: ElementState) -> Option<SceneDirection> {
    if state != ElementState::Pressed {
        return None;
    }

    match code {
        WinitKeyCode::ArrowRight => Some(SceneDirection::Next),
        WinitKeyCode::ArrowLeft => Some(SceneDirection::Previous),
        _ => None,
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Keyboard --------------------------------------------------------

    #[test]
    fn arrows_map_to_directions_on_press() {
        assert_eq!(direction_for_key(WinitKeyCode::ArrowRight, ElementState::Pressed), Some(SceneDirection::Next));
        assert_eq!(direction_for_key(WinitKeyCode::ArrowLeft, ElementState::Pressed), Some(SceneDirection::Previous));
    }

    #[test]
    fn releases_and_other_keys_are_ignored() {
        assert_eq!(direction_for_key(WinitKeyCode::ArrowRight, ElementState::Released), None);
        assert_eq!(direction_for_key(WinitKeyCode::ArrowUp, ElementState::Pressed), None);
        assert_eq!(direction_for_key(WinitKeyCode::Space, ElementState::Pressed), None);
    }

    //--- Cursor ----------------------------------------------------------

    #[test]
    fn cursor_events_map_to_pointer_changes() {
        let processor = InputProcessor::new();
        assert_eq!(processor.process_cursor_moved(3.0, 4.0), PointerChange::Moved(Vec2::new(3.0, 4.0)));
        assert_eq!(processor.process_cursor_left(), PointerChange::Left);
    }

    //--- Touch -----------------------------------------------------------

    #[test]
    fn left_swipe_requests_next_scene() {
        let mut processor = InputProcessor::new();

        let start = processor.process_touch(1, TouchPhase::Started, 300.0, 100.0);
        assert_eq!(start.pointer, Some(PointerChange::Moved(Vec2::new(300.0, 100.0))));

        processor.process_touch(1, TouchPhase::Moved, 200.0, 100.0);
        let end = processor.process_touch(1, TouchPhase::Ended, 180.0, 100.0);

        assert_eq!(end.pointer, Some(PointerChange::Left));
        assert_eq!(end.switch, Some(SceneDirection::Next));
    }

    #[test]
    fn right_swipe_requests_previous_scene() {
        let mut processor = InputProcessor::new();
        processor.process_touch(1, TouchPhase::Started, 100.0, 0.0);
        let end = processor.process_touch(1, TouchPhase::Ended, 151.0, 0.0);
        assert_eq!(end.switch, Some(SceneDirection::Previous));
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let mut processor = InputProcessor::new();
        processor.process_touch(1, TouchPhase::Started, 100.0, 0.0);
        let end = processor.process_touch(1, TouchPhase::Ended, 50.0, 0.0);
        assert_eq!(end.switch, None);
        assert_eq!(end.pointer, Some(PointerChange::Left));
    }

    #[test]
    fn cancelled_touch_never_switches() {
        let mut processor = InputProcessor::new();
        processor.process_touch(1, TouchPhase::Started, 300.0, 0.0);
        let cancel = processor.process_touch(1, TouchPhase::Cancelled, 0.0, 0.0);
        assert_eq!(cancel, TouchOutcome { pointer: Some(PointerChange::Left), switch: None });

        // A stray end after cancel is ignored
        assert_eq!(processor.process_touch(1, TouchPhase::Ended, 0.0, 0.0), TouchOutcome::default());
    }

    #[test]
    fn secondary_fingers_are_ignored() {
        let mut processor = InputProcessor::new();
        processor.process_touch(1, TouchPhase::Started, 300.0, 0.0);

        assert_eq!(processor.process_touch(2, TouchPhase::Started, 10.0, 10.0), TouchOutcome::default());
        assert_eq!(processor.process_touch(2, TouchPhase::Moved, 20.0, 10.0), TouchOutcome::default());
        assert_eq!(processor.process_touch(2, TouchPhase::Ended, 20.0, 10.0), TouchOutcome::default());

        let end = processor.process_touch(1, TouchPhase::Ended, 200.0, 0.0);
        assert_eq!(end.switch, Some(SceneDirection::Next));
    }
}
