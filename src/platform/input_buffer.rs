//=========================================================================
// Input Buffer
//
// Collects host input between two frame boundaries (RedrawRequested).
//
// Responsibilities:
// - Coalesce pointer changes (last wins)
// - Coalesce viewport changes (last wins)
// - Keep scene switch requests in arrival order
// - Hand the frame over via `drain()`, or nothing if the frame was idle
//
// Notes:
// The InputBuffer exists only for the current frame and is reset
// after being drained by the platform flush.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::Viewport;
use crate::core::platform_bridge::{FrameInput, PointerChange};
use crate::core::scene::SceneDirection;

//=== InputBuffer Struct ==================================================
//
// Transient store for one frame of host input.
//
#[derive(Debug, Default)]
pub(crate) struct InputBuffer {
    frame: FrameInput,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates room for a burst of switch requests.
    //
    pub(crate) fn new() -> Self {
        const SWITCH_BASE: usize = 8;

        Self {
            frame: FrameInput {
                switches: Vec::with_capacity(SWITCH_BASE),
                ..FrameInput::default()
            },
        }
    }

    //--- Continuous Input -------------------------------------------------
    //
    // The latest pointer or viewport replaces any earlier one this frame.
    //
    pub(crate) fn push_pointer(&mut self, change: PointerChange) {
        self.frame.pointer = Some(change);
    }

    pub(crate) fn push_viewport(&mut self, viewport: Viewport) {
        self.frame.viewport = Some(viewport);
    }

    //--- Discrete Input ---------------------------------------------------
    //
    // Every switch request counts; two quick presses switch twice.
    //
    pub(crate) fn push_switch(&mut self, direction: SceneDirection) {
        self.frame.switches.push(direction);
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's input and resets the buffer. Idle frames
    // return `None` so nothing is sent.
    //
    pub(crate) fn drain(&mut self) -> Option<FrameInput> {
        if self.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.frame))
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_pointer_overwrite() {
        let mut buffer = InputBuffer::new();
        buffer.push_pointer(PointerChange::Moved(Vec2::new(10.0, 10.0)));
        buffer.push_pointer(PointerChange::Moved(Vec2::new(20.0, 30.0)));

        let frame = buffer.drain().unwrap();
        assert_eq!(frame.pointer, Some(PointerChange::Moved(Vec2::new(20.0, 30.0))));
    }

    #[test]
    fn test_leave_after_move_wins() {
        let mut buffer = InputBuffer::new();
        buffer.push_pointer(PointerChange::Moved(Vec2::ONE));
        buffer.push_pointer(PointerChange::Left);

        assert_eq!(buffer.drain().unwrap().pointer, Some(PointerChange::Left));
    }

    #[test]
    fn test_viewport_overwrite() {
        let mut buffer = InputBuffer::new();
        buffer.push_viewport(Viewport::new(640.0, 480.0));
        buffer.push_viewport(Viewport::new(1024.0, 768.0));

        assert_eq!(buffer.drain().unwrap().viewport, Some(Viewport::new(1024.0, 768.0)));
    }

    #[test]
    fn test_switches_keep_order_and_repeats() {
        let mut buffer = InputBuffer::new();
        buffer.push_switch(SceneDirection::Next);
        buffer.push_switch(SceneDirection::Next);
        buffer.push_switch(SceneDirection::Previous);

        assert_eq!(
            buffer.drain().unwrap().switches,
            vec![SceneDirection::Next, SceneDirection::Next, SceneDirection::Previous]
        );
    }

    #[test]
    fn test_drain_clears_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push_switch(SceneDirection::Next);
        buffer.push_pointer(PointerChange::Left);

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn test_idle_frame_sends_nothing() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.drain().is_none());
    }
}
