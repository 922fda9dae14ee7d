//=========================================================================
// Swipe Detector
//
// Turns a horizontal touch gesture into a scene switch request.
//
//   touch start ──► begin(x)
//   touch end   ──► end(x) ──► Some(Next | Previous) | None
//
// Swiping left (finger travels toward smaller x) advances to the next
// scene; swiping right goes back. Movements shorter than the threshold
// are ignored.
//
//=========================================================================

//=== Internal Dependencies ===============================================
use crate::core::scene::SceneDirection;

/// Minimum horizontal travel, in pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

//=== SwipeDetector =======================================================

/// Tracks the start of a touch gesture.
#[derive(Debug, Clone, Copy)]
pub struct SwipeDetector {
    start_x: Option<f32>,
    threshold: f32,
}

impl SwipeDetector {
    /// Creates a detector using [`SWIPE_THRESHOLD`].
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    /// Creates a detector with a custom threshold in pixels.
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    /// Records where a touch began.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Completes a gesture. Returns the requested direction, if any.
    ///
    /// An `end` without a matching `begin` yields `None`.
    pub fn end(&mut self, x: f32) -> Option<SceneDirection> {
        let start = self.start_x.take()?;

        if x < start - self.threshold {
            Some(SceneDirection::Next)
        } else if x > start + self.threshold {
            Some(SceneDirection::Previous)
        } else {
            None
        }
    }

    /// Abandons the current gesture (touch cancelled).
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
