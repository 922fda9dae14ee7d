//=========================================================================
// Event Collector
//=========================================================================
//
// Platform event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → merged FrameInput → TickControl
//
// Every frame the host sent since the last tick is folded into a single
// `FrameInput`, so the core applies host input exactly once per tick.
// Bounded polling prevents a flooding host from starving the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::{FrameInput, PlatformEvent};

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Drains platform events and merges their input into one frame.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    frame: FrameInput,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            frame: FrameInput::default(),
        }
    }

    /// Collects pending platform events (bounded to prevent starvation).
    ///
    /// Returns `Exit` on `WindowClosed` or when the platform side of the
    /// channel is gone.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.frame = FrameInput::default();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(input)) => {
                    self.frame.merge(input);
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Merged input collected by the last `collect_frame`.
    #[cfg(test)]
    pub(crate) fn frame(&self) -> &FrameInput {
        &self.frame
    }

    /// Takes the merged input, leaving an empty frame behind.
    pub(crate) fn take_frame(&mut self) -> FrameInput {
        std::mem::take(&mut self.frame)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
