//=========================================================================
// Platform Bridge
//=========================================================================
//
// Message types crossing the platform/core thread boundary.
//
// The window host never touches scenes directly. It sends buffered
// `FrameInput`s and a `WindowClosed` signal to the core thread, and the
// core thread answers with `CoreEvent`s (currently only the active scene
// name, for the window title).
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side draining and merging of platform input
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{CoreEvent, FrameInput, PlatformError, PlatformEvent, PointerChange};
