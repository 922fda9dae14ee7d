//=========================================================================
// Aetheric Fields — Library Root
//
// Real-time, pointer-reactive particle and field visualizations driven by
// a fixed-rate scene engine.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the scene contract and the built-in scenes for embedding or
//   headless use
// - Keep the window host (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use aetheric_fields::prelude::*;
//
// fn main() {
//     EngineBuilder::new().build(DrawList::new()).run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the scene contract, host input state, the drawing surface
// abstraction and the frame driver. `scenes` holds the built-in
// visualizations. Both are public so scenes can be driven headless (for
// example into a `DrawList`) without a window.
//
pub mod core;
pub mod prelude;
pub mod scenes;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit window host and is not part of the public
// API surface. `engine` wires platform and core together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
