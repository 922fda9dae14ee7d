//=========================================================================
// Aetheric Fields Engine
//
// Main entry point and coordinator for the scene engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(surface)──>  Engine  ──run()──>  [Runtime]
//         │                                 │
//         ├─ with_tps()                     └─ spawns logic thread
//         ├─ with_channel_capacity()           runs platform
//         ├─ with_seed()                       blocks until exit
//         ├─ with_viewport()
//         └─ with_title()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::input::Viewport;
use crate::core::platform_bridge::{CoreEvent, PlatformEvent};
use crate::core::render::Surface;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowConfig};
use crate::scenes;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Seed**: drawn from OS entropy
/// - **Viewport**: 800×600
/// - **Title**: "Aetheric Fields"
///
/// # Examples
///
/// Simple usage with defaults, drawing into a recording surface:
/// ```no_run
/// use aetheric_fields::prelude::*;
///
/// EngineBuilder::new().build(DrawList::new()).run();
/// ```
///
/// Reproducible scenes at a higher tick rate:
/// ```no_run
/// # use aetheric_fields::prelude::*;
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_seed(42)
///     .with_viewport(1280.0, 720.0)
///     .build(DrawList::new())
///     .run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    seed: Option<u64>,
    viewport: Viewport,
    title: String,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            seed: None,
            viewport: Viewport::default(),
            title: "Aetheric Fields".to_string(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Every scene advances exactly one step per tick, so this is also the
    /// animation speed.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform ↔ core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Fixes the master seed. Two engines built with the same seed and fed
    /// the same input draw the same frames.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// Default: 800×600
    ///
    /// # Panics
    ///
    /// Panics unless both sides are positive and finite.
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        let viewport = Viewport::new(width, height);
        assert!(
            viewport.is_drawable(),
            "Viewport must be positive, got {}x{}",
            width,
            height
        );
        self.viewport = viewport;
        self
    }

    /// Sets the window title prefix. The active scene name is appended.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Builds the engine, drawing every frame into `surface`.
    ///
    /// Creates all scenes and initializes the first one.
    pub fn build<Su>(self, surface: Su) -> Engine<Su>
    where
        Su: Surface + Send + 'static,
    {
        let seed = self.seed.unwrap_or_else(rand::random);
        info!(
            "Building engine (TPS: {}, channel: {}, seed: {})",
            self.tps, self.channel_capacity, seed
        );

        let (core_tx, core_rx) = bounded(self.channel_capacity);
        let orchestrator =
            CoreSystemsOrchestrator::new(scenes::all(seed), self.viewport, surface, core_tx);

        Engine {
            orchestrator,
            core_events: core_rx,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: WindowConfig {
                title: self.title,
                viewport: self.viewport,
            },
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Aetheric Fields runtime.
///
/// Create via [`EngineBuilder`].
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► SceneManager ─► Scene ─► Surface
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling, Title
///
/// Communication: bounded channels (PlatformEvent →, ← CoreEvent)
/// ```
pub struct Engine<Su: Surface + Send + 'static> {
    orchestrator: CoreSystemsOrchestrator<Su>,
    core_events: Receiver<CoreEvent>,
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl<Su: Surface + Send + 'static> Engine<Su> {
    /// Starts the engine runtime and blocks until the window is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform sends `WindowClosed` → logic thread exits
    ///
    /// Platform failures are logged, not propagated; the logic thread is
    /// always joined.
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(self.window, tx, self.core_events);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
