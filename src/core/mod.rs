//=========================================================================
// Core Systems Orchestrator
//
// Frame driver for the scene engine, running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Own the scene manager, the pointer/viewport state and the surface
// - Receive host input from the platform via a bounded channel
// - Apply host input strictly between ticks, in a fixed order
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Publish the active scene name back to the platform
//
// Tick order:
//  1. Collect platform events (bounded drain, merged into one frame)
//  2. Apply viewport (a resize rebuilds the live scene)
//  3. Apply pointer
//  4. Apply scene switches in arrival order
//  5. Clear the surface, update the live scene, draw it
//
// Notes:
// The orchestrator runs independently from the platform layer. Scenes,
// input state and the surface are all owned by this thread; nothing is
// shared, so no locking is needed.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod input;
pub mod render;
pub mod scene;
pub(crate) mod platform_bridge;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, info, warn};

//=== Internal Modules ====================================================

use input::{InputState, Viewport};
use platform_bridge::{CoreEvent, EventCollector, FrameInput, PlatformEvent, TickControl};
use render::Surface;
use scene::{Scene, SceneContext, SceneManager};

//=== CoreSystemsOrchestrator =============================================

/// Owns every piece of simulation state and advances it one tick at a time.
pub(crate) struct CoreSystemsOrchestrator<Su: Surface + Send + 'static> {
    scenes: SceneManager,
    input: InputState,
    viewport: Viewport,
    surface: Su,
    core_events: Sender<CoreEvent>,
}

impl<Su: Surface + Send + 'static> CoreSystemsOrchestrator<Su> {
    //--- Construction -----------------------------------------------------

    /// Builds the scene manager (initializing the first scene) and
    /// announces it. Does not start the logic thread.
    pub fn new(
        scenes: Vec<Box<dyn Scene>>,
        viewport: Viewport,
        surface: Su,
        core_events: Sender<CoreEvent>,
    ) -> Self {
        let orchestrator = Self {
            scenes: SceneManager::new(scenes, viewport),
            input: InputState::new(),
            viewport,
            surface,
            core_events,
        };
        orchestrator.announce_scene();
        orchestrator
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread ticking at a fixed TPS until the platform
    // sends `WindowClosed` or drops its end of the channel.
    //
    pub fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            let mut ticks: u64 = 0;

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting after {} ticks", ticks);
                    break;
                }

                //--- Step 2: Apply input, update and draw -----------------
                self.tick(collector.take_frame());
                ticks += 1;

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- tick() -----------------------------------------------------------

    /// Applies one frame of host input, then advances and draws the live
    /// scene.
    pub fn tick(&mut self, frame: FrameInput) {
        if let Some(viewport) = frame.viewport {
            self.apply_viewport(viewport);
        }

        if let Some(change) = frame.pointer {
            self.input.apply(change.position());
        }

        for direction in frame.switches {
            self.scenes.switch(direction, self.viewport);
            self.announce_scene();
        }

        let ctx = SceneContext::new(self.input, self.viewport);
        self.surface.clear();
        self.scenes.update(&ctx);
        self.scenes.draw(&mut self.surface, &ctx);
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_viewport(&mut self, viewport: Viewport) {
        if !viewport.is_drawable() {
            debug!(
                "Ignoring undrawable viewport {}x{}",
                viewport.width, viewport.height
            );
            return;
        }

        self.viewport = viewport;
        self.scenes.on_resize(viewport);
    }

    fn announce_scene(&self) {
        let event = CoreEvent::SceneActivated {
            index: self.scenes.current_index(),
            name: self.scenes.display_name(),
        };

        match self.core_events.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!("Core event queue full, dropping {:?}", event);
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!("Platform gone, scene announcement not delivered");
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &Su {
        &self.surface
    }

    #[cfg(test)]
    pub(crate) fn input(&self) -> InputState {
        self.input
    }

    #[cfg(test)]
    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[cfg(test)]
    pub(crate) fn scenes(&self) -> &SceneManager {
        &self.scenes
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
